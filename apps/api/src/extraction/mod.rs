//! Extraction provider boundary. The orchestrators only see the
//! `ExtractionProvider` trait; `FirecrawlClient` is the production backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub mod firecrawl;
pub mod schema;

pub use firecrawl::FirecrawlClient;
pub use schema::{ExtractionTarget, IndustryTrendsSchema, JobPostingsSchema};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("extract job {id} still running after {polls} status checks")]
    PollBudgetExhausted { id: String, polls: u32 },
}

/// What gets sent to the provider: the pages to crawl, what to look for, and
/// the shape the answer must take.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub prompt: String,
    pub schema: Value,
}

/// Normalized provider answer. Read once by the orchestrator, then dropped.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub success: bool,
    pub data: Map<String, Value>,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl ExtractionResult {
    pub fn failed(status: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    async fn extract(&self, request: &ExtractRequest) -> Result<ExtractionResult, ExtractionError>;
}
