//! Firecrawl v1 `/extract` client.
//!
//! The endpoint is asynchronous: the submit call usually answers with a job id,
//! and the result is fetched from `/v1/extract/{id}` once the job leaves the
//! `processing` state.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{ExtractRequest, ExtractionError, ExtractionProvider, ExtractionResult};
use crate::models::lenient::opt_text;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const DEFAULT_MAX_POLLS: u32 = 90;
const PENDING_STATUSES: [&str; 2] = ["processing", "pending"];

/// Raw submit or status body. `success`, `data` and `error` stay raw JSON; the
/// text metadata goes through `opt_text` so an odd type never discards data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractResponse {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default, deserialize_with = "opt_text")]
    id: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default, deserialize_with = "opt_text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    expires_at: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

impl ExtractResponse {
    /// Anything other than a literal `true` counts as failure.
    fn succeeded(&self) -> bool {
        matches!(self.success, Some(Value::Bool(true)))
    }

    /// A job still running on the provider side. Status bodies do not echo
    /// the job id, so this looks at `status` alone.
    fn is_pending(&self) -> bool {
        self.succeeded()
            && self
                .status
                .as_deref()
                .is_some_and(|status| PENDING_STATUSES.contains(&status))
    }

    fn into_result(self) -> ExtractionResult {
        let status = self.status.clone().unwrap_or_else(|| "completed".to_string());
        let success = self.succeeded() && status == "completed";

        if let Some(error) = self.error.as_ref().filter(|e| !e.is_null()) {
            let message = error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
            warn!("Extraction provider reported: {message}");
        }

        let expires_at = self.expires_at.as_deref().and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| debug!("Unparseable expiresAt '{raw}': {e}"))
                .ok()
        });

        let data = match self.data {
            Some(Value::Object(map)) => map,
            _ => Default::default(),
        };

        ExtractionResult {
            success,
            data,
            status,
            expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FirecrawlError {
    error: String,
}

#[derive(Clone)]
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl FirecrawlClient {
    pub fn new(client: Client, api_key: String, base_url: &str) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }

    pub fn with_polling(mut self, poll_interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_polls = max_polls;
        self
    }

    async fn submit(&self, request: &ExtractRequest) -> Result<ExtractResponse, ExtractionError> {
        let response = self
            .client
            .post(format!("{}/v1/extract", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        read_response(response).await
    }

    async fn fetch_status(&self, id: &str) -> Result<ExtractResponse, ExtractionError> {
        let response = self
            .client
            .get(format!("{}/v1/extract/{id}", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<ExtractResponse, ExtractionError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<FirecrawlError>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(ExtractionError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ExtractionProvider for FirecrawlClient {
    async fn extract(&self, request: &ExtractRequest) -> Result<ExtractionResult, ExtractionError> {
        let mut response = self.submit(request).await?;
        let mut polls = 0;

        if response.is_pending() || (response.succeeded() && response.data.is_none()) {
            let Some(id) = response.id.clone() else {
                return Ok(response.into_result());
            };
            debug!("Extract job {id} accepted, polling for completion");

            loop {
                if polls >= self.max_polls {
                    return Err(ExtractionError::PollBudgetExhausted { id, polls });
                }
                tokio::time::sleep(self.poll_interval).await;
                response = self.fetch_status(&id).await?;
                polls += 1;
                if !response.is_pending() {
                    break;
                }
            }
        }

        let result = response.into_result();
        info!(
            "Extraction finished: success={} status={} keys={:?} expires_at={:?} after {polls} status checks",
            result.success,
            result.status,
            result.data.keys().collect::<Vec<_>>(),
            result.expires_at
        );
        Ok(result)
    }
}
