// Career advisor: the two orchestrators and the session that sequences them.
// Provider access goes through the ExtractionProvider and LanguageModel traits.

use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::extraction::{ExtractionError, ExtractionProvider, FirecrawlClient};
use crate::llm_client::{LanguageModel, LlmClient, LlmError};

pub mod handlers;
pub mod industry_trends;
pub mod job_search;
pub mod prompts;
pub mod report;
pub mod session;
pub mod urls;

pub use industry_trends::IndustryTrends;
pub use job_search::JobSearch;
pub use report::AdvisorReport;

/// Anything that can go wrong inside one orchestration step.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("failed to serialize records for the model: {0}")]
    Serialize(serde_json::Error),
}

/// Both orchestrators, sharing one pair of providers.
pub struct CareerAdvisor {
    pub jobs: JobSearch,
    pub trends: IndustryTrends,
}

impl CareerAdvisor {
    pub fn new(extractor: Arc<dyn ExtractionProvider>, llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            jobs: JobSearch::new(extractor.clone(), llm.clone()),
            trends: IndustryTrends::new(extractor, llm),
        }
    }

    /// Production wiring: Firecrawl for extraction, chat completions for the narrative.
    pub fn from_config(http: Client, config: &AdvisorConfig) -> Self {
        let extractor = FirecrawlClient::new(
            http.clone(),
            config.firecrawl_api_key.clone(),
            &config.firecrawl_api_url,
        );
        let llm = LlmClient::new(
            http,
            config.openai_api_key.clone(),
            &config.openai_api_url,
            config.model,
        );
        debug!("Advisor wired to {} with model {}", config.firecrawl_api_url, llm.model());
        Self::new(Arc::new(extractor), Arc::new(llm))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::extraction::{ExtractRequest, ExtractionError, ExtractionProvider, ExtractionResult};
    use crate::llm_client::{LanguageModel, LlmError};

    type ExtractFn =
        Box<dyn Fn(&ExtractRequest) -> Result<ExtractionResult, ExtractionError> + Send + Sync>;

    /// Extraction provider that answers from a closure and records requests.
    pub struct FakeExtractor {
        respond: ExtractFn,
        requests: Mutex<Vec<ExtractRequest>>,
    }

    impl FakeExtractor {
        pub fn new<F>(respond: F) -> Arc<Self>
        where
            F: Fn(&ExtractRequest) -> Result<ExtractionResult, ExtractionError>
                + Send
                + Sync
                + 'static,
        {
            Arc::new(Self {
                respond: Box::new(respond),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn requests(&self) -> Vec<ExtractRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExtractionProvider for FakeExtractor {
        async fn extract(
            &self,
            request: &ExtractRequest,
        ) -> Result<ExtractionResult, ExtractionError> {
            self.requests.lock().unwrap().push(request.clone());
            (self.respond)(request)
        }
    }

    type ReplyFn = Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>;

    /// Language model with a canned reply and a call log.
    pub struct FakeLlm {
        reply: ReplyFn,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeLlm {
        pub fn replying(text: String) -> Arc<Self> {
            Arc::new(Self {
                reply: Box::new(move || Ok(text.clone())),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub fn failing<F>(error: F) -> Arc<Self>
        where
            F: Fn() -> LlmError + Send + Sync + 'static,
        {
            Arc::new(Self {
                reply: Box::new(move || Err(error())),
                prompts: Mutex::new(Vec::new()),
            })
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LanguageModel for FakeLlm {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }
    }

    pub fn extraction_ok(data: Value) -> Result<ExtractionResult, ExtractionError> {
        Ok(ExtractionResult {
            success: true,
            data: data.as_object().cloned().unwrap_or_default(),
            status: "completed".to_string(),
            expires_at: None,
        })
    }

    pub fn job_narrative() -> String {
        "## 💼 SELECTED OPPORTUNITIES\n• Software Engineer II\n\n\
         ## 🔍 SKILLS MATCH ANALYSIS\n• Strong Rust overlap\n\n\
         ## 💡 RECOMMENDATIONS\n• Apply to the first two\n\n\
         ## 📝 APPLICATION TIPS\n• Lead with systems work"
            .to_string()
    }

    pub fn trend_narrative() -> String {
        "## 📊 TRENDS SUMMARY\n• Salaries rising\n\n\
         ## 🔥 TOP SKILLS\n• Python\n\n\
         ## 📈 GROWTH OPPORTUNITIES\n• MLOps\n\n\
         ## 🎯 RECOMMENDATIONS FOR JOB SEEKERS\n• Build a portfolio"
            .to_string()
    }
}
