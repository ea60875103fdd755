//! Job Search — criteria in, recommendation narrative out.
//!
//! Flow: build board URLs → extract postings → short-circuit when empty →
//!       ask the model to pick and analyze 5-6 of them → return its text.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::advisor::prompts::{
    JOB_ANALYSIS_PROMPT_TEMPLATE, JOB_ERROR_GUIDANCE, JOB_EXTRACTION_PROMPT_TEMPLATE,
    JOB_SECTIONS, NO_JOBS_MESSAGE,
};
use crate::advisor::report::{sections_in_order, AdvisorReport};
use crate::advisor::urls::job_board_urls;
use crate::advisor::AdvisorError;
use crate::extraction::{ExtractRequest, ExtractionProvider, ExtractionTarget, JobPostingsSchema};
use crate::llm_client::LanguageModel;
use crate::models::{JobPosting, SearchCriteria};

pub struct JobSearch {
    extractor: Arc<dyn ExtractionProvider>,
    llm: Arc<dyn LanguageModel>,
}

impl JobSearch {
    pub fn new(extractor: Arc<dyn ExtractionProvider>, llm: Arc<dyn LanguageModel>) -> Self {
        Self { extractor, llm }
    }

    /// Runs the search. Provider errors are logged and folded into a
    /// `Failed` report; this never returns `Err`.
    pub async fn run(&self, criteria: &SearchCriteria) -> AdvisorReport {
        match self.search(criteria).await {
            Ok(report) => report,
            Err(e) => {
                error!("Error in job search: {e}");
                AdvisorReport::failed("searching for jobs", &e, JOB_ERROR_GUIDANCE)
            }
        }
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<AdvisorReport, AdvisorError> {
        let urls = job_board_urls(criteria.job_title(), criteria.location());
        info!("Searching for jobs with URLs: {urls:?}");

        let request = ExtractRequest {
            urls,
            prompt: build_job_extraction_prompt(criteria),
            schema: JobPostingsSchema::extraction_schema(),
        };

        let result = self.extractor.extract(&request).await?;
        let postings = JobPostingsSchema::records(&result);
        info!(
            "Extracted {} job postings (success={}, status={})",
            postings.len(),
            result.success,
            result.status
        );

        if postings.is_empty() {
            return Ok(AdvisorReport::NoResults(NO_JOBS_MESSAGE.to_string()));
        }

        let prompt = build_job_analysis_prompt(criteria, &postings)?;
        let narrative = self.llm.complete(&prompt).await?;

        if !sections_in_order(&narrative, &JOB_SECTIONS) {
            warn!("Job narrative is missing one or more expected sections");
        }

        Ok(AdvisorReport::Narrative(narrative))
    }
}

/// Skills as embedded in prompts; an empty list is stated explicitly.
fn skills_for_prompt(criteria: &SearchCriteria) -> String {
    if criteria.skills().is_empty() {
        "none specified".to_string()
    } else {
        criteria.skills_joined()
    }
}

/// Extraction prompt. Uses the title and location as the user typed them.
pub fn build_job_extraction_prompt(criteria: &SearchCriteria) -> String {
    JOB_EXTRACTION_PROMPT_TEMPLATE
        .replace("{job_title}", criteria.job_title())
        .replace("{location}", criteria.location())
        .replace("{experience_years}", &criteria.experience_years().to_string())
        .replace("{skills}", &skills_for_prompt(criteria))
}

/// Analysis prompt over the raw extracted postings.
pub fn build_job_analysis_prompt(
    criteria: &SearchCriteria,
    postings: &[JobPosting],
) -> Result<String, AdvisorError> {
    let jobs_json = serde_json::to_string_pretty(postings).map_err(AdvisorError::Serialize)?;

    Ok(JOB_ANALYSIS_PROMPT_TEMPLATE
        .replace("{jobs_json}", &jobs_json)
        .replace("{job_title}", criteria.job_title())
        .replace("{location}", criteria.location())
        .replace("{experience_years}", &criteria.experience_years().to_string())
        .replace("{skills}", &skills_for_prompt(criteria)))
}
