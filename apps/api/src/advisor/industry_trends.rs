//! Industry Trends — salary and demand analysis for one category.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::advisor::prompts::{
    NO_TRENDS_MESSAGE_TEMPLATE, TREND_ANALYSIS_PROMPT_TEMPLATE, TREND_ERROR_GUIDANCE,
    TREND_EXTRACTION_PROMPT_TEMPLATE, TREND_SECTIONS,
};
use crate::advisor::report::{sections_in_order, AdvisorReport};
use crate::advisor::urls::salary_site_urls;
use crate::advisor::AdvisorError;
use crate::extraction::{
    ExtractRequest, ExtractionProvider, ExtractionTarget, IndustryTrendsSchema,
};
use crate::llm_client::LanguageModel;
use crate::models::IndustryTrend;

pub struct IndustryTrends {
    extractor: Arc<dyn ExtractionProvider>,
    llm: Arc<dyn LanguageModel>,
}

impl IndustryTrends {
    pub fn new(extractor: Arc<dyn ExtractionProvider>, llm: Arc<dyn LanguageModel>) -> Self {
        Self { extractor, llm }
    }

    pub async fn run(&self, category: &str) -> AdvisorReport {
        match self.analyze(category).await {
            Ok(report) => report,
            Err(e) => {
                error!("Error in industry trends for {category}: {e}");
                AdvisorReport::failed("fetching industry trends", &e, TREND_ERROR_GUIDANCE)
            }
        }
    }

    async fn analyze(&self, category: &str) -> Result<AdvisorReport, AdvisorError> {
        let urls = salary_site_urls(category);
        info!("Searching for industry trends with URLs: {urls:?}");

        let request = ExtractRequest {
            urls,
            prompt: TREND_EXTRACTION_PROMPT_TEMPLATE.replace("{category}", category),
            schema: IndustryTrendsSchema::extraction_schema(),
        };

        let result = self.extractor.extract(&request).await?;
        let trends = IndustryTrendsSchema::records(&result);
        info!("Extracted {} industry trend records for {category}", trends.len());

        if trends.is_empty() {
            return Ok(AdvisorReport::NoResults(no_trends_message(category)));
        }

        let prompt = build_trend_analysis_prompt(category, &trends)?;
        let narrative = self.llm.complete(&prompt).await?;

        if !sections_in_order(&narrative, &TREND_SECTIONS) {
            warn!("Trend narrative is missing one or more expected sections");
        }

        Ok(AdvisorReport::Narrative(narrative))
    }
}

pub fn no_trends_message(category: &str) -> String {
    NO_TRENDS_MESSAGE_TEMPLATE.replace("{category}", category)
}

pub fn build_trend_analysis_prompt(
    category: &str,
    trends: &[IndustryTrend],
) -> Result<String, AdvisorError> {
    let trends_json = serde_json::to_string_pretty(trends).map_err(AdvisorError::Serialize)?;
    Ok(TREND_ANALYSIS_PROMPT_TEMPLATE
        .replace("{category}", category)
        .replace("{trends_json}", &trends_json))
}
