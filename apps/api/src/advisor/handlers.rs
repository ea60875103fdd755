//! Axum route handlers for the advisor API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::advisor::{AdvisorReport, CareerAdvisor};
use crate::config::ApiKeyOverrides;
use crate::errors::AppError;
use crate::models::criteria::{SkillsInput, DEFAULT_EXPERIENCE_YEARS};
use crate::models::{IndustryCategory, ModelId, SearchCriteria};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub job_title: String,
    pub location: String,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub skills: SkillsInput,
    #[serde(default)]
    pub api_keys: ApiKeyOverrides,
    #[serde(default)]
    pub model: Option<ModelId>,
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    pub category: IndustryCategory,
    #[serde(default)]
    pub api_keys: ApiKeyOverrides,
    #[serde(default)]
    pub model: Option<ModelId>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub job: JobSearchRequest,
    #[serde(default)]
    pub category: IndustryCategory,
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub kind: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl From<AdvisorReport> for ReportView {
    fn from(report: AdvisorReport) -> Self {
        Self {
            kind: report.kind(),
            hint: report.hint(),
            text: report.text().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub search_id: Uuid,
    pub model: ModelId,
    pub jobs: ReportView,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub search_id: Uuid,
    pub model: ModelId,
    pub category: IndustryCategory,
    pub trends: ReportView,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_id: Uuid,
    pub model: ModelId,
    pub category: IndustryCategory,
    pub jobs: ReportView,
    pub trends: Option<ReportView>,
    pub partial: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigStatusResponse {
    pub firecrawl_key_in_env: bool,
    pub openai_key_in_env: bool,
    pub default_model: ModelId,
    pub models: Vec<ModelId>,
}

#[derive(Debug, Serialize)]
pub struct IndustriesResponse {
    pub categories: Vec<IndustryCategory>,
}

impl JobSearchRequest {
    fn into_criteria(self) -> Result<SearchCriteria, AppError> {
        SearchCriteria::new(
            &self.job_title,
            &self.location,
            self.experience_years.unwrap_or(DEFAULT_EXPERIENCE_YEARS),
            self.skills.into_skills(),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/config
///
/// Reports which keys the environment already provides, mirroring the key
/// status a form would show before asking the user for overrides.
pub async fn handle_config_status(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
    Json(ConfigStatusResponse {
        firecrawl_key_in_env: state.config.firecrawl_api_key.is_some(),
        openai_key_in_env: state.config.openai_api_key.is_some(),
        default_model: state.config.default_model,
        models: ModelId::ALL.to_vec(),
    })
}

/// GET /api/v1/industries
pub async fn handle_list_industries() -> Json<IndustriesResponse> {
    Json(IndustriesResponse {
        categories: IndustryCategory::ALL.to_vec(),
    })
}

/// POST /api/v1/jobs/search
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let config = state.config.resolve(&request.api_keys, request.model)?;
    let criteria = request.into_criteria()?;

    let search_id = Uuid::new_v4();
    let advisor = CareerAdvisor::from_config(state.http.clone(), &config);

    let jobs = advisor
        .jobs
        .run(&criteria)
        .instrument(info_span!("job_search", %search_id))
        .await;

    Ok(Json(JobSearchResponse {
        search_id,
        model: config.model,
        jobs: jobs.into(),
    }))
}

/// POST /api/v1/industries/trends
pub async fn handle_industry_trends(
    State(state): State<AppState>,
    Json(request): Json<TrendRequest>,
) -> Result<Json<TrendResponse>, AppError> {
    let config = state.config.resolve(&request.api_keys, request.model)?;

    let search_id = Uuid::new_v4();
    let advisor = CareerAdvisor::from_config(state.http.clone(), &config);

    let trends = advisor
        .trends
        .run(request.category.label())
        .instrument(info_span!("industry_trends", %search_id))
        .await;

    Ok(Json(TrendResponse {
        search_id,
        model: config.model,
        category: request.category,
        trends: trends.into(),
    }))
}

/// POST /api/v1/search
///
/// The full user action: job search, then industry trends unless the job
/// search errored.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let category = request.category;
    let config = state.config.resolve(&request.job.api_keys, request.job.model)?;
    let criteria = request.job.into_criteria()?;

    let search_id = Uuid::new_v4();
    let advisor = CareerAdvisor::from_config(state.http.clone(), &config);

    let report = async {
        info!(
            "Search started: title='{}' location='{}' category='{category}' model={}",
            criteria.job_title(),
            criteria.location(),
            config.model
        );
        advisor.search_session(&criteria, category.label()).await
    }
    .instrument(info_span!("search", %search_id))
    .await;

    let partial = report.is_partial();
    Ok(Json(SearchResponse {
        search_id,
        model: config.model,
        category,
        jobs: report.jobs.into(),
        trends: report.trends.map(ReportView::from),
        partial,
    }))
}
