//! One user action: job search first, trend analysis only if the search did
//! not error. Steps run strictly one after the other.

use tracing::{info, warn};

use crate::advisor::{AdvisorReport, CareerAdvisor};
use crate::models::SearchCriteria;

/// Results of a full search action.
///
/// `trends` is `None` when the job search failed and the trend step was never
/// attempted. A trend error after a good job search is kept alongside the job
/// report rather than replacing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub jobs: AdvisorReport,
    pub trends: Option<AdvisorReport>,
}

impl SessionReport {
    pub fn is_partial(&self) -> bool {
        !self.jobs.is_error() && self.trends.as_ref().is_some_and(AdvisorReport::is_error)
    }
}

impl CareerAdvisor {
    pub async fn search_session(&self, criteria: &SearchCriteria, category: &str) -> SessionReport {
        if criteria.skills().is_empty() {
            warn!("No skills provided. Adding skills will improve job matching.");
        }

        let jobs = self.jobs.run(criteria).await;
        if jobs.is_error() {
            info!("Job search failed; skipping industry trends");
            return SessionReport { jobs, trends: None };
        }

        let trends = self.trends.run(category).await;
        let report = SessionReport {
            jobs,
            trends: Some(trends),
        };
        if report.is_partial() {
            warn!("Job search succeeded but industry trends failed for {category}");
        }
        report
    }
}
