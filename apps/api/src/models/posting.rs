use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// A job posting as returned by the extraction provider. Every field is
/// optional because the crawler fills in whatever the page exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobPosting {
    /// Region or area where the job is located
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub region: Option<String>,

    /// Specific role or function within the job category
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub role: Option<String>,

    /// Title of the job position
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub job_title: Option<String>,

    /// Experience required for the position
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub experience: Option<String>,

    /// Link to the job posting
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub job_link: Option<String>,
}

impl JobPosting {
    /// True when the crawler produced a record with nothing in it.
    pub fn is_blank(&self) -> bool {
        self.region.is_none()
            && self.role.is_none()
            && self.job_title.is_none()
            && self.experience.is_none()
            && self.job_link.is_none()
    }
}
