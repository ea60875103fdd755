//! The outcome of one orchestration step, as shown to the user.

use std::fmt::Display;

/// Every error report's text starts with this marker.
pub const ERROR_MARKER: &str = "An error occurred";

const SITE_SUPPORT_HINT: &str = "It appears one of the sites is not supported by your Firecrawl API key. \
    Please contact Firecrawl support to enable these sites for your account.";
const API_KEY_HINT: &str =
    "Please check that your API keys are correct and have the necessary permissions.";
const GENERIC_HINT: &str =
    "Please try again with different search parameters or check your internet connection.";

/// Orchestrators never fail: every path ends in one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorReport {
    /// Model output, verbatim.
    Narrative(String),
    /// Extraction produced nothing usable; the model was not called.
    NoResults(String),
    /// A provider call raised. Text begins with [`ERROR_MARKER`].
    Failed(String),
}

impl AdvisorReport {
    /// Builds an error report carrying the original error text and guidance.
    pub fn failed(action: &str, error: &impl Display, guidance: &str) -> Self {
        AdvisorReport::Failed(format!("{ERROR_MARKER} while {action}: {error}\n\n{guidance}"))
    }

    pub fn text(&self) -> &str {
        match self {
            AdvisorReport::Narrative(text)
            | AdvisorReport::NoResults(text)
            | AdvisorReport::Failed(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AdvisorReport::Narrative(_) => "narrative",
            AdvisorReport::NoResults(_) => "no_results",
            AdvisorReport::Failed(_) => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AdvisorReport::Failed(_))
    }

    /// What the user should try next, for error reports only.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AdvisorReport::Failed(text) => Some(remediation_hint(text)),
            _ => None,
        }
    }
}

/// Picks follow-up guidance from an error message.
pub fn remediation_hint(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("website is no longer supported") {
        SITE_SUPPORT_HINT
    } else if lower.contains("api key") {
        API_KEY_HINT
    } else {
        GENERIC_HINT
    }
}

/// Case-insensitive check that each heading appears after the previous one.
pub fn sections_in_order(text: &str, headings: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    let mut cursor = 0;
    for heading in headings {
        let needle = heading.to_lowercase();
        match haystack[cursor..].find(&needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_report_starts_with_marker_and_keeps_error_text() {
        let report = AdvisorReport::failed("searching for jobs", &"quota exceeded", "Try later.");
        assert!(report.is_error());
        assert!(report.text().starts_with(ERROR_MARKER));
        assert!(report.text().contains("quota exceeded"));
        assert!(report.text().ends_with("Try later."));
        assert_eq!(report.kind(), "error");
    }

    #[test]
    fn test_non_error_reports_have_no_hint() {
        assert_eq!(AdvisorReport::Narrative("x".into()).hint(), None);
        assert_eq!(AdvisorReport::NoResults("x".into()).hint(), None);
        assert!(!AdvisorReport::NoResults("x".into()).is_error());
    }

    #[test]
    fn test_remediation_hint_classification() {
        assert_eq!(
            remediation_hint("API error (status 403): This website is no longer supported"),
            SITE_SUPPORT_HINT
        );
        assert_eq!(remediation_hint("Incorrect API key provided"), API_KEY_HINT);
        assert_eq!(remediation_hint("connection reset"), GENERIC_HINT);
    }

    #[test]
    fn test_sections_in_order() {
        let text = "## 💼 Selected Opportunities\n...\n## Skills Match Analysis\n...";
        assert!(sections_in_order(text, &["SELECTED OPPORTUNITIES", "SKILLS MATCH ANALYSIS"]));
        assert!(!sections_in_order(text, &["SKILLS MATCH ANALYSIS", "SELECTED OPPORTUNITIES"]));
        assert!(!sections_in_order(text, &["APPLICATION TIPS"]));
        assert!(sections_in_order(text, &[]));
    }
}
