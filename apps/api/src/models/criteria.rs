use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const MAX_EXPERIENCE_YEARS: u32 = 30;
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 2;

/// What the user is looking for. Built once per search action and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCriteria {
    job_title: String,
    location: String,
    experience_years: u32,
    skills: Vec<String>,
}

/// Skills as submitted: either a list or a single comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

impl Default for SkillsInput {
    fn default() -> Self {
        SkillsInput::List(Vec::new())
    }
}

impl SkillsInput {
    pub fn into_skills(self) -> Vec<String> {
        match self {
            SkillsInput::List(items) => clean_skills(items),
            SkillsInput::Text(text) => parse_skills(&text),
        }
    }
}

impl SearchCriteria {
    /// Validates raw form input. Title and location must be non-blank and
    /// experience must fall within `0..=MAX_EXPERIENCE_YEARS`.
    pub fn new(
        job_title: &str,
        location: &str,
        experience_years: u32,
        skills: Vec<String>,
    ) -> Result<Self, AppError> {
        let job_title = job_title.trim();
        let location = location.trim();

        if job_title.is_empty() || location.is_empty() {
            return Err(AppError::Validation(
                "Please enter both job title and location".to_string(),
            ));
        }
        if experience_years > MAX_EXPERIENCE_YEARS {
            return Err(AppError::Validation(format!(
                "experience_years must be between 0 and {MAX_EXPERIENCE_YEARS}"
            )));
        }

        Ok(Self {
            job_title: job_title.to_string(),
            location: location.to_string(),
            experience_years,
            skills: clean_skills(skills),
        })
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Skills joined the way they are embedded in prompts.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }
}

/// Splits a comma-separated skills field, trimming entries and dropping blanks.
pub fn parse_skills(input: &str) -> Vec<String> {
    clean_skills(input.split(',').map(str::to_string).collect())
}

fn clean_skills(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_trims_and_drops_blanks() {
        assert_eq!(
            parse_skills(" Python, JavaScript ,, React,SQL , "),
            vec!["Python", "JavaScript", "React", "SQL"]
        );
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn test_criteria_trims_title_and_location() {
        let criteria = SearchCriteria::new("  Software Engineer ", " Bangalore", 3, vec![]).unwrap();
        assert_eq!(criteria.job_title(), "Software Engineer");
        assert_eq!(criteria.location(), "Bangalore");
        assert!(criteria.skills().is_empty());
        assert_eq!(criteria.skills_joined(), "");
    }

    #[test]
    fn test_blank_title_or_location_rejected() {
        assert!(matches!(
            SearchCriteria::new("  ", "Bangalore", 2, vec![]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            SearchCriteria::new("Engineer", "", 2, vec![]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_experience_upper_bound() {
        assert!(SearchCriteria::new("Engineer", "Pune", 30, vec![]).is_ok());
        assert!(SearchCriteria::new("Engineer", "Pune", 31, vec![]).is_err());
    }

    #[test]
    fn test_skills_input_accepts_list_or_text() {
        let list: SkillsInput = serde_json::from_str(r#"["Rust", " Go "]"#).unwrap();
        assert_eq!(list.into_skills(), vec!["Rust", "Go"]);

        let text: SkillsInput = serde_json::from_str(r#""Rust, Go""#).unwrap();
        assert_eq!(text.into_skills(), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_skills_order_is_preserved() {
        let criteria = SearchCriteria::new(
            "Data Analyst",
            "Remote",
            1,
            vec!["SQL".to_string(), "Excel".to_string(), "Python".to_string()],
        )
        .unwrap();
        assert_eq!(criteria.skills_joined(), "SQL, Excel, Python");
    }
}
