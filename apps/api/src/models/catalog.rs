//! Fixed choice lists offered to the user: industry categories and model identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Industry categories the trend analysis can be run against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryCategory {
    #[default]
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    Marketing,
    Finance,
    Healthcare,
    Education,
    Engineering,
    Sales,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl IndustryCategory {
    pub const ALL: [IndustryCategory; 10] = [
        IndustryCategory::InformationTechnology,
        IndustryCategory::SoftwareDevelopment,
        IndustryCategory::DataScience,
        IndustryCategory::Marketing,
        IndustryCategory::Finance,
        IndustryCategory::Healthcare,
        IndustryCategory::Education,
        IndustryCategory::Engineering,
        IndustryCategory::Sales,
        IndustryCategory::HumanResources,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndustryCategory::InformationTechnology => "Information Technology",
            IndustryCategory::SoftwareDevelopment => "Software Development",
            IndustryCategory::DataScience => "Data Science",
            IndustryCategory::Marketing => "Marketing",
            IndustryCategory::Finance => "Finance",
            IndustryCategory::Healthcare => "Healthcare",
            IndustryCategory::Education => "Education",
            IndustryCategory::Engineering => "Engineering",
            IndustryCategory::Sales => "Sales",
            IndustryCategory::HumanResources => "Human Resources",
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Language models the user may pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "o3-mini")]
    O3Mini,
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
}

impl ModelId {
    pub const ALL: [ModelId; 2] = [ModelId::O3Mini, ModelId::Gpt4oMini];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::O3Mini => "o3-mini",
            ModelId::Gpt4oMini => "gpt-4o-mini",
        }
    }

    /// Maps a configured default onto the selector: anything other than
    /// `o3-mini` selects the fallback model.
    pub fn from_selector(id: &str) -> Self {
        if id.trim() == ModelId::O3Mini.as_str() {
            ModelId::O3Mini
        } else {
            ModelId::Gpt4oMini
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&IndustryCategory::HumanResources).unwrap();
        assert_eq!(json, r#""Human Resources""#);
        let parsed: IndustryCategory = serde_json::from_str(r#""Information Technology""#).unwrap();
        assert_eq!(parsed, IndustryCategory::InformationTechnology);
    }

    #[test]
    fn test_model_selector_fallback() {
        assert_eq!(ModelId::from_selector("o3-mini"), ModelId::O3Mini);
        assert_eq!(ModelId::from_selector("gpt-4o-mini"), ModelId::Gpt4oMini);
        assert_eq!(ModelId::from_selector("gpt-4o"), ModelId::Gpt4oMini);
        assert_eq!(ModelId::default(), ModelId::O3Mini);
    }

    #[test]
    fn test_model_serde_uses_api_identifiers() {
        let parsed: ModelId = serde_json::from_str(r#""gpt-4o-mini""#).unwrap();
        assert_eq!(parsed, ModelId::Gpt4oMini);
        assert_eq!(serde_json::to_string(&ModelId::O3Mini).unwrap(), r#""o3-mini""#);
    }
}
