use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::lenient;

/// Salary and demand figures for one industry or sub-category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IndustryTrend {
    /// Industry name
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub industry: Option<String>,

    /// Average salary in the industry
    #[serde(default, deserialize_with = "lenient::opt_number", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub avg_salary: Option<f64>,

    /// Growth rate of the industry
    #[serde(default, deserialize_with = "lenient::opt_number", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub growth_rate: Option<f64>,

    /// Demand level in the industry (High, Medium, Low)
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub demand_level: Option<String>,

    /// Top skills in demand for this industry
    #[serde(default, deserialize_with = "lenient::text_list", skip_serializing_if = "Vec::is_empty")]
    #[schemars(with = "Vec<String>")]
    pub top_skills: Vec<String>,
}

impl IndustryTrend {
    pub fn is_blank(&self) -> bool {
        self.industry.is_none()
            && self.avg_salary.is_none()
            && self.growth_rate.is_none()
            && self.demand_level.is_none()
            && self.top_skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_deserializes_formatted_numbers() {
        let trend: IndustryTrend = serde_json::from_str(
            r#"{
                "industry": "Data Engineering",
                "avg_salary": "$120,000",
                "growth_rate": 8.5,
                "demand_level": "High",
                "top_skills": ["Spark", "SQL"]
            }"#,
        )
        .unwrap();
        assert_eq!(trend.avg_salary, Some(120000.0));
        assert_eq!(trend.growth_rate, Some(8.5));
        assert_eq!(trend.top_skills, vec!["Spark", "SQL"]);
        assert!(!trend.is_blank());
    }

    #[test]
    fn test_trend_with_nulls_is_blank() {
        let trend: IndustryTrend = serde_json::from_str(
            r#"{"industry": null, "avg_salary": null, "top_skills": null}"#,
        )
        .unwrap();
        assert!(trend.is_blank());
    }
}
