//! Extraction schemas. Each result kind is a statically declared envelope
//! whose JSON schema is derived with `schemars` and sent to the provider; the
//! same envelope names the collection key read back from the answer.

#![allow(dead_code)]

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::ExtractionResult;
use crate::models::{IndustryTrend, JobPosting};

/// An extraction envelope: one named list of records.
pub trait ExtractionTarget: JsonSchema {
    type Record: DeserializeOwned + Serialize;

    /// Key under which the provider returns the list.
    const COLLECTION: &'static str;

    fn is_blank(record: &Self::Record) -> bool;

    /// Self-contained JSON schema (sub-schemas inlined, no `$ref`).
    fn extraction_schema() -> Value {
        let root = SchemaSettings::draft07()
            .with(|s| s.inline_subschemas = true)
            .into_generator()
            .into_root_schema_for::<Self>();
        serde_json::to_value(root).unwrap_or_default()
    }

    /// Pulls the records out of a provider result. A failed result, a missing
    /// key, or a non-list value all yield an empty list. Elements that fail to
    /// decode or carry no data are skipped.
    fn records(result: &ExtractionResult) -> Vec<Self::Record> {
        if !result.success {
            return Vec::new();
        }

        let Some(items) = result.data.get(Self::COLLECTION).and_then(Value::as_array) else {
            warn!(
                "Extraction result has no '{}' list (status: {})",
                Self::COLLECTION,
                result.status
            );
            return Vec::new();
        };

        let total = items.len();
        let records: Vec<Self::Record> = items
            .iter()
            .filter_map(|item| match serde_json::from_value::<Self::Record>(item.clone()) {
                Ok(record) if !Self::is_blank(&record) => Some(record),
                Ok(_) => None,
                Err(e) => {
                    warn!("Skipping malformed '{}' element: {e}", Self::COLLECTION);
                    None
                }
            })
            .collect();

        if records.len() < total {
            warn!(
                "Kept {}/{} '{}' records after validation",
                records.len(),
                total,
                Self::COLLECTION
            );
        }
        records
    }
}

/// Schema for job postings extraction
#[derive(JsonSchema)]
pub struct JobPostingsSchema {
    /// List of job postings
    pub job_postings: Vec<JobPosting>,
}

impl ExtractionTarget for JobPostingsSchema {
    type Record = JobPosting;
    const COLLECTION: &'static str = "job_postings";

    fn is_blank(record: &JobPosting) -> bool {
        record.is_blank()
    }
}

/// Schema for industry trends extraction
#[derive(JsonSchema)]
pub struct IndustryTrendsSchema {
    /// List of industry trends
    pub industry_trends: Vec<IndustryTrend>,
}

impl ExtractionTarget for IndustryTrendsSchema {
    type Record = IndustryTrend;
    const COLLECTION: &'static str = "industry_trends";

    fn is_blank(record: &IndustryTrend) -> bool {
        record.is_blank()
    }
}
