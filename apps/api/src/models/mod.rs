pub mod catalog;
pub mod criteria;
pub mod lenient;
pub mod posting;
pub mod trend;

pub use catalog::{IndustryCategory, ModelId};
pub use criteria::SearchCriteria;
pub use posting::JobPosting;
pub use trend::IndustryTrend;
