pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{EmailRecord, MxOutcome, RunSummary, ValidationResult, Verdict};
pub use crate::domain::ports::{ConfigProvider, MxResolver, Pipeline, Storage};
pub use crate::utils::error::Result;
