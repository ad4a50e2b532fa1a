pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod validation;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LocalStorage;

pub use crate::core::{engine::ValidationEngine, pipeline::BatchPipeline};
pub use domain::model::{EmailRecord, MxOutcome, RunSummary, ValidationResult, Verdict};
pub use utils::error::{Result, SieveError};
pub use validation::{DisposableDomains, DnsMxResolver, StaticMxResolver};
