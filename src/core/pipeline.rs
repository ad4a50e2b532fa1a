use crate::core::{ConfigProvider, EmailRecord, MxResolver, Pipeline, Storage, ValidationResult};
use crate::utils::error::{Result, SieveError};
use crate::validation::{DisposableDomains, Validator};
use std::io::Write;

/// Reads addresses from `storage`, validates each one, and opens the report
/// sink at the configured output path.
pub struct BatchPipeline<S: Storage, C: ConfigProvider, R: MxResolver> {
    storage: S,
    config: C,
    validator: Validator<R>,
}

impl<S: Storage, C: ConfigProvider, R: MxResolver> BatchPipeline<S, C, R> {
    pub fn new(storage: S, config: C, disposable: DisposableDomains, resolver: R) -> Self {
        Self {
            storage,
            config,
            validator: Validator::new(disposable, resolver),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn validator(&self) -> &Validator<R> {
        &self.validator
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, R: MxResolver> Pipeline for BatchPipeline<S, C, R> {
    async fn extract(&self) -> Result<Vec<EmailRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading addresses from {}", path);

        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|e| SieveError::InputUnreadable {
            path: path.to_string(),
            reason: format!("not valid UTF-8 ({})", e.utf8_error()),
        })?;

        let records: Vec<EmailRecord> = text.lines().filter_map(EmailRecord::from_line).collect();
        tracing::info!("Read {} emails from {}", records.len(), path);
        Ok(records)
    }

    async fn transform(&self, record: EmailRecord) -> ValidationResult {
        self.validator.validate(record).await
    }

    fn open_sink(&self) -> Result<Box<dyn Write + Send>> {
        self.storage.open_writer(self.config.output_path())
    }
}
