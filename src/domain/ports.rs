use crate::domain::model::{EmailRecord, MxOutcome, ValidationResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn open_writer(&self, path: &str) -> Result<Box<dyn Write + Send>>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn blocklist_path(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
    fn show_progress(&self) -> bool;
}

#[async_trait]
pub trait MxResolver: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> MxOutcome;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EmailRecord>>;
    async fn transform(&self, record: EmailRecord) -> ValidationResult;
    fn open_sink(&self) -> Result<Box<dyn Write + Send>>;
}
