use crate::domain::model::ValidationResult;
use crate::utils::error::Result;
use std::io::Write;

pub const HEADER: [&str; 6] = [
    "address",
    "domain",
    "verdict",
    "valid_syntax",
    "is_disposable",
    "has_mx",
];

/// Streams one CSV row per result, flushing after each so a partial run
/// still leaves every processed address on disk.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_result(&mut self, result: &ValidationResult) -> Result<()> {
        self.writer.serialize(result)?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }
}
