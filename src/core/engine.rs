use crate::core::report::ReportWriter;
use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::progress::create_progressbar;

pub struct ValidationEngine<P: Pipeline> {
    pipeline: P,
    verbose: bool,
    show_progress: bool,
}

impl<P: Pipeline> ValidationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_reporting(pipeline, false, false)
    }

    pub fn new_with_reporting(pipeline: P, verbose: bool, show_progress: bool) -> Self {
        Self {
            pipeline,
            verbose,
            show_progress,
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Validates every address in input order, writing each row as soon as
    /// its verdict is known. Addresses are processed one at a time.
    pub async fn run(&self) -> Result<RunSummary> {
        let records = self.pipeline.extract().await?;
        let mut report = ReportWriter::new(self.pipeline.open_sink()?)?;

        tracing::info!("Starting validation of {} emails", records.len());
        let progress = create_progressbar(records.len() as u64, self.show_progress);
        let mut summary = RunSummary::default();

        for record in records {
            let result = self.pipeline.transform(record).await;
            report.write_result(&result)?;
            summary.record(result.verdict);

            if self.verbose {
                progress.suspend(|| println!("{}", result.describe()));
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        let rows = report.finish()?;
        tracing::debug!("Wrote {} rows", rows);

        Ok(summary)
    }
}
