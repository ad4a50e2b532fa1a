use clap::Parser;
use mail_sieve::core::ConfigProvider;
use mail_sieve::utils::{error::SieveError, logger, validation::Validate};
use mail_sieve::{
    BatchPipeline, CliConfig, DisposableDomains, DnsMxResolver, LocalStorage, RunSummary,
    ValidationEngine,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mail-sieve");
    tracing::debug!("CLI config: {:?}", config);

    match run(config).await {
        Ok(summary) => println!("\n{}", summary.render()),
        Err(e) => {
            tracing::error!(
                "❌ Validation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: CliConfig) -> Result<RunSummary, SieveError> {
    config.validate()?;

    let disposable = DisposableDomains::load(config.blocklist_path())?;
    let resolver = DnsMxResolver::from_system_conf();
    let output_path = config.output.clone();
    let (verbose, show_progress) = (config.verbose(), config.show_progress());

    let pipeline = BatchPipeline::new(LocalStorage::default(), config, disposable, resolver);
    let engine = ValidationEngine::new_with_reporting(pipeline, verbose, show_progress);

    let summary = engine.run().await?;
    tracing::info!("📁 Results saved to {} ({} emails processed)", output_path, summary.total);
    Ok(summary)
}
