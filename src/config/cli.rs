use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mail-sieve", version)]
#[command(about = "Bulk email validator: syntax, disposable-domain and MX checks")]
#[command(after_help = "Examples:
  mail-sieve --input emails.txt
  mail-sieve --input list.txt --output clean.csv
  mail-sieve --input emails.txt --verbose")]
pub struct CliConfig {
    /// Input text file with one email address per line
    #[arg(short, long)]
    pub input: String,

    /// Output CSV file
    #[arg(short, long, default_value = "validated_emails.csv")]
    pub output: String,

    /// Disposable-domain list to use instead of the bundled one
    #[arg(long)]
    pub blocklist: Option<String>,

    /// Print per-address results while validating
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn blocklist_path(&self) -> Option<&str> {
        self.blocklist.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn show_progress(&self) -> bool {
        !self.no_progress
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        if let Some(blocklist) = &self.blocklist {
            validate_path("blocklist", blocklist)?;
        }
        validate_distinct_paths(&self.input, &self.output)
    }
}
