use crate::utils::error::{Result, SieveError};
use std::collections::HashSet;
use std::fs;

const BUNDLED_LIST: &str = include_str!("../../data/disposable_domains.conf");

/// Immutable set of throwaway-mail domains, built once at startup and passed
/// to the validator by value.
#[derive(Debug, Clone, Default)]
pub struct DisposableDomains {
    domains: HashSet<String>,
}

impl DisposableDomains {
    /// Parses a flat list: one domain per line, `#` comments and blank lines ignored.
    pub fn parse(list: &str) -> Self {
        let domains = list
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Self { domains }
    }

    pub fn bundled() -> Self {
        Self::parse(BUNDLED_LIST)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let list = fs::read_to_string(path).map_err(|e| SieveError::from_read_error(path, e))?;
        Ok(Self::parse(&list))
    }

    /// Uses the list at `path` when given, the bundled list otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let domains = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::bundled(),
        };
        tracing::info!(
            "Loaded {} disposable domains from {}",
            domains.len(),
            path.unwrap_or("bundled list")
        );
        Ok(domains)
    }

    pub fn contains(&self, domain: &str) -> bool {
        let normalized = domain.trim().to_lowercase();
        self.domains.contains(&normalized)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for DisposableDomains {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let domains = iter
            .into_iter()
            .map(|d| d.as_ref().trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }
}
