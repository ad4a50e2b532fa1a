use crate::domain::model::MxOutcome;
use crate::domain::ports::MxResolver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use trust_dns_resolver::{
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    TokioAsyncResolver,
};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// MX lookups against the system DNS resolver.
///
/// Every failure is folded into an [`MxOutcome`]; nothing is propagated.
/// Each call issues its own query, with no caching between addresses.
pub struct DnsMxResolver {
    resolver: TokioAsyncResolver,
}

impl DnsMxResolver {
    /// Reads the system resolver configuration, falling back to the library
    /// defaults when it cannot be read.
    pub fn from_system_conf() -> Self {
        match TokioAsyncResolver::tokio_from_system_conf() {
            Ok(resolver) => Self { resolver },
            Err(e) => {
                tracing::warn!("System DNS configuration unavailable ({}), using defaults", e);
                Self::with_config(ResolverConfig::default())
            }
        }
    }

    /// Single attempt per query with a fixed timeout.
    pub fn with_config(config: ResolverConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = LOOKUP_TIMEOUT;
        opts.attempts = 1;
        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

fn classify_error(err: &ResolveError) -> MxOutcome {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => MxOutcome::NotFound,
        _ => MxOutcome::LookupError(err.to_string()),
    }
}

/// Appends the root label so search domains from resolv.conf are not tried.
fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}

#[async_trait]
impl MxResolver for DnsMxResolver {
    async fn lookup_mx(&self, domain: &str) -> MxOutcome {
        if domain.is_empty() {
            return MxOutcome::LookupError("empty domain".to_string());
        }

        match self.resolver.mx_lookup(fully_qualified(domain)).await {
            Ok(lookup) => match lookup.iter().count() {
                0 => MxOutcome::NotFound,
                n => MxOutcome::Found(n),
            },
            Err(e) => {
                let outcome = classify_error(&e);
                tracing::trace!("MX lookup for {} failed: {}", domain, e);
                outcome
            }
        }
    }
}

/// In-memory resolver with fixed answers. Domains without an entry resolve to
/// [`MxOutcome::NotFound`]. Every queried domain is recorded.
#[derive(Debug, Default)]
pub struct StaticMxResolver {
    answers: HashMap<String, MxOutcome>,
    queried: Mutex<Vec<String>>,
}

impl StaticMxResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, domain: &str, outcome: MxOutcome) -> Self {
        self.answers.insert(domain.to_lowercase(), outcome);
        self
    }

    pub fn with_mx(self, domain: &str) -> Self {
        self.with_answer(domain, MxOutcome::Found(1))
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MxResolver for StaticMxResolver {
    async fn lookup_mx(&self, domain: &str) -> MxOutcome {
        if let Ok(mut queried) = self.queried.lock() {
            queried.push(domain.to_string());
        }
        self.answers
            .get(domain)
            .cloned()
            .unwrap_or(MxOutcome::NotFound)
    }
}
