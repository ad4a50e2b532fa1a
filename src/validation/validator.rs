use crate::domain::model::{EmailRecord, MxOutcome, ValidationResult, Verdict};
use crate::domain::ports::MxResolver;
use crate::validation::disposable::DisposableDomains;
use crate::validation::syntax::is_valid_syntax;

/// Runs syntax, disposable and MX checks in that order, stopping at the
/// first one that decides the verdict.
pub struct Validator<R: MxResolver> {
    disposable: DisposableDomains,
    resolver: R,
}

impl<R: MxResolver> Validator<R> {
    pub fn new(disposable: DisposableDomains, resolver: R) -> Self {
        Self {
            disposable,
            resolver,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub async fn validate(&self, record: EmailRecord) -> ValidationResult {
        let EmailRecord { address, domain } = record;

        if !is_valid_syntax(&address) {
            tracing::trace!("{}: rejected by syntax check", address);
            return ValidationResult {
                address,
                domain,
                verdict: Verdict::InvalidSyntax,
                valid_syntax: false,
                is_disposable: false,
                has_mx: false,
            };
        }

        if self.disposable.contains(&domain) {
            tracing::trace!("{}: disposable domain {}", address, domain);
            return ValidationResult {
                address,
                domain,
                verdict: Verdict::Disposable,
                valid_syntax: true,
                is_disposable: true,
                has_mx: false,
            };
        }

        let outcome = self.resolver.lookup_mx(&domain).await;
        match &outcome {
            MxOutcome::Found(n) => tracing::trace!("{}: {} MX record(s)", domain, n),
            MxOutcome::NotFound => tracing::trace!("{}: no MX records", domain),
            MxOutcome::LookupError(reason) => {
                tracing::trace!("{}: MX lookup error treated as no MX: {}", domain, reason)
            }
        }

        let has_mx = outcome.has_mx();
        ValidationResult {
            address,
            domain,
            verdict: if has_mx { Verdict::Valid } else { Verdict::NoMx },
            valid_syntax: true,
            is_disposable: false,
            has_mx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::mx::StaticMxResolver;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record(line: &str) -> EmailRecord {
        EmailRecord::from_line(line).unwrap()
    }

    fn validator(resolver: StaticMxResolver) -> Validator<StaticMxResolver> {
        let disposable: DisposableDomains = ["mailinator.com", "yopmail.com"].into_iter().collect();
        Validator::new(disposable, resolver)
    }

    #[tokio::test]
    async fn test_valid_address_with_mx() {
        let v = validator(StaticMxResolver::new().with_mx("example.com"));
        let result = v.validate(record("user@example.com")).await;

        assert_eq!(result.verdict, Verdict::Valid);
        assert!(result.valid_syntax);
        assert!(!result.is_disposable);
        assert!(result.has_mx);
        assert_eq!(result.domain, "example.com");
    }

    #[tokio::test]
    async fn test_invalid_syntax_skips_remaining_checks() {
        let v = validator(StaticMxResolver::new());
        let result = v.validate(record("not-an-email")).await;

        assert_eq!(result.verdict, Verdict::InvalidSyntax);
        assert!(!result.valid_syntax);
        assert!(v.resolver().queried().is_empty());
    }

    #[tokio::test]
    async fn test_disposable_wins_regardless_of_mx() {
        let v = validator(StaticMxResolver::new().with_mx("mailinator.com"));
        let result = v.validate(record("user@Mailinator.com")).await;

        assert_eq!(result.verdict, Verdict::Disposable);
        assert!(result.is_disposable);
        assert!(!result.has_mx);
        assert!(v.resolver().queried().is_empty());
    }

    #[tokio::test]
    async fn test_missing_mx_is_no_mx() {
        let v = validator(StaticMxResolver::new());
        let result = v.validate(record("user@nomail.test")).await;

        assert_eq!(result.verdict, Verdict::NoMx);
        assert!(result.valid_syntax);
        assert!(!result.has_mx);
        assert_eq!(v.resolver().queried(), vec!["nomail.test"]);
    }

    #[tokio::test]
    async fn test_lookup_error_is_no_mx() {
        let v = validator(
            StaticMxResolver::new()
                .with_answer("flaky.test", MxOutcome::LookupError("timed out".to_string())),
        );
        let result = v.validate(record("user@flaky.test")).await;
        assert_eq!(result.verdict, Verdict::NoMx);
    }

    #[tokio::test]
    async fn test_repeated_domains_query_each_time() {
        let v = validator(StaticMxResolver::new().with_mx("example.com"));
        v.validate(record("a@example.com")).await;
        v.validate(record("b@example.com")).await;
        assert_eq!(v.resolver().queried().len(), 2);
    }

    #[tokio::test]
    async fn test_per_address_events_stay_quiet_at_debug_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let v = validator(
            StaticMxResolver::new()
                .with_mx("example.com")
                .with_answer("flaky.test", MxOutcome::LookupError("timed out".to_string())),
        );
        for line in [
            "not-an-email",
            "user@mailinator.com",
            "user@example.com",
            "user@nomail.test",
            "user@flaky.test",
        ] {
            v.validate(record(line)).await;
        }

        let captured = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(captured.is_empty(), "unexpected log output: {}", captured);
    }
}
