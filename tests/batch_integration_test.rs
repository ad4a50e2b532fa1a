use mail_sieve::core::ConfigProvider;
use mail_sieve::{
    BatchPipeline, DisposableDomains, LocalStorage, MxOutcome, SieveError, StaticMxResolver,
    ValidationEngine, Verdict,
};
use std::fs;
use tempfile::TempDir;

struct TestConfig {
    input: String,
    output: String,
}

impl ConfigProvider for TestConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn blocklist_path(&self) -> Option<&str> {
        None
    }

    fn verbose(&self) -> bool {
        false
    }

    fn show_progress(&self) -> bool {
        false
    }
}

fn engine(
    dir: &TempDir,
    input: &str,
    output: &str,
    resolver: StaticMxResolver,
) -> ValidationEngine<BatchPipeline<LocalStorage, TestConfig, StaticMxResolver>> {
    let config = TestConfig {
        input: input.to_string(),
        output: output.to_string(),
    };
    let pipeline = BatchPipeline::new(
        LocalStorage::new(dir.path()),
        config,
        DisposableDomains::bundled(),
        resolver,
    );
    ValidationEngine::new(pipeline)
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_verdicts_and_order() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("emails.txt"),
        "user@example.com\n\nnot-an-email\n  user@Mailinator.com  \nuser@nomail.test\n\nuser@flaky.test\n",
    )
    .unwrap();

    let resolver = StaticMxResolver::new()
        .with_mx("example.com")
        .with_mx("mailinator.com")
        .with_answer("flaky.test", MxOutcome::LookupError("timed out".to_string()));
    let engine = engine(&dir, "emails.txt", "report.csv", resolver);

    let summary = engine.run().await.unwrap();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.valid, 1);
    assert_eq!(summary.disposable, 1);
    assert_eq!(summary.invalid_syntax, 1);
    assert_eq!(summary.no_mx, 2);
    assert_eq!(summary.invalid(), 3);

    let header = {
        let mut reader = csv::Reader::from_path(dir.path().join("report.csv")).unwrap();
        reader.headers().unwrap().clone()
    };
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        vec!["address", "domain", "verdict", "valid_syntax", "is_disposable", "has_mx"]
    );

    let rows = read_rows(&dir.path().join("report.csv"));
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], ["user@example.com", "example.com", "valid", "true", "false", "true"]);
    assert_eq!(rows[1], ["not-an-email", "", "invalid-syntax", "false", "false", "false"]);
    assert_eq!(
        rows[2],
        ["user@Mailinator.com", "mailinator.com", "disposable", "true", "true", "false"]
    );
    assert_eq!(rows[3], ["user@nomail.test", "nomail.test", "no-mx", "true", "false", "false"]);
    assert_eq!(rows[4][2], "no-mx");

    // Disposable and malformed addresses never reach DNS.
    assert_eq!(
        engine.pipeline().validator().resolver().queried(),
        vec!["example.com", "nomail.test", "flaky.test"]
    );
}

#[tokio::test]
async fn test_empty_input_writes_header_and_zero_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("emails.txt"), "\n   \n\n").unwrap();

    let summary = engine(&dir, "emails.txt", "report.csv", StaticMxResolver::new())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(summary.percentage(summary.valid), 0.0);
    assert!(summary.render().contains("Total emails processed: 0"));

    let content = fs::read_to_string(dir.path().join("report.csv")).unwrap();
    assert_eq!(content, "address,domain,verdict,valid_syntax,is_disposable,has_mx\n");
}

#[tokio::test]
async fn test_missing_input_is_fatal_and_creates_no_output() {
    let dir = TempDir::new().unwrap();

    let err = engine(&dir, "missing.txt", "report.csv", StaticMxResolver::new())
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, SieveError::InputNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!dir.path().join("report.csv").exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("emails.txt"), "user@example.com\n").unwrap();

    let err = engine(
        &dir,
        "emails.txt",
        "missing-dir/report.csv",
        StaticMxResolver::new(),
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, SieveError::OutputUnwritable { .. }));
}

#[tokio::test]
async fn test_all_invalid_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (0..20).map(|i| format!("broken-{}", i)).collect();
    fs::write(dir.path().join("emails.txt"), lines.join("\n")).unwrap();

    let summary = engine(&dir, "emails.txt", "report.csv", StaticMxResolver::new())
        .run()
        .await
        .unwrap();

    assert_eq!(summary.total, 20);
    assert_eq!(summary.count(Verdict::InvalidSyntax), 20);
    assert_eq!(summary.percentage(summary.invalid_syntax), 100.0);

    let rows = read_rows(&dir.path().join("report.csv"));
    let addresses: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(addresses, lines.iter().map(String::as_str).collect::<Vec<_>>());
}
