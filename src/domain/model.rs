use serde::Serialize;
use std::fmt;

/// One address read from the input, trimmed, with its lower-cased domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    pub address: String,
    pub domain: String,
}

impl EmailRecord {
    /// Returns `None` for blank lines.
    pub fn from_line(line: &str) -> Option<Self> {
        let address = line.trim();
        if address.is_empty() {
            return None;
        }

        let domain = address
            .rsplit_once('@')
            .map(|(_, domain)| domain.trim().to_lowercase())
            .unwrap_or_default();

        Some(Self {
            address: address.to_string(),
            domain,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "valid")]
    Valid,
    #[serde(rename = "invalid-syntax")]
    InvalidSyntax,
    #[serde(rename = "disposable")]
    Disposable,
    #[serde(rename = "no-mx")]
    NoMx,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::Valid,
        Verdict::InvalidSyntax,
        Verdict::Disposable,
        Verdict::NoMx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::InvalidSyntax => "invalid-syntax",
            Verdict::Disposable => "disposable",
            Verdict::NoMx => "no-mx",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single MX query. Collapsed to a boolean only when building the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxOutcome {
    Found(usize),
    NotFound,
    LookupError(String),
}

impl MxOutcome {
    pub fn has_mx(&self) -> bool {
        matches!(self, MxOutcome::Found(_))
    }
}

/// Everything known about one address after validation; one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub address: String,
    pub domain: String,
    pub verdict: Verdict,
    pub valid_syntax: bool,
    pub is_disposable: bool,
    pub has_mx: bool,
}

impl ValidationResult {
    pub fn describe(&self) -> String {
        format!(
            "{} -> {} (syntax: {}, disposable: {}, mx: {})",
            self.address, self.verdict, self.valid_syntax, self.is_disposable, self.has_mx
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub valid: usize,
    pub disposable: usize,
    pub invalid_syntax: usize,
    pub no_mx: usize,
}

impl RunSummary {
    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Valid => self.valid += 1,
            Verdict::Disposable => self.disposable += 1,
            Verdict::InvalidSyntax => self.invalid_syntax += 1,
            Verdict::NoMx => self.no_mx += 1,
        }
    }

    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Valid => self.valid,
            Verdict::Disposable => self.disposable,
            Verdict::InvalidSyntax => self.invalid_syntax,
            Verdict::NoMx => self.no_mx,
        }
    }

    /// Addresses that are neither valid nor disposable.
    pub fn invalid(&self) -> usize {
        self.invalid_syntax + self.no_mx
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Verdicts ordered by count, largest first; ties keep `Verdict::ALL` order.
    pub fn ranked(&self) -> Vec<(Verdict, usize)> {
        let mut counts: Vec<(Verdict, usize)> =
            Verdict::ALL.iter().map(|v| (*v, self.count(*v))).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn render(&self) -> String {
        let rule = "=".repeat(50);
        let mut lines = vec![
            rule.clone(),
            "Validation Summary".to_string(),
            rule.clone(),
            format!("Total emails processed: {}", self.total),
        ];
        for (verdict, count) in self.ranked() {
            lines.push(format!(
                "{:<30} {:>6} ({:5.1}%)",
                verdict.as_str(),
                count,
                self.percentage(count)
            ));
        }
        lines.push(format!(
            "{:<30} {:>6} ({:5.1}%)",
            "invalid (total)",
            self.invalid(),
            self.percentage(self.invalid())
        ));
        lines.push(rule);
        lines.join("\n")
    }
}
