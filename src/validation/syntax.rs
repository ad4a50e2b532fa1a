use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Checks an address against a fixed pattern: one `@`, a non-empty local part,
/// and a dotted domain ending in an alphabetic TLD of two or more letters.
///
/// Malformed input is reported as `false`, never as an error.
///
/// ```
/// use mail_sieve::validation::syntax::is_valid_syntax;
///
/// assert!(is_valid_syntax("user.name+tag@example.com"));
/// assert!(!is_valid_syntax("not-an-email"));
/// ```
pub fn is_valid_syntax(address: &str) -> bool {
    email_regex().is_match(address)
}
