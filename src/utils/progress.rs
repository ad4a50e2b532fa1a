use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{prefix} {elapsed_precise} {bar:36.cyan/blue} {pos:>6}/{len:6} {msg}";

/// Progress bar over `len` addresses. Returns a hidden bar when `enabled` is false,
/// so callers never need to branch on it.
pub fn create_progressbar(len: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::new(len);
    progress_bar.set_prefix("Validating");
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    match ProgressStyle::with_template(TEMPLATE) {
        Ok(style) => progress_bar.set_style(style.progress_chars("■■□")),
        Err(e) => tracing::debug!("Falling back to default progress style: {}", e),
    }
    progress_bar
}
