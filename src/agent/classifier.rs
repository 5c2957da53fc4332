//! Decides whether raw page text needs a cleaning pass before it is
//! summarized. Pure and synchronous; the only side effect is logging.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

// Matches http/https/ftp URLs, checked before the character allowlist
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://|ftp://").expect("valid URL regex"));

// Matches characters that suggest HTML/markup or encoded content. \w and
// \s are Unicode-aware, so accented letters from any script count as clean
// text. Typographic punctuation common in normal web prose is allowed
// through: en/em dashes, curly quotes, the ellipsis, slash and percent.
static DIRTY_CHARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"[^\w\s\-\u{2013}\u{2014}.,!?'\u{2018}\u{2019}"\u{201C}\u{201D}:;()/\u{2026}%]"#,
    )
    .expect("valid dirty-chars regex")
});

/// Returns true when the text contains a URL or any character outside the
/// prose allowlist, i.e. when it should take the sanitization detour.
pub fn needs_sanitization(text: &str) -> bool {
    if URL_RE.is_match(text) {
        info!(reason = "url_detected", "Sanitization triggered");
        return true;
    }
    if DIRTY_CHARS_RE.is_match(text) {
        // Collect up to 5 unique offending characters for the log
        let mut dirty: Vec<&str> = DIRTY_CHARS_RE.find_iter(text).map(|m| m.as_str()).collect();
        dirty.sort_unstable();
        dirty.dedup();
        dirty.truncate(5);
        info!(reason = "dirty_chars", chars = ?dirty, "Sanitization triggered");
        return true;
    }
    false
}
