use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{AUTHOR_SEPARATOR, MIN_QUOTE_LEN, QUOTE_MARKS, SEPARATOR_MARKER};

// Collapses runs of two or more literal spaces. Deliberately not \s+: tabs
// and other whitespace are left alone, matching the original file format.
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(" {2,}").unwrap());

/// What happened to a single raw line on its way through the normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line survived and was cleaned
    Quote(String),
    /// Zero-length line, dropped without a diagnostic
    SkippedEmpty,
    /// Line under the minimum length, dropped; the caller logs it
    SkippedShort,
}

/// Normalize one raw quote line.
///
/// Empty lines and lines under [`MIN_QUOTE_LEN`] characters are skipped.
/// Surviving lines get their space runs collapsed, quotation marks stripped,
/// the ` -` author separator rewritten to `@~`, and the ends trimmed.
pub fn normalize_line(line: &str) -> LineOutcome {
    if line.is_empty() {
        return LineOutcome::SkippedEmpty;
    }

    // Character count, not byte length: curly quotes are multi-byte in UTF-8
    if line.chars().count() < MIN_QUOTE_LEN {
        return LineOutcome::SkippedShort;
    }

    let mut cleaned = MULTI_SPACE.replace_all(line, " ").into_owned();

    for mark in QUOTE_MARKS {
        cleaned = cleaned.replace(mark, "");
    }

    cleaned = cleaned.replace(AUTHOR_SEPARATOR, SEPARATOR_MARKER);

    LineOutcome::Quote(cleaned.trim().to_string())
}
