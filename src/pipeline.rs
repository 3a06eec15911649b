use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::normalize::{normalize_line, LineOutcome};
use crate::ports::{LineSink, LineSource};

/// Result of a complete normalizer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub total_lines: usize,
    pub unique_quotes: usize,
    pub duplicates_dropped: usize,
    pub skipped_short: usize,
    pub skipped_empty: usize,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the full read-transform-write sequence: normalize every line,
    /// dedup through an unordered set, sort, write.
    ///
    /// Input order is deliberately discarded; the output order comes only
    /// from the final lexicographic sort. Rust's default `str` ordering is
    /// byte-wise over UTF-8, which matches code-point order.
    pub fn run(source: &dyn LineSource, sink: &mut dyn LineSink) -> Result<TransformResult> {
        let raw_lines = source.read_lines()?;
        info!("Read {} raw lines", raw_lines.len());

        let mut seen: HashSet<String> = HashSet::new();
        let mut skipped_short = 0;
        let mut skipped_empty = 0;
        let mut duplicates_dropped = 0;

        for line in &raw_lines {
            match normalize_line(line) {
                LineOutcome::Quote(quote) => {
                    if !seen.insert(quote) {
                        duplicates_dropped += 1;
                    }
                }
                LineOutcome::SkippedEmpty => {
                    // No diagnostic for empty lines, only short ones
                    skipped_empty += 1;
                }
                LineOutcome::SkippedShort => {
                    warn!("Skipping line {} as it's too short", line);
                    skipped_short += 1;
                }
            }
        }

        let mut quotes: Vec<String> = seen.into_iter().collect();
        quotes.sort();
        debug!("{} unique quotes after dedup", quotes.len());

        sink.write_lines(&quotes)?;
        info!("Wrote {} quotes", quotes.len());

        Ok(TransformResult {
            total_lines: raw_lines.len(),
            unique_quotes: quotes.len(),
            duplicates_dropped,
            skipped_short,
            skipped_empty,
        })
    }
}
