/// File name and normalization constants shared across the codebase

// Default file paths, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "quotes-raw";
pub const DEFAULT_OUTPUT_FILE: &str = ".QUOTES";

// Lines shorter than this (in characters) are skipped with a diagnostic
pub const MIN_QUOTE_LEN: usize = 30;

// Quotation-mark glyphs stripped from every line. Only these three; single
// quotes and guillemets pass through untouched.
pub const QUOTE_MARKS: [char; 3] = ['"', '\u{201C}', '\u{201D}'];

// A " -" anywhere in the line becomes this marker. It is a heuristic for the
// quote/author boundary and also rewrites legitimate mid-sentence hyphens.
pub const AUTHOR_SEPARATOR: &str = " -";
pub const SEPARATOR_MARKER: &str = "@~";
