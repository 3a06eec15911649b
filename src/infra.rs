use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{NormalizerError, Result};
use crate::ports::{LineSink, LineSource};

/// Reads the whole input file up front and splits it into lines. Inputs are
/// small quote collections, so no streaming.
pub struct FsLineSource {
    path: PathBuf,
}

impl FsLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FsLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| NormalizerError::InputRead {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Truncates the output file on every run and writes one record per line,
/// each terminated by a single newline.
pub struct FsLineSink {
    path: PathBuf,
}

impl FsLineSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSink for FsLineSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        let write_err = |e: std::io::Error| NormalizerError::OutputWrite {
            path: self.path.clone(),
            source: e,
        };

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{line}").map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn source_splits_lines_and_drops_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quotes-raw");
        fs::write(&path, "one\ntwo\n\nthree\n").unwrap();

        let lines = FsLineSource::new(&path).read_lines().unwrap();
        assert_eq!(lines, vec!["one", "two", "", "three"]);
    }

    #[test]
    fn missing_input_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-file");

        let err = FsLineSource::new(&path).read_lines().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("read input file"), "unexpected message: {msg}");
        assert!(msg.contains("no-such-file"), "unexpected message: {msg}");
    }

    #[test]
    fn sink_truncates_and_terminates_every_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".QUOTES");
        fs::write(&path, "stale contents from a previous run\n").unwrap();

        let lines = vec!["alpha".to_string(), "beta".to_string()];
        FsLineSink::new(&path).write_lines(&lines).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");
    }

    #[test]
    fn sink_writes_an_empty_file_for_no_quotes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".QUOTES");

        FsLineSink::new(&path).write_lines(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
