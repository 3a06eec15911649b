use crate::error::Result;

/// Where raw quote lines come from. The filesystem adapter lives in
/// [`crate::infra`]; tests substitute an in-memory implementation.
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Where cleaned quote lines go, one record per line.
pub trait LineSink {
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}
