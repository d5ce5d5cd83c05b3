//! Name/value records collected over one processing run.
//!
//! The log is an ordinary value handed to whatever needs to record into it;
//! call `reset` (or make a new one) between independent runs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::table::LINE_ENDING;

/// Parallel lists of field names and values, in insertion order.
///
/// Names may repeat; lookups return the first match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordLog {
    names: Vec<String>,
    values: Vec<f64>,
}

impl RecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, value: f64) {
        self.names.push(name.into());
        self.values.push(value);
    }

    /// First value recorded under `name`, or 0 if there is none.
    pub fn get(&self, name: &str) -> f64 {
        self.names
            .iter()
            .position(|n| n == name)
            .map_or(0.0, |i| self.values[i])
    }

    pub fn reset(&mut self) {
        self.names.clear();
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// One `name<TAB>value` line per record, platform line ending.
    pub fn write_rows<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        for (name, value) in self.iter() {
            write!(w, "{name}\t{value}{LINE_ENDING}")?;
        }
        Ok(())
    }

    /// Append all records to `path`, creating it if needed.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        self.write_rows(&mut file)?;
        file.flush()?;
        Ok(())
    }
}

/// First of `stem.ext`, `stem_1.ext`, `stem_2.ext`, ... under `dir` that does
/// not exist yet.
pub fn next_free_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let candidate = |k: usize| {
        let name = if k == 0 {
            format!("{stem}.{ext}")
        } else {
            format!("{stem}_{k}.{ext}")
        };
        dir.join(name)
    };
    (0..)
        .map(&candidate)
        .find(|p| !p.exists())
        .unwrap_or_else(|| candidate(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_first_match_or_zero() {
        let mut log = RecordLog::new();
        log.record("MY", 12.5);
        log.record("area", 300.0);
        log.record("MY", 99.0);
        assert_eq!(log.get("MY"), 12.5);
        assert_eq!(log.get("area"), 300.0);
        assert_eq!(log.get("missing"), 0.0);
        assert_eq!(log.len(), 3);
        log.reset();
        assert!(log.is_empty());
        assert_eq!(log.get("MY"), 0.0);
    }

    #[test]
    fn rows_and_file_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut log = RecordLog::new();
        log.record("length", 41.0);
        log.record("angle", 12.0);
        log.append_to(&path).unwrap();
        log.append_to(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let expected = format!("length\t41{LINE_ENDING}angle\t12{LINE_ENDING}").repeat(2);
        assert_eq!(text, expected);
    }

    #[test]
    fn free_path_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = next_free_path(dir.path(), "log", "txt");
        assert_eq!(first, dir.path().join("log.txt"));
        std::fs::write(&first, "").unwrap();
        std::fs::write(dir.path().join("log_1.txt"), "").unwrap();
        assert_eq!(
            next_free_path(dir.path(), "log", "txt"),
            dir.path().join("log_2.txt")
        );
    }
}
