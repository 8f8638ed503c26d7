//! A journal only keeps entries; saving them is somebody else's job.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry number, which keeps counting past removals.
    pub fn add_entry(&mut self, text: &str) -> usize {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
        self.count
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}

pub struct Persistence;

impl Persistence {
    /// Writes the journal unless the file exists and `overwrite` is false.
    /// Returns whether anything was written.
    pub fn save_to_file(journal: &Journal, path: &Path, overwrite: bool) -> Result<bool> {
        if !overwrite && path.exists() {
            tracing::debug!("{} exists, not overwriting", path.display());
            return Ok(false);
        }
        fs::write(path, journal.to_string())?;
        tracing::debug!("Saved {} entries to {}", journal.len(), path.display());
        Ok(true)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut journal = Journal::new();
    journal.add_entry("I cried today.");
    journal.add_entry("I ate a bug.");
    writeln!(out, "{journal}")?;

    // Removed with everything in it when `dir` drops, even on an early return.
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("journal.txt");
    let first = Persistence::save_to_file(&journal, &path, false)?;
    let second = Persistence::save_to_file(&journal, &path, false)?;
    let forced = Persistence::save_to_file(&journal, &path, true)?;

    writeln!(out, "Saved: {first}, again without overwrite: {second}, with overwrite: {forced}")?;
    Ok(())
}
