//! Singleton
//!
//! A lazily built, process-wide database and why hard-wiring it into
//! callers makes them hard to test. `ConfigurableRecordFinder` takes any
//! `Database`, so tests can hand it a `DummyDatabase` instead.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use itertools::Itertools;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

const BUNDLED_CAPITALS: &str = include_str!("../../data/capitals.txt");

pub trait Database {
    fn population(&self, name: &str) -> Result<u64>;
}

/// Parses alternating "city" / "population" lines. Blank lines are ignored.
pub fn parse_capitals(text: &str) -> Result<HashMap<String, u64>> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if let Some((line, name)) = lines.last().filter(|_| lines.len() % 2 == 1) {
        return Err(PatternError::invalid_data(
            *line,
            format!("city '{name}' has no population line"),
        ));
    }

    let mut capitals = HashMap::with_capacity(lines.len() / 2);
    for ((_, name), (line, population)) in lines.into_iter().tuples() {
        let population = population.parse::<u64>().map_err(|e| {
            PatternError::invalid_data(line, format!("bad population '{population}': {e}"))
        })?;
        capitals.insert(name.to_string(), population);
    }
    Ok(capitals)
}

fn lookup(capitals: &HashMap<String, u64>, name: &str) -> Result<u64> {
    capitals
        .get(name)
        .copied()
        .ok_or_else(|| PatternError::UnknownCity(name.to_string()))
}

static INSTANCE_COUNT: AtomicUsize = AtomicUsize::new(0);

lazy_static::lazy_static! {
    // The line number travels with the message so the error can be rebuilt
    // on every access.
    static ref INSTANCE: std::result::Result<SingletonDatabase, (usize, String)> =
        SingletonDatabase::load();
}

pub struct SingletonDatabase {
    capitals: HashMap<String, u64>,
}

impl SingletonDatabase {
    fn load() -> std::result::Result<Self, (usize, String)> {
        INSTANCE_COUNT.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Initializing database...");
        match parse_capitals(BUNDLED_CAPITALS) {
            Ok(capitals) => Ok(Self { capitals }),
            Err(PatternError::InvalidData { line, message }) => Err((line, message)),
            Err(e) => Err((0, e.to_string())),
        }
    }

    /// The one instance, built on first use.
    pub fn instance() -> Result<&'static SingletonDatabase> {
        INSTANCE
            .as_ref()
            .map_err(|(line, message)| PatternError::invalid_data(*line, message.clone()))
    }

    /// How many times the instance has been constructed.
    pub fn instance_count() -> usize {
        INSTANCE_COUNT.load(Ordering::SeqCst)
    }
}

impl Database for SingletonDatabase {
    fn population(&self, name: &str) -> Result<u64> {
        lookup(&self.capitals, name)
    }
}

/// Reaches for the singleton directly; only testable against live data.
pub struct SingletonRecordFinder;

impl SingletonRecordFinder {
    pub fn total_population<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<u64> {
        let db = SingletonDatabase::instance()?;
        names.into_iter().map(|name| db.population(name)).sum()
    }
}

pub struct ConfigurableRecordFinder<D: Database> {
    database: D,
}

impl<D: Database> ConfigurableRecordFinder<D> {
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub fn total_population<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<u64> {
        names.into_iter().map(|name| self.database.population(name)).sum()
    }
}

impl<D: Database + ?Sized> Database for &D {
    fn population(&self, name: &str) -> Result<u64> {
        (**self).population(name)
    }
}

pub struct DummyDatabase;

impl Database for DummyDatabase {
    fn population(&self, name: &str) -> Result<u64> {
        match name {
            "alpha" => Ok(1),
            "beta" => Ok(2),
            "gamma" => Ok(3),
            _ => Err(PatternError::UnknownCity(name.to_string())),
        }
    }
}

/// A regular, non-singleton database over any capitals file.
#[derive(Debug)]
pub struct CapitalsDatabase {
    capitals: HashMap<String, u64>,
}

impl CapitalsDatabase {
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self {
            capitals: parse_capitals(text)?,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let db = Self::from_text(&text)?;
        tracing::debug!("Loaded {} capitals from {}", db.len(), path.display());
        Ok(db)
    }

    pub fn len(&self) -> usize {
        self.capitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capitals.is_empty()
    }
}

impl Database for CapitalsDatabase {
    fn population(&self, name: &str) -> Result<u64> {
        lookup(&self.capitals, name)
    }
}

pub fn run(out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
    let db = SingletonDatabase::instance()?;
    let city = "Tokyo";
    writeln!(out, "{city} has population of {}", db.population(city)?)?;

    let names = ["Seoul", "Mexico City"];
    let total = SingletonRecordFinder.total_population(names)?;
    writeln!(out, "Seoul + Mexico City: {total}")?;

    let finder = ConfigurableRecordFinder::new(DummyDatabase);
    writeln!(out, "alpha + gamma (dummy): {}", finder.total_population(["alpha", "gamma"])?)?;

    if let Some(path) = &config.data.capitals {
        let finder = ConfigurableRecordFinder::new(CapitalsDatabase::from_file(path)?);
        writeln!(
            out,
            "Seoul + Mexico City ({}): {}",
            path.display(),
            finder.total_population(names)?
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_is_singleton() {
        let db = SingletonDatabase::instance().unwrap();
        let db2 = SingletonDatabase::instance().unwrap();
        assert!(std::ptr::eq(db, db2));
        assert_eq!(SingletonDatabase::instance_count(), 1);
    }

    #[test]
    fn test_singleton_total_population() {
        let total = SingletonRecordFinder
            .total_population(["Seoul", "Mexico City"])
            .unwrap();
        assert_eq!(total, 17_500_000 + 17_400_000);
    }

    #[test]
    fn test_dependent_total_population() {
        let finder = ConfigurableRecordFinder::new(DummyDatabase);
        assert_eq!(finder.total_population(["alpha", "gamma"]).unwrap(), 4);
    }

    #[test]
    fn test_unknown_city() {
        let finder = ConfigurableRecordFinder::new(&DummyDatabase);
        let err = finder.total_population(["alpha", "omega"]).unwrap_err();
        assert!(matches!(err, PatternError::UnknownCity(ref c) if c == "omega"));
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_capitals("Paris\n2100000\nRome\nmany\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidData { line: 4, .. }));

        let err = parse_capitals("Paris\n2100000\n\nRome\n").unwrap_err();
        assert!(matches!(err, PatternError::InvalidData { line: 4, .. }));
    }

    #[test]
    fn test_capitals_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Seoul\n1\n\nMexico City\n2\n").unwrap();
        let db = CapitalsDatabase::from_file(file.path()).unwrap();
        assert_eq!(db.len(), 2);

        let mut config = PatternsConfig::quiet();
        config.data.capitals = Some(file.path().to_path_buf());
        let mut out = Vec::new();
        run(&mut out, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Tokyo has population of 33200000\n"));
        assert!(text.contains("Seoul + Mexico City: 34900000\n"));
        assert!(text.contains("alpha + gamma (dummy): 4\n"));
        assert!(text.trim_end().ends_with(": 3"));
    }
}
