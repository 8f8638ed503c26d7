//! Flyweight: user names
//!
//! Full names repeated in every user, versus indices into one shared cache.

use crate::config::PatternsConfig;
use crate::error::Result;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::io::Write;
use std::mem::size_of;
use std::sync::{Mutex, PoisonError};

/// Stores its own copy of the full name.
pub struct User {
    full_name: String,
}

impl User {
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name: full_name.to_string(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn heap_bytes(&self) -> usize {
        self.full_name.len()
    }
}

#[derive(Default)]
struct StringCache {
    strings: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl StringCache {
    fn get_or_add(&mut self, s: &str) -> usize {
        if let Some(&idx) = self.index.get(s) {
            return idx;
        }
        let idx = self.strings.len();
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), idx);
        idx
    }
}

lazy_static::lazy_static! {
    static ref STRINGS: Mutex<StringCache> = Mutex::new(StringCache::default());
}

/// Stores indices into a process-wide cache of name parts.
pub struct User2 {
    names: Vec<usize>,
}

impl User2 {
    pub fn new(full_name: &str) -> Self {
        let mut cache = STRINGS.lock().unwrap_or_else(PoisonError::into_inner);
        let names = full_name.split(' ').map(|part| cache.get_or_add(part)).collect();
        Self { names }
    }

    pub fn full_name(&self) -> String {
        let cache = STRINGS.lock().unwrap_or_else(PoisonError::into_inner);
        self.names
            .iter()
            .filter_map(|&i| cache.strings.get(i).map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn heap_bytes(&self) -> usize {
        self.names.len() * size_of::<usize>()
    }
}

/// Total bytes held by the shared cache.
pub fn cached_bytes() -> usize {
    let cache = STRINGS.lock().unwrap_or_else(PoisonError::into_inner);
    cache.strings.iter().map(String::len).sum()
}

pub fn random_name(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let first_names: Vec<String> = (0..100).map(|_| random_name(10)).collect();
    let last_names: Vec<String> = (0..100).map(|_| random_name(10)).collect();

    let mut plain = 0;
    let mut indexed = 0;
    let cache_before = cached_bytes();
    for first in &first_names {
        for last in &last_names {
            let full_name = format!("{first} {last}");
            plain += User::new(&full_name).heap_bytes();
            indexed += User2::new(&full_name).heap_bytes();
        }
    }
    let cache_growth = cached_bytes() - cache_before;

    writeln!(out, "User:  {plain} bytes of names")?;
    writeln!(
        out,
        "User2: {indexed} bytes of indices + {cache_growth} bytes of cached names"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user2_round_trips_name() {
        let user = User2::new("Flyweight Testperson");
        assert_eq!(user.full_name(), "Flyweight Testperson");
        assert_eq!(User::new("Flyweight Testperson").full_name(), "Flyweight Testperson");
    }

    #[test]
    fn test_shared_parts_are_cached_once() {
        let a = User2::new("Sharedfirst Onelast");
        let b = User2::new("Sharedfirst Otherlast");
        assert_eq!(a.names[0], b.names[0]);
        assert_ne!(a.names[1], b.names[1]);
    }

    #[test]
    fn test_random_name_shape() {
        let name = random_name(10);
        assert_eq!(name.len(), 10);
        assert!(name.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_demo_reports_savings() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("User:  210000 bytes of names\n"));
        assert!(text.contains("User2: 160000 bytes of indices"));
    }
}
