//! Iterator: creature stats backed by an array.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;
use std::ops::{Index, IndexMut};

const STRENGTH: usize = 0;
const AGILITY: usize = 1;
const INTELLIGENCE: usize = 2;

/// Stats live in one array so aggregate operations don't need to list
/// every field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Creature {
    stats: [i32; 3],
}

impl Creature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strength(&self) -> i32 {
        self.stats[STRENGTH]
    }

    pub fn set_strength(&mut self, value: i32) {
        self.stats[STRENGTH] = value;
    }

    pub fn agility(&self) -> i32 {
        self.stats[AGILITY]
    }

    pub fn set_agility(&mut self, value: i32) {
        self.stats[AGILITY] = value;
    }

    pub fn intelligence(&self) -> i32 {
        self.stats[INTELLIGENCE]
    }

    pub fn set_intelligence(&mut self, value: i32) {
        self.stats[INTELLIGENCE] = value;
    }

    pub fn sum_of_stats(&self) -> i32 {
        self.stats.iter().sum()
    }

    pub fn max_stat(&self) -> i32 {
        self.stats.iter().copied().max().unwrap_or_default()
    }

    pub fn average_stat(&self) -> f64 {
        f64::from(self.sum_of_stats()) / self.stats.len() as f64
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.stats.iter()
    }
}

impl Index<usize> for Creature {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.stats[index]
    }
}

impl IndexMut<usize> for Creature {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.stats[index]
    }
}

impl<'a> IntoIterator for &'a Creature {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.stats.iter()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut creature = Creature::new();
    creature[STRENGTH] = 1;
    creature[AGILITY] = 2;
    creature[INTELLIGENCE] = 1;

    for stat in &creature {
        writeln!(out, "{stat}")?;
    }

    writeln!(out, "Strength is {}", creature.strength())?;
    writeln!(out, "Agility is {}", creature.agility())?;
    writeln!(out, "Intelligence is {}", creature.intelligence())?;
    writeln!(out, "Average stat is {:.2}", creature.average_stat())?;
    Ok(())
}
