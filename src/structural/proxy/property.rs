//! Property proxy: a field that notices no-op assignments.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt::Debug;
use std::io::Write;
use std::ops::Deref;

/// A field wrapper that skips assignments that wouldn't change anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property<T> {
    value: T,
    assignments: usize,
}

impl<T: PartialEq + Debug> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            assignments: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns whether the value actually changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        tracing::debug!("Assigning value to {:?}", value);
        self.value = value;
        self.assignments += 1;
        true
    }

    pub fn assignments(&self) -> usize {
        self.assignments
    }
}

impl<T: PartialEq + Debug> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for Property<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

#[derive(Debug, Default)]
pub struct Creature {
    agility: Property<i32>,
}

impl Creature {
    pub fn agility(&self) -> i32 {
        *self.agility
    }

    pub fn set_agility(&mut self, value: i32) -> bool {
        self.agility.set(value)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut creature = Creature::default();
    for value in [10, 10, 12] {
        let outcome = if creature.set_agility(value) {
            "assigned"
        } else {
            "ignored, same value"
        };
        writeln!(out, "Agility = {value}: {outcome}")?;
    }
    writeln!(out, "Agility is {} after {} assignment(s)", creature.agility(), creature.agility.assignments())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_value_is_skipped() {
        let mut p: Property<String> = "a".to_string().into();
        assert!(!p.set("a".to_string()));
        assert!(p.set("b".to_string()));
        assert_eq!(p.get(), "b");
        assert_eq!(p.assignments(), 1);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Agility = 10: assigned\nAgility = 10: ignored, same value\n\
             Agility = 12: assigned\nAgility is 12 after 2 assignment(s)\n"
        );
    }
}
