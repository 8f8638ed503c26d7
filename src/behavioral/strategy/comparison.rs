//! Strategy: equality and ordering.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::io::Write;

/// Identity is the id: two people with the same id are equal no matter what
/// else differs, and the natural order is by id.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(id: u32, name: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// A comparison strategy that can be handed around as a value.
pub trait Comparer<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

pub struct NameComparer;

impl Comparer<Person> for NameComparer {
    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        a.name.cmp(&b.name)
    }
}

pub fn sort_with<T>(items: &mut [T], comparer: &dyn Comparer<T>) {
    items.sort_by(|a, b| comparer.compare(a, b));
}

fn names(people: &[Person]) -> String {
    people.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut people = vec![
        Person::new(3, "Chris", 31),
        Person::new(1, "Matt", 40),
        Person::new(2, "Anna", 25),
    ];

    people.sort();
    writeln!(out, "By id: {}", names(&people))?;

    sort_with(&mut people, &NameComparer);
    writeln!(out, "By name (comparer): {}", names(&people))?;

    people.sort_by(|a, b| b.age.cmp(&a.age));
    writeln!(out, "By age descending (closure): {}", names(&people))?;

    let renamed = Person::new(1, "Matthew", 40);
    writeln!(out, "Matt == Matthew? {}", people.contains(&renamed))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_id() {
        let a = Person::new(1, "Matt", 40);
        let b = Person::new(1, "Someone else", 12);
        assert_eq!(a, b);
        assert_ne!(a, Person::new(2, "Matt", 40));

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sort_strategies() {
        let mut people = vec![
            Person::new(2, "Bob", 20),
            Person::new(1, "Carl", 30),
            Person::new(3, "Alice", 10),
        ];
        people.sort();
        assert_eq!(people.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        sort_with(&mut people, &NameComparer);
        assert_eq!(names(&people), "Alice, Bob, Carl");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "By id: Matt, Anna, Chris\n\
             By name (comparer): Anna, Chris, Matt\n\
             By age descending (closure): Matt, Chris, Anna\n\
             Matt == Matthew? true\n"
        );
    }
}
