//! Research asks a `RelationshipBrowser` for children instead of digging
//! through the store's internals.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: &str) -> Result<Self> {
        require_non_blank("name", name)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

pub trait RelationshipBrowser {
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Person> + 'a>;
}

/// Low-level store of (from, relationship, to) triples.
#[derive(Debug, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the relationship in both directions.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
    }

    pub fn relations(&self) -> &[(Person, Relationship, Person)] {
        &self.relations
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of<'a>(&'a self, name: &'a str) -> Box<dyn Iterator<Item = &'a Person> + 'a> {
        Box::new(
            self.relations
                .iter()
                .filter(move |(from, rel, _)| from.name == name && *rel == Relationship::Parent)
                .map(|(_, _, to)| to),
        )
    }
}

pub struct Research;

impl Research {
    pub fn children_report(browser: &dyn RelationshipBrowser, name: &str) -> Vec<String> {
        browser
            .find_all_children_of(name)
            .map(|child| format!("{name} has a child called {}", child.name))
            .collect()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let parent = Person::new("John")?;
    let chris = Person::new("Chris")?;
    let matt = Person::new("Matt")?;

    let mut relationships = Relationships::new();
    relationships.add_parent_and_child(&parent, &chris);
    relationships.add_parent_and_child(&parent, &matt);

    for line in Research::children_report(&relationships, "John") {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
