//! Builder: functional, with deferred actions.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub position: String,
}

type Action = Box<dyn FnOnce(&mut Person)>;

/// Records deferred actions and replays them on `build`.
#[derive(Default)]
pub struct PersonBuilder {
    actions: Vec<Action>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn called(self, name: &str) -> Self {
        let name = name.to_string();
        self.with(move |p| p.name = name)
    }

    /// Queues an arbitrary action. Extensions build on this.
    pub fn with(mut self, action: impl FnOnce(&mut Person) + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn build(self) -> Person {
        let mut person = Person::default();
        for action in self.actions {
            action(&mut person);
        }
        person
    }
}

/// Adds job details without touching `PersonBuilder` itself.
pub trait PersonJobExt {
    fn works_as_a(self, position: &str) -> Self;
}

impl PersonJobExt for PersonBuilder {
    fn works_as_a(self, position: &str) -> Self {
        let position = position.to_string();
        self.with(move |p| p.position = position)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let person = PersonBuilder::new()
        .called("Miro")
        .works_as_a("Programmer")
        .build();
    writeln!(out, "{} works as a {}", person.name, person.position)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_apply_in_order() {
        let person = PersonBuilder::new()
            .called("First")
            .works_as_a("Tester")
            .called("Second")
            .build();
        assert_eq!(person.name, "Second");
        assert_eq!(person.position, "Tester");
    }

    #[test]
    fn test_empty_builder() {
        assert_eq!(PersonBuilder::new().build(), Person::default());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Miro works as a Programmer\n");
    }
}
