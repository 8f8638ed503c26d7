//! View model proxy
//!
//! Change notification and a derived full name layered over a plain person.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

type ChangeListener = Box<dyn FnMut(&'static str)>;

/// Sits between a UI and a `Person`: notifies on every real change and
/// exposes a derived `full_name`.
#[derive(Default)]
pub struct PersonViewModel {
    person: Person,
    listeners: Vec<ChangeListener>,
}

impl PersonViewModel {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            listeners: Vec::new(),
        }
    }

    pub fn on_property_changed(&mut self, listener: impl FnMut(&'static str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn first_name(&self) -> &str {
        &self.person.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.person.last_name
    }

    pub fn set_first_name(&mut self, value: &str) {
        if self.person.first_name == value {
            return;
        }
        self.person.first_name = value.to_string();
        self.notify("FirstName");
        self.notify("FullName");
    }

    pub fn set_last_name(&mut self, value: &str) {
        if self.person.last_name == value {
            return;
        }
        self.person.last_name = value.to_string();
        self.notify("LastName");
        self.notify("FullName");
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.person.first_name, self.person.last_name)
            .trim()
            .to_string()
    }

    /// Splits on whitespace into first and last name. `None` clears both.
    pub fn set_full_name(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.set_first_name("");
            self.set_last_name("");
            return;
        };
        let mut parts = value.split_whitespace();
        if let Some(first) = parts.next() {
            self.set_first_name(first);
        }
        if let Some(last) = parts.next() {
            self.set_last_name(last);
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    fn notify(&mut self, property: &'static str) {
        for listener in self.listeners.iter_mut() {
            listener(property);
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let mut vm = PersonViewModel::default();
    let log = Rc::clone(&changes);
    vm.on_property_changed(move |property| log.borrow_mut().push(property));

    vm.set_full_name(Some("John Smith"));
    writeln!(out, "Full name: {}", vm.full_name())?;
    vm.set_first_name("John");
    vm.set_last_name("Doe");
    writeln!(out, "Full name: {}", vm.full_name())?;
    writeln!(out, "Changed: {}", changes.borrow().join(", "))?;
    Ok(())
}
