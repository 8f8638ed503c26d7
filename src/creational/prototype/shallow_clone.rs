//! Prototype: shallow copies
//!
//! Cloning an `Rc` shares the data; cloning owned data copies it.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street_name: String,
    pub house_number: u32,
}

impl Address {
    pub fn new(street_name: &str, house_number: u32) -> Self {
        Self {
            street_name: street_name.to_string(),
            house_number,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StreetName: {}, HouseNumber: {}", self.street_name, self.house_number)
    }
}

/// `Clone` here copies the handles, not the data: both people end up
/// pointing at the same names and address.
#[derive(Debug, Clone)]
pub struct SharedPerson {
    pub names: Rc<RefCell<Vec<String>>>,
    pub address: Rc<RefCell<Address>>,
}

impl SharedPerson {
    pub fn new(names: &[&str], address: Address) -> Self {
        Self {
            names: Rc::new(RefCell::new(names.iter().map(|n| n.to_string()).collect())),
            address: Rc::new(RefCell::new(address)),
        }
    }
}

impl fmt::Display for SharedPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Names: {}, Address: {}", self.names.borrow().join(","), self.address.borrow())
    }
}

/// Owns its data, so the derived `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub names: Vec<String>,
    pub address: Address,
}

impl Person {
    pub fn new(names: &[&str], address: Address) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            address,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Names: {}, Address: {}", self.names.join(","), self.address)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    writeln!(out, "Shared handles:")?;
    let john = SharedPerson::new(&["Miro", "Ilyovski"], Address::new("West Minster Strasse", 1234));
    let jane = john.clone();
    jane.address.borrow_mut().house_number = 321;
    jane.names.borrow_mut()[0] = "Jane".to_string();
    writeln!(out, "{john}")?;
    writeln!(out, "{jane}")?;

    writeln!(out, "Owned data:")?;
    let john = Person::new(&["Miro", "Ilyovski"], Address::new("West Minster Strasse", 1234));
    let mut jane = john.clone();
    jane.address.house_number = 321;
    jane.names[0] = "Jane".to_string();
    writeln!(out, "{john}")?;
    writeln!(out, "{jane}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_clone_aliases() {
        let john = SharedPerson::new(&["John"], Address::new("London Road", 1));
        let jane = john.clone();
        jane.address.borrow_mut().house_number = 2;
        assert_eq!(john.address.borrow().house_number, 2);
        assert!(Rc::ptr_eq(&john.names, &jane.names));
    }

    #[test]
    fn test_owned_clone_is_independent() {
        let john = Person::new(&["John"], Address::new("London Road", 1));
        let mut jane = john.clone();
        jane.address.house_number = 2;
        jane.names.push("Doe".to_string());
        assert_eq!(john.address.house_number, 1);
        assert_eq!(john.names, vec!["John"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "Names: Jane,Ilyovski, Address: StreetName: West Minster Strasse, HouseNumber: 321");
        assert_eq!(lines[1], lines[2]);
        assert_eq!(lines[4], "Names: Miro,Ilyovski, Address: StreetName: West Minster Strasse, HouseNumber: 1234");
    }
}
