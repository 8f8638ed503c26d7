//! Prototype: deep copies through an explicit trait.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

/// Explicit deep copy. Implementors fill in `copy_to`; `deep_copy` comes
/// for free.
pub trait DeepCopy: Default {
    fn copy_to(&self, target: &mut Self);

    fn deep_copy(&self) -> Self {
        let mut target = Self::default();
        self.copy_to(&mut target);
        target
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Address {
    pub street_name: String,
    pub house_number: u32,
}

impl DeepCopy for Address {
    fn copy_to(&self, target: &mut Self) {
        target.street_name = self.street_name.clone();
        target.house_number = self.house_number;
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StreetName: {}, HouseNumber: {}", self.street_name, self.house_number)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Person {
    pub names: Vec<String>,
    pub address: Address,
}

impl DeepCopy for Person {
    fn copy_to(&self, target: &mut Self) {
        target.names = self.names.clone();
        self.address.copy_to(&mut target.address);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Names: {}, Address: {}", self.names.join(","), self.address)
    }
}

/// An employee is a person plus a salary; copying reuses `Person::copy_to`.
#[derive(Debug, Default, PartialEq)]
pub struct Employee {
    pub person: Person,
    pub salary: u32,
}

impl DeepCopy for Employee {
    fn copy_to(&self, target: &mut Self) {
        self.person.copy_to(&mut target.person);
        target.salary = self.salary;
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Salary: {}", self.person, self.salary)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let john = Employee {
        person: Person {
            names: vec!["John".to_string(), "Doe".to_string()],
            address: Address {
                street_name: "London Road".to_string(),
                house_number: 123,
            },
        },
        salary: 321000,
    };

    let mut copy = john.deep_copy();
    copy.person.names[1] = "Smith".to_string();
    copy.person.address.house_number += 1;
    copy.salary = 123000;

    writeln!(out, "{john}")?;
    writeln!(out, "{copy}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_is_equal_then_independent() {
        let original = Employee {
            person: Person {
                names: vec!["A".to_string()],
                address: Address {
                    street_name: "Main".to_string(),
                    house_number: 1,
                },
            },
            salary: 10,
        };
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);

        copy.person.address.street_name.push_str(" Street");
        assert_eq!(original.person.address.street_name, "Main");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Names: John,Doe, Address: StreetName: London Road, HouseNumber: 123, Salary: 321000\n\
             Names: John,Smith, Address: StreetName: London Road, HouseNumber: 124, Salary: 123000\n"
        );
    }
}
