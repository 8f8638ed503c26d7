//! Facade
//!
//! One simple entry point over subsystems whose full surface the client
//! never needs to see.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

#[derive(Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn operation1(&self) -> &'static str {
        "Subsystem1: Ready!"
    }

    pub fn operation_n(&self) -> &'static str {
        "Subsystem1: Go!"
    }

    pub fn operation_alpha(&self) -> &'static str {
        "Subsystem1: Useless operation!"
    }
}

#[derive(Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn operation1(&self) -> &'static str {
        "Subsystem2: Get ready!"
    }

    pub fn operation_z(&self) -> &'static str {
        "Subsystem2: Fire!"
    }
}

pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    pub fn new(subsystem1: Subsystem1, subsystem2: Subsystem2) -> Self {
        Self {
            subsystem1,
            subsystem2,
        }
    }

    pub fn operation(&self) -> String {
        [
            "Facade initializes subsystems:",
            self.subsystem1.operation1(),
            self.subsystem2.operation1(),
            "Facade orders subsystems to perform the action:",
            self.subsystem1.operation_n(),
            self.subsystem2.operation_z(),
        ]
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let facade = Facade::new(Subsystem1, Subsystem2);
    write!(out, "{}", facade.operation())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_orders_subsystems() {
        let facade = Facade::new(Subsystem1::default(), Subsystem2::default());
        assert_eq!(
            facade.operation(),
            "Facade initializes subsystems:\nSubsystem1: Ready!\nSubsystem2: Get ready!\n\
             Facade orders subsystems to perform the action:\nSubsystem1: Go!\nSubsystem2: Fire!\n"
        );
        assert!(!facade.operation().contains(Subsystem1.operation_alpha()));
    }
}
