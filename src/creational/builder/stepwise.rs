//! Builder: stepwise
//!
//! Each step returns a different builder type, so steps can't be skipped
//! or reordered.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use std::fmt;
use std::io::Write;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    Sedan,
    Crossover,
}

impl CarType {
    pub fn wheel_sizes(self) -> RangeInclusive<u32> {
        match self {
            CarType::Sedan => 15..=17,
            CarType::Crossover => 17..=20,
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub car_type: CarType,
    pub wheel_size: u32,
}

// Builder steps. Each one only exposes the next call.
pub struct SpecifyCarType;
pub struct SpecifyWheelSize(CarType);
pub struct BuildCar(Car);

pub struct CarBuilder<Step> {
    step: Step,
}

impl CarBuilder<SpecifyCarType> {
    pub fn create() -> Self {
        CarBuilder {
            step: SpecifyCarType,
        }
    }

    pub fn of_type(self, car_type: CarType) -> CarBuilder<SpecifyWheelSize> {
        CarBuilder {
            step: SpecifyWheelSize(car_type),
        }
    }
}

impl CarBuilder<SpecifyWheelSize> {
    pub fn with_wheels(self, size: u32) -> Result<CarBuilder<BuildCar>> {
        let car_type = self.step.0;
        if !car_type.wheel_sizes().contains(&size) {
            return Err(PatternError::InvalidWheelSize {
                car_type: car_type.to_string(),
                size,
            });
        }
        Ok(CarBuilder {
            step: BuildCar(Car {
                car_type,
                wheel_size: size,
            }),
        })
    }
}

impl CarBuilder<BuildCar> {
    pub fn build(self) -> Car {
        self.step.0
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let car = CarBuilder::create()
        .of_type(CarType::Crossover)
        .with_wheels(18)?
        .build();
    writeln!(out, "{car:?}")?;

    // `CarBuilder::create().with_wheels(18)` does not compile: the type has
    // to be chosen first.
    if let Err(e) = CarBuilder::create().of_type(CarType::Sedan).with_wheels(20) {
        writeln!(out, "{e}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_size_bounds() {
        for (car_type, ok, bad) in [
            (CarType::Sedan, [15, 17], [14, 18]),
            (CarType::Crossover, [17, 20], [16, 21]),
        ] {
            for size in ok {
                let car = CarBuilder::create().of_type(car_type).with_wheels(size).unwrap().build();
                assert_eq!(car.wheel_size, size);
            }
            for size in bad {
                let err = CarBuilder::create().of_type(car_type).with_wheels(size);
                assert!(matches!(err, Err(PatternError::InvalidWheelSize { .. })));
            }
        }
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Car { car_type: Crossover, wheel_size: 18 }\nWrong size of wheel for Sedan: 20\n"
        );
    }
}
