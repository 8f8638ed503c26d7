//! Protection proxy: access checked before delegating.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub const MIN_DRIVING_AGE: u32 = 16;

pub trait Car {
    fn drive(&self) -> String;
}

#[derive(Debug, Default)]
pub struct RealCar;

impl Car for RealCar {
    fn drive(&self) -> String {
        "Car being driven".to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Driver {
    pub age: u32,
}

impl Driver {
    pub fn new(age: u32) -> Self {
        Self { age }
    }
}

/// Same interface as the car; only lets old enough drivers through.
pub struct CarProxy {
    car: RealCar,
    driver: Driver,
}

impl CarProxy {
    pub fn new(driver: Driver) -> Self {
        Self {
            car: RealCar,
            driver,
        }
    }
}

impl Car for CarProxy {
    fn drive(&self) -> String {
        if self.driver.age >= MIN_DRIVING_AGE {
            self.car.drive()
        } else {
            tracing::warn!("Refused a {}-year-old driver", self.driver.age);
            "Driver too young".to_string()
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let cars: [Box<dyn Car>; 2] = [
        Box::new(CarProxy::new(Driver::new(12))),
        Box::new(CarProxy::new(Driver::new(29))),
    ];
    for car in &cars {
        writeln!(out, "{}", car.drive())?;
    }
    Ok(())
}
