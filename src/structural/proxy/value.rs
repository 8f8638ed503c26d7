//! Value proxy: a percentage that is more than a bare float.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::ops::{Add, Mul};

/// A percentage, stored as percentage points so `2% + 3%` is exactly `5%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f32);

impl Percentage {
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

pub trait Percent {
    fn percent(self) -> Percentage;
}

impl Percent for i32 {
    fn percent(self) -> Percentage {
        Percentage(self as f32)
    }
}

impl Percent for f32 {
    fn percent(self) -> Percentage {
        Percentage(self)
    }
}

impl Mul<Percentage> for f32 {
    type Output = f32;

    fn mul(self, p: Percentage) -> f32 {
        self * p.0 / 100.0
    }
}

impl Add for Percentage {
    type Output = Percentage;

    fn add(self, other: Percentage) -> Percentage {
        Percentage(self.0 + other.0)
    }
}

impl From<i32> for Percentage {
    fn from(value: i32) -> Self {
        value.percent()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    writeln!(out, "{}", 10f32 * 5_i32.percent())?;
    writeln!(out, "{}", 2_i32.percent() + 3_i32.percent())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(200f32 * 50_i32.percent(), 100.0);
        assert_eq!(2_i32.percent() + 3_i32.percent(), Percentage::from(5_i32));
        assert_eq!(12.5_f32.percent().to_string(), "12.5%");
        assert_eq!(25_i32.percent().fraction(), 0.25);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5\n5%\n");
    }
}
