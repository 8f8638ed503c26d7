//! Factory: named constructors for points.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    Cartesian,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// The constructor the factory methods replace: what `a` and `b` mean
    /// depends on `system`.
    pub fn new(a: f64, b: f64, system: CoordinateSystem) -> Self {
        match system {
            CoordinateSystem::Cartesian => Self { x: a, y: b },
            CoordinateSystem::Polar => Self {
                x: a * b.cos(),
                y: a * b.sin(),
            },
        }
    }

    pub fn new_cartesian(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn new_polar(rho: f64, theta: f64) -> Self {
        Self {
            x: rho * theta.cos(),
            y: rho * theta.sin(),
        }
    }

    pub fn origin() -> Self {
        Self::ORIGIN
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {:.2}, y: {:.2}", self.x, self.y)
    }
}

/// Separate factory type; new coordinate systems go here, not on `Point`.
pub struct PointFactory;

impl PointFactory {
    pub fn new_cartesian(x: f64, y: f64) -> Point {
        Point::new_cartesian(x, y)
    }

    pub fn new_polar(rho: f64, theta: f64) -> Point {
        Point::new_polar(rho, theta)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let p1 = Point::new(2.0, 3.0, CoordinateSystem::Cartesian);
    writeln!(out, "Constructor, cartesian: {p1}")?;
    writeln!(out, "Origin: {}", Point::origin())?;
    writeln!(out, "Factory method, polar: {}", Point::new_polar(1.0, FRAC_PI_2))?;
    writeln!(out, "PointFactory, cartesian: {}", PointFactory::new_cartesian(2.0, 3.0))?;
    writeln!(out, "PointFactory, polar: {}", PointFactory::new_polar(2.0, 0.0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_constructor_matches_factories() {
        assert_eq!(
            Point::new(2.0, 3.0, CoordinateSystem::Cartesian),
            Point::new_cartesian(2.0, 3.0)
        );
        let polar = Point::new(2.0, 3.0, CoordinateSystem::Polar);
        let factory = PointFactory::new_polar(2.0, 3.0);
        assert!(close(polar.x(), factory.x()) && close(polar.y(), factory.y()));
    }

    #[test]
    fn test_polar_right_angle() {
        let p = Point::new_polar(1.0, FRAC_PI_2);
        assert!(close(p.x(), 0.0));
        assert!(close(p.y(), 1.0));
    }

    #[test]
    fn test_origin() {
        assert_eq!(Point::origin(), Point::new_cartesian(0.0, 0.0));
        assert_eq!(Point::origin().to_string(), "x: 0.00, y: 0.00");
    }
}
