//! Decorator: shapes
//!
//! Color and transparency added at runtime through boxed decorators, or at
//! compile time through generic ones.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::io::Write;

pub trait Shape {
    fn as_string(&self) -> String;
}

#[derive(Debug, Default, Clone)]
pub struct Circle {
    radius: f32,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn resize(&mut self, factor: f32) {
        self.radius *= factor;
    }
}

impl Shape for Circle {
    fn as_string(&self) -> String {
        format!("A circle of radius {}", self.radius)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Square {
    side: f32,
}

impl Square {
    pub fn new(side: f32) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn as_string(&self) -> String {
        format!("A square with side {}", self.side)
    }
}

fn transparency_suffix(transparency: f32) -> String {
    format!(" has {} transparency", transparency * 100.0)
}

// Dynamic decorators: wrap any boxed shape at runtime.

pub struct ColoredShape {
    shape: Box<dyn Shape>,
    color: String,
}

impl ColoredShape {
    pub fn new(shape: Box<dyn Shape>, color: &str) -> Result<Self> {
        require_non_blank("color", color)?;
        Ok(Self {
            shape,
            color: color.to_string(),
        })
    }
}

impl Shape for ColoredShape {
    fn as_string(&self) -> String {
        format!("{} has the color {}", self.shape.as_string(), self.color)
    }
}

pub struct TransparentShape {
    shape: Box<dyn Shape>,
    transparency: f32,
}

impl TransparentShape {
    pub fn new(shape: Box<dyn Shape>, transparency: f32) -> Self {
        Self {
            shape,
            transparency,
        }
    }
}

impl Shape for TransparentShape {
    fn as_string(&self) -> String {
        self.shape.as_string() + &transparency_suffix(self.transparency)
    }
}

// Static decorators: the decorated type is a type parameter and gets built
// by its `Default`.

pub struct StaticColoredShape<T: Shape + Default> {
    shape: T,
    color: String,
}

impl<T: Shape + Default> StaticColoredShape<T> {
    pub fn new(color: &str) -> Result<Self> {
        require_non_blank("color", color)?;
        Ok(Self {
            shape: T::default(),
            color: color.to_string(),
        })
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.shape
    }
}

impl<T: Shape + Default> Default for StaticColoredShape<T> {
    fn default() -> Self {
        Self {
            shape: T::default(),
            color: "black".to_string(),
        }
    }
}

impl<T: Shape + Default> Shape for StaticColoredShape<T> {
    fn as_string(&self) -> String {
        format!("{} has the color {}", self.shape.as_string(), self.color)
    }
}

pub struct StaticTransparentShape<T: Shape + Default> {
    shape: T,
    transparency: f32,
}

impl<T: Shape + Default> StaticTransparentShape<T> {
    pub fn new(transparency: f32) -> Self {
        Self {
            shape: T::default(),
            transparency,
        }
    }
}

impl<T: Shape + Default> Shape for StaticTransparentShape<T> {
    fn as_string(&self) -> String {
        self.shape.as_string() + &transparency_suffix(self.transparency)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let square = Square::new(1.23);
    writeln!(out, "{}", square.as_string())?;

    let red_square = ColoredShape::new(Box::new(square), "red")?;
    writeln!(out, "{}", red_square.as_string())?;

    let red_half_transparent_square = TransparentShape::new(Box::new(red_square), 0.5);
    writeln!(out, "{}", red_half_transparent_square.as_string())?;

    let mut blue_circle = StaticColoredShape::<Circle>::new("blue")?;
    writeln!(out, "{}", blue_circle.as_string())?;
    // The static decorator still exposes the concrete shape underneath.
    *blue_circle.inner_mut() = Circle::new(2.0);
    blue_circle.inner_mut().resize(1.5);
    writeln!(out, "{}", blue_circle.as_string())?;

    let black_half_square = StaticTransparentShape::<StaticColoredShape<Square>>::new(0.4);
    writeln!(out, "{}", black_half_square.as_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorators_compose() {
        let shape = TransparentShape::new(
            Box::new(ColoredShape::new(Box::new(Circle::new(2.0)), "green").unwrap()),
            0.25,
        );
        assert_eq!(
            shape.as_string(),
            "A circle of radius 2 has the color green has 25 transparency"
        );
    }

    #[test]
    fn test_same_decorator_twice() {
        let twice = ColoredShape::new(
            Box::new(ColoredShape::new(Box::new(Square::new(1.0)), "red").unwrap()),
            "blue",
        )
        .unwrap();
        assert_eq!(
            twice.as_string(),
            "A square with side 1 has the color red has the color blue"
        );
    }

    #[test]
    fn test_blank_color_rejected() {
        assert!(ColoredShape::new(Box::new(Square::new(1.0)), "").is_err());
        assert!(StaticColoredShape::<Square>::new(" ").is_err());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A square with side 1.23\n\
             A square with side 1.23 has the color red\n\
             A square with side 1.23 has the color red has 50 transparency\n\
             A circle of radius 0 has the color blue\n\
             A circle of radius 3 has the color blue\n\
             A square with side 0 has the color black has 40 transparency\n"
        );
    }
}
