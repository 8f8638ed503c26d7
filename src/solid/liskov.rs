//! A square that quietly keeps its sides equal breaks code written against
//! rectangles.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

pub trait Shape: fmt::Display {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    fn area(&self) -> u32 {
        self.width() * self.height()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.width, self.height)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

// Setting either side sets both.
impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.side, self.side)
    }
}

/// Code that reasonably assumes width and height are independent.
/// Returns (expected, actual) area.
pub fn stretch(shape: &mut dyn Shape, height: u32) -> (u32, u32) {
    let width = shape.width();
    shape.set_height(height);
    (width * height, shape.area())
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let rc = Rectangle::new(2, 3);
    writeln!(out, "{rc} has area {}", rc.area())?;

    let mut sq = Square::default();
    sq.set_width(4);
    writeln!(out, "{sq} has area {}", sq.area())?;

    let shapes: [Box<dyn Shape>; 2] = [Box::new(rc), Box::new(sq)];
    for mut shape in shapes {
        let (expected, actual) = stretch(shape.as_mut(), 10);
        writeln!(out, "Stretched to height 10: expected area {expected}, got {actual}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_substitutes_cleanly() {
        let mut rc = Rectangle::new(5, 1);
        let (expected, actual) = stretch(&mut rc, 2);
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_square_breaks_expectations() {
        let mut sq = Square::new(3);
        assert_eq!(stretch(&mut sq, 5), (15, 25));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Width: 2, Height: 3 has area 6\nWidth: 4, Height: 4 has area 16\n\
             Stretched to height 10: expected area 20, got 20\n\
             Stretched to height 10: expected area 40, got 100\n"
        );
    }
}
