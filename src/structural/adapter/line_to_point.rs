//! Adapter: vector shapes to points
//!
//! A renderer only draws points, so every line is adapted into the points
//! it covers. The caching adapter generates each line's points once.

use crate::config::PatternsConfig;
use crate::error::Result;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}]-[{},{}]",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// The interface we have: vector shapes made of lines.
#[derive(Debug, Clone)]
pub struct VectorRectangle {
    lines: Vec<Line>,
}

impl VectorRectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        let p = Point::new;
        Self {
            lines: vec![
                Line::new(p(x, y), p(x + width, y)),
                Line::new(p(x + width, y), p(x + width, y + height)),
                Line::new(p(x, y), p(x, y + height)),
                Line::new(p(x, y + height), p(x + width, y + height)),
            ],
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Points along a horizontal or vertical line. Diagonals yield nothing.
pub fn points_on(line: &Line) -> Vec<Point> {
    let left = line.start.x.min(line.end.x);
    let right = line.start.x.max(line.end.x);
    let top = line.start.y.min(line.end.y);
    let bottom = line.start.y.max(line.end.y);

    if left == right {
        (top..=bottom).map(|y| Point::new(left, y)).collect()
    } else if top == bottom {
        (left..=right).map(|x| Point::new(x, top)).collect()
    } else {
        Vec::new()
    }
}

/// Something that can turn a line into drawable points.
pub trait LineAdapter {
    fn adapt(&mut self, line: &Line) -> Rc<[Point]>;
    fn log(&self) -> &[String];
}

/// Regenerates the points every time it is asked.
#[derive(Default)]
pub struct LineToPointAdapter {
    count: usize,
    log: Vec<String>,
}

impl LineAdapter for LineToPointAdapter {
    fn adapt(&mut self, line: &Line) -> Rc<[Point]> {
        self.count += 1;
        self.log
            .push(format!("{}: Generating points for line {line} (no caching)", self.count));
        points_on(line).into()
    }

    fn log(&self) -> &[String] {
        &self.log
    }
}

/// Generates points once per distinct line and hands out the cached copy
/// afterwards.
#[derive(Default)]
pub struct CachingLineToPointAdapter {
    cache: FxHashMap<Line, Rc<[Point]>>,
    count: usize,
    log: Vec<String>,
}

impl CachingLineToPointAdapter {
    pub fn cached_lines(&self) -> usize {
        self.cache.len()
    }
}

impl LineAdapter for CachingLineToPointAdapter {
    fn adapt(&mut self, line: &Line) -> Rc<[Point]> {
        if let Some(points) = self.cache.get(line) {
            tracing::trace!("Cache hit for line {line}");
            return Rc::clone(points);
        }
        self.count += 1;
        self.log
            .push(format!("{}: Generating points for line {line} (with caching)", self.count));
        let points: Rc<[Point]> = points_on(line).into();
        self.cache.insert(*line, Rc::clone(&points));
        points
    }

    fn log(&self) -> &[String] {
        &self.log
    }
}

/// Draws every shape through the adapter and returns how many points were
/// drawn.
pub fn draw(shapes: &[VectorRectangle], adapter: &mut dyn LineAdapter) -> usize {
    shapes
        .iter()
        .flat_map(VectorRectangle::lines)
        .map(|line| adapter.adapt(line).len())
        .sum()
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let shapes = [
        VectorRectangle::new(1, 1, 10, 10),
        VectorRectangle::new(3, 3, 6, 6),
    ];

    let adapters: [(&str, Box<dyn LineAdapter>); 2] = [
        ("No caching", Box::new(LineToPointAdapter::default())),
        ("With caching", Box::new(CachingLineToPointAdapter::default())),
    ];
    for (title, mut adapter) in adapters {
        writeln!(out, "=== {title} ===")?;
        let first = draw(&shapes, adapter.as_mut());
        let second = draw(&shapes, adapter.as_mut());
        for line in adapter.log() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "Drew {first} + {second} points")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_on_lines() {
        let horizontal = Line::new(Point::new(3, 1), Point::new(1, 1));
        assert_eq!(
            points_on(&horizontal),
            vec![Point::new(1, 1), Point::new(2, 1), Point::new(3, 1)]
        );
        let vertical = Line::new(Point::new(0, 0), Point::new(0, 2));
        assert_eq!(points_on(&vertical).len(), 3);
        let diagonal = Line::new(Point::new(0, 0), Point::new(2, 2));
        assert!(points_on(&diagonal).is_empty());
    }

    #[test]
    fn test_without_cache_regenerates() {
        let shapes = [VectorRectangle::new(1, 1, 10, 10)];
        let mut adapter = LineToPointAdapter::default();
        assert_eq!(draw(&shapes, &mut adapter), 44);
        assert_eq!(draw(&shapes, &mut adapter), 44);
        assert_eq!(adapter.log().len(), 8);
    }

    #[test]
    fn test_with_cache_reuses_points() {
        let shapes = [
            VectorRectangle::new(1, 1, 10, 10),
            VectorRectangle::new(3, 3, 6, 6),
        ];
        let mut adapter = CachingLineToPointAdapter::default();
        assert_eq!(draw(&shapes, &mut adapter), 72);
        assert_eq!(draw(&shapes, &mut adapter), 72);
        assert_eq!(adapter.log().len(), 8);
        assert_eq!(adapter.cached_lines(), 8);
        assert_eq!(
            adapter.log()[0],
            "1: Generating points for line [1,1]-[11,1] (with caching)"
        );
    }

    #[test]
    fn test_cache_hands_out_shared_points() {
        let line = Line::new(Point::new(0, 0), Point::new(5, 0));
        let mut adapter = CachingLineToPointAdapter::default();
        let a = adapter.adapt(&line);
        let b = adapter.adapt(&line);
        assert!(Rc::ptr_eq(&a, &b));
    }
}
