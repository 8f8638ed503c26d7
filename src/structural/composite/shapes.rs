//! Composite: graphic objects and groups of them, drawn the same way.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

/// A drawing element: either a single shape or a group of elements.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicObject {
    pub name: String,
    pub color: Option<String>,
    pub children: Vec<GraphicObject>,
}

impl Default for GraphicObject {
    fn default() -> Self {
        Self {
            name: "Group".to_string(),
            color: None,
            children: Vec::new(),
        }
    }
}

impl GraphicObject {
    pub fn group(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn shape(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Some(color.to_string()),
            children: Vec::new(),
        }
    }

    pub fn circle(color: &str) -> Self {
        Self::shape("Circle", color)
    }

    pub fn square(color: &str) -> Self {
        Self::shape("Square", color)
    }

    pub fn add(&mut self, child: GraphicObject) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Counts this object and everything below it.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(GraphicObject::count).sum::<usize>()
    }

    fn print(&self, buf: &mut String, depth: usize) {
        buf.push_str(&"*".repeat(depth));
        if let Some(color) = self.color.as_deref().filter(|c| !c.trim().is_empty()) {
            buf.push_str(color);
            buf.push(' ');
        }
        buf.push_str(&self.name);
        buf.push('\n');
        for child in &self.children {
            child.print(buf, depth + 1);
        }
    }
}

impl fmt::Display for GraphicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.print(&mut buf, 0);
        f.write_str(&buf)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut drawing = GraphicObject::group("My Drawing");
    drawing
        .add(GraphicObject::square("Red"))
        .add(GraphicObject::circle("Yellow"));

    let mut group = GraphicObject::default();
    group
        .add(GraphicObject::circle("Blue"))
        .add(GraphicObject::square("Blue"));
    drawing.add(group);

    write!(out, "{drawing}")?;
    Ok(())
}
