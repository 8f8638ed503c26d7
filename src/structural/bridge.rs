//! Bridge
//!
//! A shape doesn't decide how it gets drawn. It holds a `Renderer` and
//! delegates, so shapes and renderers vary independently.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub trait Renderer {
    fn render_circle(&self, radius: f32) -> String;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f32) -> String {
        format!("Drawing a circle of radius {radius}")
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f32) -> String {
        format!("Drawing pixels for circle of radius {radius}")
    }
}

pub trait Shape {
    fn draw(&self) -> String;
    fn resize(&mut self, factor: f32);
}

pub struct Circle<'r> {
    renderer: &'r dyn Renderer,
    radius: f32,
}

impl<'r> Circle<'r> {
    pub fn new(renderer: &'r dyn Renderer, radius: f32) -> Self {
        Self { renderer, radius }
    }
}

impl Shape for Circle<'_> {
    fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    fn resize(&mut self, factor: f32) {
        self.radius *= factor;
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let renderers: [&dyn Renderer; 2] = [&VectorRenderer, &RasterRenderer];
    for renderer in renderers {
        let mut circle = Circle::new(renderer, 5.0);
        writeln!(out, "{}", circle.draw())?;
        circle.resize(2.0);
        writeln!(out, "{}", circle.draw())?;
    }
    Ok(())
}
