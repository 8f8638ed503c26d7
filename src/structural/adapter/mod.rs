//! Adapter
//!
//! - `line_to_point`: lines adapted into the points a renderer can draw,
//!   with and without caching the generated points.
//! - `command_buttons`: every command wrapped into a named toolbar button.

pub mod command_buttons;
pub mod line_to_point;
