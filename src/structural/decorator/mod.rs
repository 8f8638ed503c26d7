//! Decorator
//!
//! - `shapes`: decorators stacked at runtime (boxed) and at compile time
//!   (generic).
//! - `reporting`: a service wrapped with logging without touching it.
//! - `dragon`: composing two behaviours instead of inheriting from both.

pub mod dragon;
pub mod reporting;
pub mod shapes;
