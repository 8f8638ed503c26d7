//! Composite
//!
//! Single objects and groups of objects treated the same way.

pub mod neurons;
pub mod shapes;
