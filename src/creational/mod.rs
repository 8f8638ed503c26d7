//! Creational patterns: how objects come into being.

pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
