//! Flyweight
//!
//! Storing shared data once and referring to it, instead of copying it
//! into every object.

pub mod text;
pub mod users;
