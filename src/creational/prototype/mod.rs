//! Prototype
//!
//! Making a new object by copying an existing one, and the ways a copy can
//! go wrong when it only copies references.

pub mod deep_copy;
pub mod serialization;
pub mod shallow_clone;
