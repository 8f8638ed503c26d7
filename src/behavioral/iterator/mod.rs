//! Iterator
//!
//! - `stats`: array-backed properties exposed as an iterable collection.
//! - `tree`: in-order traversal of a binary tree, once with an explicit
//!   cursor walking parent back-references and once recursively.

pub mod stats;
pub mod tree;
