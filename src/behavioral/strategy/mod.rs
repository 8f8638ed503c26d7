//! Strategy
//!
//! - `list`: list rendering swapped at runtime or fixed at compile time.
//! - `comparison`: equality, ordering and sorting strategies for a `Person`.

pub mod comparison;
pub mod list;
