//! Factories
//!
//! - `point`: named constructors instead of one ambiguous constructor.
//! - `abstract_factory`: families of related products behind one trait.
//! - `async_factory`: construction that has to await something.
//! - `bulk_replacement`: a factory that remembers what it made.

pub mod abstract_factory;
pub mod async_factory;
pub mod bulk_replacement;
pub mod point;
