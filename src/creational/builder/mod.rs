//! Builder
//!
//! - A builder is a separate component for building an object.
//! - Either give the builder a constructor or hand it out from a static
//!   function on the product.
//! - Returning the builder from every step makes it fluent.
//! - Different facets of one object can be built by different builders
//!   working in tandem (`faceted`).
//! - `stepwise` uses the type system so steps can only be called in order.

pub mod faceted;
pub mod functional;
pub mod html;
pub mod stepwise;
