//! Visitor
//!
//! - `intrusive`: the new operation is added to every expression type.
//! - `transformer`: one reduction walks the tree and a transformer decides
//!   what each node becomes, so new operations don't touch the nodes.

pub mod intrusive;
pub mod transformer;
