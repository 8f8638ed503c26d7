//! Chain of Responsibility
//!
//! Two takes on modifying a creature's stats:
//! - `method_chain`: an explicit list of handlers applied in order, any of
//!   which may stop the rest.
//! - `broker_chain`: a central game object relays stat queries through every
//!   active modifier (chain + mediator + command/query separation).

pub mod broker_chain;
pub mod method_chain;
