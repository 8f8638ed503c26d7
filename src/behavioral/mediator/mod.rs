//! Mediator
//!
//! - `chat_room`: participants never talk to each other directly; the room
//!   relays every message.
//! - `request`: a typed request/response mediator that routes each request
//!   type to its registered async handler.

pub mod chat_room;
pub mod request;
