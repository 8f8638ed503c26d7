//! Observer
//!
//! - `event`: a callback list on the subject, the closest thing to a
//!   language-level event.
//! - `observable`: observer/observable traits where a subscription is a
//!   value that unsubscribes when dropped.
//! - `collection`: a list that reports its own changes.
//! - `weak`: strong subscriptions keep listeners alive; weak ones don't.

pub mod collection;
pub mod event;
pub mod observable;
pub mod weak;
