//! State
//!
//! - `classic`: each state is an object that swaps itself out on the switch.
//! - `table`: states and triggers are plain enums and a transition table
//!   decides what happens.

pub mod classic;
pub mod table;
