//! Proxy
//!
//! Something that stands in for another object with the same interface and
//! adds one concern: access control, change tracking, logging, stronger
//! typing, aggregate views or notifications.

pub mod logging;
pub mod masonry;
pub mod property;
pub mod protection;
pub mod value;
pub mod view_model;
