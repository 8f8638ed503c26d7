//! Design Patterns - Runnable Examples
//!
//! Small, self-contained demonstrations of the classic creational,
//! structural and behavioral patterns plus the SOLID principles. Demos share
//! nothing but the output sink they write to.
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin patterns -- run <demo_name>
//! ```
//!
//! Or list all demos:
//! ```bash
//! cargo run --bin patterns -- list
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod logging;
pub mod solid;
pub mod structural;

pub use catalog::{Category, Demo};
pub use config::PatternsConfig;
pub use error::{PatternError, Result};
