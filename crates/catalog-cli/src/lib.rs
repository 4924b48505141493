//! Catalog CLI
//!
//! Console driver for the catalogue: random generation, interactive entry
//! and post metrics.
//!
//! # Example
//!
//! ```text
//! catalog random --kind rose --count 3 --seed 7 --sorted
//! catalog enter --kind tree
//! catalog stats --views 100 --comments 20 --reactions 50 --audience 1000
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod kind;
pub mod logging;
pub mod prompt;

pub use config::{CatalogConfig, ConfigError};
pub use kind::EntityKind;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
