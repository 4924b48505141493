//! Catalog Core
//!
//! Shared building blocks for the catalogue entities.
//!
//! # Core Concepts
//!
//! - [`IdNumber`]: Non-negative numeric identifier with a guarded setter
//! - [`Entity`]: Capability set every catalogue entity provides
//! - [`LineSource`]: Line-oriented input collaborator used by interactive initialization
//! - [`pools`]: Non-empty value pools backing random initialization
//!
//! # Example
//!
//! ```rust
//! use catalog_core::{IdNumber, LineSource};
//!
//! let mut id = IdNumber::new(10);
//! assert!(!id.set_number(-1));
//! assert_eq!(id.number(), 10);
//! assert_eq!(id.to_string(), "IdNumber: 10");
//!
//! let mut input = "42\n".as_bytes();
//! assert_eq!(input.read_parsed::<i64>().unwrap(), Some(42));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod entity;
mod error;
mod id;
mod input;
pub mod pools;

// Re-exports
pub use entity::Entity;
pub use error::InputError;
pub use id::IdNumber;
pub use input::LineSource;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with catalogue entities
    pub use crate::{Entity, IdNumber, InputError, LineSource};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
