//! Catalog Plant Taxonomy
//!
//! A base [`Plant`] and three specializations sharing one contract.
//!
//! # Overview
//!
//! - **Plant**: name, color and an [`catalog_core::IdNumber`]
//! - **Tree**: adds a non-negative height
//! - **Flower**: adds a smell
//! - **Rose**: flower shape plus a thorn flag
//! - **Specimen**: sum type over all four, with kind-aware equality
//!
//! Guarded setters reject invalid input silently and keep the previous
//! value. Equality covers the curated field set of each type and never the
//! identifier; ordering is by name only. Every type renders in the base
//! `Plant: Name=…, Color=…` format.
//!
//! # Example
//!
//! ```rust
//! use catalog_plant::prelude::*;
//!
//! let mut plants = vec![
//!     Plant::new("Rose", "Red", 1),
//!     Plant::new("Apple", "Green", 2),
//! ];
//! sort_by_name(&mut plants);
//! assert_eq!(plants[0].name(), "Apple");
//!
//! let mut tree = Tree::new("Oak", "Brown", 10.5, 3);
//! assert!(!tree.set_height(-1.0));
//! assert_eq!(tree.height(), 10.5);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod flower;
pub mod plant;
pub mod rose;
pub mod specimen;
pub mod tree;

// Re-exports
pub use flower::{Flower, DEFAULT_SMELL};
pub use plant::{sort_by_name, Plant, PlantLike};
pub use rose::Rose;
pub use specimen::{KindError, Specimen, SpecimenKind};
pub use tree::Tree;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for plant operations
    pub use crate::{
        sort_by_name, Flower, Plant, PlantLike, Rose, Specimen, SpecimenKind, Tree,
    };
    pub use catalog_core::Entity;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
