//! Catalog Post
//!
//! Engagement-tracked content posts.
//!
//! # Overview
//!
//! - **Post**: view, comment and reaction counters, each clamped to zero
//! - **Engagement rate**: interactions per audience member, as a percentage
//! - **Counter**: process-wide count of constructed posts
//!
//! Where the plant taxonomy keeps the previous value on invalid input, post
//! setters clamp negative input to zero.
//!
//! # Example
//!
//! ```rust
//! use catalog_post::{total_post_count, Post};
//!
//! let before = total_post_count();
//! let post = Post::new(1500, -3, 0);
//! assert!(total_post_count() > before);
//!
//! assert_eq!(post.num_comments(), 0);
//! assert_eq!(post.coverage(), 1.5);
//! assert!(post.is_active());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod counter;
mod error;
mod post;

// Re-exports
pub use counter::total_post_count;
pub use error::EngagementError;
pub use post::Post;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for post operations
    pub use crate::{total_post_count, EngagementError, Post};
    pub use catalog_core::Entity;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
