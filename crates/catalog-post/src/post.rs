//! Posts
//!
//! Provides [`Post`], a content post tracking views, comments and reactions.

use crate::counter;
use crate::error::EngagementError;
use catalog_core::{Entity, InputError, LineSource};
use rand::Rng;
use std::fmt::{self, Display, Formatter};
use std::ops::Not;

/// A content post with engagement counters
///
/// # Invariants
/// - every counter is non-negative; negative input clamps to 0 instead of
///   keeping the previous value
/// - every construction path, `Default` and `Clone` included, bumps the
///   process-wide counter in [`crate::counter`] exactly once
///
/// # Example
/// ```
/// use catalog_post::Post;
///
/// let post = Post::new(100, 20, 50);
/// assert_eq!(post.engagement_rate(1000).unwrap(), 17.0);
///
/// let post = !post.with_incremented_views();
/// assert_eq!(post.to_string(), "101, 20, 51");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Post {
    num_views: u32,
    num_comments: u32,
    num_reactions: u32,
}

/// Clamp a signed count into the counter domain
#[inline]
fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl Post {
    /// Upper bound of randomly drawn views
    pub const MAX_RANDOM_VIEWS: u32 = 10_000;

    /// Upper bound of randomly drawn comments
    pub const MAX_RANDOM_COMMENTS: u32 = 1_000;

    /// Upper bound of randomly drawn reactions
    pub const MAX_RANDOM_REACTIONS: u32 = 5_000;

    /// Create new post
    ///
    /// Each counter is clamped independently, as its setter would.
    #[must_use]
    pub fn new(num_views: i64, num_comments: i64, num_reactions: i64) -> Self {
        let total = counter::record_construction();
        tracing::trace!(total, "post constructed");
        Self {
            num_views: clamp_count(num_views),
            num_comments: clamp_count(num_comments),
            num_reactions: clamp_count(num_reactions),
        }
    }

    /// Number of views
    #[inline]
    #[must_use]
    pub fn num_views(&self) -> u32 {
        self.num_views
    }

    /// Number of comments
    #[inline]
    #[must_use]
    pub fn num_comments(&self) -> u32 {
        self.num_comments
    }

    /// Number of reactions
    #[inline]
    #[must_use]
    pub fn num_reactions(&self) -> u32 {
        self.num_reactions
    }

    /// Assign views; negative clamps to 0
    #[inline]
    pub fn set_num_views(&mut self, value: i64) {
        self.num_views = clamp_count(value);
    }

    /// Assign comments; negative clamps to 0
    #[inline]
    pub fn set_num_comments(&mut self, value: i64) {
        self.num_comments = clamp_count(value);
    }

    /// Assign reactions; negative clamps to 0
    #[inline]
    pub fn set_num_reactions(&mut self, value: i64) {
        self.num_reactions = clamp_count(value);
    }

    /// Sum of all counters
    #[inline]
    #[must_use]
    pub fn total_interactions(&self) -> u64 {
        u64::from(self.num_views) + u64::from(self.num_comments) + u64::from(self.num_reactions)
    }

    /// Interactions per audience member, as a percentage
    ///
    /// `(views + comments + reactions) / total_audience * 100`
    ///
    /// # Errors
    /// Returns [`EngagementError::EmptyAudience`] when `total_audience` is 0
    pub fn engagement_rate(&self, total_audience: u64) -> Result<f64, EngagementError> {
        if total_audience == 0 {
            return Err(EngagementError::EmptyAudience);
        }
        Ok(self.total_interactions() as f64 / total_audience as f64 * 100.0)
    }

    /// Free-standing form of [`Post::engagement_rate`]
    ///
    /// # Errors
    /// Returns [`EngagementError::EmptyAudience`] when `total_audience` is 0
    #[inline]
    pub fn engagement_rate_of(post: &Self, total_audience: u64) -> Result<f64, EngagementError> {
        post.engagement_rate(total_audience)
    }

    /// The same post, advanced by one view
    #[inline]
    #[must_use]
    pub fn with_incremented_views(mut self) -> Self {
        self.num_views = self.num_views.saturating_add(1);
        self
    }

    /// The same post, advanced by one reaction
    #[inline]
    #[must_use]
    pub fn with_incremented_reactions(mut self) -> Self {
        self.num_reactions = self.num_reactions.saturating_add(1);
        self
    }

    /// Views in thousands, rounded to one decimal (ties to even)
    #[inline]
    #[must_use]
    pub fn coverage(&self) -> f64 {
        (f64::from(self.num_views) / 100.0).round_ties_even() / 10.0
    }

    /// Whether any counter is nonzero
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.num_views != 0 || self.num_comments != 0 || self.num_reactions != 0
    }
}

impl Default for Post {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Clone for Post {
    fn clone(&self) -> Self {
        Self::new(
            i64::from(self.num_views),
            i64::from(self.num_comments),
            i64::from(self.num_reactions),
        )
    }
}

/// React operator: the same post, advanced by one reaction
impl Not for Post {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.with_incremented_reactions()
    }
}

impl From<&Post> for f64 {
    fn from(post: &Post) -> Self {
        post.coverage()
    }
}

impl From<&Post> for bool {
    fn from(post: &Post) -> Self {
        post.is_active()
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.num_views, self.num_comments, self.num_reactions)
    }
}

impl Entity for Post {
    fn random_init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.num_views = rng.random_range(0..=Self::MAX_RANDOM_VIEWS);
        self.num_comments = rng.random_range(0..=Self::MAX_RANDOM_COMMENTS);
        self.num_reactions = rng.random_range(0..=Self::MAX_RANDOM_REACTIONS);
    }

    fn init<S: LineSource + ?Sized>(&mut self, input: &mut S) -> Result<(), InputError> {
        self.set_num_views(input.read_parsed::<i64>()?.unwrap_or(0));
        self.set_num_comments(input.read_parsed::<i64>()?.unwrap_or(0));
        self.set_num_reactions(input.read_parsed::<i64>()?.unwrap_or(0));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn post_new_and_access() {
        let post = Post::new(100, 20, 50);
        assert_eq!(post.num_views(), 100);
        assert_eq!(post.num_comments(), 20);
        assert_eq!(post.num_reactions(), 50);
    }

    #[test]
    fn post_new_clamps_each_counter() {
        let post = Post::new(-1, 5, -9);
        assert_eq!(post.num_views(), 0);
        assert_eq!(post.num_comments(), 5);
        assert_eq!(post.num_reactions(), 0);
    }

    #[test]
    fn post_negative_setter_clamps_to_zero() {
        let mut post = Post::new(100, 20, 50);
        post.set_num_views(-5);
        post.set_num_comments(-1);
        post.set_num_reactions(i64::MIN);

        assert_eq!(post.num_views(), 0);
        assert_eq!(post.num_comments(), 0);
        assert_eq!(post.num_reactions(), 0);
    }

    #[test]
    fn post_oversized_setter_saturates() {
        let mut post = Post::default();
        post.set_num_views(i64::MAX);
        assert_eq!(post.num_views(), u32::MAX);
    }

    #[test]
    fn post_equality() {
        assert_eq!(Post::new(100, 20, 50), Post::new(100, 20, 50));
        assert_ne!(Post::new(100, 20, 50), Post::new(200, 20, 50));
        assert_ne!(Post::new(100, 20, 50), Post::new(100, 21, 50));
        assert_ne!(Post::new(100, 20, 50), Post::new(100, 20, 51));
    }

    #[test]
    fn post_engagement_rate() {
        let post = Post::new(100, 20, 50);
        let expected = (100.0 + 20.0 + 50.0) / 1000.0 * 100.0;
        assert_eq!(post.engagement_rate(1000).unwrap(), expected);
        assert_eq!(post.engagement_rate(1000).unwrap(), 17.0);
    }

    #[test]
    fn post_engagement_rate_of_matches_method() {
        let post = Post::new(100, 20, 50);
        assert_eq!(Post::engagement_rate_of(&post, 1000), post.engagement_rate(1000));
    }

    #[test]
    fn post_engagement_rate_empty_audience() {
        let post = Post::new(1, 1, 1);
        assert_eq!(post.engagement_rate(0), Err(EngagementError::EmptyAudience));
    }

    #[test]
    fn post_with_incremented_views() {
        let post = Post::new(100, 20, 50).with_incremented_views();
        assert_eq!(post.num_views(), 101);
        assert_eq!(post.num_comments(), 20);
        assert_eq!(post.num_reactions(), 50);
    }

    #[test]
    fn post_not_increments_reactions() {
        let post = !Post::new(100, 20, 50);
        assert_eq!(post.num_views(), 100);
        assert_eq!(post.num_comments(), 20);
        assert_eq!(post.num_reactions(), 51);
    }

    #[test]
    fn post_increment_saturates() {
        let post = Post::new(i64::from(u32::MAX), 0, 0).with_incremented_views();
        assert_eq!(post.num_views(), u32::MAX);
    }

    #[test]
    fn post_coverage() {
        assert_eq!(Post::new(1500, 20, 50).coverage(), 1.5);
        assert_eq!(f64::from(&Post::new(1500, 20, 50)), 1.5);
        assert_eq!(Post::new(1234, 0, 0).coverage(), 1.2);
        assert_eq!(Post::new(0, 0, 0).coverage(), 0.0);
    }

    #[test]
    fn post_coverage_ties_to_even() {
        assert_eq!(Post::new(1250, 0, 0).coverage(), 1.2);
        assert_eq!(Post::new(1350, 0, 0).coverage(), 1.4);
    }

    #[test]
    fn post_is_active() {
        assert!(bool::from(&Post::new(100, 20, 0)));
        assert!(Post::new(0, 0, 1).is_active());
        assert!(!bool::from(&Post::new(0, 0, 0)));
    }

    #[test]
    fn post_clone_is_equal() {
        let original = Post::new(7, 8, 9);
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }

    #[test]
    fn post_random_init_within_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let mut post = Post::default();
            post.random_init(&mut rng);
            assert!(post.num_views() <= Post::MAX_RANDOM_VIEWS);
            assert!(post.num_comments() <= Post::MAX_RANDOM_COMMENTS);
            assert!(post.num_reactions() <= Post::MAX_RANDOM_REACTIONS);
        }
    }

    #[test]
    fn post_init_reads_counters() {
        let mut post = Post::default();
        let mut input = "150\n20\n50\n".as_bytes();
        post.init(&mut input).unwrap();

        assert_eq!(post, Post::new(150, 20, 50));
    }

    #[test]
    fn post_init_negative_and_malformed_clamp() {
        let mut post = Post::new(9, 9, 9);
        let mut input = "-4\nmany\n".as_bytes();
        post.init(&mut input).unwrap();

        assert_eq!(post.num_views(), 0);
        assert_eq!(post.num_comments(), 0);
        assert_eq!(post.num_reactions(), 0);
    }

    #[test]
    fn post_display() {
        assert_eq!(Post::new(100, 20, 50).to_string(), "100, 20, 50");
    }

    #[test]
    fn post_serde_json() {
        let json = serde_json::to_string(&Post::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"num_views":1,"num_comments":2,"num_reactions":3}"#);
    }
}
