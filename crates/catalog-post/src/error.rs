//! Error types for post metrics

/// Errors computing engagement metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngagementError {
    /// Audience of zero has no defined rate
    #[error("engagement rate requires a non-empty audience")]
    EmptyAudience,
}
