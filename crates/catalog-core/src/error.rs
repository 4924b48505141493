//! Error types for catalogue input
//!
//! Invalid values are never errors in this crate; guarded setters reject
//! them silently. Only a failing underlying reader surfaces here.

use std::io;

/// Errors raised while reading from a [`crate::LineSource`]
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Underlying reader failed
    #[error("failed to read input line: {0}")]
    Read(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_display() {
        let err = InputError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().contains("failed to read input line"));
        assert!(err.to_string().contains("closed"));
    }
}
