//! Line-oriented input
//!
//! [`LineSource`] is the collaborator interactive initialization reads from.
//! Every [`std::io::BufRead`] is a source, so tests hand in byte slices while
//! the binary hands in a prompting stdin wrapper.

use crate::error::InputError;
use std::io::BufRead;
use std::str::FromStr;

/// Supplies text lines on demand
///
/// # Contract
/// - `next_line` yields one line per call, without its terminator
/// - `Ok(None)` signals end of input; it is not an error
/// - Only a failing underlying reader returns `Err`
pub trait LineSource {
    /// Read the next line
    ///
    /// # Errors
    /// Returns error if the underlying reader fails
    fn next_line(&mut self) -> Result<Option<String>, InputError>;

    /// Read the next line as text
    ///
    /// End of input and an empty line both yield `None`.
    ///
    /// # Errors
    /// Returns error if the underlying reader fails
    fn read_text(&mut self) -> Result<Option<String>, InputError> {
        Ok(self.next_line()?.filter(|line| !line.is_empty()))
    }

    /// Read the next line and parse it
    ///
    /// Surrounding whitespace is ignored. Malformed input yields `None`
    /// rather than an error, so callers apply their usual rejection policy.
    ///
    /// # Errors
    /// Returns error if the underlying reader fails
    fn read_parsed<T: FromStr>(&mut self) -> Result<Option<T>, InputError> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };
        let parsed = line.trim().parse().ok();
        if parsed.is_none() {
            tracing::debug!(input = %line, "malformed numeric input");
        }
        Ok(parsed)
    }
}

impl<R: BufRead + ?Sized> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
