//! Prompting input source
//!
//! Wraps a reader so each line request first writes a label, the way an
//! interactive console session asks for one field at a time.

use catalog_core::{InputError, LineSource};
use std::io::{BufRead, Write};

/// [`LineSource`] that announces each field before reading it
pub struct Prompted<'p, R, W> {
    reader: R,
    prompts_out: W,
    labels: std::slice::Iter<'p, &'static str>,
}

impl<'p, R: BufRead, W: Write> Prompted<'p, R, W> {
    /// Create new prompting source
    ///
    /// Labels are used in order; once exhausted, lines are read unannounced.
    pub fn new(reader: R, prompts_out: W, labels: &'p [&'static str]) -> Self {
        Self {
            reader,
            prompts_out,
            labels: labels.iter(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource for Prompted<'_, R, W> {
    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        if let Some(label) = self.labels.next() {
            write!(self.prompts_out, "{label}: ")?;
            self.prompts_out.flush()?;
        }
        self.reader.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompted_writes_labels_in_order() {
        let mut prompts = Vec::new();
        let mut source = Prompted::new("Oak\nBrown\n".as_bytes(), &mut prompts, &["Name", "Color"]);

        assert_eq!(source.next_line().unwrap().as_deref(), Some("Oak"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("Brown"));
        assert_eq!(source.next_line().unwrap(), None);
        drop(source);

        assert_eq!(String::from_utf8(prompts).unwrap(), "Name: Color: ");
    }
}
