//! Testing utilities for the catalog workspace
//!
//! Shared input sources and seeded randomness.

#![allow(missing_docs)]

use catalog_core::LineSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufReader, Cursor, Read};

pub use catalog_core::InputError;

pub const DEFAULT_SEED: u64 = 42;

/// Reproducible RNG
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn default_rng() -> StdRng {
    seeded_rng(DEFAULT_SEED)
}

/// Input source yielding `lines` in order, one per `next_line`
pub fn scripted(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}

/// Lines left unread in a scripted source
pub fn remaining_lines(input: &mut impl LineSource) -> Vec<String> {
    let mut rest = Vec::new();
    while let Ok(Some(line)) = input.next_line() {
        rest.push(line);
    }
    rest
}

#[derive(Debug, Default)]
pub struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
    }
}

/// Input source whose every read fails
pub fn broken_input() -> BufReader<BrokenReader> {
    BufReader::new(BrokenReader)
}
