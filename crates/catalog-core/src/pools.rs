//! Random value pools
//!
//! Static, non-empty pools that random initialization draws text from.

use rand::Rng;

/// Plant names
pub const NAMES: &[&str] = &[
    "Rose", "Tulip", "Oak", "Lily", "Fern", "Maple", "Orchid", "Cactus", "Birch", "Daisy",
];

/// Plant colors
pub const COLORS: &[&str] = &["Red", "Green", "Yellow", "White", "Pink", "Purple", "Brown", "Blue"];

/// Flower smells
pub const SMELLS: &[&str] = &["Fragrant", "Sweet", "Subtle", "Spicy", "Fresh", "Musky"];

/// Pick one entry of `pool`
///
/// # Panics
/// Panics if `pool` is empty; the pools in this module never are.
#[inline]
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}
