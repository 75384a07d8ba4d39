//! Random source and string-level random utilities.
//!
//! All randomized operations in this crate draw from one seedable stream
//! created by [`create_rng`] and threaded explicitly as `&mut impl Rng`.
//! Seed once at process start and never reseed mid-run; under a fixed
//! seed every run is reproducible.
//!
//! # Key Functions
//!
//! - [`create_rng`]: Seedable random source construction
//! - [`random_string`]: Uniform random string over an alphabet
//! - [`shuffle_string`]: Fisher–Yates permutation of a string

mod string;

pub use string::{random_string, shuffle_string};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the seedable random source used throughout the crate.
///
/// # Examples
///
/// ```
/// use strevo::random::create_rng;
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(
///     rand::Rng::random_range(&mut a, 0..1000),
///     rand::Rng::random_range(&mut b, 0..1000),
/// );
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
