//! Random string generation and shuffling.

use crate::error::{Error, Result};
use rand::Rng;

/// Returns a string of length `n` where each character is drawn
/// uniformly and independently from `alphabet` (duplicates allowed).
///
/// One uniform index is drawn per output character.
///
/// # Errors
///
/// [`Error::EmptyAlphabet`] when `alphabet` has no characters.
///
/// # Examples
///
/// ```
/// use strevo::random::{create_rng, random_string};
///
/// let mut rng = create_rng(7);
/// let s = random_string(8, "abcdef", &mut rng).unwrap();
/// assert_eq!(s.chars().count(), 8);
/// assert!(s.chars().all(|c| "abcdef".contains(c)));
/// ```
pub fn random_string<R: Rng>(n: usize, alphabet: &str, rng: &mut R) -> Result<String> {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    Ok((0..n)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect())
}

/// Returns a uniformly random permutation of the characters of `s`.
///
/// Fisher–Yates: iterate from the last index down to 1, swapping each
/// position with a uniformly random earlier-or-equal index.
/// Deterministic given the state of `rng`.
pub fn shuffle_string<R: Rng>(s: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = s.chars().collect();

    for i in (1..chars.len()).rev() {
        let j = rng.random_range(0..=i);
        chars.swap(i, j);
    }

    chars.into_iter().collect()
}
