//! Fuzzy similarity scoring.
//!
//! The scorer walks the target pattern left to right, searching for each
//! character in the not-yet-consumed suffix of the source. A source
//! character can satisfy at most one target character. Alignment quality
//! is rewarded, unfindable characters are penalized, and the accumulated
//! confidence is normalized by both string lengths.
//!
//! Scoring is asymmetric: the source is searched, the target is the
//! pattern being matched.

use crate::error::{Error, Result};

/// Default penalty added to the fuzziness accumulator for each target
/// character that cannot be found in the remaining source suffix.
pub const DEFAULT_FUZZ: f64 = 0.5;

/// Configurable fuzzy similarity scorer.
///
/// A pure function wrapper: scoring holds no state between calls and is
/// deterministic for fixed inputs.
///
/// # Examples
///
/// ```
/// use strevo::similarity::Scorer;
///
/// let scorer = Scorer::default();
/// assert_eq!(scorer.score("hello", "hello").unwrap(), 1.0);
/// assert_eq!(scorer.score("hello", "").unwrap(), 0.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use strevo::similarity::Scorer;
///
/// let strict = Scorer::default().with_fuzz(1.0);
/// let lenient = Scorer::default().with_fuzz(0.1);
/// let (s, t) = ("garden", "gradient");
/// assert!(strict.score(s, t).unwrap() <= lenient.score(s, t).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scorer {
    /// Per-miss penalty, kept within `0.0..=1.0`.
    fuzz: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self { fuzz: DEFAULT_FUZZ }
    }
}

impl Scorer {
    /// Sets the mismatch penalty, clamped to `0.0..=1.0`.
    ///
    /// Higher values punish unmatched target characters harder.
    pub fn with_fuzz(mut self, fuzz: f64) -> Self {
        self.fuzz = fuzz.clamp(0.0, 1.0);
        self
    }

    /// Returns the configured mismatch penalty.
    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }

    /// Scores how well `source` matches the pattern `target`.
    ///
    /// Returns `1.0` for a (case-sensitive) exact match and `0.0` for an
    /// empty target. Otherwise matching is case-insensitive (ASCII case
    /// folding) over Unicode scalar values, with per-character scores:
    ///
    /// - `0.7` when the match is the very next unconsumed source
    ///   character (consecutive alignment),
    /// - `0.1` otherwise, plus `0.8` when the match directly follows a
    ///   space (acronym-style matches, e.g. `"WC"` inside
    ///   `"Water Closet"`),
    /// - a further `0.1` when the match also agrees in case.
    ///
    /// The summed score is normalized by both lengths and divided by the
    /// accumulated fuzziness; a flat `0.15` bonus applies when both
    /// strings start with the same character (case-insensitively) and
    /// confidence is still below `0.85`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySource`] when `source` is empty while `target` is
    /// not; that case has no meaningful normalization.
    pub fn score(&self, source: &str, target: &str) -> Result<f64> {
        // No objective, nothing can match it.
        if target.is_empty() {
            return Ok(0.0);
        }

        // Perfect match short-circuit.
        if source == target {
            return Ok(1.0);
        }

        if source.is_empty() {
            return Err(Error::EmptySource);
        }

        let src: Vec<char> = source.chars().collect();
        let tgt: Vec<char> = target.chars().collect();
        let lower_src: Vec<char> = src.iter().map(|c| c.to_ascii_lowercase()).collect();

        // Overall mismatch of the two strings.
        let mut fuzziness = 1.0;
        // Accumulated confidence across matched characters.
        let mut total = 0.0;
        // Start of the unconsumed source suffix.
        let mut x = 0usize;

        for &tc in &tgt {
            let lower_tc = tc.to_ascii_lowercase();

            match lower_src[x..].iter().position(|&sc| sc == lower_tc) {
                None => fuzziness += self.fuzz,
                Some(y) => {
                    let mut score = if y == 0 {
                        // Consecutive with the previous match.
                        0.7
                    } else if src[x + y - 1] == ' ' {
                        // Acronym-style match after a word boundary.
                        0.1 + 0.8
                    } else {
                        0.1
                    };

                    if src[x + y] == tc {
                        // Same case as the pattern.
                        score += 0.1;
                    }

                    total += score;
                    x += y + 1;
                }
            }
        }

        // Normalize by both lengths so long sources are not unduly
        // penalized, then divide by the accumulated mismatch.
        let sl = src.len() as f64;
        let tl = tgt.len() as f64;
        let mut confidence = 0.5 * (total / sl + total / tl) / fuzziness;

        if lower_src[0] == tgt[0].to_ascii_lowercase() && confidence < 0.85 {
            confidence += 0.15;
        }

        Ok(confidence)
    }
}

/// Scores `source` against `target` with the default configuration.
///
/// See [`Scorer::score`].
pub fn score(source: &str, target: &str) -> Result<f64> {
    Scorer::default().score(source, target)
}
