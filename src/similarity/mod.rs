//! Approximate string matching.
//!
//! A greedy left-to-right character-alignment heuristic: each target
//! character is searched for in the unmatched suffix of the source,
//! consecutive matches and acronym-style matches earn bonuses, and
//! characters that cannot be found accumulate a fuzziness penalty. The
//! result is a confidence value where `1.0` is an exact match.
//!
//! This is a heuristic, not an edit distance; it does not guarantee an
//! optimal alignment.
//!
//! # Key Types
//!
//! - [`Scorer`]: Configurable scorer (mismatch penalty)
//! - [`score`]: One-shot scoring with the default configuration

mod scorer;

pub use scorer::{score, Scorer, DEFAULT_FUZZ};
