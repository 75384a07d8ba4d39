//! Error types.
//!
//! The domain is pure computation, so every failure here indicates a
//! programming or configuration error in the driver rather than a
//! transient condition; none of these are worth retrying.

/// Errors surfaced by the evolutionary core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A chromosome was evaluated against a target of a different gene
    /// length. Gene length is fixed population-wide; see
    /// [`Population::populate`](crate::genetics::Population::populate).
    #[error("gene length mismatch: candidate has {candidate} genes, target has {target}")]
    LengthMismatch {
        /// Gene count of the evaluated chromosome.
        candidate: usize,
        /// Gene count of the target.
        target: usize,
    },

    /// A random string was requested over an empty alphabet.
    #[error("cannot draw random characters from an empty alphabet")]
    EmptyAlphabet,

    /// Similarity scoring of an empty source string against a non-empty
    /// target, which has no meaningful normalization.
    #[error("cannot score an empty source against a non-empty target")]
    EmptySource,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
