//! Error types for orchard-domain.
//!
//! Only one condition in this crate is a hard failure: indexing into an empty ranking.
//! Everything else (empty transfers, removing an absent picker, degrading already degraded
//! fruit) is a defined no-op.

use thiserror::Error;

/// Errors raised by [`crate::Ranking`] access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The ranking holds no pickers, so there is no last element to clamp to.
    #[error("ranking is empty: cannot access position {index}")]
    Empty { index: usize },
}

/// Result type alias using RankingError.
pub type RankingResult<T> = Result<T, RankingError>;
