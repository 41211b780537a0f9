//! Error surface for callers that treat a failed verification sweep as
//! an error value rather than a printed finding.

use thiserror::Error;

use crate::verify::Mismatch;

/// A verification sweep found at least one disagreement between the
/// Montgomery pipeline and the reference computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{failed} of {total} sweep cases disagreed; first (input/expected/actual): {first}")]
pub struct SweepError {
    /// Number of disagreeing cases.
    pub failed: usize,
    /// Number of cases attempted.
    pub total: u32,
    /// The lowest-input disagreeing case.
    pub first: Mismatch,
}
