//! Exhaustive verification of the Montgomery pipeline against
//! division-based reference arithmetic.
//!
//! The sweep enumerates every non-negative `i16` input, computes
//! `i · (q−1) mod q` once directly and once through the full
//! convert/multiply/convert-back pipeline, and tallies agreement.
//! Disagreements are recorded with their input so they stay
//! attributable, and never abort the sweep.

use std::fmt;

use crate::error::SweepError;
use crate::reduce::{from_montgomery, montgomery_multiply, to_montgomery, Q};

/// Exclusive upper end of the swept domain: the non-negative half of
/// `i16`.
pub const SWEEP_LIMIT: i32 = 1 << 15;

/// One failing sweep case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub input: i16,
    pub expected: i16,
    pub actual: i16,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.input, self.expected, self.actual)
    }
}

/// Outcome of a full sweep over `[0, SWEEP_LIMIT)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub correct: u32,
    pub total: u32,
    pub mismatches: Vec<Mismatch>,
}

impl SweepReport {
    /// Fraction of agreeing cases, as a percentage.
    pub fn percentage(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Whether every swept case agreed with the reference.
    pub fn all_correct(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Convert a mismatching sweep into an error value, for callers
    /// that want to propagate it with `?`. The report binary does not
    /// go through this: there, mismatches are findings to print, not
    /// failures.
    pub fn into_result(self) -> Result<(), SweepError> {
        match self.mismatches.first() {
            None => Ok(()),
            Some(&first) => Err(SweepError {
                failed: self.mismatches.len(),
                total: self.total,
                first,
            }),
        }
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}%", self.correct, self.total, self.percentage())
    }
}

/// Check `i · (q−1) mod q` for every `i` in `[0, 32768)`: once with
/// plain widened division-based arithmetic, once through the Montgomery
/// pipeline (two in-conversions, a Montgomery multiply, one REDC to
/// convert back out). Always runs exactly [`SWEEP_LIMIT`] iterations.
pub fn exhaustive_sweep() -> SweepReport {
    let b_mont = to_montgomery(Q - 1);

    let mut correct = 0;
    let mut mismatches = Vec::new();
    for i in 0..SWEEP_LIMIT {
        let expected = (i * (Q as i32 - 1) % Q as i32) as i16;

        let a_mont = to_montgomery(i as i16);
        let actual = from_montgomery(montgomery_multiply(a_mont, b_mont));

        if actual == expected {
            correct += 1;
        } else {
            mismatches.push(Mismatch {
                input: i as i16,
                expected,
                actual,
            });
        }
    }

    SweepReport {
        correct,
        total: SWEEP_LIMIT as u32,
        mismatches,
    }
}
