//! Montgomery reduction and multiplication for the ML-KEM field
//! (q = 3329).
//!
//! Residues are `i16` values in the canonical range `[0, q)`. A value in
//! Montgomery form occupies the same range and is distinguished from a
//! plain residue by convention only; the caller tracks which
//! representation a value is in.

/// ML-KEM prime modulus: 13·2^8 + 1.
pub const Q: i16 = 3329;

/// −q^{−1} mod 2^{16}: satisfies `q · Q_INV ≡ −1 (mod R)`. Derived
/// offline, never recomputed.
pub const Q_INV: i32 = -62209;

/// log₂ of the Montgomery base.
pub const R_SHIFT: u32 = 16;

/// Montgomery base R = 2^{16}. A power of two exceeding q, so reduction
/// modulo R is a mask and division by R is a shift.
pub const R: i32 = 1 << R_SHIFT;

/// R² = 2^{32}, deliberately not reduced modulo q here; the runtime
/// REDC step inside [`to_montgomery`] takes care of that.
pub const R_SQUARED: i64 = (R as i64) << R_SHIFT;

/// Montgomery reduction (REDC): computes `t · R^{−1} mod q` in the
/// canonical range `[0, q)`.
///
/// Input: `0 <= t <= (q−1)²`, the range produced by multiplying two
/// canonical residues. One conditional subtract suffices because with
/// `t <= (q−1)²` and `m <= R−1`,
/// `u = (t + m·q) / R <= ((q−1)² + (R−1)·q) / R < q + q²/R < 2q`.
#[inline]
#[must_use]
pub const fn montgomery_reduce(t: i32) -> i16 {
    // m = t·q^{−1}·(−1) mod R; the mask stands in for the division
    // since R is a power of two. The wide product may wrap, which is
    // harmless under the mask.
    let m = t.wrapping_mul(Q_INV) & (R - 1);
    // t + m·q ≡ 0 (mod R) by choice of m, so the shift is an exact
    // division by R. Peaks below 2^28 for in-range t, no i32 overflow.
    let u = (t + m * Q as i32) >> R_SHIFT;
    if u >= Q as i32 {
        (u - Q as i32) as i16
    } else {
        u as i16
    }
}

/// Lift a plain residue into Montgomery form: returns `a · R mod q`.
///
/// `a` may be any non-negative representative, not just a canonical
/// one; the widened `% q` folds it first. That remainder is the only
/// division in the crate and sits outside the hot multiply/reduce path
/// (a Barrett reduction could replace it without affecting
/// correctness). REDC then strips one factor of R:
/// `(a·R² mod q) · R^{−1} ≡ a·R (mod q)`.
#[inline]
#[must_use]
pub const fn to_montgomery(a: i16) -> i16 {
    montgomery_reduce((a as i64 * R_SQUARED % Q as i64) as i32)
}

/// Map a Montgomery-form residue back to a plain residue: a single
/// REDC application divides out the factor of R.
#[inline]
#[must_use]
pub const fn from_montgomery(a: i16) -> i16 {
    montgomery_reduce(a as i32)
}

/// Multiply two Montgomery-form residues: returns `a · b · R^{−1} mod q`,
/// which is again in Montgomery form. The representation is closed
/// under this operation, so chained multiplies need no intermediate
/// conversions.
#[inline]
#[must_use]
pub const fn montgomery_multiply(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}
