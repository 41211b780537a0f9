//! Montgomery modular multiplication specialized to the ML-KEM (Kyber)
//! prime modulus q = 3329, together with an exhaustive self-check
//! against division-based reference arithmetic.
//!
//! Montgomery form represents a residue `x` as `x·R mod q` with
//! R = 2^16, so that reduction after a multiply needs only shifts,
//! masks, one multiply, and a conditional subtract instead of a
//! division. Conversion in and out of the form costs one reduction
//! each, which amortizes to nothing across chained multiplications.

pub mod error;
pub mod reduce;
pub mod verify;

pub use reduce::{
    from_montgomery, montgomery_multiply, montgomery_reduce, to_montgomery, Q,
};
pub use verify::{exhaustive_sweep, SweepReport};
