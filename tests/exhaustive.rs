//! Full-domain equivalence: the Montgomery pipeline must agree with
//! division-based arithmetic on every non-negative `i16` input.

use mlkem_mont::reduce::{from_montgomery, montgomery_multiply, to_montgomery, Q};
use mlkem_mont::verify::{exhaustive_sweep, SWEEP_LIMIT};

fn pipeline(a: i16, b: i16) -> i16 {
    from_montgomery(montgomery_multiply(to_montgomery(a), to_montgomery(b)))
}

#[test]
fn sweep_agrees_on_all_32768_inputs() {
    let report = exhaustive_sweep();
    assert!(
        report.all_correct(),
        "first mismatch (input/expected/actual): {}",
        report.mismatches[0],
    );
    assert_eq!(report.correct, SWEEP_LIMIT as u32);
    assert_eq!(report.total, SWEEP_LIMIT as u32);
    assert_eq!(report.percentage(), 100.0);
}

#[test]
fn sweep_converts_to_ok_result() {
    exhaustive_sweep()
        .into_result()
        .expect("pipeline should agree with the reference on the whole domain");
}

#[test]
fn zero_input_yields_zero() {
    assert_eq!(pipeline(0, Q - 1), 0);
}

#[test]
fn q_minus_one_squared_is_one() {
    // 3328 ≡ −1 (mod 3329)
    assert_eq!(pipeline(Q - 1, Q - 1), 1);
}

#[test]
fn worked_example_3228_squared() {
    assert_eq!((3228 * 3228) % Q as i32, 214);
    assert_eq!(pipeline(3228, 3228), 214);
}
