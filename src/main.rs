use mlkem_mont::reduce::{from_montgomery, montgomery_multiply, to_montgomery, Q};
use mlkem_mont::verify::exhaustive_sweep;

fn main() {
    println!("Montgomery multiplication self-check, q = {Q} (ML-KEM)\n");

    // Worked example: one multiplication computed both ways.
    let (a, b) = (3228_i16, 3228_i16);
    let direct = (a as i32 * b as i32 % Q as i32) as i16;
    let pipeline =
        from_montgomery(montgomery_multiply(to_montgomery(a), to_montgomery(b)));
    println!("{a} * {b} mod {Q}");
    println!("  plain modulo: {direct}");
    println!("  Montgomery  : {pipeline}\n");

    println!("Running exhaustive sweep over [0, 32768)...");
    let report = exhaustive_sweep();
    for mismatch in &report.mismatches {
        println!("{mismatch}");
    }
    println!("Sweep result (correct/total/ratio): {report}");
}
