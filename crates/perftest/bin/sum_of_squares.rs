use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use eyre::{Result, WrapErr};
use perftest::{format_seconds, measure, Measurement};

const ITERATIONS: u64 = 10_000;

/// Returns the sum of `i * i` for `i` in `0..n`.
///
/// Plain loop, no closed form. `u128` holds the result well past any
/// realistic `n`.
fn sum_of_squares(n: u64) -> u128 {
    let mut total: u128 = 0;
    for i in 0..n {
        let i = i as u128;
        total += i * i;
    }
    total
}

struct Report {
    iterations: u64,
    result: u128,
    elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Rust Performance Test ===")?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Time taken: {} seconds", format_seconds(self.elapsed))
    }
}

fn run<W: Write>(out: &mut W) -> Result<Measurement<u128>> {
    let measurement = measure("sum_of_squares", || sum_of_squares(black_box(ITERATIONS)));

    let report = Report {
        iterations: ITERATIONS,
        result: measurement.value,
        elapsed: measurement.elapsed,
    };
    write!(out, "{}", report)
        .and_then(|_| out.flush())
        .wrap_err("failed to write sum_of_squares report")?;

    Ok(measurement)
}

fn main() -> Result<()> {
    perftest::logging::init();

    let mut stdout = std::io::stdout().lock();
    run(&mut stdout)?;

    Ok(())
}
