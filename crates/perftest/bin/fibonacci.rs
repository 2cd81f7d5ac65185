use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

use eyre::{Result, WrapErr};
use perftest::{format_seconds, measure, Measurement};

const INPUT: u32 = 8;

/// Returns the n-th Fibonacci number with `F(0) = 0` and `F(1) = 1`.
///
/// Naive double recursion, exponential in `n`. The call overhead is what gets
/// timed, so do not memoize.
fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

struct Report {
    n: u32,
    result: u64,
    elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Fibonacci({}): {}, Time: {} seconds",
            self.n,
            self.result,
            format_seconds(self.elapsed)
        )
    }
}

fn run<W: Write>(out: &mut W) -> Result<Measurement<u64>> {
    let measurement = measure("fibonacci", || fibonacci(black_box(INPUT)));

    let report = Report {
        n: INPUT,
        result: measurement.value,
        elapsed: measurement.elapsed,
    };
    write!(out, "{}", report)
        .and_then(|_| out.flush())
        .wrap_err("failed to write fibonacci report")?;

    Ok(measurement)
}

fn main() -> Result<()> {
    perftest::logging::init();

    let mut stdout = std::io::stdout().lock();
    run(&mut stdout)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(8), 21);
    }

    #[test]
    fn test_fibonacci_recurrence() {
        for n in 2..25 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }
        assert_eq!(fibonacci(20), 6_765);
    }

    #[test]
    fn test_report_layout() {
        let report = Report {
            n: 8,
            result: 21,
            elapsed: Duration::from_micros(3),
        };

        assert_eq!(
            report.to_string(),
            "Fibonacci(8): 21, Time: 0.0000 seconds\n"
        );
    }

    #[test]
    fn test_run_writes_single_line() {
        let mut out = Vec::new();
        let m = run(&mut out).unwrap();
        let stdout = String::from_utf8(out).unwrap();

        assert_eq!(m.value, 21);
        assert!(stdout.starts_with("Fibonacci(8): 21, Time: "));
        assert!(stdout.ends_with(" seconds\n"));
        assert_eq!(stdout.lines().count(), 1);
    }

    #[test]
    fn test_run_is_deterministic() {
        let first = run(&mut io::sink()).unwrap();
        let second = run(&mut io::sink()).unwrap();
        assert_eq!(first.value, second.value);
    }
}
