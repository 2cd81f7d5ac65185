//! Duration formatting shared by the report and log lines.

use std::time::Duration;

/// Formats a duration in nanoseconds into a human-readable string with appropriate units.
pub fn format_duration(ns: u64) -> String {
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", ns as f64 / 1_000_000_000.0)
    }
}

/// Seconds with exactly four decimal places, as printed in every report.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.4}", elapsed.as_secs_f64())
}
