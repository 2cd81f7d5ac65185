//! Start/stop timer around a single computation.

#[cfg(target_os = "linux")]
use quanta::Instant;

#[cfg(not(target_os = "linux"))]
use std::time::Instant;

use std::time::Duration;

use crate::output::format_duration;

/// Result of one timed computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement<T> {
    pub name: &'static str,
    pub value: T,
    pub elapsed: Duration,
}

/// Monotonic timer for one named measurement.
///
/// Call [`Timer::finish_with_result`] once the computation returns. A timer
/// dropped before that (the computation panicked) records nothing and logs
/// the abandoned measurement.
#[derive(Debug)]
pub struct Timer {
    name: &'static str,
    start: Instant,
    finished: bool,
}

impl Timer {
    #[inline]
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            finished: false,
        }
    }

    #[inline]
    pub fn finish_with_result<T: std::fmt::Debug>(mut self, value: T) -> Measurement<T> {
        self.finished = true;
        let elapsed = self.start.elapsed();
        let ns = saturating_nanos(elapsed);
        tracing::debug!(
            name = self.name,
            result = ?value,
            elapsed_ns = ns,
            "finished in {}",
            format_duration(ns)
        );
        Measurement {
            name: self.name,
            value,
            elapsed,
        }
    }
}

impl Drop for Timer {
    #[inline]
    fn drop(&mut self) {
        if !self.finished {
            let elapsed = self.start.elapsed();
            tracing::warn!(
                name = self.name,
                "measurement abandoned after {}",
                format_duration(saturating_nanos(elapsed))
            );
        }
    }
}

/// Whole nanoseconds in `d`, clamped to `u64::MAX`.
#[inline]
pub(crate) fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Times `f` and returns its result together with the elapsed duration.
pub fn measure<T, F>(name: &'static str, f: F) -> Measurement<T>
where
    T: std::fmt::Debug,
    F: FnOnce() -> T,
{
    let timer = Timer::start(name);
    let value = f();
    timer.finish_with_result(value)
}
