//! Timer, log subscriber and duration formatting used by the `sum-of-squares`
//! and `fibonacci` binaries.
//!
//! Each binary owns its workload, report and driver. Nothing here knows about
//! either workload.

pub mod logging;
pub mod output;
pub mod timing;

pub use output::{format_duration, format_seconds};
pub use timing::{measure, Measurement, Timer};
