//! Timing and formatting utilities

use std::time::Duration;

/// Render a duration at the scales HTTP round trips actually occur:
/// microseconds for loopback-fast responses, milliseconds for the common
/// case, seconds for slow or long-haul requests.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hammer::util::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(250)), "250us");
/// assert_eq!(format_duration(Duration::from_millis(42)), "42.0ms");
/// assert_eq!(format_duration(Duration::from_millis(1250)), "1.25s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_secs_f64() * 1e6;

    if micros < 1_000.0 {
        format!("{:.0}us", micros)
    } else if micros < 1_000_000.0 {
        format!("{:.1}ms", micros / 1_000.0)
    } else {
        format!("{:.2}s", micros / 1_000_000.0)
    }
}

/// Render a throw rate in requests per second
///
/// Low-volume runs are the norm for this tool (a handful of hammers against
/// one URL), so rates below ten keep a decimal instead of rounding to an
/// integer.
///
/// # Examples
///
/// ```
/// use hammer::util::time::format_rate;
///
/// assert_eq!(format_rate(0.5), "0.5");
/// assert_eq!(format_rate(250.0), "250");
/// assert_eq!(format_rate(12_500.0), "12.5k");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate < 10.0 {
        format!("{:.1}", rate)
    } else if rate < 1_000.0 {
        format!("{:.0}", rate)
    } else {
        format!("{:.1}k", rate / 1_000.0)
    }
}

/// Calculate a rate from an operation count and duration
///
/// Returns zero for a zero-length duration rather than dividing by zero.
pub fn calculate_rate(operations: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        operations as f64 / seconds
    } else {
        0.0
    }
}
