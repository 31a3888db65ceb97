//! Human-readable text output
//!
//! Each progress line is emitted with a single `println!`, so lines from
//! concurrent hammers may interleave but never tear.

use crate::coordinator::RunSummary;
use crate::util::time::{calculate_rate, format_duration, format_rate};
use std::time::Duration;

/// Print the progress line for one completed throw
pub fn print_throw(id: usize, index: usize, elapsed: Duration) {
    println!(
        "Hammer: {}, Throw:\t{}, Elapsed Time: {:.2}",
        id,
        index,
        elapsed.as_secs_f64()
    );
}

/// Print one hammer's average elapsed time
pub fn print_hammer_average(id: usize, average: Duration) {
    println!(
        "Hammer: {}, AVERAGE:\t, Elapsed Time: {:.2}",
        id,
        average.as_secs_f64()
    );
}

/// Print the final total-average line
pub fn print_total_average(average: Duration) {
    println!("TOTAL AVERAGE ELAPSED TIME: {:.2}", average.as_secs_f64());
}

/// Print the optional latency summary block
///
/// Shown after the total-average line when `--show-latency` is set.
pub fn print_latency_summary(summary: &RunSummary) {
    let combined = match summary.aggregator().combined() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Warning: failed to combine hammer statistics: {}", e);
            return;
        }
    };

    let rate = calculate_rate(combined.throws(), summary.elapsed());

    println!();
    println!(
        "Throws: {} total in {:.2}s ({}/s)",
        combined.throws(),
        summary.elapsed().as_secs_f64(),
        format_rate(rate)
    );

    let latency = combined.latency();

    println!("Latency:");
    if latency.is_empty() {
        println!("  No latency data collected");
        return;
    }

    if let Some(min) = latency.min() {
        println!("  Min:  {}", format_duration(min));
    }
    if let Some(mean) = latency.mean() {
        println!("  Mean: {}", format_duration(mean));
    }
    if let Some(max) = latency.max() {
        println!("  Max:  {}", format_duration(max));
    }

    println!();
    println!("  Percentiles:");
    for &p in &[50.0, 90.0, 95.0, 99.0, 99.9] {
        if let Some(val) = latency.percentile(p) {
            println!("    p{:5.2}: {}", p, format_duration(val));
        }
    }
}
