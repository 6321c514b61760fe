//! Shared formatting utilities for the GrowMon views.

use std::time::Duration;

/// Format a sensor value for display.
///
/// Integer values display without decimal places; everything else gets one,
/// which is all the precision the probes deliver.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Format the age of the last sample as a relative time string.
///
/// Returns strings like "just now", "5s ago", "3m ago", "2h ago".
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();

    if secs < 1 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}
