//! Time-of-day normalization for delivery time expressions.

use super::patterns::{TIME_LOOSE, TIME_RANGE};

/// Normalize a free-form time expression to 24-hour "HH:MM".
///
/// Handles lone times ("2:30", "7pm") and ranges where only the end
/// carries a suffix ("2-3pm", "11-1pm"). A range crossing noon puts the
/// start in the morning; otherwise the start inherits the end's suffix.
/// Returns `None` when nothing time-like is present.
pub fn normalize_time(raw: &str) -> Option<String> {
    let clean: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if clean.is_empty() {
        return None;
    }

    let caps = match TIME_RANGE.captures(&clean) {
        Some(caps) => caps,
        None => {
            let caps = TIME_LOOSE.captures(&clean)?;
            let suffix = caps.get(2).map(|m| m.as_str());
            return Some(format_hh_mm(&caps[1], suffix));
        }
    };

    let start = &caps[1];
    let end = caps.get(2).map(|m| m.as_str());
    let suffix = caps.get(3).map(|m| m.as_str());

    let start_suffix = match (end, suffix) {
        (Some(end), Some("pm")) => {
            // "11-1pm" crosses noon, so the start is still morning
            if hour_value(start) < 12.0 && hour_value(start) > hour_value(end) {
                Some("am")
            } else {
                Some("pm")
            }
        }
        (Some(_), Some("am")) => Some("am"),
        _ => suffix,
    };

    Some(format_hh_mm(start, start_suffix))
}

/// Numeric value of a time for ordering comparisons ("2:30" -> 2.3).
fn hour_value(time: &str) -> f64 {
    time.replace(':', ".").parse().unwrap_or(0.0)
}

fn format_hh_mm(time: &str, suffix: Option<&str>) -> String {
    let normalized = time.replace('.', ":");
    let (hour_str, minutes) = match normalized.split_once(':') {
        Some((h, m)) => (h, m),
        None => (normalized.as_str(), "00"),
    };

    let mut hour: u32 = hour_str.parse().unwrap_or(0);
    if suffix == Some("pm") && hour < 12 {
        hour += 12;
    }
    if suffix == Some("am") && hour == 12 {
        hour = 0;
    }

    format!("{:02}:{}", hour, minutes)
}
