//! Time normalization: every duration encoding found in the exports is
//! reduced to a whole number of seconds.
//!
//! Accepted encodings, tried in order:
//! - empty cell → 0
//! - number below 1 → fraction of a day (spreadsheet time serial)
//! - number from 1 up → already seconds
//! - text with `:` → `H[:M[:S]]`, parts taken literally (`00:90:00` is 5400)
//! - numeric text → same rules as numbers
//! - anything else → 0
//!
//! Every result is capped at [`MAX_DURATION_SECS`].

use crate::models::cell::Cell;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Upper bound for a single normalized duration (about 136 years). Sums of
/// a few dozen capped values still fit comfortably in `u64` and `i64`.
pub const MAX_DURATION_SECS: u64 = u32::MAX as u64;

/// Convert a raw cell into seconds. Never fails.
pub fn normalize_to_seconds(cell: &Cell) -> u64 {
    match cell {
        Cell::Empty => 0,
        Cell::Number(n) => number_to_seconds(*n),
        Cell::Text(s) => text_to_seconds(s),
    }
}

fn number_to_seconds(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }

    let secs = if value < 1.0 {
        (value * SECONDS_PER_DAY).round()
    } else {
        value.round()
    };

    secs.min(MAX_DURATION_SECS as f64) as u64
}

fn text_to_seconds(raw: &str) -> u64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0;
    }

    if s.contains(':') {
        return parse_hms(s).unwrap_or(0);
    }

    s.parse::<f64>().map(number_to_seconds).unwrap_or(0)
}

/// Parse `H[:M[:S]]` into seconds. Extra parts beyond the third are ignored,
/// blank parts count as zero, negative totals clamp to zero and oversized
/// ones to [`MAX_DURATION_SECS`].
pub fn parse_hms(s: &str) -> Option<u64> {
    let mut total: i64 = 0;

    for (part, weight) in s.split(':').zip([3600_i64, 60, 1]) {
        let part = part.trim();
        let value = if part.is_empty() {
            0
        } else {
            part.parse::<i64>().ok()?
        };
        total = total.saturating_add(value.saturating_mul(weight));
    }

    Some((total.max(0) as u64).min(MAX_DURATION_SECS))
}

/// Format seconds as `HH:MM:SS`. Negative input clamps to zero; the hour
/// component grows past two digits when needed.
pub fn format_seconds(secs: i64) -> String {
    let secs = secs.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// [`format_seconds`] for unsigned durations; values past `i64::MAX` stay
/// at the top of the range instead of wrapping negative.
pub fn format_duration(secs: u64) -> String {
    format_seconds(i64::try_from(secs).unwrap_or(i64::MAX))
}
