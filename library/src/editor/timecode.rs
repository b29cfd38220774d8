//! Colon-delimited timecode parsing for the cut dialog.
//!
//! Accepted forms: `SS`, `MM:SS`, `HH:MM:SS`. Anything else (wrong segment
//! count, non-numeric segment) is a validation error and nothing downstream
//! runs.

use crate::error::StudioError;

pub fn parse_timecode(input: &str) -> Result<u64, StudioError> {
    let trimmed = input.trim();
    let segments: Vec<u64> = trimmed
        .split(':')
        .map(|segment| {
            segment.parse::<u64>().map_err(|_| {
                StudioError::InvalidArgument(format!("Invalid time '{}'", trimmed))
            })
        })
        .collect::<Result<_, _>>()?;

    match segments.as_slice() {
        [s] => to_ms(0, 0, *s, trimmed),
        [m, s] => to_ms(0, *m, *s, trimmed),
        [h, m, s] => to_ms(*h, *m, *s, trimmed),
        _ => Err(StudioError::InvalidArgument(format!(
            "Invalid time '{}': expected SS, MM:SS or HH:MM:SS",
            trimmed
        ))),
    }
}

/// Checked conversion to milliseconds; a value too large for u64 is a
/// validation error like any other malformed input.
fn to_ms(hours: u64, minutes: u64, seconds: u64, input: &str) -> Result<u64, StudioError> {
    hours
        .checked_mul(60)
        .and_then(|minutes_total| minutes_total.checked_add(minutes))
        .and_then(|minutes_total| minutes_total.checked_mul(60))
        .and_then(|seconds_total| seconds_total.checked_add(seconds))
        .and_then(|seconds_total| seconds_total.checked_mul(1_000))
        .ok_or_else(|| {
            StudioError::InvalidArgument(format!("Time '{}' is out of range", input))
        })
}

/// Parses both bounds and enforces `end > start`.
pub fn parse_time_range(start: &str, end: &str) -> Result<(u64, u64), StudioError> {
    let start_ms = parse_timecode(start)?;
    let end_ms = parse_timecode(end)?;
    if end_ms <= start_ms {
        return Err(StudioError::InvalidArgument(format!(
            "Invalid time range: end {} must be after start {}",
            end.trim(),
            start.trim()
        )));
    }
    Ok((start_ms, end_ms))
}

pub fn format_timecode(ms: u64) -> String {
    let total_seconds = ms / 1_000;
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
