//! Duration parsing for colon-separated clock strings.
//!
//! Garmin writes whole-activity times as `HH:MM:SS` and paces or lap
//! splits as `M:SS`. The two shapes coerce to different units on purpose:
//! activity times become whole minutes, paces become seconds.

/// Parses a duration cell, trying `HH:MM:SS` before `M:SS`.
pub fn parse_duration(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    parse_hms_minutes(trimmed).or_else(|| parse_ms_seconds(trimmed))
}

/// `HH:MM:SS` to total whole minutes: `hours * 60 + minutes`.
///
/// Seconds are validated but dropped, so "1:02:59" is 62 minutes.
pub fn parse_hms_minutes(value: &str) -> Option<f64> {
    let mut parts = value.split(':');
    let hours = clock_field(parts.next()?, 23)?;
    let minutes = clock_field(parts.next()?, 59)?;
    let _seconds = clock_field(parts.next()?, 59)?;
    if parts.next().is_some() {
        return None;
    }
    Some(f64::from(hours * 60 + minutes))
}

/// `M:SS` to total seconds: `minutes * 60 + seconds`.
pub fn parse_ms_seconds(value: &str) -> Option<f64> {
    let mut parts = value.split(':');
    let minutes = clock_field(parts.next()?, 59)?;
    let seconds = clock_field(parts.next()?, 59)?;
    if parts.next().is_some() {
        return None;
    }
    Some(f64::from(minutes * 60 + seconds))
}

/// One or two digits, at most `max`.
fn clock_field(part: &str, max: u32) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = part.parse().ok()?;
    (value <= max).then_some(value)
}
