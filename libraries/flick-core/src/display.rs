//! Pure display and derivation helpers.
//!
//! Everything in here is side-effect free: screens feed these functions
//! server payloads and render the returned strings/slices directly.

use chrono::{DateTime, NaiveDate};

use crate::types::Movie;

/// Fallback title when a movie carries no usable title at all.
pub const UNTITLED: &str = "Untitled";

/// Resolve the display title of a movie.
///
/// Prefers the trimmed `title`, falls back to the trimmed
/// `original_title`, and finally to `"Untitled"` when both are missing or
/// whitespace-only.
pub fn movie_title(movie: &Movie) -> String {
    for candidate in [&movie.title, &movie.original_title] {
        if let Some(value) = candidate {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    UNTITLED.to_string()
}

/// Format a movie's rating for display.
///
/// Missing or NaN ratings render as `"N/A"`; numeric ratings render with
/// exactly one decimal place. Rounding is Rust's `{:.1}` formatting, i.e.
/// round-half-to-even on the binary value (`7.25` → `"7.2"`).
pub fn movie_rating(movie: &Movie) -> String {
    match movie.rate {
        Some(rate) if !rate.is_nan() => format!("{rate:.1}"),
        _ => "N/A".to_string(),
    }
}

/// Format a runtime in minutes as `"2h 5m"`.
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Format a playback position in seconds as a clock string.
///
/// `"1:02:05"` with an hour component, `"4:37"` without; seconds are
/// always two digits, minutes only when an hour component is shown.
pub fn format_playback_position(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// The `count` most recently released movies, newest first.
///
/// Release dates are parsed as RFC 3339 or plain `YYYY-MM-DD`; movies with
/// missing or unparseable dates sort after every dated movie. The home
/// screen uses this with `count = 4` for the hero banner.
pub fn latest_movies(movies: &[Movie], count: usize) -> Vec<Movie> {
    let mut sorted: Vec<Movie> = movies.to_vec();
    sorted.sort_by(|a, b| {
        let da = a.release_date.as_deref().and_then(parse_release_date);
        let db = b.release_date.as_deref().and_then(parse_release_date);
        db.cmp(&da)
    });
    sorted.truncate(count);
    sorted
}

fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
