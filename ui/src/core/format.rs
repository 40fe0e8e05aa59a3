//! Formatting helpers for presenting scores and timestamps.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

/// Rounded integer percent; 0 when there is nothing to divide by.
pub fn percent(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / f64::from(total) * 100.0).round() as u32
}

/// `"7 / 10 (70%)"`
pub fn format_score(score: u32, total: u32) -> String {
    format!("{score} / {total} ({}%)", percent(score, total))
}

pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Score with a server-computed percentage, e.g. `"3 / 4 (75.0%)"`.
pub fn format_snapshot(score: u32, total: u32, percent: f64) -> String {
    format!("{score} / {total} ({percent:.1}%)")
}

/// RFC 3339 timestamps as `YYYY-MM-DD HH:MM` UTC; anything unparsable is
/// shown as received.
pub fn format_timestamp(raw: &str) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|ts| ts.to_offset(time::UtcOffset::UTC).format(&format).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_guards_zero_total() {
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(format_score(1, 2), "1 / 2 (50%)");
    }

    #[test]
    fn snapshot_uses_one_decimal() {
        assert_eq!(format_snapshot(3, 4, 75.0), "3 / 4 (75.0%)");
        assert_eq!(format_one_decimal(63.27), "63.3");
    }

    #[test]
    fn timestamps_render_compact_utc() {
        assert_eq!(
            format_timestamp("2024-05-01T14:03:59.123Z"),
            "2024-05-01 14:03"
        );
        assert_eq!(
            format_timestamp("2024-05-01T14:03:00+02:00"),
            "2024-05-01 12:03"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
