//! Wall-clock formatting for sunrise/sunset

use chrono::{DateTime, Timelike};

/// Format `epoch` seconds shifted by `offset` seconds as `H:MM AM/PM`.
///
/// The shifted instant is read as UTC, so `offset` is the provider's
/// timezone offset for the city. Returns `None` if the instant is out of range.
pub fn format_clock(epoch: i64, offset: i64) -> Option<String> {
    let local = DateTime::from_timestamp(epoch.checked_add(offset)?, 0)?;
    let hour = local.hour();
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    Some(format!("{}:{:02} {}", hour12, local.minute(), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_is_twelve_am() {
        assert_eq!(format_clock(0, 0).as_deref(), Some("12:00 AM"));
    }

    #[test]
    fn test_noon_is_twelve_pm() {
        assert_eq!(format_clock(12 * 3600, 0).as_deref(), Some("12:00 PM"));
    }

    #[test]
    fn test_zero_pads_minutes() {
        // 1700000000 = 2023-11-14T22:13:20Z
        assert_eq!(format_clock(1_700_000_000, 0).as_deref(), Some("10:13 PM"));
        assert_eq!(format_clock(5 * 60, 0).as_deref(), Some("12:05 AM"));
    }

    #[test]
    fn test_offset_shifts_wall_clock() {
        // IST is +05:30
        assert_eq!(
            format_clock(1_700_000_000, 19_800).as_deref(),
            Some("3:43 AM")
        );
        // negative offsets roll back across midnight
        assert_eq!(format_clock(3600, -7200).as_deref(), Some("11:00 PM"));
    }

    #[test]
    fn test_zero_offset_matches_utc_decomposition() {
        for epoch in [0_i64, 59, 3599, 43_199, 86_399, 1_700_040_000, 1_234_567_890] {
            let secs_of_day = epoch.rem_euclid(86_400);
            let hour = secs_of_day / 3600;
            let minute = (secs_of_day % 3600) / 60;
            let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
            let suffix = if hour >= 12 { "PM" } else { "AM" };
            let expected = format!("{hour12}:{minute:02} {suffix}");
            assert_eq!(format_clock(epoch, 0), Some(expected), "epoch {epoch}");
        }
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(format_clock(i64::MAX, 1), None);
    }
}
