use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::errors::WeightCoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

/// Parses a strict 14-digit `yyyymmddhhmmss` timestamp.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, WeightCoreError> {
    if raw.len() != 14 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WeightCoreError::InvalidTimestamp(raw.to_string()));
    }
    NaiveDateTime::parse_from_str(raw, "%Y%m%d%H%M%S")
        .map_err(|_| WeightCoreError::InvalidTimestamp(raw.to_string()))
}

pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%d%H%M%S").to_string()
}

fn first_instant_of_this_month() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

/// Resolves an optional `from`/`to` pair into a concrete window, applying
/// the documented defaults (`from` = start of current month, `to` = now)
/// and rejecting an inverted range.
pub fn resolve_window(from: Option<&str>, to: Option<&str>) -> Result<TimeWindow, WeightCoreError> {
    let from_dt = match from {
        Some(s) => parse_timestamp(s)?,
        None => first_instant_of_this_month(),
    };
    let to_dt = match to {
        Some(s) => parse_timestamp(s)?,
        None => Utc::now().naive_utc(),
    };

    if from_dt > to_dt {
        return Err(WeightCoreError::InvalidDateRange {
            from: format_timestamp(from_dt),
            to: format_timestamp(to_dt),
        });
    }

    Ok(TimeWindow { from: from_dt, to: to_dt })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_timestamp() {
        assert!(parse_timestamp("2024-12-01").is_err());
        assert!(parse_timestamp("202412011200").is_err());
    }

    #[test]
    fn accepts_well_formed_timestamp() {
        assert!(parse_timestamp("20241201120000").is_ok());
    }

    #[test]
    fn rejects_inverted_window() {
        let result = resolve_window(Some("20241201120000"), Some("20241101120000"));
        assert!(result.is_err());
    }

    #[test]
    fn accepts_well_ordered_window() {
        let result = resolve_window(Some("20241101000000"), Some("20241201000000"));
        assert!(result.is_ok());
    }
}
