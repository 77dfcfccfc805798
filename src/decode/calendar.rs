use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::SqlInterpolateError;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<date>[+-]?\d{1,9}-\d{1,2}-\d{1,2})(?:\s+(?P<era>BC|AD))?$")
        .expect("valid date regex")
});

static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<date>[+-]?\d{1,9}-\d{1,2}-\d{1,2})[T ]",
        r"(?P<hour>\d{1,2}):(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.(?P<fraction>\d{1,9}))?)?",
        r"(?:\s+(?P<era_before>BC|AD))?",
        r"\s*(?P<zone>Z|UTC|GMT|[+-]\d{2}(?::?\d{2}(?::?\d{2})?)?)",
        r"(?:\s+(?P<era_after>BC|AD))?$",
    ))
    .expect("valid date-time regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Era {
    Ad,
    Bc,
}

impl Era {
    fn from_marker(marker: Option<&str>) -> Option<Era> {
        match marker {
            Some("BC") => Some(Era::Bc),
            Some(_) => Some(Era::Ad),
            None => None,
        }
    }
}

/// Convert backend date text (`YYYY-MM-DD`, optionally followed by `BC`) to a proleptic
/// Gregorian date. Year N BC is astronomical year `1 - N`, so `431-09-22 BC` is year -430.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` if the text is not a valid calendar date.
pub fn decode_date(s: &str) -> Result<NaiveDate, SqlInterpolateError> {
    let err = || SqlInterpolateError::decode("date", s);
    let caps = DATE.captures(s).ok_or_else(err)?;
    let era = Era::from_marker(caps.name("era").map(|m| m.as_str()));
    build_date(&caps["date"], era).ok_or_else(err)
}

/// Convert backend date-time text that carries its own zone (`Z`, `UTC`, `GMT` or a numeric
/// offset such as `+10`, `+1000` or `+10:00`).
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` if the zone is missing or any field is out of
/// range.
pub fn decode_date_time_with_zone(s: &str) -> Result<DateTime<FixedOffset>, SqlInterpolateError> {
    let err = || SqlInterpolateError::decode("date-time with zone", s);
    let caps = DATE_TIME.captures(s).ok_or_else(err)?;

    let era = match (caps.name("era_before"), caps.name("era_after")) {
        (Some(_), Some(_)) => return Err(err()),
        (before, after) => Era::from_marker(before.or(after).map(|m| m.as_str())),
    };
    let date = build_date(&caps["date"], era).ok_or_else(err)?;
    let time = build_time(
        &caps["hour"],
        &caps["minute"],
        caps.name("second").map(|m| m.as_str()),
        caps.name("fraction").map(|m| m.as_str()),
    )
    .ok_or_else(err)?;
    let offset = parse_offset(&caps["zone"]).ok_or_else(err)?;

    NaiveDateTime::new(date, time)
        .and_local_timezone(offset)
        .single()
        .ok_or_else(err)
}

fn build_date(text: &str, era: Option<Era>) -> Option<NaiveDate> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let mut parts = body.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    let year = match (negative, era) {
        // a signed year is already astronomical; an era marker on top is ambiguous
        (true, Some(_)) => return None,
        (true, None) => -year,
        (false, Some(Era::Bc)) if year == 0 => return None,
        (false, Some(Era::Bc)) => 1 - year,
        (false, _) => year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_time(
    hour: &str,
    minute: &str,
    second: Option<&str>,
    fraction: Option<&str>,
) -> Option<NaiveTime> {
    let nanos = match fraction {
        Some(digits) => format!("{digits:0<9}").parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_nano_opt(
        hour.parse().ok()?,
        minute.parse().ok()?,
        second.map_or(Some(0), |s| s.parse().ok())?,
        nanos,
    )
}

fn parse_offset(zone: &str) -> Option<FixedOffset> {
    if matches!(zone, "Z" | "UTC" | "GMT") {
        return FixedOffset::east_opt(0);
    }
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(char::is_ascii_digit).collect();
    let field = |range: std::ops::Range<usize>| -> Option<i32> {
        digits.get(range).map_or(Some(0), |d| d.parse().ok())
    };
    let seconds = field(0..2)? * 3600 + field(2..4)? * 60 + field(4..6)?;
    FixedOffset::east_opt(sign * seconds)
}

/// Render a date the way the decoder reads it back: years at or before zero use `BC`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    if date.year() >= 1 {
        date.format("%Y-%m-%d").to_string()
    } else {
        format!(
            "{:04}-{:02}-{:02} BC",
            1 - date.year(),
            date.month(),
            date.day()
        )
    }
}

pub(crate) fn format_date_time(value: NaiveDateTime, offset: Option<FixedOffset>) -> String {
    let date = value.date();
    let mut out = if date.year() >= 1 {
        date.format("%Y-%m-%d").to_string()
    } else {
        format!("{:04}-{:02}-{:02}", 1 - date.year(), date.month(), date.day())
    };
    out.push(' ');
    out.push_str(&value.time().format("%H:%M:%S%.f").to_string());
    if let Some(offset) = offset {
        out.push_str(&offset.to_string());
    }
    if date.year() < 1 {
        out.push_str(" BC");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plain_date() {
        assert_eq!(decode_date("2012-09-22").unwrap(), ymd(2012, 9, 22));
    }

    #[test]
    fn bc_date_is_astronomical() {
        assert_eq!(decode_date("431-09-22 BC").unwrap(), ymd(-430, 9, 22));
        assert_eq!(decode_date("0001-01-01 BC").unwrap(), ymd(0, 1, 1));
        assert_eq!(decode_date("0431-09-22 AD").unwrap(), ymd(431, 9, 22));
    }

    #[test]
    fn invalid_dates_fail() {
        for bad in [
            "2012-02-30",
            "0000-01-01 BC",
            "-5-01-01 BC",
            "2012/09/22",
            "yesterday",
            " 2012-09-22",
            "2012-09-22\n",
        ] {
            assert!(decode_date(bad).is_err(), "{bad:?} should not decode");
        }
    }

    #[test]
    fn date_formatting_round_trips_bc() {
        let date = ymd(-430, 9, 22);
        assert_eq!(format_date(date), "0431-09-22 BC");
        assert_eq!(decode_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn date_time_offsets() {
        let expected = FixedOffset::east_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2012, 9, 22, 10, 4, 32)
            .unwrap();
        for text in [
            "2012-09-22 10:04:32 +06:00",
            "2012-09-22 10:04:32+06",
            "2012-09-22T10:04:32+0600",
        ] {
            assert_eq!(decode_date_time_with_zone(text).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn date_time_utc_and_fraction() {
        let dt = decode_date_time_with_zone("2012-09-22 10:04:32.5Z").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.nanosecond(), 500_000_000);
    }

    #[test]
    fn date_time_bc_either_side_of_zone() {
        let a = decode_date_time_with_zone("0044-03-15 12:00:00+00 BC").unwrap();
        let b = decode_date_time_with_zone("0044-03-15 12:00:00 BC+00:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year(), -43);
    }

    #[test]
    fn date_time_requires_zone() {
        assert!(decode_date_time_with_zone("2012-09-22 10:04:32").is_err());
        assert!(decode_date_time_with_zone("2012-09-22 25:04:32Z").is_err());
        assert!(decode_date_time_with_zone(" 2012-09-22 10:04:32Z").is_err());
        assert!(decode_date_time_with_zone("2012-09-22 10:04:32Z ").is_err());
    }

    #[test]
    fn date_time_formatting_round_trips() {
        let value = decode_date_time_with_zone("0044-03-15 12:30:00.25-05:30 BC").unwrap();
        let text = format_date_time(value.naive_local(), Some(*value.offset()));
        assert_eq!(text, "0044-03-15 12:30:00.250-05:30 BC");
        assert_eq!(decode_date_time_with_zone(&text).unwrap(), value);
    }
}
