use chrono::{DateTime, FixedOffset, Local};

use super::calendar::decode_date_time_with_zone;
use crate::error::SqlInterpolateError;

/// The local system's current UTC offset, formatted `+10:00` or `-09:30`.
///
/// Sampled on every call. Drivers can use it to tell the backend which zone the client is in.
#[must_use]
pub fn system_time_zone() -> String {
    Local::now().format("%:z").to_string()
}

/// Convert zone-less date-time text by assuming the process's local offset at call time.
///
/// Equivalent to `decode_date_time_with_zone(&format!("{s}{}", system_time_zone()))`.
///
/// # Errors
/// Returns `SqlInterpolateError::DecodeError` if `s` is not a date-time, or already carries
/// a zone.
pub fn decode_date_time_without_zone(
    s: &str,
) -> Result<DateTime<FixedOffset>, SqlInterpolateError> {
    let zoned = format!("{s}{}", system_time_zone());
    decode_date_time_with_zone(&zoned).map_err(|_| SqlInterpolateError::decode("date-time", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_string_shape() {
        let tz = system_time_zone();
        assert_eq!(tz.len(), 6, "{tz}");
        assert!(tz.starts_with('+') || tz.starts_with('-'));
        assert_eq!(&tz[3..4], ":");
    }

    #[test]
    fn matches_explicit_local_zone() {
        let s = "2012-09-22 10:04:32";
        let tz = system_time_zone();
        let without = decode_date_time_without_zone(s).unwrap();
        let with = decode_date_time_with_zone(&format!("{s}{tz}")).unwrap();
        assert_eq!(without, with);
        assert_eq!(without.offset().to_string(), tz);
    }

    #[test]
    fn rejects_input_with_its_own_zone() {
        assert!(decode_date_time_without_zone("2012-09-22 10:04:32Z").is_err());
        assert!(decode_date_time_without_zone(" 2012-09-22 10:04:32").is_err());
    }
}
