//! Parsing of caller-supplied `schedule_time` values.
//!
//! Accepts RFC 3339 with an offset, or a naive ISO-8601 date-time which is
//! read as server local time. A bare date means local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::errors::EmailError;

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_schedule_time(raw: &str) -> Result<DateTime<Utc>, EmailError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return from_local(naive, raw);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return from_local(midnight, raw);
        }
    }

    Err(EmailError::InvalidScheduleTime(raw.to_string()))
}

fn from_local(naive: NaiveDateTime, raw: &str) -> Result<DateTime<Utc>, EmailError> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| EmailError::InvalidScheduleTime(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn parses_rfc3339_utc() {
        let dt = parse_schedule_time("2030-05-01T09:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2030-05-01T09:30:00+00:00");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_schedule_time("2030-05-01T09:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2030, 5, 1, 7, 30, 0).unwrap());
    }

    #[test]
    fn parses_space_separated_offset() {
        let dt = parse_schedule_time("2030-05-01 09:30:00.250-05:00").unwrap();
        assert_eq!(dt.timestamp_millis() % 1000, 250);
        assert_eq!(dt.format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn naive_value_is_local_time() {
        let dt = parse_schedule_time("2030-05-01T09:30:00").unwrap();
        let local = dt.with_timezone(&Local);
        assert_eq!(local.naive_local().time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn naive_without_seconds() {
        let dt = parse_schedule_time("2030-05-01 09:30").unwrap();
        assert_eq!(
            dt.with_timezone(&Local).naive_local().time(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn bare_date_is_local_midnight() {
        let dt = parse_schedule_time("2030-05-01").unwrap();
        let local = dt.with_timezone(&Local).naive_local();
        assert_eq!(local.time(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2030, 5, 1).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_schedule_time("next tuesday").unwrap_err();
        assert_eq!(err.to_string(), "Invalid schedule_time: next tuesday");
    }
}
