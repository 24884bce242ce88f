use crate::error::NormalizeError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y%m%dT%H%M%S%z",
    "%a %b %e %H:%M:%S %Y %z",
    "%d/%b/%Y:%H:%M:%S %z",
];

// Read as UTC, after any trailing `Z`, `UTC` or `GMT` designator is removed.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%d %B %Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%B %d, %Y %I:%M %p",
    "%B %d %Y %I:%M %p",
    "%B %d %Y %I:%M%p",
    "%b %d %Y %I:%M%p",
    "%A, %B %d, %Y %H:%M:%S",
    "%A, %B %d, %Y %I:%M %p",
    "%A, %d %B %Y %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y%m%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %B %d, %Y",
];

const UTC_DESIGNATORS: &[&str] = &["Z", "z", " UTC", " GMT", "UTC", "GMT"];

/// Converts an inbound date/time string to `YYYY-MM-DDTHH:MM:SSZ` in UTC.
///
/// `None` and blank input produce `Ok(None)`. Anything else that cannot be
/// read as a date fails with [`NormalizeError::MalformedTimestamp`].
pub fn standardize_timestamp(value: Option<&str>) -> Result<Option<String>, NormalizeError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let parsed = parse_utc(raw).ok_or_else(|| NormalizeError::MalformedTimestamp {
        value: raw.to_string(),
    })?;
    Ok(Some(parsed.format(CANONICAL_FORMAT).to_string()))
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    let naive = strip_utc_designator(raw);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(parsed.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(naive, format) {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        }
    }
    None
}

fn strip_utc_designator(raw: &str) -> &str {
    UTC_DESIGNATORS
        .iter()
        .find_map(|suffix| raw.strip_suffix(suffix))
        .map_or(raw, str::trim_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standardize(value: &str) -> String {
        standardize_timestamp(Some(value))
            .expect("parseable")
            .expect("non-empty")
    }

    #[test]
    fn converts_offsets_to_utc() {
        assert_eq!(standardize("2024-01-15T10:00:00+02:00"), "2024-01-15T08:00:00Z");
        assert_eq!(standardize("2024-01-15T10:00:00-05:30"), "2024-01-15T15:30:00Z");
        assert_eq!(standardize("2024-01-15T23:30:00-01:00"), "2024-01-16T00:30:00Z");
    }

    #[test]
    fn drops_fractional_seconds() {
        assert_eq!(standardize("2024-01-16T12:00:00.987654Z"), "2024-01-16T12:00:00Z");
    }

    #[test]
    fn accepts_rfc2822() {
        assert_eq!(
            standardize("Mon, 15 Jan 2024 10:00:00 +0200"),
            "2024-01-15T08:00:00Z"
        );
    }

    #[test]
    fn unqualified_values_are_utc() {
        assert_eq!(standardize("2024-01-15 10:00:00"), "2024-01-15T10:00:00Z");
        assert_eq!(standardize("2024-01-15T10:00:00"), "2024-01-15T10:00:00Z");
        assert_eq!(standardize("2024/01/15 10:00:00"), "2024-01-15T10:00:00Z");
        assert_eq!(standardize("2024-01-15"), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn accepts_common_shapes() {
        let cases = [
            ("2024-01-15T10:00Z", "2024-01-15T10:00:00Z"),
            ("2024-01-15T10:00+02:00", "2024-01-15T08:00:00Z"),
            ("2024-01-15T10:00:00 UTC", "2024-01-15T10:00:00Z"),
            ("2024-01-15 10:00:00 GMT", "2024-01-15T10:00:00Z"),
            ("2024-01-15 10:00:00 UTC", "2024-01-15T10:00:00Z"),
            ("20240115T100000Z", "2024-01-15T10:00:00Z"),
            ("20240115T100000", "2024-01-15T10:00:00Z"),
            ("20240115", "2024-01-15T00:00:00Z"),
            ("Jan 15 2024 10:00AM", "2024-01-15T10:00:00Z"),
            ("Jan 15 2024 10:00PM", "2024-01-15T22:00:00Z"),
            ("01/15/2024 10:30 PM", "2024-01-15T22:30:00Z"),
            ("01/15/2024 10:30:00", "2024-01-15T10:30:00Z"),
            ("January 15, 2024 10:00:00", "2024-01-15T10:00:00Z"),
            ("January 15, 2024", "2024-01-15T00:00:00Z"),
            ("15 January 2024 10:00:00", "2024-01-15T10:00:00Z"),
            ("Monday, January 15, 2024 10:00:00", "2024-01-15T10:00:00Z"),
            ("Monday, January 15, 2024", "2024-01-15T00:00:00Z"),
            ("Mon Jan 15 10:00:00 2024", "2024-01-15T10:00:00Z"),
            ("Mon, 15 Jan 2024 10:00:00 GMT", "2024-01-15T10:00:00Z"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                standardize_timestamp(Some(input)),
                Ok(Some(expected.to_string())),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(standardize("  2024-01-15T10:00:00Z\n"), "2024-01-15T10:00:00Z");
    }

    #[test]
    fn standardizing_is_idempotent() {
        for input in [
            "2024-01-15T10:00:00+02:00",
            "Mon, 15 Jan 2024 10:00:00 +0200",
            "2024-01-15 10:00:00",
            "2024-01-16T12:00:00.5Z",
        ] {
            let once = standardize(input);
            assert_eq!(standardize(&once), once);
        }
    }

    #[test]
    fn null_and_empty_yield_none() {
        assert_eq!(standardize_timestamp(None), Ok(None));
        assert_eq!(standardize_timestamp(Some("")), Ok(None));
        assert_eq!(standardize_timestamp(Some("   ")), Ok(None));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(
            standardize_timestamp(Some("not-a-date")),
            Err(NormalizeError::MalformedTimestamp {
                value: "not-a-date".to_string()
            })
        );
        assert!(standardize_timestamp(Some("2024-13-45T99:00:00Z")).is_err());
        assert!(standardize_timestamp(Some("1705305600")).is_err());
        assert!(standardize_timestamp(Some("Z")).is_err());
    }
}
