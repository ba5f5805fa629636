//! Calendar date formatting (`dd/mm/yyyy`)

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::Locale;

/// Text rendered for anything that does not resolve to a date
pub const INVALID_DATE: &str = "Invalid Date";

/// Largest timestamp magnitude accepted, in milliseconds (100 million days)
const MAX_TIMESTAMP_MILLIS: f64 = 8.64e15;

/// Something that can be shown as a date
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// An instant
    DateTime(DateTime<Utc>),
    /// Milliseconds since the Unix epoch
    Timestamp(f64),
    /// ISO-8601 text as received from the API
    Text(String),
}

impl DateValue {
    /// Resolve to an instant. Naive date-times are read in `offset`,
    /// bare dates as UTC midnight.
    pub fn resolve(&self, offset: &FixedOffset) -> Option<DateTime<Utc>> {
        match self {
            DateValue::DateTime(dt) => Some(*dt),
            DateValue::Timestamp(millis) => {
                if !millis.is_finite() || millis.abs() > MAX_TIMESTAMP_MILLIS {
                    return None;
                }
                DateTime::from_timestamp_millis(millis.trunc() as i64)
            }
            DateValue::Text(text) => parse_text(text.trim(), offset),
        }
    }
}

fn parse_text(text: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    // `2020-05-24 00:00:00` reads like `2020-05-24T00:00:00`
    let mut text = text.to_string();
    if text.as_bytes().get(10) == Some(&b' ') {
        text.replace_range(10..11, "T");
    }

    let zoned = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(local) => format!("{}+00:00", local),
        None => text.clone(),
    };
    // %z takes both `+00:00` and `+0000`
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, pattern) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, pattern) {
            return offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<DateTime<Utc>> for DateValue {
    fn from(value: DateTime<Utc>) -> Self {
        DateValue::DateTime(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        match value.and_hms_opt(0, 0, 0) {
            Some(naive) => DateValue::DateTime(naive.and_utc()),
            None => DateValue::Timestamp(f64::NAN),
        }
    }
}

impl From<f64> for DateValue {
    fn from(value: f64) -> Self {
        DateValue::Timestamp(value)
    }
}

impl From<i64> for DateValue {
    fn from(value: i64) -> Self {
        DateValue::Timestamp(value as f64)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        DateValue::Text(value)
    }
}

/// Render a value as `dd/mm/yyyy` in the locale's UTC offset, or [`INVALID_DATE`]
pub fn format_local_date(value: impl Into<DateValue>, locale: &Locale) -> String {
    let offset = FixedOffset::east_opt(locale.utc_offset_minutes.saturating_mul(60))
        .unwrap_or_else(|| Utc.fix());

    match value.into().resolve(&offset) {
        Some(instant) => {
            let local = instant.with_timezone(&offset);
            format!("{:02}/{:02}/{}", local.day(), local.month(), local.year())
        }
        None => INVALID_DATE.to_string(),
    }
}
