use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Converts any numeric ingestion value into the canonical `f64` representation.
pub fn numeric_to_f64<T: ToPrimitive>(value: &T, field_name: &str) -> ChartResult<f64> {
    let converted = value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })?;
    if !converted.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Ok(converted)
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`], used by the opt-in date formatters.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}
