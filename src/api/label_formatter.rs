use std::fmt::Write as _;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::debug;

use crate::core::primitives::unix_seconds_to_datetime;
use crate::render::Renderer;

use super::ChartEngine;
use super::label_cache::{XLabelCache, XLabelCacheKey, XLabelCacheStats};

pub type XLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
pub type XDetailsFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
pub type YLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Month and day, e.g. `Mar 07`.
pub const SHORT_DATE_PATTERN: &str = "%b %d";
/// Weekday and full date, e.g. `Sat, 07 Mar 2020`.
pub const LONG_DATE_PATTERN: &str = "%a, %d %b %Y";

#[derive(Default)]
pub(super) struct LabelFormatters {
    x_label: Option<XLabelFormatterFn>,
    x_details: Option<XDetailsFormatterFn>,
    y_label: Option<YLabelFormatterFn>,
    generation: u64,
}

impl LabelFormatters {
    pub(super) fn format_x_label(&self, cache: &mut XLabelCache, x_value: f64) -> String {
        let key = XLabelCacheKey::new(self.generation, x_value);
        cache.get_or_format(key, || match &self.x_label {
            Some(formatter) => formatter(x_value),
            None => plain_value_label(x_value),
        })
    }

    /// Details fall back to the x label formatter before the plain value.
    pub(super) fn format_x_details(&self, x_value: f64) -> String {
        match (&self.x_details, &self.x_label) {
            (Some(formatter), _) | (None, Some(formatter)) => formatter(x_value),
            (None, None) => plain_value_label(x_value),
        }
    }

    pub(super) fn format_y_label(&self, value: f64) -> String {
        match &self.y_label {
            Some(formatter) => formatter(value),
            None => plain_value_label(value),
        }
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn set_x_label_formatter(&mut self, formatter: XLabelFormatterFn) {
        self.core.presentation.formatters.x_label = Some(formatter);
        self.bump_x_label_generation();
    }

    pub fn clear_x_label_formatter(&mut self) {
        self.core.presentation.formatters.x_label = None;
        self.bump_x_label_generation();
    }

    /// Sets the formatter used for tooltip titles.
    pub fn set_x_details_formatter(&mut self, formatter: XDetailsFormatterFn) {
        self.core.presentation.formatters.x_details = Some(formatter);
        self.refresh_tooltip();
    }

    pub fn clear_x_details_formatter(&mut self) {
        self.core.presentation.formatters.x_details = None;
        self.refresh_tooltip();
    }

    pub fn set_y_label_formatter(&mut self, formatter: YLabelFormatterFn) {
        self.core.presentation.formatters.y_label = Some(formatter);
    }

    pub fn clear_y_label_formatter(&mut self) {
        self.core.presentation.formatters.y_label = None;
    }

    #[must_use]
    pub fn x_label_cache_stats(&self) -> XLabelCacheStats {
        self.core.presentation.x_label_cache.stats()
    }

    pub fn clear_x_label_cache(&mut self) {
        self.core.presentation.x_label_cache.clear();
    }

    fn bump_x_label_generation(&mut self) {
        let presentation = &mut self.core.presentation;
        presentation.formatters.generation = presentation.formatters.generation.wrapping_add(1);
        presentation.x_label_cache.clear();
        debug!(
            generation = presentation.formatters.generation,
            "x label formatter changed"
        );
        self.refresh_tooltip();
    }
}

/// Fallback label for hosts that install no formatter: at most two
/// decimals, trailing zeros dropped.
#[must_use]
pub fn plain_value_label(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal.round_dp(2).normalize().to_string(),
        None => format!("{value}"),
    }
}

/// Formats x values holding unix seconds with a `chrono` strftime pattern.
///
/// Values outside the representable date range, or an invalid pattern,
/// fall back to [`plain_value_label`].
#[must_use]
pub fn unix_seconds_formatter(pattern: impl Into<String>) -> XLabelFormatterFn {
    let pattern = pattern.into();
    Arc::new(move |seconds| {
        let Some(time) = unix_seconds_to_datetime(seconds) else {
            return plain_value_label(seconds);
        };
        let mut text = String::new();
        if write!(text, "{}", time.format(&pattern)).is_err() {
            return plain_value_label(seconds);
        }
        text
    })
}

#[cfg(test)]
mod tests {
    use super::{LONG_DATE_PATTERN, SHORT_DATE_PATTERN, plain_value_label, unix_seconds_formatter};

    #[test]
    fn plain_labels_trim_trailing_zeros() {
        assert_eq!(plain_value_label(1200.0), "1200");
        assert_eq!(plain_value_label(2.5), "2.5");
        assert_eq!(plain_value_label(3.14159), "3.14");
        assert_eq!(plain_value_label(-0.001), "0");
    }

    #[test]
    fn unix_seconds_use_date_patterns() {
        // 2020-03-07T00:00:00Z
        let seconds = 1_583_539_200.0;
        assert_eq!(unix_seconds_formatter(SHORT_DATE_PATTERN)(seconds), "Mar 07");
        assert_eq!(
            unix_seconds_formatter(LONG_DATE_PATTERN)(seconds),
            "Sat, 07 Mar 2020"
        );
    }

    #[test]
    fn out_of_range_seconds_fall_back_to_plain_labels() {
        assert_eq!(
            unix_seconds_formatter(SHORT_DATE_PATTERN)(f64::MAX),
            plain_value_label(f64::MAX)
        );
    }
}
