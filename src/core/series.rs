use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::core::primitives::{datetime_to_unix_seconds, numeric_to_f64};
use crate::core::{Color, ValueRange};
use crate::error::{ChartError, ChartResult};

/// Immutable multi-series data sharing one strictly increasing x axis.
///
/// Every y series has the same length as `x`, and carries its own display
/// color and label. The store is built once and then shared by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore {
    x: Vec<f64>,
    y: Vec<Vec<f64>>,
    colors: Vec<Color>,
    labels: Vec<String>,
}

impl SeriesStore {
    pub fn new(
        x: Vec<f64>,
        y: Vec<Vec<f64>>,
        colors: Vec<Color>,
        labels: Vec<String>,
    ) -> ChartResult<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        for (series, values) in y.iter().enumerate() {
            if values.len() != x.len() {
                return Err(ChartError::SeriesLengthMismatch {
                    series,
                    expected: x.len(),
                    actual: values.len(),
                });
            }
            if values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series {series} contains non-finite values"
                )));
            }
        }
        if colors.len() != y.len() {
            return Err(ChartError::MetadataCountMismatch {
                field: "colors",
                expected: y.len(),
                actual: colors.len(),
            });
        }
        if labels.len() != y.len() {
            return Err(ChartError::MetadataCountMismatch {
                field: "labels",
                expected: y.len(),
                actual: labels.len(),
            });
        }
        for color in &colors {
            color.validate()?;
        }

        if x.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData("x values must be finite".to_owned()));
        }
        if let Some(index) = x.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::NonIncreasingX { index: index + 1 });
        }

        debug!(
            points = x.len(),
            series = y.len(),
            "series store constructed"
        );
        Ok(Self {
            x,
            y,
            colors,
            labels,
        })
    }

    /// Builds a store from arbitrary numeric inputs (integers, floats, decimals).
    ///
    /// Values are converted to `f64` exactly once, here.
    pub fn from_numeric<X, Y>(
        x: &[X],
        y: &[Vec<Y>],
        colors: Vec<Color>,
        labels: Vec<String>,
    ) -> ChartResult<Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let x = x
            .iter()
            .map(|value| numeric_to_f64(value, "x value"))
            .collect::<ChartResult<Vec<_>>>()?;
        let y = y
            .iter()
            .map(|series| {
                series
                    .iter()
                    .map(|value| numeric_to_f64(value, "y value"))
                    .collect::<ChartResult<Vec<_>>>()
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(x, y, colors, labels)
    }

    /// Builds a store whose x axis is expressed in unix seconds.
    pub fn from_timestamps<Y: ToPrimitive>(
        x: &[DateTime<Utc>],
        y: &[Vec<Y>],
        colors: Vec<Color>,
        labels: Vec<String>,
    ) -> ChartResult<Self> {
        let x: Vec<f64> = x.iter().copied().map(datetime_to_unix_seconds).collect();
        Self::from_numeric(&x, y, colors, labels)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: construction rejects empty data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.x.len() - 1
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.y.len()
    }

    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn x_at(&self, index: usize) -> Option<f64> {
        self.x.get(index).copied()
    }

    #[must_use]
    pub fn series(&self, series: usize) -> Option<&[f64]> {
        self.y.get(series).map(Vec::as_slice)
    }

    #[must_use]
    pub fn y_at(&self, series: usize, index: usize) -> Option<f64> {
        self.y.get(series)?.get(index).copied()
    }

    #[must_use]
    pub fn color(&self, series: usize) -> Option<Color> {
        self.colors.get(series).copied()
    }

    #[must_use]
    pub fn label(&self, series: usize) -> Option<&str> {
        self.labels.get(series).map(String::as_str)
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn x_range(&self) -> ValueRange {
        ValueRange::new(self.x[0], self.x[self.x.len() - 1])
    }

    /// Y extent over all series and the full x axis.
    #[must_use]
    pub fn full_y_range(&self) -> ValueRange {
        self.y_range_over(0..self.y.len(), 0, self.last_index())
            .unwrap_or(ValueRange::new(0.0, 0.0))
    }

    /// Y extent over the given series restricted to `[first, last]` inclusive.
    ///
    /// Returns `None` when no series is given or the index window is empty.
    pub fn y_range_over(
        &self,
        series: impl IntoIterator<Item = usize>,
        first: usize,
        last: usize,
    ) -> Option<ValueRange> {
        let last = last.min(self.last_index());
        if first > last {
            return None;
        }

        let mut range: Option<ValueRange> = None;
        for values in series.into_iter().filter_map(|index| self.y.get(index)) {
            for &value in &values[first..=last] {
                range = Some(match range {
                    Some(current) => current.include(value),
                    None => ValueRange::new(value, value),
                });
            }
        }
        range
    }

    /// Index of the x value closest to `x`, ties resolved toward the lower index.
    #[must_use]
    pub fn nearest_index(&self, x: f64) -> usize {
        let upper = self.x.partition_point(|value| *value < x);
        if upper == 0 {
            return 0;
        }
        if upper >= self.x.len() {
            return self.last_index();
        }
        let lower = upper - 1;
        if (x - self.x[lower]) <= (self.x[upper] - x) {
            lower
        } else {
            upper
        }
    }
}
