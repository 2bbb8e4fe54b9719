//! X tick labels and y gridlines for the current viewport.
//!
//! X labels sit at the centers of equal-width slots; the slot count is
//! bounded by how many sample-sized labels fit at the configured density.
//! Y gridlines are evenly spaced in pixels and valued against the bounded
//! y range, so they stay aligned with the zoomed polylines.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{SeriesStore, ViewportController, pixel_to_y};
use crate::error::{ChartError, ChartResult};

use super::TextMeasurer;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelConfig {
    /// Slot width as a multiple of the sample label width.
    #[serde(default = "default_density_factor")]
    pub density_factor: f64,
    #[serde(default = "default_y_gridline_count")]
    pub y_gridline_count: usize,
    /// Empty band above the topmost gridline, as a fraction of chart height.
    #[serde(default = "default_y_top_margin_ratio")]
    pub y_top_margin_ratio: f64,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            density_factor: default_density_factor(),
            y_gridline_count: default_y_gridline_count(),
            y_top_margin_ratio: default_y_top_margin_ratio(),
        }
    }
}

impl AxisLabelConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.density_factor.is_finite() || self.density_factor < 1.0 {
            return Err(ChartError::InvalidData(
                "label density factor must be finite and >= 1".to_owned(),
            ));
        }
        if self.y_gridline_count < 2 {
            return Err(ChartError::InvalidData(
                "y gridline count must be >= 2".to_owned(),
            ));
        }
        if !self.y_top_margin_ratio.is_finite() || !(0.0..1.0).contains(&self.y_top_margin_ratio)
        {
            return Err(ChartError::InvalidData(
                "y top margin ratio must be in [0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_density_factor() -> f64 {
    2.0
}

fn default_y_gridline_count() -> usize {
    6
}

fn default_y_top_margin_ratio() -> f64 {
    1.0 / 6.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisLabel {
    pub index: usize,
    pub x_value: f64,
    pub center_px: f64,
    /// Left edge for drawing so the text is centered on `center_px`.
    pub draw_x_px: f64,
    pub text_width_px: f64,
    pub text: String,
}

/// Previous and current label sets, present only when the count changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelTransition {
    pub outgoing: Vec<XAxisLabel>,
    pub incoming: Vec<XAxisLabel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XAxisLabelPlan {
    pub labels: Vec<XAxisLabel>,
    pub transition: Option<LabelTransition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YGridLine {
    pub pixel_y: f64,
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabelPlanner {
    config: AxisLabelConfig,
    previous: Vec<XAxisLabel>,
}

impl AxisLabelPlanner {
    pub fn new(config: AxisLabelConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            previous: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> AxisLabelConfig {
        self.config
    }

    /// Labels emitted by the last call to [`Self::plan_x_labels`].
    #[must_use]
    pub fn previous_labels(&self) -> &[XAxisLabel] {
        &self.previous
    }

    /// Forgets the last label set so the next plan reports no transition.
    pub fn reset_history(&mut self) {
        self.previous.clear();
    }

    /// How many labels of `sample_width_px` fit across `width_px`.
    #[must_use]
    pub fn max_x_label_count(&self, width_px: f64, sample_width_px: f64) -> usize {
        if !width_px.is_finite() || width_px <= 0.0 {
            return 0;
        }
        if !sample_width_px.is_finite() || sample_width_px <= 0.0 {
            return usize::MAX;
        }
        (width_px / (sample_width_px * self.config.density_factor)).floor() as usize
    }

    pub fn plan_x_labels(
        &mut self,
        store: &SeriesStore,
        viewport: &ViewportController,
        measurer: &dyn TextMeasurer,
        mut format: impl FnMut(f64) -> String,
    ) -> XAxisLabelPlan {
        let width = viewport.size().width;
        let index_range = viewport.index_range();
        let sample = store
            .x_at(index_range.right)
            .map(&mut format)
            .unwrap_or_default();
        let sample_width = measurer.text_width_px(&sample);
        let count = self
            .max_x_label_count(width, sample_width)
            .min(index_range.len());

        let mut labels = Vec::with_capacity(count);
        if count > 0 {
            let slot_width = width / count as f64;
            for slot in 0..count {
                let center_px = slot_width * (slot as f64 + 0.5);
                let index = viewport.index_at_pixel(store, center_px);
                let Some(x_value) = store.x_at(index) else {
                    continue;
                };
                let text = format(x_value);
                let text_width_px = measurer.text_width_px(&text);
                labels.push(XAxisLabel {
                    index,
                    x_value,
                    center_px,
                    draw_x_px: center_px - text_width_px / 2.0,
                    text_width_px,
                    text,
                });
            }
        }

        let transition = (!self.previous.is_empty() && self.previous.len() != labels.len())
            .then(|| LabelTransition {
                outgoing: std::mem::take(&mut self.previous),
                incoming: labels.clone(),
            });
        if transition.is_some() {
            trace!(count = labels.len(), "x label count changed");
        }
        self.previous.clone_from(&labels);
        XAxisLabelPlan { labels, transition }
    }

    /// Gridlines from the chart bottom up to the top margin, bottom first.
    #[must_use]
    pub fn plan_y_gridlines(
        &self,
        viewport: &ViewportController,
        format: impl Fn(f64) -> String,
    ) -> Vec<YGridLine> {
        let height = viewport.size().height;
        let y_range = viewport.bounded_y_range();
        let count = self.config.y_gridline_count;
        let top = height * self.config.y_top_margin_ratio;
        let step = (height - top) / (count - 1) as f64;

        (0..count)
            .map(|line| {
                let pixel_y = height - line as f64 * step;
                let value = pixel_to_y(pixel_y, height, y_range.min, y_range.max);
                YGridLine {
                    pixel_y,
                    value,
                    text: format(value),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisLabelConfig, AxisLabelPlanner};

    #[test]
    fn label_count_uses_density_factor() {
        let planner = AxisLabelPlanner::new(AxisLabelConfig::default()).expect("planner");
        assert_eq!(planner.max_x_label_count(500.0, 50.0), 5);
        assert_eq!(planner.max_x_label_count(499.0, 50.0), 4);
    }

    #[test]
    fn zero_width_samples_are_not_a_limit() {
        let planner = AxisLabelPlanner::new(AxisLabelConfig::default()).expect("planner");
        assert_eq!(planner.max_x_label_count(500.0, 0.0), usize::MAX);
        assert_eq!(planner.max_x_label_count(0.0, 10.0), 0);
    }

    #[test]
    fn config_rejects_single_gridline() {
        let config = AxisLabelConfig {
            y_gridline_count: 1,
            ..AxisLabelConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
