use serde::{Deserialize, Serialize};

use crate::core::PlotSize;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ScrubberLayout, ZoomLimits};

use super::{AxisLabelConfig, RenderStyle};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Main chart surface in pixels.
    pub chart_size: PlotSize,
    /// Preview strip geometry; the strip has its own pointer coordinates.
    pub preview: ScrubberLayout,
    /// Fewest data points a zoomed window may cover.
    #[serde(default = "default_min_span_points")]
    pub min_span_points: usize,
    #[serde(default)]
    pub zoom_limits: ZoomLimits,
    #[serde(default)]
    pub axis_labels: AxisLabelConfig,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config whose preview strip spans the chart width and is a
    /// fifth of its height.
    #[must_use]
    pub fn new(chart_size: PlotSize) -> Self {
        Self {
            chart_size,
            preview: ScrubberLayout::new(
                chart_size.width,
                chart_size.height * DEFAULT_PREVIEW_HEIGHT_RATIO,
                DEFAULT_HANDLE_WIDTH_PX,
            ),
            min_span_points: default_min_span_points(),
            zoom_limits: ZoomLimits::default(),
            axis_labels: AxisLabelConfig::default(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_preview(mut self, preview: ScrubberLayout) -> Self {
        self.preview = preview;
        self
    }

    #[must_use]
    pub fn with_min_span_points(mut self, min_span_points: usize) -> Self {
        self.min_span_points = min_span_points;
        self
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, zoom_limits: ZoomLimits) -> Self {
        self.zoom_limits = zoom_limits;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabelConfig) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, render_style: RenderStyle) -> Self {
        self.render_style = render_style;
        self
    }

    /// Checks every nested section; returns the config unchanged on success.
    pub fn validate(self) -> ChartResult<Self> {
        self.chart_size.validate()?;
        self.preview.validate()?;
        if self.min_span_points == 0 {
            return Err(ChartError::InvalidData(
                "min span points must be >= 1".to_owned(),
            ));
        }
        self.zoom_limits.validate()?;
        self.axis_labels.validate()?;
        self.render_style.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()
    }
}

const DEFAULT_PREVIEW_HEIGHT_RATIO: f64 = 0.2;
const DEFAULT_HANDLE_WIDTH_PX: f64 = 16.0;

fn default_min_span_points() -> usize {
    2
}
