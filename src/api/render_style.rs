use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the current render frame.
///
/// Vertical layout of a frame, top to bottom: main chart, x label band,
/// gap, preview strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub series_stroke_width: f64,
    pub preview_stroke_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Height of the band under the chart that holds x labels.
    pub x_label_band_px: f64,
    /// Space between the x label band and the preview strip.
    pub preview_gap_px: f64,
    /// Overlay drawn over the preview outside the selected window.
    pub scrubber_dim_color: Color,
    pub scrubber_handle_color: Color,
    /// Thin bars joining the handles above and below the window.
    pub scrubber_frame_color: Color,
    pub scrubber_frame_width: f64,
    pub tooltip_line_color: Color,
    pub tooltip_line_width: f64,
    pub tooltip_marker_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        let gray = Color::rgb(0.5, 0.5, 0.5);
        Self {
            series_stroke_width: 2.5,
            preview_stroke_width: 1.0,
            grid_line_color: gray.with_alpha(0.4),
            grid_line_width: 0.5,
            axis_label_color: gray,
            axis_label_font_size_px: 12.0,
            x_label_band_px: 24.0,
            preview_gap_px: 16.0,
            scrubber_dim_color: gray.with_alpha(0.15),
            scrubber_handle_color: gray.with_alpha(0.5),
            scrubber_frame_color: gray.with_alpha(0.5),
            scrubber_frame_width: 2.0,
            tooltip_line_color: Color::rgb(0.85, 0.85, 0.85),
            tooltip_line_width: 1.0,
            tooltip_marker_size_px: 6.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.grid_line_color,
            self.axis_label_color,
            self.scrubber_dim_color,
            self.scrubber_handle_color,
            self.scrubber_frame_color,
            self.tooltip_line_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("series stroke width", self.series_stroke_width),
            ("preview stroke width", self.preview_stroke_width),
            ("grid line width", self.grid_line_width),
            ("axis label font size", self.axis_label_font_size_px),
            ("scrubber frame width", self.scrubber_frame_width),
            ("tooltip line width", self.tooltip_line_width),
            ("tooltip marker size", self.tooltip_marker_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("x label band", self.x_label_band_px),
            ("preview gap", self.preview_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}
