//! Pinch-zoom and drag-pan resolution for the main chart.
//!
//! Both helpers operate on full-layout bounds and always keep the window
//! inside `[0, total_width]`.

use serde::{Deserialize, Serialize};

use crate::core::ViewBounds;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    /// Largest allowed magnification relative to the full layout.
    pub max_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { max_zoom: 15.0 }
    }
}

impl ZoomLimits {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(ChartError::InvalidData(
                "max zoom must be finite and >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Zooms the window around an anchor given in zoomed (view) pixels.
///
/// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The anchor keeps
/// pointing at the same full-layout position unless the window hits a wall.
pub fn resolve_zoom_bounds(
    bounds: ViewBounds,
    factor: f64,
    anchor_view_px: f64,
    total_width: f64,
    limits: ZoomLimits,
) -> ChartResult<ViewBounds> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "zoom factor must be finite and > 0".to_owned(),
        ));
    }
    if !anchor_view_px.is_finite() {
        return Err(ChartError::InvalidData(
            "zoom anchor must be finite".to_owned(),
        ));
    }
    validate_width(total_width)?;
    let limits = limits.validate()?;

    let span = bounds.span();
    let min_span = total_width / limits.max_zoom;
    let target_span = (span / factor).clamp(min_span, total_width);
    let anchor_ratio = (anchor_view_px / total_width).clamp(0.0, 1.0);
    let anchor_full = bounds.left_px + anchor_ratio * span;

    Ok(shift_inside(
        anchor_full - anchor_ratio * target_span,
        target_span,
        total_width,
    ))
}

/// Pans the window by a drag delta given in zoomed (view) pixels.
///
/// Dragging the content to the right (positive delta) reveals earlier data,
/// so the window moves left.
pub fn resolve_pan_bounds(
    bounds: ViewBounds,
    delta_view_px: f64,
    total_width: f64,
) -> ChartResult<ViewBounds> {
    if !delta_view_px.is_finite() {
        return Err(ChartError::InvalidData(
            "pan delta must be finite".to_owned(),
        ));
    }
    validate_width(total_width)?;

    let span = bounds.span();
    let delta_full = delta_view_px * span / total_width;
    Ok(shift_inside(bounds.left_px - delta_full, span, total_width))
}

fn shift_inside(left: f64, span: f64, total_width: f64) -> ViewBounds {
    let span = span.min(total_width);
    let left = left.clamp(0.0, total_width - span);
    ViewBounds::new(left, left + span)
}

fn validate_width(total_width: f64) -> ChartResult<()> {
    if !total_width.is_finite() || total_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "total width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ZoomLimits, resolve_pan_bounds, resolve_zoom_bounds};
    use crate::core::ViewBounds;

    #[test]
    fn zoom_keeps_anchor_position() {
        let bounds = ViewBounds::new(0.0, 1000.0);
        let zoomed = resolve_zoom_bounds(bounds, 2.0, 250.0, 1000.0, ZoomLimits::default())
            .expect("zoom");
        assert!((zoomed.left_px - 125.0).abs() <= 1e-9);
        assert!((zoomed.right_px - 625.0).abs() <= 1e-9);
    }

    #[test]
    fn zoom_out_never_exceeds_full_width() {
        let bounds = ViewBounds::new(200.0, 400.0);
        let zoomed = resolve_zoom_bounds(bounds, 0.01, 500.0, 1000.0, ZoomLimits::default())
            .expect("zoom");
        assert_eq!(zoomed, ViewBounds::new(0.0, 1000.0));
    }

    #[test]
    fn pan_stops_at_the_left_wall() {
        let bounds = ViewBounds::new(10.0, 110.0);
        let panned = resolve_pan_bounds(bounds, 500.0, 1000.0).expect("pan");
        assert_eq!(panned, ViewBounds::new(0.0, 100.0));
    }
}
