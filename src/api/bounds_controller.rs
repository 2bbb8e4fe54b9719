use tracing::{debug, trace};

use crate::core::{CoordinateMapper, PlotSize, ViewBounds};
use crate::error::ChartResult;
use crate::interaction::{
    ScrubberGestureEngine, ScrubberLayout, ZoomLimits, resolve_pan_bounds, resolve_zoom_bounds,
};
use crate::render::Renderer;

use super::ChartEngine;

const SPAN_LIMIT_EPSILON: f64 = 1e-9;

impl<R: Renderer> ChartEngine<R> {
    /// Zooms to `[left_px, right_px]` of the full chart layout.
    ///
    /// Bounds are clamped into `[0, width]`. A request narrower than the
    /// minimum span, or inverted after clamping, returns `false` and leaves
    /// the view untouched. Accepted bounds clear the tooltip and move the
    /// scrubber handles to match.
    pub fn set_bounds(&mut self, left_px: f64, right_px: f64) -> bool {
        if !self.apply_bounds(left_px, right_px) {
            return false;
        }
        let model = &mut self.core.model;
        model
            .scrubber
            .sync_to_bounds(model.viewport.bounds(), model.viewport.size().width);
        true
    }

    /// Returns to the full, unbounded view.
    pub fn reset_bounds(&mut self) {
        let model = &mut self.core.model;
        model.viewport.reset(&model.store, &model.selection);
        model
            .scrubber
            .sync_to_bounds(model.viewport.bounds(), model.viewport.size().width);
        debug!("viewport bounds reset");
        self.clear_tooltip();
    }

    /// Pinch zoom by `factor` around a pointer x on the zoomed chart.
    ///
    /// Magnification stops at the configured max zoom or at the minimum span,
    /// whichever is reached first.
    pub fn zoom_around(&mut self, factor: f64, anchor_px: f64) -> ChartResult<bool> {
        let viewport = &self.core.model.viewport;
        let width = viewport.size().width;
        let span_zoom = width / viewport.min_span_px() * (1.0 - SPAN_LIMIT_EPSILON);
        let limits = ZoomLimits {
            max_zoom: self.core.model.zoom_limits.max_zoom.min(span_zoom).max(1.0),
        };
        let next = resolve_zoom_bounds(viewport.bounds(), factor, anchor_px, width, limits)?;
        Ok(self.set_bounds_if_changed(next))
    }

    /// Drag pan by a delta in zoomed pixels; positive reveals earlier data.
    pub fn pan_by(&mut self, delta_px: f64) -> ChartResult<bool> {
        let model = &self.core.model;
        let next = resolve_pan_bounds(
            model.viewport.bounds(),
            delta_px,
            model.viewport.size().width,
        )?;
        Ok(self.set_bounds_if_changed(next))
    }

    /// Adopts a new chart size; bounds scale with the width.
    pub fn resize(&mut self, size: PlotSize) -> ChartResult<()> {
        let model = &mut self.core.model;
        model
            .viewport
            .resize(&model.store, &model.selection, size)?;
        model.baseline = CoordinateMapper::new(&model.store, model.viewport.size()).baseline();
        model
            .scrubber
            .sync_to_bounds(model.viewport.bounds(), model.viewport.size().width);
        self.clear_tooltip();
        Ok(())
    }

    /// Replaces the preview strip geometry, keeping the current bounds.
    pub fn set_preview_layout(&mut self, layout: ScrubberLayout) -> ChartResult<()> {
        let model = &mut self.core.model;
        let mut scrubber = ScrubberGestureEngine::new(layout)?;
        scrubber.sync_to_bounds(model.viewport.bounds(), model.viewport.size().width);
        model.scrubber = scrubber;
        debug!(
            width = layout.width,
            height = layout.height,
            handle_width = layout.handle_width,
            "preview layout changed"
        );
        Ok(())
    }

    /// Viewport update shared by every bounds source; the scrubber is left
    /// alone so a dragging gesture keeps its own handle positions.
    pub(super) fn apply_bounds(&mut self, left_px: f64, right_px: f64) -> bool {
        let model = &mut self.core.model;
        if !model
            .viewport
            .set_bounds(&model.store, &model.selection, left_px, right_px)
        {
            return false;
        }
        debug!(
            left_px = model.viewport.bounds().left_px,
            right_px = model.viewport.bounds().right_px,
            left_index = model.viewport.index_range().left,
            right_index = model.viewport.index_range().right,
            "viewport bounds changed"
        );
        self.clear_tooltip();
        true
    }

    fn set_bounds_if_changed(&mut self, next: ViewBounds) -> bool {
        if next == self.core.model.viewport.bounds() {
            trace!(left_px = next.left_px, right_px = next.right_px, "bounds unchanged");
            return false;
        }
        self.set_bounds(next.left_px, next.right_px)
    }
}
