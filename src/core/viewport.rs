use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{CoordinateMapper, PlotSize, SelectionMask, SeriesStore, ValueRange, map_y};
use crate::error::{ChartError, ChartResult};

/// Left/right bound in pixel units of the full, unbounded chart layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub left_px: f64,
    pub right_px: f64,
}

impl ViewBounds {
    #[must_use]
    pub const fn new(left_px: f64, right_px: f64) -> Self {
        Self { left_px, right_px }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.right_px - self.left_px
    }
}

/// Inclusive data-index window covered by the current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub left: usize,
    pub right: usize,
}

impl IndexRange {
    #[must_use]
    pub fn len(self) -> usize {
        self.right - self.left + 1
    }

    /// `true` only for an inverted range; the viewport never produces one.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.left > self.right
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.left..=self.right).contains(&index)
    }

    #[must_use]
    pub fn clamp(self, index: usize) -> usize {
        index.clamp(self.left, self.right)
    }
}

/// Affine transform from baseline pixels to zoomed pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    #[must_use]
    pub fn apply_x(self, baseline_x: f64) -> f64 {
        baseline_x * self.scale_x + self.translate_x
    }

    #[must_use]
    pub fn apply_y(self, baseline_y: f64) -> f64 {
        baseline_y * self.scale_y + self.translate_y
    }

    /// Maps a zoomed x pixel back onto the baseline layout.
    #[must_use]
    pub fn invert_x(self, zoomed_x: f64) -> f64 {
        if self.scale_x == 0.0 {
            return 0.0;
        }
        (zoomed_x - self.translate_x) / self.scale_x
    }

    /// Linear blend toward `target`; `t` is clamped into `[0, 1]`.
    #[must_use]
    pub fn interpolate(self, target: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        if t == 1.0 {
            return target;
        }
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Self {
            scale_x: lerp(self.scale_x, target.scale_x),
            scale_y: lerp(self.scale_y, target.scale_y),
            translate_x: lerp(self.translate_x, target.translate_x),
            translate_y: lerp(self.translate_y, target.translate_y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportMode {
    /// Bounds span the whole series (initial state).
    Unbounded,
    /// Bounds span a caller-chosen sub-interval.
    Bounded,
}

/// Holds the zoomed window and everything derived from it.
///
/// Derived values are always recomputed from the immutable baseline
/// (full series, all series) so repeated zooms never compound error.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    size: PlotSize,
    total_points: usize,
    min_span_points: usize,
    baseline_y: ValueRange,
    mode: ViewportMode,
    bounds: ViewBounds,
    index_range: IndexRange,
    bounded_y: ValueRange,
    transform: ViewTransform,
}

impl ViewportController {
    pub fn new(
        store: &SeriesStore,
        selection: &SelectionMask,
        size: PlotSize,
        min_span_points: usize,
    ) -> ChartResult<Self> {
        let size = size.validate()?;
        if selection.len() != store.series_count() {
            return Err(ChartError::MetadataCountMismatch {
                field: "selection",
                expected: store.series_count(),
                actual: selection.len(),
            });
        }

        let bounds = ViewBounds::new(0.0, size.width);
        let index_range = IndexRange {
            left: 0,
            right: store.last_index(),
        };
        let mut controller = Self {
            size,
            total_points: store.len(),
            min_span_points,
            baseline_y: store.full_y_range(),
            mode: ViewportMode::Unbounded,
            bounds,
            index_range,
            bounded_y: store.full_y_range(),
            transform: ViewTransform::IDENTITY,
        };
        controller.rederive(store, selection, bounds, index_range);
        Ok(controller)
    }

    #[must_use]
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    #[must_use]
    pub fn size(&self) -> PlotSize {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    #[must_use]
    pub fn index_range(&self) -> IndexRange {
        self.index_range
    }

    /// Y extent of the selected series inside the current index window.
    #[must_use]
    pub fn bounded_y_range(&self) -> ValueRange {
        self.bounded_y
    }

    #[must_use]
    pub fn baseline_y_range(&self) -> ValueRange {
        self.baseline_y
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn min_span_points(&self) -> usize {
        self.min_span_points
    }

    /// Minimum bound span in full-layout pixels.
    #[must_use]
    pub fn min_span_px(&self) -> f64 {
        self.size.width * self.min_span_points as f64 / self.total_points as f64
    }

    /// Applies new bounds. Returns `false` and keeps the previous state when
    /// the request cannot produce a valid window.
    pub fn set_bounds(
        &mut self,
        store: &SeriesStore,
        selection: &SelectionMask,
        left_px: f64,
        right_px: f64,
    ) -> bool {
        if !left_px.is_finite() || !right_px.is_finite() {
            trace!(left_px, right_px, "rejecting non-finite bounds");
            return false;
        }

        let width = self.size.width;
        let left_px = left_px.clamp(0.0, width);
        let right_px = right_px.clamp(0.0, width);
        if left_px >= right_px || right_px - left_px < self.min_span_px() {
            trace!(
                left_px,
                right_px,
                min_span_px = self.min_span_px(),
                "rejecting bounds below minimum span"
            );
            return false;
        }

        let Some(index_range) = self.index_range_for(left_px, right_px) else {
            trace!(left_px, right_px, "rejecting bounds without a valid index window");
            return false;
        };

        self.mode = ViewportMode::Bounded;
        self.rederive(
            store,
            selection,
            ViewBounds::new(left_px, right_px),
            index_range,
        );
        trace!(
            left_px,
            right_px,
            left_index = index_range.left,
            right_index = index_range.right,
            "viewport bounds applied"
        );
        true
    }

    /// Returns to the unbounded full-series view.
    pub fn reset(&mut self, store: &SeriesStore, selection: &SelectionMask) {
        self.mode = ViewportMode::Unbounded;
        let index_range = IndexRange {
            left: 0,
            right: store.last_index(),
        };
        self.rederive(
            store,
            selection,
            ViewBounds::new(0.0, self.size.width),
            index_range,
        );
    }

    /// Recomputes the bounded y range after a selection change.
    pub fn refresh_selection(&mut self, store: &SeriesStore, selection: &SelectionMask) {
        self.rederive(store, selection, self.bounds, self.index_range);
    }

    /// Adopts a new plot size, rescaling the bounds proportionally.
    pub fn resize(
        &mut self,
        store: &SeriesStore,
        selection: &SelectionMask,
        size: PlotSize,
    ) -> ChartResult<()> {
        let size = size.validate()?;
        let ratio = size.width / self.size.width;
        let bounds = if self.mode == ViewportMode::Unbounded {
            ViewBounds::new(0.0, size.width)
        } else {
            ViewBounds::new(
                (self.bounds.left_px * ratio).clamp(0.0, size.width),
                (self.bounds.right_px * ratio).clamp(0.0, size.width),
            )
        };
        debug!(
            width = size.width,
            height = size.height,
            left_px = bounds.left_px,
            right_px = bounds.right_px,
            "viewport resized"
        );
        self.size = size;
        let index_range = self
            .index_range_for(bounds.left_px, bounds.right_px)
            .unwrap_or(self.index_range);
        self.rederive(store, selection, bounds, index_range);
        Ok(())
    }

    /// Nearest data index inside the current window for a zoomed pixel.
    #[must_use]
    pub fn index_at_pixel(&self, store: &SeriesStore, zoomed_x: f64) -> usize {
        let baseline_x = self.transform.invert_x(zoomed_x);
        let index = CoordinateMapper::new(store, self.size).pixel_to_index(baseline_x);
        self.index_range.clamp(index)
    }

    /// Zoomed x pixel of a data index.
    #[must_use]
    pub fn pixel_of_index(&self, store: &SeriesStore, index: usize) -> Option<f64> {
        CoordinateMapper::new(store, self.size)
            .index_to_pixel(index)
            .map(|baseline_x| self.transform.apply_x(baseline_x))
    }

    /// Zoomed y pixel of a data value (through the baseline y scale).
    #[must_use]
    pub fn pixel_of_value(&self, value: f64) -> f64 {
        let baseline_y = map_y(
            value,
            self.size.height,
            self.baseline_y.min,
            self.baseline_y.max,
        );
        self.transform.apply_y(baseline_y)
    }

    fn index_range_for(&self, left_px: f64, right_px: f64) -> Option<IndexRange> {
        let points = self.total_points as f64;
        let width = self.size.width;
        let last = self.total_points.checked_sub(1)?;

        let left = ((points * left_px / width).floor() as usize).min(last);
        let mut right = ((points * right_px / width).round() as usize).min(last);
        if right <= left {
            right = left + 1;
        }
        if right > last {
            return None;
        }
        Some(IndexRange { left, right })
    }

    fn rederive(
        &mut self,
        store: &SeriesStore,
        selection: &SelectionMask,
        bounds: ViewBounds,
        index_range: IndexRange,
    ) {
        let width = self.size.width;
        let height = self.size.height;
        let bounded_y = store
            .y_range_over(selection.selected_indices(), index_range.left, index_range.right)
            .unwrap_or(self.baseline_y);

        let scale_x = width / bounds.span();
        let translate_x = -bounds.left_px * scale_x;

        let baseline_k = self.baseline_y.pixel_scale(height);
        let bounded_k = bounded_y.pixel_scale(height);
        let (scale_y, translate_y) = if baseline_k == 0.0 || bounded_k == 0.0 {
            (0.0, 0.0)
        } else {
            (
                bounded_k / baseline_k,
                (bounded_y.max - self.baseline_y.max) * bounded_k,
            )
        };

        self.bounds = bounds;
        self.index_range = index_range;
        self.bounded_y = bounded_y;
        self.transform = ViewTransform {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        };
    }
}
