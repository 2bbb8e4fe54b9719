use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    Color, CoordinateMapper, IndexRange, PlotSize, ValueRange, ViewBounds, ViewTransform,
    ViewportMode,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ScrubberDrag, ScrubberLayout};
use crate::render::Renderer;

use super::{ChartEngine, TooltipState, XAxisLabelPlan, YGridLine};

/// Vertex list for one series, in the coordinates of its surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPolyline {
    pub series: usize,
    pub label: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

/// Preview strip state for drawing handles and the dimmed outside area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubberOverlay {
    pub layout: ScrubberLayout,
    pub left_handle_px: f64,
    pub right_handle_px: f64,
    pub drag: ScrubberDrag,
}

/// Everything a host needs to draw one frame, as plain data.
///
/// Main chart geometry is in zoomed chart pixels. Preview polylines are in
/// track pixels: `x = 0` is the left handle's outer edge and `y = 0` is the
/// top of the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub chart_size: PlotSize,
    pub mode: ViewportMode,
    pub bounds: ViewBounds,
    pub index_range: IndexRange,
    pub y_range: ValueRange,
    pub transform: ViewTransform,
    pub series: Vec<SeriesPolyline>,
    pub preview_series: Vec<SeriesPolyline>,
    pub scrubber: ScrubberOverlay,
    pub x_labels: XAxisLabelPlan,
    pub y_gridlines: Vec<YGridLine>,
    pub tooltip: Option<TooltipState>,
}

impl ViewState {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view state json: {e}"))
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Derives the drawable view for the current bounds, selection and
    /// tooltip.
    ///
    /// Each selected series is cut to the index window plus one neighbor on
    /// each side so lines run off the chart edges instead of stopping short.
    pub fn recompute(&mut self) -> ViewState {
        let model = &self.core.model;
        let presentation = &mut self.core.presentation;
        let viewport = &model.viewport;
        let transform = viewport.transform();
        let index_range = viewport.index_range();
        let first = index_range.left.saturating_sub(1);
        let last = (index_range.right + 1).min(model.store.last_index());

        let series: Vec<SeriesPolyline> = model
            .selection
            .selected_indices()
            .filter_map(|series| {
                let y_px = model.baseline.y_px.get(series)?;
                let points = (first..=last)
                    .map(|index| {
                        (
                            transform.apply_x(model.baseline.x_px[index]),
                            transform.apply_y(y_px[index]),
                        )
                    })
                    .collect();
                Some(SeriesPolyline {
                    series,
                    label: model.store.label(series)?.to_owned(),
                    color: model.store.color(series)?,
                    points,
                })
            })
            .collect();

        let layout = model.scrubber.layout();
        let preview_size = PlotSize::new(layout.track_width(), layout.height);
        let preview_y = model
            .store
            .y_range_over(model.selection.selected_indices(), 0, model.store.last_index())
            .unwrap_or_else(|| model.store.full_y_range());
        let preview = CoordinateMapper::new(&model.store, preview_size).project(preview_y);
        let preview_series: Vec<SeriesPolyline> = model
            .selection
            .selected_indices()
            .filter_map(|series| {
                let y_px = preview.y_px.get(series)?;
                Some(SeriesPolyline {
                    series,
                    label: model.store.label(series)?.to_owned(),
                    color: model.store.color(series)?,
                    points: preview.x_px.iter().copied().zip(y_px.iter().copied()).collect(),
                })
            })
            .collect();

        let handles = model.scrubber.handles();
        let scrubber = ScrubberOverlay {
            layout,
            left_handle_px: handles.left_handle_px,
            right_handle_px: handles.right_handle_px,
            drag: model.scrubber.drag(),
        };

        let formatters = &presentation.formatters;
        let cache = &mut presentation.x_label_cache;
        let x_labels = presentation.label_planner.plan_x_labels(
            &model.store,
            viewport,
            presentation.text_measurer.as_ref(),
            |x_value| formatters.format_x_label(cache, x_value),
        );
        let y_gridlines = presentation
            .label_planner
            .plan_y_gridlines(viewport, |value| formatters.format_y_label(value));

        trace!(
            left_index = index_range.left,
            right_index = index_range.right,
            series = series.len(),
            x_labels = x_labels.labels.len(),
            "view state recomputed"
        );

        ViewState {
            chart_size: viewport.size(),
            mode: viewport.mode(),
            bounds: viewport.bounds(),
            index_range,
            y_range: viewport.bounded_y_range(),
            transform,
            series,
            preview_series,
            scrubber,
            x_labels,
            y_gridlines,
            tooltip: self.core.tooltip.clone(),
        }
    }
}
