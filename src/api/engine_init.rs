use tracing::debug;

use crate::core::{CoordinateMapper, SelectionMask, SeriesStore, ViewportController};
use crate::error::ChartResult;
use crate::interaction::ScrubberGestureEngine;
use crate::render::Renderer;

use super::{
    AxisLabelPlanner, ChartEngine, ChartEngineConfig, FixedAdvanceTextMeasurer,
    chart_model::ChartModel,
    chart_presentation::ChartPresentationState,
    engine_core::{ChartPointerState, EngineCore},
    label_cache::XLabelCache,
    label_formatter::LabelFormatters,
};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine showing every series over the full x range.
    pub fn new(renderer: R, store: SeriesStore, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let selection = SelectionMask::all(store.series_count())?;
        let viewport = ViewportController::new(
            &store,
            &selection,
            config.chart_size,
            config.min_span_points,
        )?;
        let baseline = CoordinateMapper::new(&store, config.chart_size).baseline();
        let mut scrubber = ScrubberGestureEngine::new(config.preview)?;
        scrubber.sync_to_bounds(viewport.bounds(), config.chart_size.width);
        let label_planner = AxisLabelPlanner::new(config.axis_labels)?;

        debug!(
            points = store.len(),
            series = store.series_count(),
            width = config.chart_size.width,
            height = config.chart_size.height,
            "chart engine created"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                model: ChartModel {
                    store,
                    selection,
                    viewport,
                    baseline,
                    scrubber,
                    zoom_limits: config.zoom_limits,
                },
                presentation: ChartPresentationState {
                    render_style: config.render_style,
                    label_planner,
                    formatters: LabelFormatters::default(),
                    x_label_cache: XLabelCache::default(),
                    text_measurer: Box::new(FixedAdvanceTextMeasurer::for_font_size(
                        config.render_style.axis_label_font_size_px,
                    )),
                },
                pointer: ChartPointerState::default(),
                tooltip: None,
            },
        })
    }
}
