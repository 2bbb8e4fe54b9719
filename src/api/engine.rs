use crate::core::{BaselineLayout, SelectionMask, SeriesStore, ViewportController};
use crate::error::ChartResult;
use crate::interaction::ScrubberGestureEngine;
use crate::render::Renderer;

use super::{ChartEngineConfig, RenderStyle, TextMeasurer, TooltipState, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series data, the viewport, the scrubber gesture
/// state, the tooltip and the label planner, and pushes frames to the
/// injected renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn store(&self) -> &SeriesStore {
        &self.core.model.store
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionMask {
        &self.core.model.selection
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.core.model.viewport
    }

    #[must_use]
    pub fn baseline(&self) -> &BaselineLayout {
        &self.core.model.baseline
    }

    #[must_use]
    pub fn scrubber(&self) -> &ScrubberGestureEngine {
        &self.core.model.scrubber
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.core.tooltip.as_ref()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.core.presentation.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.core.presentation.render_style = style.validate()?;
        Ok(())
    }

    /// Replaces the text measurement used for x label density.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.core.presentation.text_measurer = Box::new(measurer);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Builds the current view and hands its frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let state = self.recompute();
        let frame = super::render_frame_builder::build_render_frame(
            &state,
            &self.core.presentation.render_style,
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Configuration equivalent to the engine's current state.
    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        let model = &self.core.model;
        let presentation = &self.core.presentation;
        ChartEngineConfig {
            chart_size: model.viewport.size(),
            preview: model.scrubber.layout(),
            min_span_points: model.viewport.min_span_points(),
            zoom_limits: model.zoom_limits,
            axis_labels: presentation.label_planner.config(),
            render_style: presentation.render_style,
        }
    }
}
