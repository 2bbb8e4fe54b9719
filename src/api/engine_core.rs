use super::{
    TooltipState, chart_model::ChartModel, chart_presentation::ChartPresentationState,
};

/// Internal engine core state used by the public facade (`ChartEngine`).
pub(super) struct EngineCore {
    pub(super) model: ChartModel,
    pub(super) presentation: ChartPresentationState,
    pub(super) pointer: ChartPointerState,
    pub(super) tooltip: Option<TooltipState>,
}

/// Pointer tracking for the main chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct ChartPointerState {
    /// Zoomed x the tooltip is anchored at, if any.
    pub(super) tooltip_x: Option<f64>,
    pub(super) last_pointer_x: f64,
    pub(super) dragging: bool,
}
