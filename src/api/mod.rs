mod axis_label_planner;
mod bounds_controller;
mod chart_model;
mod chart_presentation;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod interaction_controller;
mod label_cache;
mod label_formatter;
mod render_frame_builder;
mod render_style;
mod text_measurer;
mod tooltip_resolver;
mod view_state;

pub use axis_label_planner::{
    AxisLabelConfig, AxisLabelPlanner, LabelTransition, XAxisLabel, XAxisLabelPlan, YGridLine,
};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use label_cache::XLabelCacheStats;
pub use label_formatter::{
    LONG_DATE_PATTERN, SHORT_DATE_PATTERN, XDetailsFormatterFn, XLabelFormatterFn,
    YLabelFormatterFn, plain_value_label, unix_seconds_formatter,
};
pub use render_frame_builder::build_render_frame;
pub use render_style::RenderStyle;
pub use text_measurer::{FixedAdvanceTextMeasurer, TextMeasurer};
pub use tooltip_resolver::{TooltipSeriesValue, TooltipState, resolve_tooltip};
pub use view_state::{ScrubberOverlay, SeriesPolyline, ViewState};
