use super::{
    AxisLabelPlanner, RenderStyle, TextMeasurer, label_cache::XLabelCache,
    label_formatter::LabelFormatters,
};

pub(super) struct ChartPresentationState {
    pub(super) render_style: RenderStyle,
    pub(super) label_planner: AxisLabelPlanner,
    pub(super) formatters: LabelFormatters,
    pub(super) x_label_cache: XLabelCache,
    pub(super) text_measurer: Box<dyn TextMeasurer>,
}
