use crate::core::{BaselineLayout, SelectionMask, SeriesStore, ViewportController};
use crate::interaction::{ScrubberGestureEngine, ZoomLimits};

/// Data plus the geometry derived from it.
pub(super) struct ChartModel {
    pub(super) store: SeriesStore,
    pub(super) selection: SelectionMask,
    pub(super) viewport: ViewportController,
    /// All series over the full range; rebuilt only on resize.
    pub(super) baseline: BaselineLayout,
    pub(super) scrubber: ScrubberGestureEngine,
    pub(super) zoom_limits: ZoomLimits,
}
