use tracing::{debug, trace};

use crate::interaction::{PointerEvent, PointerPhase, ScrubberDrag};
use crate::render::Renderer;

use super::{ChartEngine, TooltipState, resolve_tooltip};

impl<R: Renderer> ChartEngine<R> {
    /// Feeds one pointer sample from the preview strip.
    ///
    /// Returns `true` when the sample changed the viewport bounds. A handle
    /// move the viewport rejects snaps the handles back to the current
    /// bounds.
    pub fn scrubber_pointer(&mut self, event: PointerEvent) -> bool {
        if !event.is_finite() {
            trace!(x = event.x, y = event.y, "ignoring non-finite scrubber pointer");
            return false;
        }
        let before = self.core.model.scrubber.drag();
        let update = self.core.model.scrubber.on_pointer(event);
        let after = self.core.model.scrubber.drag();
        if before != after {
            debug!(from = ?before, to = ?after, "scrubber drag state changed");
        }

        let Some(update) = update else {
            return false;
        };
        let model = &self.core.model;
        let bounds = update.chart_bounds(model.scrubber.layout(), model.viewport.size().width);
        if self.apply_bounds(bounds.left_px, bounds.right_px) {
            return true;
        }
        let model = &mut self.core.model;
        model
            .scrubber
            .sync_to_bounds(model.viewport.bounds(), model.viewport.size().width);
        trace!(
            left_px = bounds.left_px,
            right_px = bounds.right_px,
            "scrubber update rejected; handles restored"
        );
        false
    }

    #[must_use]
    pub fn scrubber_drag(&self) -> ScrubberDrag {
        self.core.model.scrubber.drag()
    }

    /// Feeds one pointer sample from the main chart and returns the tooltip.
    ///
    /// Down anchors the tooltip under the pointer, move drags it by the
    /// pointer delta inside `[0, width]`, up keeps it, cancel leaves it
    /// untouched.
    pub fn chart_pointer(&mut self, event: PointerEvent) -> Option<&TooltipState> {
        if !event.is_finite() {
            return self.core.tooltip.as_ref();
        }
        let width = self.core.model.viewport.size().width;
        let pointer = &mut self.core.pointer;
        match event.phase {
            PointerPhase::Down => {
                pointer.dragging = true;
                pointer.last_pointer_x = event.x;
                pointer.tooltip_x = Some(event.x.clamp(0.0, width));
            }
            PointerPhase::Move => {
                if !pointer.dragging {
                    return self.core.tooltip.as_ref();
                }
                let delta = event.x - pointer.last_pointer_x;
                pointer.last_pointer_x = event.x;
                let anchor = pointer.tooltip_x.unwrap_or(event.x);
                pointer.tooltip_x = Some((anchor + delta).clamp(0.0, width));
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                pointer.dragging = false;
                return self.core.tooltip.as_ref();
            }
        }
        self.refresh_tooltip();
        self.core.tooltip.as_ref()
    }

    /// Places the tooltip at a zoomed x without a gesture.
    pub fn show_tooltip_at(&mut self, pointer_x: f64) -> Option<&TooltipState> {
        if !pointer_x.is_finite() {
            return self.core.tooltip.as_ref();
        }
        let width = self.core.model.viewport.size().width;
        self.core.pointer.tooltip_x = Some(pointer_x.clamp(0.0, width));
        self.refresh_tooltip();
        self.core.tooltip.as_ref()
    }

    /// Closes the details popup.
    pub fn dismiss_tooltip(&mut self) {
        self.core.pointer.dragging = false;
        self.clear_tooltip();
    }

    pub(super) fn clear_tooltip(&mut self) {
        self.core.pointer.tooltip_x = None;
        if self.core.tooltip.take().is_some() {
            trace!("tooltip cleared");
        }
    }

    /// Re-resolves the tooltip at its anchor after data-facing changes.
    pub(super) fn refresh_tooltip(&mut self) {
        let Some(pointer_x) = self.core.pointer.tooltip_x else {
            return;
        };
        let model = &self.core.model;
        let formatters = &self.core.presentation.formatters;
        self.core.tooltip = resolve_tooltip(
            pointer_x,
            &model.store,
            &model.selection,
            &model.viewport,
            |x_value| formatters.format_x_details(x_value),
        );
    }
}
