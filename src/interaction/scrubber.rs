use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ViewBounds;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{PointerEvent, PointerPhase};

/// Geometry of the preview strip and its two handles.
///
/// Handle positions are the left edges of the handle rectangles, measured from
/// the left edge of the strip. The preview chart itself is drawn between the
/// handles' outer edges, so its track is `width - 2 * handle_width` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubberLayout {
    pub width: f64,
    pub top: f64,
    pub height: f64,
    pub handle_width: f64,
    /// Minimum distance between the two handle positions.
    pub min_handle_gap_px: f64,
}

impl ScrubberLayout {
    #[must_use]
    pub fn new(width: f64, height: f64, handle_width: f64) -> Self {
        Self {
            width,
            top: 0.0,
            height,
            handle_width,
            min_handle_gap_px: handle_width * 4.0,
        }
    }

    #[must_use]
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    #[must_use]
    pub fn with_min_handle_gap_px(mut self, gap: f64) -> Self {
        self.min_handle_gap_px = gap;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || !self.top.is_finite()
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.handle_width.is_finite() || self.handle_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "scrubber handle width must be finite and > 0".to_owned(),
            ));
        }
        if self.track_width() <= 0.0 {
            return Err(ChartError::InvalidData(
                "scrubber must be wider than both handles".to_owned(),
            ));
        }
        if !self.min_handle_gap_px.is_finite()
            || self.min_handle_gap_px < 0.0
            || self.min_handle_gap_px > self.max_handle_px()
        {
            return Err(ChartError::InvalidData(
                "scrubber handle gap must be finite, >= 0 and fit inside the strip".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Width of the preview chart drawn between the handles' outer edges.
    #[must_use]
    pub fn track_width(self) -> f64 {
        self.width - self.handle_width * 2.0
    }

    /// Largest allowed handle position.
    #[must_use]
    pub fn max_handle_px(self) -> f64 {
        self.width - self.handle_width
    }

    fn contains_y(self, y: f64) -> bool {
        y >= self.top && y <= self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrubberZone {
    LeftHandle,
    RightHandle,
    Middle,
    Outside,
}

/// Which part of the strip the active gesture has captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrubberDrag {
    Idle,
    DraggingLeftHandle,
    DraggingRightHandle,
    DraggingMiddle,
}

/// Accepted handle positions after one drag frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubberUpdate {
    pub left_handle_px: f64,
    pub right_handle_px: f64,
}

impl ScrubberUpdate {
    /// Converts handle positions into main-chart bounds.
    ///
    /// The visible window on the track spans from the left handle's inner
    /// edge to the right handle's inner edge, scaled by
    /// `chart_width / track_width`.
    #[must_use]
    pub fn chart_bounds(self, layout: ScrubberLayout, chart_width: f64) -> ViewBounds {
        let k = chart_width / layout.track_width();
        ViewBounds::new(
            self.left_handle_px * k,
            (self.right_handle_px - layout.handle_width) * k,
        )
    }
}

/// Drag state machine for the preview strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubberGestureEngine {
    layout: ScrubberLayout,
    left_handle_px: f64,
    right_handle_px: f64,
    drag: ScrubberDrag,
    last_pointer_x: f64,
}

impl ScrubberGestureEngine {
    /// Creates an idle engine with the handles at both ends of the strip.
    pub fn new(layout: ScrubberLayout) -> ChartResult<Self> {
        let layout = layout.validate()?;
        Ok(Self {
            layout,
            left_handle_px: 0.0,
            right_handle_px: layout.max_handle_px(),
            drag: ScrubberDrag::Idle,
            last_pointer_x: 0.0,
        })
    }

    #[must_use]
    pub fn layout(&self) -> ScrubberLayout {
        self.layout
    }

    #[must_use]
    pub fn drag(&self) -> ScrubberDrag {
        self.drag
    }

    #[must_use]
    pub fn handles(&self) -> ScrubberUpdate {
        ScrubberUpdate {
            left_handle_px: self.left_handle_px,
            right_handle_px: self.right_handle_px,
        }
    }

    #[must_use]
    pub fn chart_bounds(&self, chart_width: f64) -> ViewBounds {
        self.handles().chart_bounds(self.layout, chart_width)
    }

    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> ScrubberZone {
        if !x.is_finite() || !self.layout.contains_y(y) {
            return ScrubberZone::Outside;
        }
        let handle_width = self.layout.handle_width;
        if x >= self.left_handle_px && x <= self.left_handle_px + handle_width {
            ScrubberZone::LeftHandle
        } else if x >= self.right_handle_px && x <= self.right_handle_px + handle_width {
            ScrubberZone::RightHandle
        } else if x > self.left_handle_px + handle_width && x < self.right_handle_px {
            ScrubberZone::Middle
        } else {
            ScrubberZone::Outside
        }
    }

    /// Feeds one pointer sample. Returns the new handle positions when the
    /// sample moved a handle.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<ScrubberUpdate> {
        match event.phase {
            PointerPhase::Down => {
                self.pointer_down(event.x, event.y);
                None
            }
            PointerPhase::Move => self.pointer_move(event.x),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.release();
                None
            }
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> ScrubberDrag {
        self.drag = match self.hit_test(x, y) {
            ScrubberZone::LeftHandle => ScrubberDrag::DraggingLeftHandle,
            ScrubberZone::RightHandle => ScrubberDrag::DraggingRightHandle,
            ScrubberZone::Middle => ScrubberDrag::DraggingMiddle,
            ScrubberZone::Outside => ScrubberDrag::Idle,
        };
        self.last_pointer_x = x;
        trace!(x, y, drag = ?self.drag, "scrubber pointer down");
        self.drag
    }

    pub fn pointer_move(&mut self, x: f64) -> Option<ScrubberUpdate> {
        if self.drag == ScrubberDrag::Idle || !x.is_finite() {
            return None;
        }
        let delta = x - self.last_pointer_x;
        self.last_pointer_x = x;
        self.drag_by(delta)
    }

    /// Ends the gesture; the pending frame, if any, is discarded.
    pub fn release(&mut self) {
        if self.drag != ScrubberDrag::Idle {
            trace!(drag = ?self.drag, "scrubber gesture released");
        }
        self.drag = ScrubberDrag::Idle;
    }

    /// Applies a signed pixel delta to whatever the active gesture captured.
    pub fn drag_by(&mut self, delta: f64) -> Option<ScrubberUpdate> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        let accepted = match self.drag {
            ScrubberDrag::Idle => false,
            ScrubberDrag::DraggingLeftHandle => self.move_left_handle(delta),
            ScrubberDrag::DraggingRightHandle => self.move_right_handle(delta),
            ScrubberDrag::DraggingMiddle => self.pan_window(delta),
        };
        accepted.then(|| self.handles())
    }

    /// Positions the handles for bounds that were set from outside the strip.
    pub fn sync_to_bounds(&mut self, bounds: ViewBounds, chart_width: f64) {
        if !chart_width.is_finite() || chart_width <= 0.0 {
            return;
        }
        let k = chart_width / self.layout.track_width();
        let max_handle = self.layout.max_handle_px();
        self.left_handle_px = (bounds.left_px / k).clamp(0.0, max_handle);
        self.right_handle_px =
            (bounds.right_px / k + self.layout.handle_width).clamp(self.left_handle_px, max_handle);
    }

    fn move_left_handle(&mut self, delta: f64) -> bool {
        let upper = self.right_handle_px - self.layout.min_handle_gap_px;
        if upper < 0.0 {
            return false;
        }
        let next = (self.left_handle_px + delta).clamp(0.0, upper);
        if next == self.left_handle_px {
            return false;
        }
        self.left_handle_px = next;
        true
    }

    fn move_right_handle(&mut self, delta: f64) -> bool {
        let lower = self.left_handle_px + self.layout.min_handle_gap_px;
        let upper = self.layout.max_handle_px();
        if lower > upper {
            return false;
        }
        let next = (self.right_handle_px + delta).clamp(lower, upper);
        if next == self.right_handle_px {
            return false;
        }
        self.right_handle_px = next;
        true
    }

    // All-or-nothing: a step that would push either handle past a wall is
    // dropped entirely so the window never shrinks while panning.
    fn pan_window(&mut self, delta: f64) -> bool {
        let right_edge = self.right_handle_px + self.layout.handle_width;
        let can_move = (delta > 0.0 && right_edge < self.layout.width)
            || (delta < 0.0 && self.left_handle_px > 0.0);
        if !can_move {
            return false;
        }

        let next_left = self.left_handle_px + delta;
        let next_right = self.right_handle_px + delta;
        if next_left < 0.0 || next_right > self.layout.max_handle_px() {
            return false;
        }
        self.left_handle_px = next_left;
        self.right_handle_px = next_right;
        true
    }
}
