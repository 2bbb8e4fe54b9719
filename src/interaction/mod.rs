mod pointer;
mod scrubber;
mod zoom_pan;

pub use pointer::{PointerEvent, PointerPhase};
pub use scrubber::{
    ScrubberDrag, ScrubberGestureEngine, ScrubberLayout, ScrubberUpdate, ScrubberZone,
};
pub use zoom_pan::{ZoomLimits, resolve_pan_bounds, resolve_zoom_bounds};
