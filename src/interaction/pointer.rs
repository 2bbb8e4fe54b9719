use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample in the pixel space of the surface it was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Down)
    }

    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Move)
    }

    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Up)
    }

    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerPhase::Cancel)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
