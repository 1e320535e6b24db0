//! Input model: pointer → angle conversion, key and wheel intents, and the
//! gesture state tracked between pointer-down and pointer-up.
//!
//! The host captures raw events; this module turns them into angles and
//! step directions the engine understands. `Gesture` carries whatever
//! context a drag needs across successive pointer-move events.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::angle::{Circle, Point};

/// Angle of `pointer` around the clock center, in `[0, 360)`.
///
/// `anchor` is the container's top-left corner in the same space as
/// `pointer`; the clock center is relative to that corner. This is the
/// plain `atan2` angle, not the compressed projection used for placement.
#[must_use]
pub fn pointer_to_angle(anchor: Point, pointer: Point, circle: &Circle) -> f64 {
    let dx = (pointer.x - anchor.x - circle.center.x) / circle.radius;
    let dy = (pointer.y - anchor.y - circle.center.y) / circle.radius;
    let rad = dy.atan2(dx);
    let rad = if rad < 0.0 { rad + std::f64::consts::TAU } else { rad };
    rad.to_degrees()
}

/// Which way a discrete step moves a knot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards larger angles.
    Forward,
    /// Towards smaller angles.
    Backward,
}

impl StepDirection {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Step direction for arrow keys; `None` for every other key.
    #[must_use]
    pub fn step_direction(&self) -> Option<StepDirection> {
        match self.0.as_str() {
            "ArrowRight" | "ArrowUp" => Some(StepDirection::Forward),
            "ArrowLeft" | "ArrowDown" => Some(StepDirection::Backward),
            _ => None,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

impl WheelDelta {
    /// Scrolling up advances, anything else retreats.
    #[must_use]
    pub fn step_direction(self) -> StepDirection {
        if self.dy < 0.0 { StepDirection::Forward } else { StepDirection::Backward }
    }
}

/// Pointer bookkeeping for dragging the rope between the outermost knots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RopeDrag {
    last_deg: Option<f64>,
}

impl RopeDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer angle and get the rotation to apply, if any.
    ///
    /// The first sample only records the reference. Later samples closer
    /// than `min_step_deg` to the reference are ignored and leave it in place.
    pub fn advance(&mut self, pointer_deg: f64, min_step_deg: f64) -> Option<f64> {
        let Some(last_deg) = self.last_deg else {
            self.last_deg = Some(pointer_deg);
            return None;
        };
        let diff = pointer_deg - last_deg;
        if diff == 0.0 || diff.abs() < min_step_deg {
            return None;
        }
        self.last_deg = Some(pointer_deg);
        Some(diff)
    }
}

/// Active gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A knot is being dragged.
    DraggingKnot {
        /// Domain index of the dragged knot.
        index: usize,
    },
    /// The rope is being dragged, moving both outermost knots together.
    DraggingRope(RopeDrag),
}
