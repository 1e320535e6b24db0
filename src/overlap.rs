//! Direction inference for two knots sharing a split point.
//!
//! DESIGN
//! ======
//! With exactly two knots on a closed arc, each knot's neighbours are the
//! same sibling. Once both sit on one angle, clamping between neighbours
//! would pin the dragged knot forever. The resolver remembers the last
//! accepted drag angle for the current gesture and compares it with the
//! new candidate: when the two lie on opposite sides of the split point,
//! within `SAFE_ANGLE_DEG`, the gesture is sliding across the shared angle
//! and the knot is held exactly on it for this call.
//!
//! The resolver is owned by the gesture session and reset whenever a
//! gesture begins or ends.

#[cfg(test)]
#[path = "overlap_test.rs"]
mod overlap_test;

use crate::angle::is_angle_in_arc;
use crate::consts::{SAFE_ANGLE_DEG, SPLIT_EPSILON_DEG};

/// Gesture memory of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlapState {
    /// No coincident pair seen yet in this gesture.
    #[default]
    Unarmed,
    /// A reference drag angle has been recorded.
    Armed { reference_deg: f64 },
}

/// Outcome of observing one candidate angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlapDecision {
    /// Snap the knot onto the split angle and stop there for this call.
    Hold { split_deg: f64 },
    /// Proceed with neighbour clamping.
    Continue,
}

/// Rotational sense of a crossing over the split point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Default)]
pub struct OverlapResolver {
    state: OverlapState,
}

impl OverlapResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> OverlapState {
        self.state
    }

    /// Forget the reference angle. Called at gesture boundaries.
    pub fn reset(&mut self) {
        self.state = OverlapState::Unarmed;
    }

    /// Feed the candidate angle for a knot whose neighbours meet at `split_deg`.
    pub fn observe(&mut self, split_deg: f64, candidate_deg: f64) -> OverlapDecision {
        let reference_deg = match self.state {
            OverlapState::Unarmed => {
                self.state = OverlapState::Armed { reference_deg: candidate_deg };
                return OverlapDecision::Continue;
            }
            OverlapState::Armed { reference_deg } => reference_deg,
        };

        if crossing(split_deg, reference_deg, candidate_deg).is_some() {
            return OverlapDecision::Hold { split_deg };
        }

        #[allow(clippy::float_cmp)]
        let on_split = candidate_deg == split_deg;
        if !on_split {
            self.state = OverlapState::Armed { reference_deg: candidate_deg };
        }
        OverlapDecision::Continue
    }
}

/// Whether moving from `reference_deg` to `candidate_deg` crosses `split_deg`,
/// with both angles inside the safety window on either side.
#[must_use]
pub fn crossing(split_deg: f64, reference_deg: f64, candidate_deg: f64) -> Option<Crossing> {
    let after = |a: f64| is_angle_in_arc(split_deg + SPLIT_EPSILON_DEG, split_deg + SAFE_ANGLE_DEG, a);
    let before = |a: f64| {
        is_angle_in_arc(
            unwind_negative(split_deg - SAFE_ANGLE_DEG),
            unwind_negative(split_deg - SPLIT_EPSILON_DEG),
            a,
        )
    };

    if after(candidate_deg) && before(reference_deg) {
        Some(Crossing::Clockwise)
    } else if before(candidate_deg) && after(reference_deg) {
        Some(Crossing::CounterClockwise)
    } else {
        None
    }
}

fn unwind_negative(deg: f64) -> f64 {
    if deg < 0.0 { deg + 360.0 } else { deg }
}
