//! Angle interpolation for click-to-move animations.
//!
//! The engine never owns timing. A host driver turns wall-clock time into a
//! progress percentage and asks for the angle at that progress; each
//! returned angle goes through the normal request pipeline.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use serde::Serialize;

use crate::angle::normalize_degrees_360;

/// Angle at `progress_pct` (0–100) of the way from `source_deg` to `target_deg`.
///
/// Both angles are unwound relative to `path_start_deg`; the motion is
/// clockwise iff the target then lies past the source. Progress is clamped
/// into `[0, 100]`. Zero (or NaN) progress yields `None`: nothing to move yet.
#[must_use]
pub fn interpolate_angle(progress_pct: f64, source_deg: f64, target_deg: f64, path_start_deg: f64) -> Option<f64> {
    if progress_pct == 0.0 || progress_pct.is_nan() {
        return None;
    }
    let percent = progress_pct.clamp(0.0, 100.0);

    let unwind = |deg: f64| {
        let deg = deg % 360.0;
        if deg < path_start_deg { deg + 360.0 } else { deg }
    };
    let (from, to) = (unwind(source_deg), unwind(target_deg));

    let angle = if to > from {
        let distance = (to - from + 360.0) % 360.0;
        source_deg + percent * distance / 100.0
    } else {
        let distance = (from - to + 360.0) % 360.0;
        source_deg - percent * distance / 100.0
    };
    Some(normalize_degrees_360(angle))
}

/// One click-to-move animation: which knot travels, from where, to where.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickAnimation {
    pub knot_index: usize,
    pub source_deg: f64,
    pub target_deg: f64,
    pub path_start_deg: f64,
    pub duration_ms: f64,
}

impl ClickAnimation {
    /// Progress percentage after `elapsed_ms`. A zero duration completes at once.
    #[must_use]
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 100.0;
        }
        (elapsed_ms / self.duration_ms * 100.0).clamp(0.0, 100.0)
    }

    /// Interpolated angle at `progress_pct`; see [`interpolate_angle`].
    #[must_use]
    pub fn angle_at(&self, progress_pct: f64) -> Option<f64> {
        interpolate_angle(progress_pct, self.source_deg, self.target_deg, self.path_start_deg)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress_at(elapsed_ms) >= 100.0
    }
}
