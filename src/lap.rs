//! Full-revolution detection for a dragged knot.
//!
//! DESIGN
//! ======
//! `LapHistory` keeps the last `LAP_HISTORY_CAPACITY` distinct angles of a
//! knot. The clock rotation offset is subtracted from every sample as it
//! enters, so the history always holds face-relative angles and no later
//! code has to remember whether the correction was applied.
//!
//! A lap is the middle transition of the window jumping across the seam by
//! more than `SAFE_ANGLE_DEG` while the newest transition keeps going the
//! same way: `350 → 10 → 30` advances, `10 → 350 → 330` retreats. The
//! direction sense of the newest sample (`is_inbound`) must agree, which
//! filters out a pointer that simply turned back across the seam.

#[cfg(test)]
#[path = "lap_test.rs"]
mod lap_test;

use std::collections::VecDeque;

use serde::Serialize;

use crate::angle::normalize_degrees_360;
use crate::consts::{LAP_HISTORY_CAPACITY, SAFE_ANGLE_DEG};

/// One recorded angle, tagged with its position in the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapSample {
    pub angle_deg: f64,
    pub index: u64,
}

/// What recording a sample did to the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapEvent {
    /// Same angle as the newest sample; nothing stored.
    Duplicate,
    Recorded,
    /// A forward revolution completed.
    Forward,
    /// A backward revolution completed.
    Backward,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LapHistory {
    samples: VecDeque<LapSample>,
    shift_deg: f64,
    next_index: u64,
    lap_count: i64,
}

impl LapHistory {
    /// Empty history for a clock face rotated by `shift_deg`.
    #[must_use]
    pub fn new(shift_deg: f64) -> Self {
        Self { samples: VecDeque::with_capacity(LAP_HISTORY_CAPACITY), shift_deg, next_index: 0, lap_count: 0 }
    }

    /// Net revolutions: forward laps minus backward laps.
    #[must_use]
    pub fn lap_count(&self) -> i64 {
        self.lap_count
    }

    #[must_use]
    pub fn shift_deg(&self) -> f64 {
        self.shift_deg
    }

    /// Stored samples, oldest first, already shift-corrected.
    pub fn samples(&self) -> impl Iterator<Item = &LapSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop the window but keep the counter. Used when another knot takes over.
    pub fn clear_samples(&mut self) {
        self.samples.clear();
        self.next_index = 0;
    }

    /// Record a raw angle and update the counter.
    pub fn record(&mut self, angle_deg: f64) -> LapEvent {
        let angle_deg = self.correct(angle_deg);
        #[allow(clippy::float_cmp)]
        let duplicate = self.samples.back().is_some_and(|last| last.angle_deg == angle_deg);
        if duplicate {
            return LapEvent::Duplicate;
        }

        let inbound = self.is_inbound(angle_deg);
        if self.samples.len() == LAP_HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(LapSample { angle_deg, index: self.next_index });
        self.next_index += 1;

        let event = self.classify(inbound);
        match event {
            LapEvent::Forward => self.lap_count += 1,
            LapEvent::Backward => self.lap_count -= 1,
            LapEvent::Duplicate | LapEvent::Recorded => {}
        }
        event
    }

    fn correct(&self, angle_deg: f64) -> f64 {
        normalize_degrees_360(angle_deg - self.shift_deg)
    }

    /// Whether a corrected `angle_deg` continues the motion backwards (towards lower angles).
    ///
    /// A drop that stays within the safety margin once unwound is a forward
    /// wrap, not a reversal; a jump up past the margin right after a drop is
    /// a backward wrap.
    fn is_inbound(&self, angle_deg: f64) -> bool {
        let mut newest = self.samples.iter().rev();
        let (Some(last), Some(prev)) = (newest.next(), newest.next()) else {
            return false;
        };
        let diff_last = angle_deg - last.angle_deg;
        let diff_prev = last.angle_deg - prev.angle_deg;

        if diff_last < 0.0 && diff_last + 360.0 < SAFE_ANGLE_DEG {
            return false;
        }
        if diff_last > SAFE_ANGLE_DEG && diff_prev < 0.0 {
            return true;
        }
        last.angle_deg > angle_deg
    }

    fn classify(&self, inbound: bool) -> LapEvent {
        if self.samples.len() < LAP_HISTORY_CAPACITY {
            return LapEvent::Recorded;
        }
        let [a0, a1, a2] = [0, 1, 2].map(|i| self.samples[i].angle_deg);
        let (jump, follow) = (a1 - a0, a2 - a1);
        if jump.abs() <= SAFE_ANGLE_DEG {
            return LapEvent::Recorded;
        }
        if jump < 0.0 && follow > 0.0 && !inbound {
            LapEvent::Forward
        } else if jump > 0.0 && follow < 0.0 && inbound {
            LapEvent::Backward
        } else {
            LapEvent::Recorded
        }
    }
}
