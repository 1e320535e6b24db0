//! The slider engine: configuration, knots, and the request pipeline.
//!
//! DESIGN
//! ======
//! Every knot movement, whatever its source (pointer drag, click, click
//! animation tick, arrow key, wheel, rope drag), ends in
//! [`Slider::request_knot_angle`]. The pipeline runs in a fixed order:
//!
//! 1. step quantisation,
//! 2. closed-arc wrap (the end boundary folds onto the start),
//! 3. no-op short-circuit,
//! 4. split-point resolution (only when knots may not overlap),
//! 5. clamping between neighbours, or only to the arc ends when knots may
//!    overlap on an open arc,
//! 6. commit, which yields a new immutable `KnotCollection`,
//! 7. lap bookkeeping (only when laps are tracked).
//!
//! Callers get a [`KnotUpdate`] carrying a full [`SliderSnapshot`] of the
//! new state; snapshots are owned copies and never alias engine state.
//!
//! ERROR HANDLING
//! ==============
//! Disabled knots, a disabled slider and unchanged angles are not errors:
//! they produce `KnotUpdate::Unchanged`. A knot index outside the
//! collection is a caller bug and comes back as `SliderError::KnotOutOfRange`.
//! A commit whose values cannot be translated leaves the slider as it was.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use serde::Serialize;

use crate::angle::{is_angle_in_arc, normalize_degrees_360};
use crate::animation::ClickAnimation;
use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::geometry::{ClockGeometry, InnerFill, quantize_step};
use crate::input::{Gesture, Key, RopeDrag, StepDirection, WheelDelta};
use crate::knot::{KnotCollection, KnotId, KnotValue, clamp_to_arc, closest_edge};
use crate::lap::{LapEvent, LapHistory};
use crate::overlap::{OverlapDecision, OverlapResolver};
use crate::stroke::{RopeArc, StrokeDescriptor, most_apart_knots, rope_arc};
use crate::ticks::{TickMark, tick_marks};

/// Complete renderable state after a change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSnapshot {
    pub knots: KnotCollection,
    pub rope: Option<RopeArc>,
    /// Change notification: every knot translated into the value domain.
    pub values: Vec<KnotValue>,
    pub lap_count: i64,
}

/// Result of one angle request.
#[derive(Debug, Clone, PartialEq)]
pub enum KnotUpdate {
    /// Nothing changed: same angle, disabled knot, or disabled input.
    Unchanged,
    /// The knot moved to a new angle.
    Moved(SliderSnapshot),
    /// The knot was snapped onto the split point it shares with its sibling.
    HeldAtSplit(SliderSnapshot),
}

impl KnotUpdate {
    #[must_use]
    pub fn snapshot(&self) -> Option<&SliderSnapshot> {
        match self {
            Self::Unchanged => None,
            Self::Moved(snapshot) | Self::HeldAtSplit(snapshot) => Some(snapshot),
        }
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Short lowercase name, for logs and reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Moved(_) => "moved",
            Self::HeldAtSplit(_) => "held",
        }
    }
}

/// Result of clicking the path or the rope.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// No enabled knot, or the slider is disabled.
    Ignored,
    /// The closest knot was moved straight to the click.
    Requested(KnotUpdate),
    /// The host should drive this animation with [`Slider::advance_animation`].
    Animate(ClickAnimation),
}

pub struct Slider {
    config: SliderConfig,
    geometry: ClockGeometry,
    knots: KnotCollection,
    overlap: OverlapResolver,
    laps: Option<LapHistory>,
    lap_knot: Option<usize>,
    gesture: Gesture,
    selected: Option<KnotId>,
}

impl Slider {
    /// Build a slider from (possibly unsanitised) configuration.
    ///
    /// # Errors
    ///
    /// [`SliderError::UnknownValue`] when an initial knot value is missing
    /// from the discrete domain under strict lookup.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        let config = config.sanitized();
        // Knot placement ignores container size; the final geometry is sized
        // around the largest marker.
        let provisional = ClockGeometry::from_config(&config, 0.0);
        let knots = KnotCollection::from_config(&config, &provisional)?;
        let geometry = ClockGeometry::from_config(&config, knots.max_radius());
        let laps = config.track_laps.then(|| LapHistory::new(config.clock_angle_shift));

        tracing::debug!(
            knots = knots.len(),
            start = geometry.start_angle_deg(),
            end = geometry.end_angle_deg(),
            closed = geometry.is_closed(),
            "slider created"
        );

        Ok(Self {
            config,
            geometry,
            knots,
            overlap: OverlapResolver::new(),
            laps,
            lap_knot: None,
            gesture: Gesture::Idle,
            selected: None,
        })
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &ClockGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn knots(&self) -> &KnotCollection {
        &self.knots
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn selected(&self) -> Option<KnotId> {
        self.selected
    }

    /// Net laps of the tracked knot; 0 when laps are not tracked.
    #[must_use]
    pub fn lap_count(&self) -> i64 {
        self.laps.as_ref().map_or(0, LapHistory::lap_count)
    }

    /// The rope between the outermost knots, unless hidden.
    #[must_use]
    pub fn rope(&self) -> Option<RopeArc> {
        if self.config.hide_rope {
            return None;
        }
        rope_arc(
            self.geometry.start_angle_deg(),
            self.geometry.end_angle_deg(),
            self.geometry.radius(),
            self.knots.as_slice(),
        )
    }

    #[must_use]
    pub fn path_stroke(&self) -> StrokeDescriptor {
        self.geometry.path_stroke()
    }

    /// Inner fill mask, when an inner background colour is configured.
    #[must_use]
    pub fn inner_fill(&self) -> Option<InnerFill> {
        self.config.path_inner_bg_color.as_ref().map(|_| self.geometry.inner_fill())
    }

    /// Tick marks, empty unless ticks are enabled.
    #[must_use]
    pub fn ticks(&self) -> Vec<TickMark> {
        if !self.config.ticks.enable_ticks {
            return Vec::new();
        }
        tick_marks(&self.geometry, &self.config.ticks)
    }

    /// Rope stroke colour: disabled, then hover, then base.
    #[must_use]
    pub fn rope_color(&self, hovered: bool) -> &str {
        if self.config.disabled {
            &self.config.rope_bg_color_disabled
        } else if hovered {
            self.config.rope_bg_color_hover.as_deref().unwrap_or(&self.config.rope_bg_color)
        } else {
            &self.config.rope_bg_color
        }
    }

    /// Fill colour of knot `index` given the current selection.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn knot_fill_color(&self, index: usize, hovered: bool) -> Result<&str, SliderError> {
        Ok(self.knots.get(index)?.fill_color(self.selected, hovered))
    }

    /// Current state as a snapshot.
    ///
    /// # Errors
    ///
    /// Propagates [`SliderError::DiscreteIndexOutOfRange`] from value translation.
    pub fn snapshot(&self) -> Result<SliderSnapshot, SliderError> {
        Ok(SliderSnapshot {
            knots: self.knots.clone(),
            rope: self.rope(),
            values: self.knots.values(&self.geometry)?,
            lap_count: self.lap_count(),
        })
    }

    // --- Selection ---

    pub fn select(&mut self, id: KnotId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- Pipeline ---

    /// Move knot `index` towards `raw_deg` through the full pipeline.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn request_knot_angle(&mut self, index: usize, raw_deg: f64) -> Result<KnotUpdate, SliderError> {
        let knot = self.knots.get(index)?;
        if self.geometry.disabled() || knot.disabled {
            tracing::trace!(knot = index, "request ignored: disabled");
            return Ok(KnotUpdate::Unchanged);
        }
        let (knot_id, current_deg) = (knot.id, knot.angle_deg);
        self.selected = Some(knot_id);

        let (start, end) = (self.geometry.start_angle_deg(), self.geometry.end_angle_deg());
        let stepped = quantize_step(raw_deg, self.geometry.step_angle_deg(), start, end);
        let mut angle = self.geometry.wrap_closed(stepped);

        #[allow(clippy::float_cmp)]
        let unchanged = current_deg == angle;
        if unchanged {
            tracing::trace!(knot = index, angle, "request ignored: same angle");
            return Ok(KnotUpdate::Unchanged);
        }

        if !self.config.knots_overlap {
            let adjacency = self.knots.adjacent_knot_info(index, (start, end), self.geometry.is_closed())?;
            if let Some(split_deg) = adjacency.split_point() {
                if let OverlapDecision::Hold { split_deg } = self.overlap.observe(split_deg, angle) {
                    tracing::debug!(knot = index, split = split_deg, "knot held at split point");
                    return self.commit(index, split_deg, true);
                }
            }
            angle = adjacency.clamp(angle, &self.geometry.circle());
        } else if !self.geometry.is_closed() {
            angle = clamp_to_arc(start, end, angle, &self.geometry.circle());
        }

        self.commit(index, angle, false)
    }

    fn commit(&mut self, index: usize, angle_deg: f64, held: bool) -> Result<KnotUpdate, SliderError> {
        let Some(knots) = self.knots.commit_angle(index, angle_deg)? else {
            tracing::trace!(knot = index, angle = angle_deg, "commit skipped: same angle");
            return Ok(KnotUpdate::Unchanged);
        };
        // Translate before adopting the new collection so a failed commit leaves no trace.
        let values = knots.values(&self.geometry)?;
        self.knots = knots;
        tracing::debug!(knot = index, angle = angle_deg, "knot moved");

        if let Some(laps) = self.laps.as_mut() {
            if self.lap_knot != Some(index) {
                laps.clear_samples();
                self.lap_knot = Some(index);
            }
            match laps.record(angle_deg) {
                LapEvent::Forward | LapEvent::Backward => {
                    tracing::debug!(knot = index, laps = laps.lap_count(), "lap count changed");
                }
                LapEvent::Duplicate | LapEvent::Recorded => {}
            }
        }

        let snapshot =
            SliderSnapshot { knots: self.knots.clone(), rope: self.rope(), values, lap_count: self.lap_count() };
        Ok(if held { KnotUpdate::HeldAtSplit(snapshot) } else { KnotUpdate::Moved(snapshot) })
    }

    // --- Gestures ---

    /// Start dragging knot `index`. Returns `false` when the knot cannot be dragged.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn begin_knot_drag(&mut self, index: usize) -> Result<bool, SliderError> {
        let knot = self.knots.get(index)?;
        if self.geometry.disabled() || knot.disabled {
            return Ok(false);
        }
        self.selected = Some(knot.id);
        self.start_gesture(Gesture::DraggingKnot { index });
        Ok(true)
    }

    /// Start dragging the rope. Needs range dragging and at least two knots.
    pub fn begin_rope_drag(&mut self) -> bool {
        if !self.config.range_dragging || self.geometry.disabled() || self.knots.len() <= 1 {
            return false;
        }
        self.start_gesture(Gesture::DraggingRope(RopeDrag::new()));
        true
    }

    pub fn end_gesture(&mut self) {
        self.gesture = Gesture::Idle;
        self.overlap.reset();
    }

    fn start_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
        self.overlap.reset();
        if let Some(laps) = self.laps.as_mut() {
            laps.clear_samples();
        }
    }

    /// Pointer moved to `pointer_deg` during a knot drag.
    ///
    /// A pointer off the arc keeps the knot at whichever arc end is nearer
    /// to where the knot already is.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when the dragged knot no longer exists.
    pub fn drag_knot(&mut self, pointer_deg: f64) -> Result<KnotUpdate, SliderError> {
        let Gesture::DraggingKnot { index } = self.gesture else {
            return Ok(KnotUpdate::Unchanged);
        };
        let (start, end) = (self.geometry.start_angle_deg(), self.geometry.end_angle_deg());
        let target = if is_angle_in_arc(start, end, pointer_deg) {
            pointer_deg
        } else {
            closest_edge(start, end, self.knots.get(index)?.angle_deg, &self.geometry.circle())
        };
        self.request_knot_angle(index, target)
    }

    /// Pointer moved to `pointer_deg` during a rope drag.
    ///
    /// Both outermost knots rotate by the pointer delta. The returned
    /// update is the latest one that changed anything.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] if a knot disappears mid-drag.
    pub fn drag_rope(&mut self, pointer_deg: f64) -> Result<KnotUpdate, SliderError> {
        let step_deg = self.geometry.step_angle_deg();
        let Gesture::DraggingRope(drag) = &mut self.gesture else {
            return Ok(KnotUpdate::Unchanged);
        };
        let Some(delta) = drag.advance(pointer_deg, step_deg) else {
            return Ok(KnotUpdate::Unchanged);
        };

        let Some((begin, end)) = most_apart_knots(self.geometry.start_angle_deg(), self.knots.as_slice()) else {
            return Ok(KnotUpdate::Unchanged);
        };
        let moves = [
            (begin.index, normalize_degrees_360(begin.angle_deg + delta)),
            (end.index, normalize_degrees_360(end.angle_deg + delta)),
        ];

        let mut latest = KnotUpdate::Unchanged;
        for (index, angle) in moves {
            let update = self.request_knot_angle(index, angle)?;
            if update.is_changed() {
                latest = update;
            }
        }
        Ok(latest)
    }

    /// Click on the path or rope at `pointer_deg`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the request pipeline.
    pub fn click(&mut self, pointer_deg: f64) -> Result<ClickOutcome, SliderError> {
        if self.geometry.disabled() {
            return Ok(ClickOutcome::Ignored);
        }
        let Some(knot) = self.knots.closest_knot(pointer_deg, &self.geometry.circle()) else {
            return Ok(ClickOutcome::Ignored);
        };
        let (index, source_deg) = (knot.index, knot.angle_deg);

        if self.config.animate_on_click {
            self.start_gesture(Gesture::Idle);
            return Ok(ClickOutcome::Animate(ClickAnimation {
                knot_index: index,
                source_deg,
                target_deg: pointer_deg,
                path_start_deg: self.geometry.start_angle_deg(),
                duration_ms: self.config.animation_duration_ms,
            }));
        }
        Ok(ClickOutcome::Requested(self.request_knot_angle(index, pointer_deg)?))
    }

    /// Apply one animation tick at `progress_pct`.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when the animated knot no longer exists.
    pub fn advance_animation(
        &mut self,
        animation: &ClickAnimation,
        progress_pct: f64,
    ) -> Result<KnotUpdate, SliderError> {
        match animation.angle_at(progress_pct) {
            Some(angle) => self.request_knot_angle(animation.knot_index, angle),
            None => Ok(KnotUpdate::Unchanged),
        }
    }

    /// Arrow key pressed while knot `index` has focus.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn key_down(&mut self, index: usize, key: &Key) -> Result<KnotUpdate, SliderError> {
        if self.config.keyboard_disabled {
            return Ok(KnotUpdate::Unchanged);
        }
        match key.step_direction() {
            Some(direction) => self.step_knot(index, direction),
            None => Ok(KnotUpdate::Unchanged),
        }
    }

    /// Wheel scrolled while knot `index` has focus.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn wheel(&mut self, index: usize, delta: WheelDelta) -> Result<KnotUpdate, SliderError> {
        if self.config.mousewheel_disabled {
            return Ok(KnotUpdate::Unchanged);
        }
        self.step_knot(index, delta.step_direction())
    }

    fn step_knot(&mut self, index: usize, direction: StepDirection) -> Result<KnotUpdate, SliderError> {
        let current = self.knots.get(index)?.angle_deg;
        let target = current + direction.sign() * self.geometry.arrow_step_angle_deg();
        self.request_knot_angle(index, target)
    }
}
