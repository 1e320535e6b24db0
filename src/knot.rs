//! Knots (draggable markers) and the registry queries over them.
//!
//! `KnotCollection` is a value: every mutation returns a new collection and
//! leaves the previous one untouched, so a snapshot handed to the renderer
//! can never observe a half-applied update. Order is domain order (the
//! order knots were configured in), not angular order.

#[cfg(test)]
#[path = "knot_test.rs"]
mod knot_test;

use serde::Serialize;
use uuid::Uuid;

use crate::angle::{Circle, is_angle_in_arc, normalize_degrees_360};
use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::geometry::{ClockGeometry, quantize_step};
use crate::value::SliderValue;

/// Stable identifier of a knot across snapshots.
pub type KnotId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnotColors {
    pub bg: String,
    pub bg_selected: String,
    pub bg_disabled: String,
    pub bg_hover: String,
    pub border: String,
}

/// A single marker on the arc.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Knot {
    pub id: KnotId,
    pub index: usize,
    pub angle_deg: f64,
    /// Angle before the last committed change. Only used for direction inference.
    pub prev_angle_deg: f64,
    pub radius: f64,
    pub border: f64,
    pub colors: KnotColors,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

impl Knot {
    /// Fill colour for the current interaction state.
    ///
    /// Disabled wins over hover, hover over selection.
    #[must_use]
    pub fn fill_color(&self, selected: Option<KnotId>, hovered: bool) -> &str {
        if self.disabled {
            &self.colors.bg_disabled
        } else if hovered {
            &self.colors.bg_hover
        } else if selected == Some(self.id) {
            &self.colors.bg_selected
        } else {
            &self.colors.bg
        }
    }

    /// Outer extent of the marker: radius plus half the border.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.radius + self.border / 2.0
    }
}

/// Neighbour angles that bound a knot's movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency {
    /// Number of knots in the collection.
    pub count: usize,
    pub prev_deg: f64,
    pub next_deg: f64,
}

impl Adjacency {
    /// The shared split angle when both neighbours coincide on a two-knot slider.
    #[must_use]
    pub fn split_point(&self) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        let coincident = self.prev_deg == self.next_deg;
        (self.count == 2 && coincident).then_some(self.prev_deg)
    }

    /// Keep `candidate_deg` between the two neighbours.
    ///
    /// Neighbours that do not ascend are unwound by a full turn first; an
    /// ascending pair that straddles the seam is compared in `[0, 360)`.
    #[must_use]
    pub fn clamp(&self, candidate_deg: f64, circle: &Circle) -> f64 {
        let (prev, next) = if self.next_deg <= self.prev_deg {
            (self.prev_deg, self.next_deg + 360.0)
        } else if normalize_degrees_360(self.prev_deg) <= normalize_degrees_360(self.next_deg) {
            (normalize_degrees_360(self.prev_deg), normalize_degrees_360(self.next_deg))
        } else {
            (self.prev_deg, self.next_deg)
        };
        clamp_to_arc(prev, next, candidate_deg, circle)
    }
}

/// Per-knot change report, already translated into the value domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnotValue {
    pub id: KnotId,
    pub value: SliderValue,
    pub radius: f64,
    pub border: f64,
    pub colors: KnotColors,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

/// Ordered, immutable set of knots plus the derived maximum marker extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnotCollection {
    knots: Vec<Knot>,
    max_radius: f64,
}

impl KnotCollection {
    #[must_use]
    pub fn new(knots: Vec<Knot>) -> Self {
        let max_radius = knots.iter().map(Knot::extent).fold(0.0, f64::max);
        Self { knots, max_radius }
    }

    /// Build the initial knots from configuration.
    ///
    /// Each configured value is converted to an angle and stepped; on a
    /// closed arc the end boundary is folded onto the start. Without any
    /// configured knot a single knot sits at the arc start.
    ///
    /// # Errors
    ///
    /// Propagates [`SliderError::UnknownValue`] under strict discrete lookup.
    pub fn from_config(config: &SliderConfig, geometry: &ClockGeometry) -> Result<Self, SliderError> {
        let template = KnotColors {
            bg: config.knot_bg_color.clone(),
            bg_selected: config.knot_bg_color_selected.clone(),
            bg_disabled: config.knot_bg_color_disabled.clone(),
            bg_hover: config.knot_bg_color_hover.clone().unwrap_or_else(|| config.knot_bg_color_selected.clone()),
            border: config.knot_border_color.clone(),
        };
        let start_deg = normalize_degrees_360(geometry.start_angle_deg());

        if config.knots.is_empty() {
            return Ok(Self::new(vec![Knot {
                id: Uuid::new_v4(),
                index: 0,
                angle_deg: start_deg,
                prev_angle_deg: start_deg,
                radius: config.knot_radius,
                border: config.knot_border,
                colors: template,
                disabled: config.disabled,
                aria_label: None,
            }]));
        }

        let mut knots = Vec::with_capacity(config.knots.len());
        for (index, knot) in config.knots.iter().enumerate() {
            let angle_deg = match &knot.value {
                Some(value) => {
                    let angle = geometry.value_to_angle(value)?;
                    let stepped = quantize_step(
                        angle,
                        geometry.step_angle_deg(),
                        geometry.start_angle_deg(),
                        geometry.end_angle_deg(),
                    );
                    geometry.wrap_closed(stepped)
                }
                None => start_deg,
            };
            knots.push(Knot {
                id: Uuid::new_v4(),
                index,
                angle_deg,
                prev_angle_deg: angle_deg,
                radius: knot.radius.unwrap_or(config.knot_radius),
                border: knot.border.unwrap_or(config.knot_border),
                colors: KnotColors {
                    bg: knot.bg_color.clone().unwrap_or_else(|| template.bg.clone()),
                    bg_selected: knot.bg_color_selected.clone().unwrap_or_else(|| template.bg_selected.clone()),
                    bg_disabled: knot.bg_color_disabled.clone().unwrap_or_else(|| template.bg_disabled.clone()),
                    bg_hover: knot.bg_color_hover.clone().unwrap_or_else(|| template.bg_hover.clone()),
                    border: knot.border_color.clone().unwrap_or_else(|| template.border.clone()),
                },
                disabled: knot.disabled.unwrap_or(config.disabled),
                aria_label: knot.aria_label.clone(),
            });
        }
        Ok(Self::new(knots))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Knot] {
        &self.knots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Knot> {
        self.knots.iter()
    }

    /// Largest `radius + border / 2` over all knots; 0 when empty.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn get(&self, index: usize) -> Result<&Knot, SliderError> {
        self.knots.get(index).ok_or(SliderError::KnotOutOfRange { index, len: self.knots.len() })
    }

    #[must_use]
    pub fn find(&self, id: KnotId) -> Option<&Knot> {
        self.knots.iter().find(|k| k.id == id)
    }

    /// The enabled knot nearest to `pointer_deg` on the projected circle.
    ///
    /// A single enabled knot is returned without measuring anything.
    #[must_use]
    pub fn closest_knot(&self, pointer_deg: f64, circle: &Circle) -> Option<&Knot> {
        let mut enabled = self.knots.iter().filter(|k| !k.disabled).peekable();
        let first = enabled.next()?;
        if enabled.peek().is_none() {
            return Some(first);
        }

        let pointer = circle.project(pointer_deg);
        std::iter::once(first)
            .chain(enabled)
            .map(|k| (k, pointer.distance(circle.project(k.angle_deg))))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| k)
    }

    /// Neighbour angles bounding knot `index`.
    ///
    /// On a closed arc neighbours wrap around the collection; on an open
    /// arc the first and last knots are bounded by the arc ends instead.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn adjacent_knot_info(
        &self,
        index: usize,
        arc_bounds: (f64, f64),
        is_closed: bool,
    ) -> Result<Adjacency, SliderError> {
        let count = self.knots.len();
        if index >= count {
            return Err(SliderError::KnotOutOfRange { index, len: count });
        }
        let (arc_start, arc_end) = arc_bounds;

        let (prev_deg, next_deg) = if is_closed {
            let prev = &self.knots[(index + count - 1) % count];
            let next = &self.knots[(index + 1) % count];
            (prev.angle_deg, next.angle_deg)
        } else {
            let prev = if index == 0 { arc_start } else { self.knots[index - 1].angle_deg };
            let next = if index + 1 == count { arc_end } else { self.knots[index + 1].angle_deg };
            (prev, next)
        };

        Ok(Adjacency { count, prev_deg, next_deg })
    }

    /// Move knot `index` to `angle_deg`, returning the new collection.
    ///
    /// Returns `Ok(None)` when the angle is unchanged. The moved knot's
    /// previous angle is remembered in `prev_angle_deg`.
    ///
    /// # Errors
    ///
    /// [`SliderError::KnotOutOfRange`] when `index` is not in the collection.
    pub fn commit_angle(&self, index: usize, angle_deg: f64) -> Result<Option<Self>, SliderError> {
        let current = self.get(index)?;
        #[allow(clippy::float_cmp)]
        let unchanged = current.angle_deg == angle_deg;
        if unchanged {
            return Ok(None);
        }

        let mut knots = self.knots.clone();
        let moved = &mut knots[index];
        moved.prev_angle_deg = moved.angle_deg;
        moved.angle_deg = angle_deg;
        Ok(Some(Self { knots, max_radius: self.max_radius }))
    }

    /// Translate every knot into a value report.
    ///
    /// # Errors
    ///
    /// Propagates [`SliderError::DiscreteIndexOutOfRange`] from the geometry.
    pub fn values(&self, geometry: &ClockGeometry) -> Result<Vec<KnotValue>, SliderError> {
        self.knots
            .iter()
            .map(|k| {
                Ok(KnotValue {
                    id: k.id,
                    value: geometry.angle_to_value(k.angle_deg)?,
                    radius: k.radius,
                    border: k.border,
                    colors: k.colors.clone(),
                    disabled: k.disabled,
                    aria_label: k.aria_label.clone(),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a KnotCollection {
    type Item = &'a Knot;
    type IntoIter = std::slice::Iter<'a, Knot>;

    fn into_iter(self) -> Self::IntoIter {
        self.knots.iter()
    }
}

/// Nearer of the two boundaries to `candidate_deg`, on the projected circle.
///
/// Ties go to the start boundary.
#[must_use]
pub fn closest_edge(start_deg: f64, end_deg: f64, candidate_deg: f64, circle: &Circle) -> f64 {
    let to_start = circle.projected_distance(candidate_deg, start_deg);
    let to_end = circle.projected_distance(candidate_deg, end_deg);
    if to_start <= to_end { start_deg } else { end_deg }
}

/// `candidate_deg` if it lies in `[start_deg, end_deg]`, else the closest edge.
#[must_use]
pub fn clamp_to_arc(start_deg: f64, end_deg: f64, candidate_deg: f64, circle: &Circle) -> f64 {
    if is_angle_in_arc(start_deg, end_deg, candidate_deg) {
        candidate_deg
    } else {
        closest_edge(start_deg, end_deg, candidate_deg, circle)
    }
}
