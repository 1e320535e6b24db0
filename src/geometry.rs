//! Clock geometry: the arc definition and value ↔ angle conversion.
//!
//! A `ClockGeometry` is built once per configuration change and never
//! mutated afterwards. The end angle is unwound at construction so that
//! `end >= start` always holds; a closed arc stores `end = start + 360`.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::Serialize;

use crate::angle::{
    Circle, Point, angles_in_diff, convert_range, normalize_degrees_360, project_on_circle, set_decimal_places,
};
use crate::config::SliderConfig;
use crate::consts::{DEFAULT_MAX, DEFAULT_MIN};
use crate::error::SliderError;
use crate::stroke::{StrokeDescriptor, create_stroke};
use crate::value::{DiscreteLookup, SliderValue};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockGeometry {
    center: Point,
    radius: f64,
    start_angle_deg: f64,
    end_angle_deg: f64,
    is_closed: bool,
    step_angle_deg: f64,
    arrow_step_angle_deg: f64,
    value_min: f64,
    value_max: f64,
    data: Vec<SliderValue>,
    #[serde(skip)]
    discrete_lookup: DiscreteLookup,
    /// The discrete maximum is not in `data`, so the domain ends one slot
    /// past the list.
    #[serde(skip)]
    end_past_list: bool,
    round: u32,
    thickness: f64,
    border: f64,
    size: f64,
    disabled: bool,
}

/// Inner-fill mask for the area enclosed by the arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerFill {
    /// The arc is closed and the whole disc is filled without a mask.
    pub full: bool,
    pub start_point: Point,
    pub end_point: Point,
    /// SVG large-arc flag for the masking path.
    pub large_arc_flag: u8,
    pub stroke: StrokeDescriptor,
}

impl ClockGeometry {
    /// Derive the geometry from a (sanitised) configuration.
    ///
    /// `max_knot_radius` is the largest knot extent, used to size the
    /// container so markers never get clipped.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_config(config: &SliderConfig, max_knot_radius: f64) -> Self {
        let end_past_list = config.is_discrete() && !config.data.contains(&config.max);
        let (value_min, value_max) = if config.is_discrete() {
            let position = |v: &SliderValue| config.data.iter().position(|item| item == v);
            #[allow(clippy::cast_precision_loss)]
            let min = position(&config.min).map_or(0.0, |i| i as f64);
            #[allow(clippy::cast_precision_loss)]
            let max = position(&config.max).map_or(config.data.len() as f64, |i| i as f64);
            (min, max)
        } else {
            (config.min.as_f64().unwrap_or(DEFAULT_MIN), config.max.as_f64().unwrap_or(DEFAULT_MAX))
        };

        let start_angle_deg = config.path_start_angle;
        let mut end_angle_deg = config.path_end_angle;
        if end_angle_deg < start_angle_deg {
            end_angle_deg += 360.0;
        }
        let is_closed = normalize_degrees_360(start_angle_deg) == normalize_degrees_360(end_angle_deg);
        if is_closed && end_angle_deg == start_angle_deg {
            end_angle_deg += 360.0;
        }

        let domain = value_max - value_min;
        let per_unit = if domain == 0.0 { 0.0 } else { 360.0 / domain };

        let size = clock_size(config.path_radius, max_knot_radius, config.path_thickness, config.path_border);
        Self {
            center: clock_center(size),
            radius: config.path_radius,
            start_angle_deg,
            end_angle_deg,
            is_closed,
            step_angle_deg: config.step * per_unit,
            arrow_step_angle_deg: config.arrow_step * per_unit,
            value_min,
            value_max,
            data: config.data.clone(),
            discrete_lookup: config.discrete_lookup,
            end_past_list,
            round: config.round,
            thickness: config.path_thickness,
            border: config.path_border,
            size,
            disabled: config.disabled,
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    #[must_use]
    pub fn start_angle_deg(&self) -> f64 {
        self.start_angle_deg
    }

    #[must_use]
    pub fn end_angle_deg(&self) -> f64 {
        self.end_angle_deg
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[must_use]
    pub fn step_angle_deg(&self) -> f64 {
        self.step_angle_deg
    }

    #[must_use]
    pub fn arrow_step_angle_deg(&self) -> f64 {
        self.arrow_step_angle_deg
    }

    #[must_use]
    pub fn value_min(&self) -> f64 {
        self.value_min
    }

    #[must_use]
    pub fn value_max(&self) -> f64 {
        self.value_max
    }

    #[must_use]
    pub fn data(&self) -> &[SliderValue] {
        &self.data
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    #[must_use]
    pub fn border(&self) -> f64 {
        self.border
    }

    /// Side length of the square container.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    // --- Conversions ---

    /// Value under `angle_deg`.
    ///
    /// # Errors
    ///
    /// [`SliderError::DiscreteIndexOutOfRange`] when the angle maps past
    /// either end of a discrete domain. That only happens for angles off
    /// the arc, which the request pipeline never commits. The end of an
    /// open arc whose domain runs one slot past the list reads the last entry.
    pub fn angle_to_value(&self, angle_deg: f64) -> Result<SliderValue, SliderError> {
        let angle_deg = if angle_deg < self.start_angle_deg { angle_deg + 360.0 } else { angle_deg };
        let raw = convert_range(angle_deg, self.start_angle_deg, self.end_angle_deg, self.value_min, self.value_max);

        if self.data.is_empty() {
            return Ok(SliderValue::Number(set_decimal_places(raw, self.round)));
        }

        let len = self.data.len();
        #[allow(clippy::cast_possible_truncation)]
        let index = raw.round() as i64;
        let slot = match usize::try_from(index) {
            Ok(slot) if self.end_past_list && slot == len => len - 1,
            Ok(slot) if slot < len => slot,
            _ => return Err(SliderError::DiscreteIndexOutOfRange { index, len }),
        };
        Ok(self.data[slot].clone())
    }

    /// Angle of `value`, reduced into `[0, 360)`.
    ///
    /// A discrete value missing from the domain maps onto slot 0 under
    /// [`DiscreteLookup::Fallback`]. A text value on a continuous slider
    /// maps onto the minimum.
    ///
    /// # Errors
    ///
    /// [`SliderError::UnknownValue`] for a missing discrete value under
    /// [`DiscreteLookup::Reject`].
    pub fn value_to_angle(&self, value: &SliderValue) -> Result<f64, SliderError> {
        let position = if self.data.is_empty() {
            value.as_f64().unwrap_or(self.value_min)
        } else {
            match self.data.iter().position(|item| item == value) {
                #[allow(clippy::cast_precision_loss)]
                Some(index) => index as f64,
                None => match self.discrete_lookup {
                    DiscreteLookup::Fallback => 0.0,
                    DiscreteLookup::Reject => return Err(SliderError::UnknownValue(value.clone())),
                },
            }
        };
        let angle =
            convert_range(position, self.value_min, self.value_max, self.start_angle_deg, self.end_angle_deg);
        Ok(normalize_degrees_360(angle))
    }

    /// On a closed arc, fold an angle sitting on the end boundary onto the start.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn wrap_closed(&self, angle_deg: f64) -> f64 {
        if self.is_closed && normalize_degrees_360(angle_deg) == normalize_degrees_360(self.end_angle_deg) {
            self.start_angle_deg
        } else {
            angle_deg
        }
    }

    /// Angular span of the arc, in `(0, 360]`.
    #[must_use]
    pub fn arc_span_deg(&self) -> f64 {
        arc_span_deg(self.start_angle_deg, self.end_angle_deg, self.is_closed)
    }

    // --- Strokes ---

    /// Stroke of the background path.
    #[must_use]
    pub fn path_stroke(&self) -> StrokeDescriptor {
        create_stroke(self.start_angle_deg, self.end_angle_deg, self.radius)
    }

    /// Mask parameters for the inner fill.
    #[must_use]
    pub fn inner_fill(&self) -> InnerFill {
        let start_point = project_on_circle(self.center, self.start_angle_deg, self.radius);
        let end_point = project_on_circle(self.center, self.end_angle_deg, self.radius);
        InnerFill {
            full: self.is_closed,
            start_point,
            end_point,
            large_arc_flag: u8::from(self.end_angle_deg - self.start_angle_deg <= 180.0),
            stroke: self.path_stroke(),
        }
    }
}

/// Snap `angle_deg` to the nearest multiple of `step_deg`.
///
/// Angles already on either boundary are returned untouched so an arc can
/// always be closed by reaching its exact end. A zero step collapses every
/// other angle onto 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn quantize_step(angle_deg: f64, step_deg: f64, start_deg: f64, end_deg: f64) -> f64 {
    let angle = normalize_degrees_360(angle_deg);
    if angle == normalize_degrees_360(start_deg) || angle == normalize_degrees_360(end_deg) {
        return angle_deg;
    }
    if step_deg == 0.0 {
        return 0.0;
    }
    (angle_deg / step_deg).round() * step_deg
}

/// Positive span of `[start_deg, end_deg]`; a closed arc reports 360, never 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn arc_span_deg(start_deg: f64, end_deg: f64, is_closed: bool) -> f64 {
    let span = angles_in_diff(start_deg, end_deg);
    if is_closed && span == 0.0 { 360.0 } else { span }
}

/// Side of the square container holding the path and the largest marker.
#[must_use]
pub fn clock_size(radius: f64, max_knot_radius: f64, thickness: f64, border: f64) -> f64 {
    let gross_thickness = thickness + border * 2.0;
    let overflow = (max_knot_radius * 2.0 - gross_thickness).max(0.0);
    radius * 2.0 + gross_thickness + overflow
}

/// Center of a container of side `size`, rounded to two decimals.
#[must_use]
pub fn clock_center(size: f64) -> Point {
    let c = set_decimal_places(size / 2.0, 2);
    Point::new(c, c)
}
