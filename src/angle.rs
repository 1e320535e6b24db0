//! Shared angle math for the clock geometry.
//!
//! All angles are degrees unless a name says otherwise. Values may exceed
//! 360 transiently so arithmetic keeps its winding direction; callers reduce
//! with [`normalize_degrees_360`] when they need the canonical range.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::{PI, TAU};

use serde::Serialize;

/// A point in container space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The clock circle: center and path radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// See [`project_on_circle`].
    #[must_use]
    pub fn project(&self, angle_deg: f64) -> Point {
        project_on_circle(self.center, angle_deg, self.radius)
    }

    /// Distance between two angles once both are projected onto this circle.
    #[must_use]
    pub fn projected_distance(&self, a_deg: f64, b_deg: f64) -> f64 {
        self.project(a_deg).distance(self.project(b_deg))
    }
}

#[must_use]
pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Linearly remap `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// A collapsed source range maps everything onto `to_min`.
#[must_use]
pub fn convert_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    ((value - from_min) * (to_max - to_min)) / span + to_min
}

/// Round to `places` decimal digits.
#[must_use]
pub fn set_decimal_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    if !factor.is_finite() {
        return value;
    }
    (value * factor).round() / factor
}

/// Point at `angle_rad` on the circle of `radius` around `center`.
#[must_use]
pub fn circle_movement(center: Point, angle_rad: f64, radius: f64) -> Point {
    Point { x: center.x + radius * angle_rad.cos(), y: center.y + radius * angle_rad.sin() }
}

/// Project an angle onto the clock circle.
///
/// A full turn is compressed into a half turn before projecting. Every
/// distance comparison in the crate goes through this function, so the
/// comparisons stay consistent with each other and with marker placement.
#[must_use]
pub fn project_on_circle(center: Point, angle_deg: f64, radius: f64) -> Point {
    let angle_rad = convert_range(angle_deg.to_radians(), 0.0, TAU, 0.0, PI);
    circle_movement(center, angle_rad, radius)
}

/// Wraparound-aware containment: `angle ∈ [start, end]` or `angle + 360 ∈ [start, end]`.
///
/// A reversed pair (`start > end`) is read as crossing the 0° seam.
#[must_use]
pub fn is_angle_in_arc(start_deg: f64, end_deg: f64, angle_deg: f64) -> bool {
    let end_deg = if start_deg > end_deg { end_deg + 360.0 } else { end_deg };
    let within = |a: f64| a >= start_deg && a <= end_deg;
    within(angle_deg) || within(angle_deg + 360.0)
}

/// Positive angular span from `start_deg` to `end_deg`, in `[0, 360]`.
///
/// A reversed pair is unwound first; a non-zero multiple of a full turn
/// reports 360 rather than 0.
#[must_use]
pub fn angles_in_diff(start_deg: f64, end_deg: f64) -> f64 {
    let end_deg = if end_deg < start_deg { end_deg + 360.0 } else { end_deg };
    let diff = end_deg - start_deg;
    let wrapped = normalize_degrees_360(diff);
    if wrapped == 0.0 && diff > 0.0 { 360.0 } else { wrapped }
}
