//! Arc strokes expressed as dash parameters on a full circle.
//!
//! A partial arc is drawn as one dash of a dashed circle: the dash covers
//! the span, the gap covers the rest of the circumference, and a negative
//! offset rotates the dash to the start angle. The background path, the
//! inner fill and the rope between knots all use the same descriptor.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::angle::angles_in_diff;
use crate::knot::Knot;

/// Dash parameters drawing `[start, end]` on a circle of a given radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeDescriptor {
    pub dash_length: f64,
    pub complement_length: f64,
    pub offset: f64,
}

impl StrokeDescriptor {
    /// SVG `stroke-dasharray` value.
    #[must_use]
    pub fn dasharray(&self) -> String {
        format!("{} {}", self.dash_length, self.complement_length)
    }
}

/// Stroke for the arc from `start_deg` to `end_deg` on a circle of `radius`.
#[must_use]
pub fn create_stroke(start_deg: f64, end_deg: f64, radius: f64) -> StrokeDescriptor {
    let circumference = TAU * radius;
    let dash_length = ((end_deg - start_deg) / 360.0) * circumference;
    StrokeDescriptor {
        dash_length,
        complement_length: circumference - dash_length,
        offset: -(start_deg / 360.0) * circumference,
    }
}

/// The occupied span between the extreme knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RopeArc {
    pub start_deg: f64,
    pub span_deg: f64,
    pub stroke: StrokeDescriptor,
}

/// Compute the rope for `knots` on a path spanning `[path_start_deg, path_end_deg]`.
///
/// With a single knot the rope runs from the path start to that knot;
/// otherwise from the first knot to the last (domain order). When the
/// occupied span is wider than the path itself, the rope is measured the
/// other way round. Returns `None` when there are no knots.
#[must_use]
pub fn rope_arc(path_start_deg: f64, path_end_deg: f64, radius: f64, knots: &[Knot]) -> Option<RopeArc> {
    let (first, last) = (knots.first()?, knots.last()?);
    let (mut start_deg, mut end_deg) = if knots.len() == 1 {
        (path_start_deg, first.angle_deg)
    } else {
        (first.angle_deg, last.angle_deg)
    };

    let path_span = angles_in_diff(path_start_deg, path_end_deg);
    if start_deg > end_deg {
        end_deg += 360.0;
    }
    let mut span_deg = angles_in_diff(start_deg, end_deg);
    if span_deg > path_span {
        span_deg = 360.0 - span_deg;
        std::mem::swap(&mut start_deg, &mut end_deg);
    }

    Some(RopeArc { start_deg, span_deg, stroke: create_stroke(start_deg, start_deg + span_deg, radius) })
}

/// The knots closest to and farthest from `path_start_deg`, measured along the path.
///
/// Ties keep the earliest knot in domain order.
#[must_use]
pub fn most_apart_knots(path_start_deg: f64, knots: &[Knot]) -> Option<(&Knot, &Knot)> {
    let mut begin: Option<(&Knot, f64)> = None;
    let mut end: Option<(&Knot, f64)> = None;
    for knot in knots {
        let distance = angles_in_diff(path_start_deg, knot.angle_deg);
        if begin.is_none_or(|(_, d)| distance < d) {
            begin = Some((knot, distance));
        }
        if end.is_none_or(|(_, d)| distance > d) {
            end = Some((knot, distance));
        }
    }
    Some((begin?.0, end?.0))
}
