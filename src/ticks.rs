//! Tick marks around the path.
//!
//! Ticks are laid out at even angular intervals from the arc start, pointing
//! inward from the path toward the center. Every `ticks_group_size`-th tick
//! is a longer one and, by default, the only one carrying a label.

#[cfg(test)]
#[path = "ticks_test.rs"]
mod ticks_test;

use serde::Serialize;

use crate::angle::{Point, convert_range, set_decimal_places};
use crate::config::TickConfig;
use crate::geometry::ClockGeometry;

/// Text drawn next to a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickLabel {
    pub text: String,
    pub point: Point,
}

/// One tick: a segment from `start` to `end`, plus an optional label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickMark {
    pub angle_deg: f64,
    pub start: Point,
    pub end: Point,
    pub is_longer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TickLabel>,
}

/// Number of tick intervals: the configured count, else the discrete list
/// length, else the domain maximum.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tick_count(geometry: &ClockGeometry, ticks: &TickConfig) -> usize {
    match ticks.ticks_count {
        Some(count) if count > 0 => count,
        _ if !geometry.data().is_empty() => geometry.data().len(),
        _ => geometry.value_max().max(0.0).round() as usize,
    }
}

/// Lay out every tick for `geometry`. An open arc gets one closing tick on its end.
#[must_use]
pub fn tick_marks(geometry: &ClockGeometry, ticks: &TickConfig) -> Vec<TickMark> {
    let count = tick_count(geometry, ticks);
    let delta_deg = (geometry.end_angle_deg() - geometry.start_angle_deg()).abs();
    #[allow(clippy::cast_precision_loss)]
    let interval_deg = if count == 0 { 0.0 } else { delta_deg / count as f64 };
    let total = if geometry.is_closed() { count } else { count + 1 };

    let circle = geometry.circle();
    let longer_height = ticks.longer_ticks_height.unwrap_or(ticks.ticks_height * 2.0);
    let group_size = ticks.ticks_group_size;

    (0..total)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle_deg = geometry.start_angle_deg() + i as f64 * interval_deg;
            let on_path = circle.project(angle_deg);
            let inward = unit(circle.center.x - on_path.x, circle.center.y - on_path.y);

            let is_longer = group_size.is_some_and(|g| g > 0 && i % g == 0);
            let height = if is_longer { longer_height } else { ticks.ticks_height };

            let start = offset(on_path, inward, ticks.ticks_distance_to_panel + geometry.thickness() / 2.0);
            let end = offset(start, inward, height);

            let labelled =
                ticks.show_tick_values && (!ticks.longer_tick_values_only || is_longer || group_size.is_none());
            let label = labelled.then(|| TickLabel {
                text: format!(
                    "{}{}{}",
                    ticks.tick_values_prefix,
                    tick_value(geometry, i, count),
                    ticks.tick_values_suffix
                ),
                point: offset(start, inward, height + ticks.tick_values_distance),
            });

            TickMark { angle_deg, start, end, is_longer, label }
        })
        .collect()
}

/// Value shown at tick `i` of `count`: a discrete entry (empty past the end)
/// or the rounded number.
fn tick_value(geometry: &ClockGeometry, i: usize, count: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let raw = convert_range(i as f64, 0.0, count as f64, geometry.value_min(), geometry.value_max());
    if geometry.data().is_empty() {
        return set_decimal_places(raw, geometry.round()).to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let slot = raw.max(0.0).round() as usize;
    geometry.data().get(slot).map(ToString::to_string).unwrap_or_default()
}

fn unit(x: f64, y: f64) -> Point {
    let len = x.hypot(y);
    if len == 0.0 { Point::default() } else { Point::new(x / len, y / len) }
}

fn offset(from: Point, direction: Point, distance: f64) -> Point {
    Point::new(from.x + direction.x * distance, from.y + direction.y * distance)
}
