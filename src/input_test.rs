#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn circle() -> Circle {
    Circle::new(Point::new(100.0, 100.0), 80.0)
}

// --- pointer_to_angle ---

#[test]
fn pointer_angle_follows_screen_axes() {
    let anchor = Point::new(10.0, 20.0);
    // Right of center → 0°, below → 90°, left → 180°, above → 270°.
    assert!(approx_eq(pointer_to_angle(anchor, Point::new(200.0, 120.0), &circle()), 0.0));
    assert!(approx_eq(pointer_to_angle(anchor, Point::new(110.0, 220.0), &circle()), 90.0));
    assert!(approx_eq(pointer_to_angle(anchor, Point::new(30.0, 120.0), &circle()), 180.0));
    assert!(approx_eq(pointer_to_angle(anchor, Point::new(110.0, 40.0), &circle()), 270.0));
}

#[test]
fn pointer_angle_is_never_negative() {
    let angle = pointer_to_angle(Point::default(), Point::new(150.0, 50.0), &circle());
    assert!(approx_eq(angle, 315.0));
}

// --- Keys and wheel ---

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(Key("ArrowRight".into()).step_direction(), Some(StepDirection::Forward));
    assert_eq!(Key("ArrowUp".into()).step_direction(), Some(StepDirection::Forward));
    assert_eq!(Key("ArrowLeft".into()).step_direction(), Some(StepDirection::Backward));
    assert_eq!(Key("ArrowDown".into()).step_direction(), Some(StepDirection::Backward));
    assert_eq!(Key("Enter".into()).step_direction(), None);
}

#[test]
fn wheel_up_advances() {
    assert_eq!(WheelDelta { dx: 0.0, dy: -3.0 }.step_direction(), StepDirection::Forward);
    assert_eq!(WheelDelta { dx: 0.0, dy: 3.0 }.step_direction(), StepDirection::Backward);
    assert_eq!(WheelDelta { dx: 5.0, dy: 0.0 }.step_direction(), StepDirection::Backward);
}

#[test]
fn direction_signs() {
    assert_eq!(StepDirection::Forward.sign(), 1.0);
    assert_eq!(StepDirection::Backward.sign(), -1.0);
}

// --- RopeDrag ---

#[test]
fn rope_drag_first_sample_only_records() {
    let mut drag = RopeDrag::new();
    assert_eq!(drag.advance(40.0, 3.6), None);
    assert_eq!(drag.advance(50.0, 3.6), Some(10.0));
}

#[test]
fn rope_drag_ignores_sub_step_motion() {
    let mut drag = RopeDrag::new();
    drag.advance(40.0, 5.0);
    assert_eq!(drag.advance(42.0, 5.0), None);
    assert_eq!(drag.advance(40.0, 5.0), None);
    // The reference stayed at 40.
    assert_eq!(drag.advance(46.0, 5.0), Some(6.0));
    assert_eq!(drag.advance(41.0, 5.0), Some(-5.0));
}

#[test]
fn gesture_defaults_to_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
}
