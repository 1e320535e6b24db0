#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn animation(source_deg: f64, target_deg: f64) -> ClickAnimation {
    ClickAnimation { knot_index: 0, source_deg, target_deg, path_start_deg: 0.0, duration_ms: 200.0 }
}

// --- interpolate_angle ---

#[test]
fn halfway_clockwise() {
    assert_eq!(interpolate_angle(50.0, 10.0, 100.0, 0.0), Some(55.0));
}

#[test]
fn halfway_counter_clockwise() {
    assert_eq!(interpolate_angle(50.0, 100.0, 10.0, 0.0), Some(55.0));
    assert_eq!(interpolate_angle(25.0, 100.0, 20.0, 0.0), Some(80.0));
}

#[test]
fn zero_progress_is_no_update() {
    assert_eq!(interpolate_angle(0.0, 10.0, 100.0, 0.0), None);
    assert_eq!(interpolate_angle(f64::NAN, 10.0, 100.0, 0.0), None);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(interpolate_angle(150.0, 10.0, 100.0, 0.0), Some(100.0));
    assert_eq!(interpolate_angle(-20.0, 10.0, 100.0, 0.0), Some(10.0));
}

#[test]
fn full_progress_reaches_target() {
    let end = interpolate_angle(100.0, 300.0, 40.0, 0.0).expect("angle");
    assert!(approx_eq(end, 40.0));
}

#[test]
fn unwinding_relative_to_path_start_picks_direction() {
    // Path starts at 270: 300 is early on the path, 40 is late, so the
    // motion runs clockwise through the seam.
    let quarter = interpolate_angle(25.0, 300.0, 40.0, 270.0).expect("angle");
    assert!(approx_eq(quarter, 325.0));

    // From a 0° start the same pair reads as counter-clockwise.
    let quarter = interpolate_angle(25.0, 300.0, 40.0, 0.0).expect("angle");
    assert!(approx_eq(quarter, 235.0));
}

#[test]
fn result_is_reduced_modulo_360() {
    let angle = interpolate_angle(50.0, 350.0, 30.0, 300.0).expect("angle");
    assert!(approx_eq(angle, 10.0));
}

// --- ClickAnimation ---

#[test]
fn progress_follows_elapsed_time() {
    let anim = animation(10.0, 100.0);
    assert_eq!(anim.progress_at(0.0), 0.0);
    assert_eq!(anim.progress_at(100.0), 50.0);
    assert_eq!(anim.progress_at(400.0), 100.0);
    assert!(anim.is_finished(200.0));
    assert!(!anim.is_finished(199.0));
}

#[test]
fn zero_duration_finishes_immediately() {
    let anim = ClickAnimation { duration_ms: 0.0, ..animation(10.0, 100.0) };
    assert_eq!(anim.progress_at(0.0), 100.0);
    assert_eq!(anim.angle_at(anim.progress_at(0.0)), Some(100.0));
}

#[test]
fn angle_at_delegates_to_interpolator() {
    let anim = animation(10.0, 100.0);
    assert_eq!(anim.angle_at(0.0), None);
    assert_eq!(anim.angle_at(50.0), Some(55.0));
}
