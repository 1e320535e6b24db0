#![allow(clippy::float_cmp)]

use super::*;
use crate::config::KnotConfig;
use crate::value::SliderValue;

// Steps of 5 on the default 0..100 domain land on an 18° grid.
fn base() -> SliderConfig {
    SliderConfig { step: 5.0, arrow_step: 5.0, ..SliderConfig::default() }
}

// A 0..360 domain with unit steps, so angles equal values.
fn degrees() -> SliderConfig {
    SliderConfig { max: SliderValue::Number(360.0), ..SliderConfig::default() }
}

fn with_values(config: SliderConfig, values: &[f64]) -> SliderConfig {
    SliderConfig {
        knots: values
            .iter()
            .map(|v| KnotConfig { value: Some(SliderValue::Number(*v)), ..KnotConfig::default() })
            .collect(),
        ..config
    }
}

fn slider(config: SliderConfig) -> Slider {
    Slider::new(config).expect("slider")
}

fn angles(slider: &Slider) -> Vec<f64> {
    slider.knots().iter().map(|k| k.angle_deg).collect()
}

// --- Construction ---

#[test]
fn new_places_configured_knots() {
    let s = slider(with_values(base(), &[25.0, 75.0]));
    assert_eq!(angles(&s), vec![90.0, 270.0]);
    assert_eq!(s.lap_count(), 0);
    assert_eq!(s.gesture(), Gesture::Idle);
    assert_eq!(s.geometry().size(), 320.0);
}

#[test]
fn new_rejects_unknown_value_under_strict_lookup() {
    let config = SliderConfig {
        data: vec!["a".into(), "b".into()],
        discrete_lookup: crate::value::DiscreteLookup::Reject,
        knots: vec![KnotConfig { value: Some("z".into()), ..KnotConfig::default() }],
        ..SliderConfig::default()
    };
    assert_eq!(Slider::new(config).err(), Some(SliderError::UnknownValue("z".into())));
}

#[test]
fn snapshot_reports_values() {
    let s = slider(with_values(base(), &[25.0, 75.0]));
    let snapshot = s.snapshot().expect("snapshot");
    let values: Vec<_> = snapshot.values.iter().map(|v| v.value.clone()).collect();
    assert_eq!(values, vec![SliderValue::Number(25.0), SliderValue::Number(75.0)]);
    let rope = snapshot.rope.expect("rope");
    assert_eq!((rope.start_deg, rope.span_deg), (90.0, 180.0));
}

// --- Pipeline ---

#[test]
fn request_steps_and_commits() {
    let mut s = slider(with_values(base(), &[25.0]));
    let update = s.request_knot_angle(0, 100.0).expect("update");
    let KnotUpdate::Moved(snapshot) = &update else { panic!("expected a move, got {update:?}") };
    assert_eq!(snapshot.knots.as_slice()[0].angle_deg, 108.0);
    assert_eq!(snapshot.knots.as_slice()[0].prev_angle_deg, 90.0);
    assert_eq!(snapshot.values[0].value, SliderValue::Number(30.0));
    assert_eq!(angles(&s), vec![108.0]);
    assert_eq!(update.kind(), "moved");
}

#[test]
fn request_exact_end_on_closed_arc_lands_on_start() {
    let mut s = slider(with_values(base(), &[25.0]));
    s.request_knot_angle(0, 360.0).expect("update");
    assert_eq!(angles(&s), vec![0.0]);
}

#[test]
fn request_same_stepped_angle_is_unchanged() {
    let mut s = slider(with_values(base(), &[25.0]));
    assert_eq!(s.request_knot_angle(0, 95.0), Ok(KnotUpdate::Unchanged));
}

#[test]
fn request_on_disabled_knot_or_slider_is_unchanged() {
    let mut config = with_values(base(), &[25.0, 75.0]);
    config.knots[0].disabled = Some(true);
    let mut s = slider(config);
    assert_eq!(s.request_knot_angle(0, 120.0), Ok(KnotUpdate::Unchanged));

    let mut s = slider(SliderConfig { disabled: true, ..with_values(base(), &[25.0]) });
    assert_eq!(s.request_knot_angle(0, 120.0), Ok(KnotUpdate::Unchanged));
}

#[test]
fn request_out_of_range_is_an_error() {
    let mut s = slider(with_values(base(), &[25.0]));
    assert_eq!(s.request_knot_angle(4, 10.0), Err(SliderError::KnotOutOfRange { index: 4, len: 1 }));
}

#[test]
fn request_is_clamped_between_neighbours() {
    let mut s = slider(with_values(base(), &[10.0, 50.0, 90.0]));
    assert_eq!(angles(&s), vec![36.0, 180.0, 324.0]);
    s.request_knot_angle(1, 342.0).expect("update");
    assert_eq!(angles(&s), vec![36.0, 324.0, 324.0]);
}

#[test]
fn overlap_allowed_skips_clamping() {
    let mut s = slider(SliderConfig { knots_overlap: true, ..with_values(base(), &[10.0, 50.0, 90.0]) });
    s.request_knot_angle(1, 342.0).expect("update");
    assert_eq!(angles(&s), vec![36.0, 342.0, 324.0]);
}

#[test]
fn coincident_knots_do_not_deadlock() {
    let mut s = slider(with_values(degrees(), &[90.0, 90.0]));
    assert!(s.begin_knot_drag(1).expect("drag"));

    let update = s.request_knot_angle(1, 80.0).expect("update");
    assert_eq!(update.kind(), "moved");
    assert_eq!(angles(&s), vec![90.0, 80.0]);

    // Sliding across the shared angle parks the knot on it.
    let update = s.request_knot_angle(1, 100.0).expect("update");
    let KnotUpdate::HeldAtSplit(snapshot) = &update else { panic!("expected a hold, got {update:?}") };
    assert_eq!(snapshot.knots.as_slice()[1].angle_deg, 90.0);

    // Continuing well past the margin escapes to the far side.
    s.request_knot_angle(1, 250.0).expect("update");
    assert_eq!(angles(&s), vec![90.0, 250.0]);
}

#[test]
fn gesture_boundaries_disarm_the_resolver() {
    let mut s = slider(with_values(degrees(), &[90.0, 90.0]));
    s.begin_knot_drag(1).expect("drag");
    s.request_knot_angle(1, 80.0).expect("update");
    s.request_knot_angle(1, 90.0).expect("update");
    s.end_gesture();

    // A fresh gesture only arms; it cannot hold on its first sample.
    s.begin_knot_drag(1).expect("drag");
    let update = s.request_knot_angle(1, 100.0).expect("update");
    assert_eq!(update.kind(), "moved");
    assert_eq!(angles(&s), vec![90.0, 100.0]);
}

#[test]
fn overlap_allowed_still_keeps_knots_on_an_open_arc() {
    let config = SliderConfig {
        path_start_angle: 30.0,
        path_end_angle: 200.0,
        knots_overlap: true,
        knots: vec![KnotConfig::default()],
        ..degrees()
    };
    let mut s = slider(config);
    s.click(300.0).expect("click");
    assert_eq!(angles(&s), vec![200.0]);

    s.request_knot_angle(0, 30.0).expect("update");
    assert_eq!(s.key_down(0, &Key("ArrowLeft".into())), Ok(KnotUpdate::Unchanged));
    assert_eq!(angles(&s), vec![30.0]);
}

#[test]
fn open_discrete_arc_reaches_its_last_entry() {
    let config = SliderConfig {
        data: ["a", "b", "c", "d"].into_iter().map(SliderValue::from).collect(),
        path_end_angle: 180.0,
        knots: vec![KnotConfig { value: Some("a".into()), ..KnotConfig::default() }],
        ..SliderConfig::default()
    };
    let mut s = slider(config);
    assert_eq!(angles(&s), vec![0.0]);

    let update = s.request_knot_angle(0, 180.0).expect("update");
    let snapshot = update.snapshot().expect("moved");
    assert_eq!(snapshot.values[0].value, SliderValue::from("d"));
    assert_eq!(angles(&s), vec![180.0]);
    assert_eq!(s.snapshot().expect("snapshot").values[0].value, SliderValue::from("d"));
}

// --- Knot drag ---

#[test]
fn drag_knot_follows_pointer_inside_arc() {
    let config = SliderConfig {
        path_start_angle: 30.0,
        path_end_angle: 200.0,
        knots: vec![KnotConfig::default()],
        ..degrees()
    };
    let mut s = slider(config);
    assert_eq!(angles(&s), vec![30.0]);
    assert!(s.begin_knot_drag(0).expect("drag"));
    s.drag_knot(120.0).expect("update");
    assert_eq!(angles(&s), vec![120.0]);

    // Off the arc: the end nearer to the knot wins.
    s.drag_knot(250.0).expect("update");
    assert_eq!(angles(&s), vec![200.0]);
}

#[test]
fn drag_without_gesture_is_unchanged() {
    let mut s = slider(with_values(base(), &[25.0]));
    assert_eq!(s.drag_knot(120.0), Ok(KnotUpdate::Unchanged));
    assert_eq!(s.drag_rope(120.0), Ok(KnotUpdate::Unchanged));
}

#[test]
fn disabled_knot_cannot_be_dragged() {
    let mut config = with_values(base(), &[25.0]);
    config.knots[0].disabled = Some(true);
    let mut s = slider(config);
    assert!(!s.begin_knot_drag(0).expect("drag"));
    assert_eq!(s.gesture(), Gesture::Idle);
}

// --- Click ---

#[test]
fn click_moves_the_closest_knot() {
    let mut s = slider(with_values(base(), &[0.0, 50.0]));
    let outcome = s.click(170.0).expect("click");
    let ClickOutcome::Requested(update) = outcome else { panic!("expected a request, got {outcome:?}") };
    assert!(update.is_changed());
    assert_eq!(angles(&s), vec![0.0, 162.0]);
}

#[test]
fn click_with_animation_defers_to_the_driver() {
    let mut s = slider(SliderConfig { animate_on_click: true, ..with_values(base(), &[0.0, 50.0]) });
    let outcome = s.click(170.0).expect("click");
    let ClickOutcome::Animate(animation) = outcome else { panic!("expected an animation, got {outcome:?}") };
    assert_eq!(animation.knot_index, 1);
    assert_eq!(animation.source_deg, 180.0);
    assert_eq!(animation.target_deg, 170.0);
    assert_eq!(animation.duration_ms, 200.0);
    assert_eq!(angles(&s), vec![0.0, 180.0]);

    assert_eq!(s.advance_animation(&animation, 0.0), Ok(KnotUpdate::Unchanged));
    s.advance_animation(&animation, 100.0).expect("tick");
    assert_eq!(angles(&s), vec![0.0, 162.0]);
}

#[test]
fn click_on_disabled_slider_is_ignored() {
    let mut s = slider(SliderConfig { disabled: true, ..with_values(base(), &[25.0]) });
    assert_eq!(s.click(10.0), Ok(ClickOutcome::Ignored));
}

// --- Keyboard and wheel ---

#[test]
fn arrow_keys_step_by_arrow_step() {
    let mut s = slider(with_values(base(), &[25.0]));
    s.key_down(0, &Key("ArrowRight".into())).expect("key");
    assert_eq!(angles(&s), vec![108.0]);
    s.key_down(0, &Key("ArrowDown".into())).expect("key");
    assert_eq!(angles(&s), vec![90.0]);
    assert_eq!(s.key_down(0, &Key("Enter".into())), Ok(KnotUpdate::Unchanged));
}

#[test]
fn keyboard_can_be_disabled() {
    let mut s = slider(SliderConfig { keyboard_disabled: true, ..with_values(base(), &[25.0]) });
    assert_eq!(s.key_down(0, &Key("ArrowRight".into())), Ok(KnotUpdate::Unchanged));
}

#[test]
fn wheel_steps_the_knot() {
    let mut s = slider(with_values(base(), &[25.0]));
    s.wheel(0, WheelDelta { dx: 0.0, dy: -1.0 }).expect("wheel");
    assert_eq!(angles(&s), vec![108.0]);

    let mut s = slider(SliderConfig { mousewheel_disabled: true, ..with_values(base(), &[25.0]) });
    assert_eq!(s.wheel(0, WheelDelta { dx: 0.0, dy: -1.0 }), Ok(KnotUpdate::Unchanged));
}

// --- Rope drag ---

#[test]
fn rope_drag_moves_both_outer_knots() {
    let mut s = slider(SliderConfig { range_dragging: true, ..with_values(base(), &[10.0, 30.0]) });
    assert_eq!(angles(&s), vec![36.0, 108.0]);
    assert!(s.begin_rope_drag());

    assert_eq!(s.drag_rope(50.0), Ok(KnotUpdate::Unchanged));
    assert_eq!(s.drag_rope(52.0), Ok(KnotUpdate::Unchanged));
    let update = s.drag_rope(86.0).expect("drag");
    assert!(update.is_changed());
    assert_eq!(angles(&s), vec![72.0, 144.0]);
}

#[test]
fn rope_drag_needs_opt_in_and_two_knots() {
    let mut s = slider(with_values(base(), &[10.0, 30.0]));
    assert!(!s.begin_rope_drag());
    let mut s = slider(SliderConfig { range_dragging: true, ..with_values(base(), &[10.0]) });
    assert!(!s.begin_rope_drag());
}

// --- Laps ---

#[test]
fn laps_are_counted_across_the_seam() {
    let mut s = slider(SliderConfig { track_laps: true, ..with_values(degrees(), &[340.0]) });
    s.begin_knot_drag(0).expect("drag");
    for angle in [350.0, 10.0, 30.0] {
        s.request_knot_angle(0, angle).expect("update");
    }
    assert_eq!(s.lap_count(), 1);
    assert_eq!(s.snapshot().expect("snapshot").lap_count, 1);
}

#[test]
fn laps_are_not_counted_unless_tracked() {
    let mut s = slider(with_values(degrees(), &[340.0]));
    for angle in [350.0, 10.0, 30.0] {
        s.request_knot_angle(0, angle).expect("update");
    }
    assert_eq!(s.lap_count(), 0);
}

// --- Render descriptors ---

#[test]
fn rope_can_be_hidden() {
    let s = slider(SliderConfig { hide_rope: true, ..with_values(base(), &[25.0]) });
    assert!(s.rope().is_none());
}

#[test]
fn inner_fill_only_with_a_colour() {
    assert!(slider(base()).inner_fill().is_none());
    let s = slider(SliderConfig { path_inner_bg_color: Some("#fff".into()), ..base() });
    assert!(s.inner_fill().expect("fill").full);
}

#[test]
fn ticks_only_when_enabled() {
    let mut config = base();
    assert!(slider(config.clone()).ticks().is_empty());
    config.ticks.enable_ticks = true;
    assert_eq!(slider(config).ticks().len(), 100);
}

#[test]
fn rope_colour_priority() {
    let s = slider(SliderConfig { rope_bg_color_hover: Some("hover".into()), ..base() });
    assert_eq!(s.rope_color(false), s.config().rope_bg_color);
    assert_eq!(s.rope_color(true), "hover");

    let s = slider(base());
    assert_eq!(s.rope_color(true), s.config().rope_bg_color);

    let s = slider(SliderConfig { disabled: true, ..base() });
    assert_eq!(s.rope_color(true), s.config().rope_bg_color_disabled);
}

#[test]
fn moved_knot_becomes_selected() {
    let mut s = slider(with_values(base(), &[25.0]));
    assert_eq!(s.knot_fill_color(0, false), Ok(crate::consts::DEFAULT_KNOT_BG_COLOR));
    s.request_knot_angle(0, 200.0).expect("update");
    assert_eq!(s.selected(), Some(s.knots().as_slice()[0].id));
    assert_eq!(s.knot_fill_color(0, false), Ok(crate::consts::DEFAULT_KNOT_BG_COLOR_SELECTED));
    s.clear_selection();
    assert_eq!(s.selected(), None);
}
