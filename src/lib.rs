//! Headless engine for a circular range slider.
//!
//! A slider is a path drawn along an arc (or a full circle) carrying one or
//! more knots. The engine owns everything between raw input and rendering:
//! mapping values to angles and back, stepping, keeping knots apart,
//! resolving coincident knots, counting laps, and producing the stroke,
//! rope and tick descriptors a host draws. Hosts feed pointer angles, keys
//! and wheel deltas in, and get [`slider::SliderSnapshot`]s out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slider`] | Top-level engine and the request pipeline |
//! | [`config`] | Host configuration, JSON loading and sanitisation |
//! | [`geometry`] | Arc bounds, container size, value/angle mapping, stepping |
//! | [`knot`] | Knots, the immutable knot collection, neighbour clamping |
//! | [`overlap`] | Split-point resolution for two coincident knots |
//! | [`lap`] | Lap counting across the 0° seam |
//! | [`animation`] | Click-to-position interpolation |
//! | [`input`] | Pointer angles, key and wheel intents, gesture state |
//! | [`stroke`] | Dash descriptors for the path and the rope |
//! | [`ticks`] | Tick mark and label layout |
//! | [`angle`] | Angle math and the compressed projection |
//! | [`value`] | Slider values (numbers or discrete labels) |
//! | [`error`] | Runtime error taxonomy |
//! | [`consts`] | Default configuration values |

pub mod angle;
pub mod animation;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod input;
pub mod knot;
pub mod lap;
pub mod overlap;
pub mod slider;
pub mod stroke;
pub mod ticks;
pub mod value;
