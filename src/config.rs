//! Slider configuration as supplied by the host.
//!
//! DESIGN
//! ======
//! Every option is optional on the wire: the structs derive `Deserialize`
//! with `#[serde(default)]` so a host can send `{}` and get a working
//! slider. Field names are camelCase to match what UI hosts already emit.
//!
//! ERROR HANDLING
//! ==============
//! Only I/O and malformed JSON are errors. Values that parse but make no
//! geometric sense (NaN radius, negative step, an empty continuous domain)
//! are replaced with the documented defaults and logged, so the engine
//! always has a renderable state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::value::{DiscreteLookup, SliderValue};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full slider configuration: arc, value domain, knot template and overrides.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderConfig {
    pub min: SliderValue,
    pub max: SliderValue,
    pub step: f64,
    pub arrow_step: f64,
    /// Decimal places kept when reporting continuous values.
    pub round: u32,
    /// Discrete value domain; empty means continuous.
    pub data: Vec<SliderValue>,
    pub discrete_lookup: DiscreteLookup,

    pub path_start_angle: f64,
    pub path_end_angle: f64,
    pub path_radius: f64,
    pub path_thickness: f64,
    pub path_border: f64,
    pub path_bg_color: String,
    pub path_border_color: String,
    pub path_inner_bg_color: Option<String>,

    pub disabled: bool,
    /// Let knots pass through each other instead of clamping to neighbours.
    pub knots_overlap: bool,
    pub keyboard_disabled: bool,
    pub mousewheel_disabled: bool,
    /// Rotation of the clock face; baked into lap detection.
    pub clock_angle_shift: f64,
    pub track_laps: bool,

    pub hide_rope: bool,
    pub range_dragging: bool,
    pub rope_bg_color: String,
    pub rope_bg_color_disabled: String,
    pub rope_bg_color_hover: Option<String>,

    pub animate_on_click: bool,
    pub animation_duration_ms: f64,

    pub knot_radius: f64,
    pub knot_border: f64,
    pub knot_bg_color: String,
    pub knot_bg_color_selected: String,
    pub knot_bg_color_disabled: String,
    pub knot_bg_color_hover: Option<String>,
    pub knot_border_color: String,

    pub ticks: TickConfig,
    pub knots: Vec<KnotConfig>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: SliderValue::Number(DEFAULT_MIN),
            max: SliderValue::Number(DEFAULT_MAX),
            step: DEFAULT_STEP,
            arrow_step: DEFAULT_ARROW_STEP,
            round: DEFAULT_ROUND,
            data: Vec::new(),
            discrete_lookup: DiscreteLookup::default(),
            path_start_angle: DEFAULT_PATH_START_ANGLE,
            path_end_angle: DEFAULT_PATH_END_ANGLE,
            path_radius: DEFAULT_PATH_RADIUS,
            path_thickness: DEFAULT_PATH_THICKNESS,
            path_border: DEFAULT_PATH_BORDER,
            path_bg_color: DEFAULT_PATH_BG_COLOR.to_owned(),
            path_border_color: DEFAULT_PATH_BORDER_COLOR.to_owned(),
            path_inner_bg_color: None,
            disabled: false,
            knots_overlap: false,
            keyboard_disabled: false,
            mousewheel_disabled: false,
            clock_angle_shift: 0.0,
            track_laps: false,
            hide_rope: false,
            range_dragging: false,
            rope_bg_color: DEFAULT_ROPE_BG_COLOR.to_owned(),
            rope_bg_color_disabled: DEFAULT_ROPE_BG_COLOR_DISABLED.to_owned(),
            rope_bg_color_hover: None,
            animate_on_click: false,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            knot_radius: DEFAULT_KNOT_RADIUS,
            knot_border: DEFAULT_KNOT_BORDER,
            knot_bg_color: DEFAULT_KNOT_BG_COLOR.to_owned(),
            knot_bg_color_selected: DEFAULT_KNOT_BG_COLOR_SELECTED.to_owned(),
            knot_bg_color_disabled: DEFAULT_KNOT_BG_COLOR_DISABLED.to_owned(),
            knot_bg_color_hover: None,
            knot_border_color: DEFAULT_KNOT_BORDER_COLOR.to_owned(),
            ticks: TickConfig::default(),
            knots: Vec::new(),
        }
    }
}

/// Per-knot overrides. Unset fields inherit the slider's knot template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KnotConfig {
    pub value: Option<SliderValue>,
    pub radius: Option<f64>,
    pub border: Option<f64>,
    pub bg_color: Option<String>,
    pub bg_color_selected: Option<String>,
    pub bg_color_disabled: Option<String>,
    pub bg_color_hover: Option<String>,
    pub border_color: Option<String>,
    pub disabled: Option<bool>,
    pub aria_label: Option<String>,
}

/// Tick-mark layout options.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickConfig {
    pub enable_ticks: bool,
    /// Number of tick intervals; defaults to the domain size.
    pub ticks_count: Option<usize>,
    pub ticks_width: f64,
    pub ticks_height: f64,
    /// Height of every `ticks_group_size`-th tick; defaults to twice `ticks_height`.
    pub longer_ticks_height: Option<f64>,
    pub ticks_distance_to_panel: f64,
    pub tick_values_distance: f64,
    pub ticks_color: String,
    pub tick_values_color: String,
    pub tick_values_font_size: f64,
    pub ticks_group_size: Option<usize>,
    pub longer_tick_values_only: bool,
    pub show_tick_values: bool,
    pub tick_values_prefix: String,
    pub tick_values_suffix: String,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            enable_ticks: false,
            ticks_count: None,
            ticks_width: DEFAULT_TICKS_WIDTH,
            ticks_height: DEFAULT_TICKS_HEIGHT,
            longer_ticks_height: None,
            ticks_distance_to_panel: 0.0,
            tick_values_distance: DEFAULT_TICK_VALUES_DISTANCE,
            ticks_color: DEFAULT_TICKS_COLOR.to_owned(),
            tick_values_color: DEFAULT_TICK_VALUES_COLOR.to_owned(),
            tick_values_font_size: DEFAULT_TICK_VALUES_FONT_SIZE,
            ticks_group_size: Some(DEFAULT_TICKS_GROUP_SIZE),
            longer_tick_values_only: true,
            show_tick_values: true,
            tick_values_prefix: String::new(),
            tick_values_suffix: String::new(),
        }
    }
}

impl SliderConfig {
    /// Parse and sanitise a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the input is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Read, parse and sanitise a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if it does not parse.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&raw)
    }

    /// Whether the value domain is a discrete list.
    #[must_use]
    pub fn is_discrete(&self) -> bool {
        !self.data.is_empty()
    }

    /// Replace values that cannot produce a renderable slider with defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.step = finite_or("step", self.step, DEFAULT_STEP, |v| v >= 0.0);
        self.arrow_step = finite_or("arrowStep", self.arrow_step, DEFAULT_ARROW_STEP, |v| v >= 0.0);
        self.path_start_angle = finite_or("pathStartAngle", self.path_start_angle, DEFAULT_PATH_START_ANGLE, |_| true);
        self.path_end_angle = finite_or("pathEndAngle", self.path_end_angle, DEFAULT_PATH_END_ANGLE, |_| true);
        self.path_radius = finite_or("pathRadius", self.path_radius, DEFAULT_PATH_RADIUS, |v| v > 0.0);
        self.path_thickness = finite_or("pathThickness", self.path_thickness, DEFAULT_PATH_THICKNESS, |v| v >= 0.0);
        self.path_border = finite_or("pathBorder", self.path_border, DEFAULT_PATH_BORDER, |v| v >= 0.0);
        self.clock_angle_shift = finite_or("clockAngleShift", self.clock_angle_shift, 0.0, |_| true);
        self.animation_duration_ms =
            finite_or("animationDurationMs", self.animation_duration_ms, DEFAULT_ANIMATION_DURATION_MS, |v| v >= 0.0);
        self.knot_radius = finite_or("knotRadius", self.knot_radius, DEFAULT_KNOT_RADIUS, |v| v >= 0.0);
        self.knot_border = finite_or("knotBorder", self.knot_border, DEFAULT_KNOT_BORDER, |v| v >= 0.0);

        if !self.is_discrete() {
            let min = self.min.as_f64().filter(|v| v.is_finite());
            let max = self.max.as_f64().filter(|v| v.is_finite());
            match (min, max) {
                (Some(min), Some(max)) if min < max => {}
                _ => {
                    tracing::warn!(min = %self.min, max = %self.max, "invalid continuous domain; using defaults");
                    self.min = SliderValue::Number(DEFAULT_MIN);
                    self.max = SliderValue::Number(DEFAULT_MAX);
                }
            }
        }
        self
    }
}

fn finite_or(field: &'static str, value: f64, default: f64, accept: impl Fn(f64) -> bool) -> f64 {
    if value.is_finite() && accept(value) {
        value
    } else {
        tracing::warn!(field, value, default, "config value replaced with default");
        default
    }
}
