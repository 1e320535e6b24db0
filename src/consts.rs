//! Shared numeric constants and documented configuration defaults.

// ── Engine ──────────────────────────────────────────────────────

/// Angular window (degrees) used to tell a real rotation from a seam jump.
///
/// Both the overlap resolver and the lap counter treat a jump larger than
/// this as "continued past the shared point" rather than "turned around".
pub const SAFE_ANGLE_DEG: f64 = 150.0;

/// Offset (degrees) that keeps the split point itself out of both
/// rotational windows of the overlap resolver.
pub const SPLIT_EPSILON_DEG: f64 = 0.001;

/// Number of recent samples kept by the lap history.
pub const LAP_HISTORY_CAPACITY: usize = 3;

// ── Value domain ────────────────────────────────────────────────

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;
pub const DEFAULT_ARROW_STEP: f64 = 1.0;
pub const DEFAULT_ROUND: u32 = 0;

// ── Path ────────────────────────────────────────────────────────

pub const DEFAULT_PATH_START_ANGLE: f64 = 0.0;
pub const DEFAULT_PATH_END_ANGLE: f64 = 360.0;
pub const DEFAULT_PATH_RADIUS: f64 = 150.0;
pub const DEFAULT_PATH_THICKNESS: f64 = 5.0;
pub const DEFAULT_PATH_BORDER: f64 = 0.0;
pub const DEFAULT_PATH_BG_COLOR: &str = "#efefef";
pub const DEFAULT_PATH_BORDER_COLOR: &str = "#444444";

// ── Knots ───────────────────────────────────────────────────────

pub const DEFAULT_KNOT_RADIUS: f64 = 10.0;
pub const DEFAULT_KNOT_BORDER: f64 = 0.0;
pub const DEFAULT_KNOT_BG_COLOR: &str = "#163a86";
pub const DEFAULT_KNOT_BG_COLOR_SELECTED: &str = "#000000";
pub const DEFAULT_KNOT_BG_COLOR_DISABLED: &str = "#a8a8a8";
pub const DEFAULT_KNOT_BORDER_COLOR: &str = "#000000";

// ── Rope ────────────────────────────────────────────────────────

pub const DEFAULT_ROPE_BG_COLOR: &str = "#5daed2";
pub const DEFAULT_ROPE_BG_COLOR_DISABLED: &str = "#a8a8a8";

// ── Animation ───────────────────────────────────────────────────

pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 200.0;

// ── Ticks ───────────────────────────────────────────────────────

pub const DEFAULT_TICKS_WIDTH: f64 = 1.0;
pub const DEFAULT_TICKS_HEIGHT: f64 = 10.0;
pub const DEFAULT_TICKS_GROUP_SIZE: usize = 10;
pub const DEFAULT_TICK_VALUES_DISTANCE: f64 = 15.0;
pub const DEFAULT_TICKS_COLOR: &str = "#efefef";
pub const DEFAULT_TICK_VALUES_COLOR: &str = "#000000";
pub const DEFAULT_TICK_VALUES_FONT_SIZE: f64 = 12.0;
