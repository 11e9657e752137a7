// Tuning constants for the backdrop engine and page effects.

use std::time::Duration;

// Surface
pub const SURFACE_SCALE: f64 = 0.7; // internal resolution relative to the viewport
pub const RESIZE_QUIET_WINDOW: Duration = Duration::from_millis(100);

// Populations
pub const STAR_COUNT: usize = 30;
pub const SHOOTING_STAR_COUNT: usize = 1;
pub const BLOSSOM_COUNT: usize = 25;

// Global color phase
pub const PHASE_STEP: f64 = 0.1; // degrees of hue per tick
pub const PHASE_WRAP: f64 = 360.0;

// Twinkling stars
pub const STAR_RADIUS_MAX: f64 = 1.5;
pub const STAR_ALPHA_MIN: f64 = 0.1; // lower reflection bound
pub const STAR_ALPHA_MAX: f64 = 0.8; // upper reflection bound
pub const STAR_ALPHA_SPAN_AT_RESET: f64 = 0.5; // initial alpha in [min, min + span)
pub const STAR_TWINKLE_SPEED_MIN: f64 = 0.005;
pub const STAR_TWINKLE_SPEED_SPAN: f64 = 0.02;
pub const STAR_HUE_BASE: f64 = 180.0;
pub const STAR_HUE_OFFSET_MAX: f64 = 40.0;
pub const STAR_SATURATION: f64 = 70.0;
pub const STAR_LIGHTNESS: f64 = 85.0;

// Shooting star
pub const SHOOTING_SPAWN_WIDTH_FACTOR: f64 = 1.5; // spawn x across 1.5x the surface width
pub const SHOOTING_LENGTH_MIN: f64 = 20.0;
pub const SHOOTING_LENGTH_SPAN: f64 = 60.0;
pub const SHOOTING_SPEED_MIN: f64 = 4.0;
pub const SHOOTING_SPEED_SPAN: f64 = 8.0;
pub const SHOOTING_ANGLE: f64 = std::f64::consts::FRAC_PI_4;
pub const SHOOTING_DELAY_MIN: f64 = 100.0; // ticks
pub const SHOOTING_DELAY_SPAN: f64 = 300.0;
pub const SHOOTING_EXIT_MARGIN: f64 = 100.0;
pub const SHOOTING_LINE_WIDTH: f64 = 1.5;
pub const SHOOTING_HUE_BASE: f64 = 200.0;
pub const SHOOTING_SATURATION: f64 = 80.0;
pub const SHOOTING_LIGHTNESS: f64 = 90.0;
pub const SHOOTING_ALPHA: f64 = 0.8;

// Blossoms
pub const BLOSSOM_SIZE_MIN: f64 = 1.5;
pub const BLOSSOM_SIZE_SPAN: f64 = 2.5;
pub const BLOSSOM_FALL_SPEED_MIN: f64 = 0.4;
pub const BLOSSOM_FALL_SPEED_SPAN: f64 = 0.8;
pub const BLOSSOM_ANGLE_SPAN: f64 = 360.0; // used as radians, only the sine matters
pub const BLOSSOM_SPIN_HALF_RANGE: f64 = 0.025;
pub const BLOSSOM_SWAY: f64 = 0.8;
pub const BLOSSOM_SPAWN_Y: f64 = -20.0;
pub const BLOSSOM_EXIT_MARGIN: f64 = 20.0;
pub const BLOSSOM_HUES: [f64; 3] = [330.0, 340.0, 345.0]; // cherry blossom pinks
pub const BLOSSOM_SATURATION: f64 = 70.0;
pub const BLOSSOM_LIGHTNESS_MIN: f64 = 80.0;
pub const BLOSSOM_LIGHTNESS_SPAN: f64 = 15.0;
pub const BLOSSOM_ALPHA: f64 = 0.75;

// Card tilt
pub const TILT_MAX_DEG: f64 = 5.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_MIN_VIEWPORT_WIDTH: f64 = 768.0; // tilt is desktop-only

// Navigation
pub const NAV_SECTION_LEAD_PX: f64 = 250.0; // a section counts as current this far before its top

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of a section in view before it fades in

// Stats count-up
pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNT_UP_STEPS: f64 = 200.0; // each step adds target / steps
pub const COUNT_UP_INTERVAL_MS: i32 = 20;
