//! Scene constants and tuning parameters.

use crate::color::Rgb;

/// Nominal host frame rate (Hz). The host schedules frames; this is only
/// used for fixed-step ticking.
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal frame rate.
pub const FRAME_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- Palette ---

/// Start of the colour ramp (deep hot pink).
pub const PINK: Rgb = Rgb::new(255, 20, 147);

/// End of the colour ramp (deep sky blue).
pub const BLUE: Rgb = Rgb::new(0, 191, 255);

// --- Helix geometry ---

/// Base helix radius in pixels.
pub const HELIX_RADIUS: f64 = 80.0;

/// Fraction of the canvas width spanned by the helix.
pub const HELIX_WIDTH_FRACTION: f64 = 0.8;

/// Default number of spheres per strand.
pub const SPHERE_COUNT: usize = 20;

/// Helix turns expressed as a phase span (two full turns).
pub const HELIX_PHASE_SPAN: f64 = 4.0 * std::f64::consts::PI;

/// Per-sphere helix radius variation (± pixels).
pub const HELIX_RADIUS_JITTER: f64 = 15.0;

/// Horizontal positional jitter at generation (± pixels).
pub const HELIX_JITTER_X: f64 = 20.0;

/// Vertical positional jitter at generation (± pixels).
pub const HELIX_JITTER_Y: f64 = 10.0;

/// Base render radius of a helix sphere.
pub const HELIX_SPHERE_RADIUS: f64 = 12.0;

/// Render radius variation of a helix sphere (± pixels).
pub const HELIX_SPHERE_RADIUS_JITTER: f64 = 1.5;

// --- Scatter spheres ---

/// Default number of scatter spheres.
pub const SCATTER_COUNT: usize = 15;

/// Scatter sphere radius range (pixels).
pub const SCATTER_RADIUS_MIN: f64 = 8.0;
pub const SCATTER_RADIUS_MAX: f64 = 14.0;

/// Height of the scatter box as a multiple of the helix radius.
pub const SCATTER_HEIGHT_FACTOR: f64 = 3.0;

// --- Stars ---

/// Default number of background stars.
pub const STAR_COUNT: usize = 120;

/// Horizontal Gaussian spread as a divisor of the canvas width.
pub const STAR_SPREAD_X_DIVISOR: f64 = 6.0;

/// Vertical Gaussian spread as a divisor of the canvas height.
pub const STAR_SPREAD_Y_DIVISOR: f64 = 2.5;

pub const STAR_SIZE_MIN: f64 = 0.3;
pub const STAR_SIZE_MAX: f64 = 4.3;
pub const STAR_OPACITY_MIN: f64 = 0.3;
pub const STAR_OPACITY_MAX: f64 = 0.8;
pub const STAR_TWINKLE_SPEED_MIN: f64 = 0.01;
pub const STAR_TWINKLE_SPEED_MAX: f64 = 0.03;
pub const STAR_FLOAT_SPEED_MIN: f64 = 0.0002;
pub const STAR_FLOAT_SPEED_MAX: f64 = 0.001;

/// Twinkle contribution to display opacity.
pub const STAR_TWINKLE_AMPLITUDE: f64 = 0.2;

/// Per-frame float displacement amplitude (pixels).
pub const STAR_FLOAT_AMPLITUDE: f64 = 0.5;

/// Star halo radius as a multiple of star size.
pub const STAR_HALO_FACTOR: f64 = 3.0;

/// Halo centre alpha as a fraction of the star's display opacity.
pub const STAR_HALO_ALPHA: f32 = 0.3;

// --- Motion ---

/// Rotation advance per frame (radians).
pub const ROTATION_STEP: f64 = 0.005;

/// Helix wobble amplitude (pixels) and angular rate (rad/ms).
pub const WOBBLE_AMPLITUDE: f64 = 10.0;
pub const WOBBLE_RATE: f64 = 0.001;

/// Helix brightness floor and span (brightness ∈ [0.3, 1.0]).
pub const HELIX_BRIGHTNESS_MIN: f64 = 0.3;
pub const HELIX_BRIGHTNESS_SPAN: f64 = 0.7;

/// Range of the per-tick vertical easing factor toward the helix target.
pub const HELIX_EASE_MIN: f64 = 0.08;
pub const HELIX_EASE_MAX: f64 = 0.12;

/// Scatter drift amplitudes (pixels) and rates (rad/ms).
pub const SCATTER_DRIFT_Y_AMPLITUDE: f64 = 0.3;
pub const SCATTER_DRIFT_Y_RATE: f64 = 0.0005;
pub const SCATTER_DRIFT_X_AMPLITUDE: f64 = 0.2;
pub const SCATTER_DRIFT_X_RATE: f64 = 0.0003;

/// Scatter brightness oscillation (brightness ∈ [0.1, 0.7]).
pub const SCATTER_BRIGHTNESS_BASE: f64 = 0.4;
pub const SCATTER_BRIGHTNESS_AMPLITUDE: f64 = 0.3;
pub const SCATTER_BRIGHTNESS_RATE: f64 = 0.002;

// --- Pointer interaction ---

/// Idle time after which the pointer counts as resting (ms).
pub const REST_THRESHOLD_MS: f64 = 2000.0;

/// Window over which the return strength ramps up after resting (ms).
pub const REST_RAMP_MS: f64 = 3000.0;

/// Maximum per-tick return strength toward the anchor.
pub const REST_RETURN_MAX: f64 = 0.08;

/// Pointer influence radius (pixels).
pub const INFLUENCE_RADIUS: f64 = 250.0;

/// Drag strength at zero distance.
pub const DRAG_MAX: f64 = 0.5;

/// Per-tick easing factor applied on top of the drag strength.
pub const DRAG_EASE: f64 = 0.15;

// --- Rendering ---

/// Sphere glow radius as a multiple of sphere radius.
pub const GLOW_FACTOR: f64 = 4.0;

/// Body highlight offset toward the upper-left, as a fraction of radius.
pub const HIGHLIGHT_OFFSET: f64 = 0.3;
