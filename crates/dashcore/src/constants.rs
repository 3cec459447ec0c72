//! Engine-wide calibration constants.
//!
//! The IO bounds and chart domain are invariants: every sampled value is
//! clamped into [`MIN`, `MAX`] and every curve spans [`CHART_MIN_X`,
//! `CHART_MAX_X`]. The slider and arrow ranges are UI calibration values,
//! kept as named constants rather than hard invariants.

use std::f64::consts::FRAC_PI_4;

/// Lower normalization bound for wheel power values.
pub const MIN: f64 = -1.0;
/// Upper normalization bound for wheel power values.
pub const MAX: f64 = 1.0;

/// First x value of the chart domain (sample indices are 1-based).
pub const CHART_MIN_X: f64 = 1.0;
/// Last x value of the chart domain.
pub const CHART_MAX_X: f64 = 361.0;
/// Number of samples per wheel-pair curve, one per chart x unit.
pub const SAMPLE_COUNT: usize = 361;

/// How far the direction marker overshoots the IO bounds on the chart.
pub const MARKER_OVERSHOOT: f64 = 0.02;

/// Gain from a normalized wheel value to the 100-unit slider half range.
pub const SLIDER_AMPLIFY: f64 = 100.0;
/// Minimum visible slider travel for a nonzero command.
pub const MIN_SLIDER: f64 = 8.0;

/// Direction arrow scale at zero and full magnitude.
pub const ARROW_SCALE_MIN: f64 = 0.13;
pub const ARROW_SCALE_MAX: f64 = 0.4;

/// Side (twist) arrow offset from the frame edge at zero and full twist.
pub const SIDE_ARROW_OFFSET_MIN: f64 = 0.4;
pub const SIDE_ARROW_OFFSET_MAX: f64 = 1.5;
/// Side (twist) arrow scale at zero and full twist.
pub const SIDE_ARROW_SCALE_MIN: f64 = 0.13;
pub const SIDE_ARROW_SCALE_MAX: f64 = 0.3;

/// Phase shift of the front-right/back-left wheel-pair curve.
pub const FRBL_PHASE: f64 = -FRAC_PI_4;
/// Phase shift of the front-left/back-right wheel-pair curve.
pub const FLBR_PHASE: f64 = FRAC_PI_4;
