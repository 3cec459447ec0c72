//! Parametric sinusoid sampler
//!
//! The basis of mecanum drive kinematics is a phase-shifted sine of the
//! commanded direction: each diagonal wheel pair follows the same curve a
//! quarter cycle apart. The sampler renders that curve over one normalized
//! cycle as chart-ready points.

use std::f64::consts::PI;

use dashcore::constants::{MAX, MIN, SAMPLE_COUNT};
use dashcore::error::{KinematicsError, Result};
use dashcore::types::{SamplePoint, WheelPairCurve};
use serde::{Deserialize, Serialize};

/// Shape of one sampled curve, independent of the commanded drive vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of samples over the cycle. Must be at least 1.
    pub count: usize,
    /// Full sine cycles from first to last sample.
    pub cycles: f64,
    /// Sine amplitude before the magnitude term is applied.
    pub amplitude: f64,
    /// Vertical offset applied inside the magnitude term.
    pub y_offset: f64,
    /// Phase shift in radians.
    pub x_offset: f64,
}

impl CurveConfig {
    /// The chart-width unit curve used for both wheel pairs, differing only
    /// in phase.
    pub fn wheel_pair(phase: f64) -> Self {
        CurveConfig {
            count: SAMPLE_COUNT,
            cycles: 1.0,
            amplitude: 1.0,
            y_offset: 0.0,
            x_offset: phase,
        }
    }
}

/// Rounds to 5 decimal places, the curve's display resolution.
fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

/// Evaluates the wheel-power formula at a single angle.
///
/// This is the instantaneous counterpart of [`sample_curve`]: the value the
/// chart marker points at when `angle` is the commanded direction plus the
/// wheel pair's phase.
pub fn eval_at(angle: f64, magnitude: f64, twist: f64, scale: f64) -> f64 {
    round5((angle.sin() * magnitude + twist) / scale).clamp(MIN, MAX)
}

/// Generates `config.count` uniformly spaced samples of the wheel-power
/// sinusoid, shifted by `twist`, scaled by `magnitude`, and normalized by
/// `scale`.
///
/// Every emitted value is rounded to 5 decimals and clamped into
/// [`MIN`, `MAX`]. Sample indices are 1-based to match the chart x-domain.
///
/// A single-sample curve has no frequency; the `count - 1` denominator is
/// guarded and the lone sample sits at t = 0. `count == 0` is rejected.
pub fn sample_curve(
    config: &CurveConfig,
    magnitude: f64,
    twist: f64,
    scale: f64,
) -> Result<WheelPairCurve> {
    if config.count == 0 {
        return Err(KinematicsError::EmptyCurve);
    }
    let frequency = if config.count > 1 {
        config.cycles / (config.count - 1) as f64
    } else {
        0.0
    };

    let mut points = Vec::with_capacity(config.count);
    for t in 0..config.count {
        let angle = 2.0 * PI * frequency * t as f64 + config.x_offset;
        let raw = ((config.amplitude * angle.sin() + config.y_offset) * magnitude + twist) / scale;
        points.push(SamplePoint {
            index: t + 1,
            value: round5(raw).clamp(MIN, MAX),
        });
    }
    Ok(points)
}
