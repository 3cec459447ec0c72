use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{CHART_MIN_X, FLBR_PHASE, FRBL_PHASE};
use crate::error::{KinematicsError, Result};

/// One commanded drive vector for the platform.
///
/// A command is an immutable snapshot: the engine replaces its held command
/// wholesale on every update and never mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveCommand {
    /// Direction of travel in radians. Negative input is normalized into
    /// [0, 2π) by [`DriveCommand::normalized`].
    pub direction: f64,
    /// Magnitude of force in [0, 1].
    pub magnitude: f64,
    /// Yaw / rotation-in-place component in [-1, 1].
    pub twist: f64,
    /// Normalization divisor. Zero is coerced to 1.0.
    pub scale: f64,
}

impl DriveCommand {
    pub fn new(direction: f64, magnitude: f64, twist: f64, scale: f64) -> Self {
        DriveCommand {
            direction,
            magnitude,
            twist,
            scale,
        }
    }

    /// Rejects NaN/infinite fields and out-of-domain magnitude or twist.
    pub fn validate(&self) -> Result<()> {
        if !self.direction.is_finite() {
            return Err(KinematicsError::InvalidCommand("direction is not finite"));
        }
        if !self.magnitude.is_finite() {
            return Err(KinematicsError::InvalidCommand("magnitude is not finite"));
        }
        if !self.twist.is_finite() {
            return Err(KinematicsError::InvalidCommand("twist is not finite"));
        }
        if !self.scale.is_finite() {
            return Err(KinematicsError::InvalidCommand("scale is not finite"));
        }
        if !(0.0..=1.0).contains(&self.magnitude) {
            return Err(KinematicsError::InvalidCommand("magnitude outside [0, 1]"));
        }
        if !(-1.0..=1.0).contains(&self.twist) {
            return Err(KinematicsError::InvalidCommand("twist outside [-1, 1]"));
        }
        Ok(())
    }

    /// Direction brought into [0, 2π) and zero scale coerced to 1.0.
    pub fn normalized(mut self) -> Self {
        if self.direction < 0.0 {
            self.direction += 2.0 * PI;
        }
        if self.scale == 0.0 {
            self.scale = 1.0;
        }
        self
    }
}

/// Whether the twist term contributes to the sampled curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetailLevel {
    /// Twist is omitted from the curves (always sampled with twist = 0).
    Basic,
    /// Twist shifts the curves along with the magnitude term.
    #[default]
    Detailed,
}

/// The two diagonal wheel pairs of a mecanum drivetrain. Each pair shares
/// one power curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelPair {
    /// Front-right & back-left.
    Frbl,
    /// Front-left & back-right.
    Flbr,
}

impl WheelPair {
    pub const ALL: [WheelPair; 2] = [WheelPair::Frbl, WheelPair::Flbr];

    /// Phase shift of this pair's power curve.
    pub fn phase(self) -> f64 {
        match self {
            WheelPair::Frbl => FRBL_PHASE,
            WheelPair::Flbr => FLBR_PHASE,
        }
    }

    /// Chart series label.
    pub fn label(self) -> &'static str {
        match self {
            WheelPair::Frbl => "FRBL",
            WheelPair::Flbr => "FLBR",
        }
    }
}

/// The four wheels, in slider display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wheel {
    FrontRight,
    BackLeft,
    FrontLeft,
    BackRight,
}

impl Wheel {
    pub const ALL: [Wheel; 4] = [
        Wheel::FrontRight,
        Wheel::BackLeft,
        Wheel::FrontLeft,
        Wheel::BackRight,
    ];

    /// The diagonal pair this wheel belongs to.
    pub fn pair(self) -> WheelPair {
        match self {
            Wheel::FrontRight | Wheel::BackLeft => WheelPair::Frbl,
            Wheel::FrontLeft | Wheel::BackRight => WheelPair::Flbr,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Wheel::FrontRight => "FR",
            Wheel::BackLeft => "BL",
            Wheel::FrontLeft => "FL",
            Wheel::BackRight => "BR",
        }
    }
}

/// One sampled point of a wheel-pair power curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// 1-based sample index, doubling as the chart x coordinate.
    pub index: usize,
    /// Power value, clamped into the IO bounds.
    pub value: f64,
}

/// A full wheel-pair power curve over one normalized cycle.
pub type WheelPairCurve = Vec<SamplePoint>;

/// Chart-facing output of one engine update: the two wheel-pair curves and
/// the current-direction marker position.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub frbl: WheelPairCurve,
    pub flbr: WheelPairCurve,
    /// Chart x coordinate of the vertical direction marker.
    pub marker_x: f64,
}

impl Default for CurveSet {
    fn default() -> Self {
        CurveSet {
            frbl: Vec::new(),
            flbr: Vec::new(),
            marker_x: CHART_MIN_X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_nominal_command() {
        let cmd = DriveCommand::new(1.0, 0.5, -0.25, 1.0);
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_fields() {
        for cmd in [
            DriveCommand::new(f64::NAN, 0.5, 0.0, 1.0),
            DriveCommand::new(0.0, f64::INFINITY, 0.0, 1.0),
            DriveCommand::new(0.0, 0.5, f64::NAN, 1.0),
            DriveCommand::new(0.0, 0.5, 0.0, f64::NEG_INFINITY),
        ] {
            assert!(matches!(
                cmd.validate(),
                Err(KinematicsError::InvalidCommand(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_out_of_domain_inputs() {
        assert!(DriveCommand::new(0.0, 1.5, 0.0, 1.0).validate().is_err());
        assert!(DriveCommand::new(0.0, 0.5, -1.5, 1.0).validate().is_err());
    }

    #[test]
    fn test_normalized_wraps_negative_direction() {
        let cmd = DriveCommand::new(-PI / 2.0, 0.5, 0.0, 1.0).normalized();
        assert!((cmd.direction - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized_coerces_zero_scale() {
        let cmd = DriveCommand::new(0.0, 0.5, 0.0, 0.0).normalized();
        assert!((cmd.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_pair_phases_are_mirrored() {
        assert!((WheelPair::Frbl.phase() + WheelPair::Flbr.phase()).abs() < 1e-12);
    }
}
