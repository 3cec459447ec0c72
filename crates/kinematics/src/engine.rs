//! Drive-command to curve-set engine
//!
//! The engine owns the last accepted command and the curve set derived from
//! it. Updates are synchronous and single-threaded: each call fully
//! recomputes and replaces the held outputs before returning, and a rejected
//! command leaves them untouched.

use std::f64::consts::PI;

use dashcore::constants::{CHART_MAX_X, CHART_MIN_X, FLBR_PHASE, FRBL_PHASE};
use dashcore::error::Result;
use dashcore::types::{CurveSet, DetailLevel, DriveCommand, Wheel};

use crate::mapping::linear_map;
use crate::sampler::{eval_at, sample_curve, CurveConfig};

pub struct KinematicsEngine {
    detail_level: DetailLevel,
    command: DriveCommand,
    outputs: CurveSet,
}

impl KinematicsEngine {
    /// Creates an engine holding an empty curve set. The first `update`
    /// populates it.
    pub fn new(detail_level: DetailLevel) -> Self {
        KinematicsEngine {
            detail_level,
            command: DriveCommand::default().normalized(),
            outputs: CurveSet::default(),
        }
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail_level
    }

    /// Selects whether twist contributes to the curves. Takes effect on the
    /// next update.
    pub fn set_detail_level(&mut self, level: DetailLevel) {
        self.detail_level = level;
    }

    /// The curve set produced by the last accepted command.
    pub fn outputs(&self) -> &CurveSet {
        &self.outputs
    }

    /// The last accepted command, normalized.
    pub fn command(&self) -> DriveCommand {
        self.command
    }

    /// Recomputes both wheel-pair curves and the direction marker from
    /// `command`, replacing the held outputs wholesale.
    ///
    /// A malformed command (non-finite or out-of-domain field) fails fast
    /// before any sampling and the previously held outputs are retained
    /// unchanged.
    pub fn update(&mut self, command: DriveCommand) -> Result<&CurveSet> {
        command.validate()?;
        log::debug!("Updating kinematics chart ...");

        let command = command.normalized();
        let twist = self.effective_twist(command.twist);

        let marker_x = linear_map(command.direction, 0.0, 2.0 * PI, CHART_MIN_X, CHART_MAX_X)?;
        let frbl = sample_curve(
            &CurveConfig::wheel_pair(FRBL_PHASE),
            command.magnitude,
            twist,
            command.scale,
        )?;
        let flbr = sample_curve(
            &CurveConfig::wheel_pair(FLBR_PHASE),
            command.magnitude,
            twist,
            command.scale,
        )?;

        self.command = command;
        self.outputs = CurveSet {
            frbl,
            flbr,
            marker_x,
        };
        Ok(&self.outputs)
    }

    /// Instantaneous normalized power of each wheel under the held command:
    /// the curve formula evaluated at the commanded direction, which is the
    /// operating point the chart marker indicates. Ordered per
    /// [`Wheel::ALL`].
    pub fn wheel_values(&self) -> [f64; 4] {
        let twist = self.effective_twist(self.command.twist);
        Wheel::ALL.map(|wheel| {
            eval_at(
                self.command.direction + wheel.pair().phase(),
                self.command.magnitude,
                twist,
                self.command.scale,
            )
        })
    }

    fn effective_twist(&self, twist: f64) -> f64 {
        match self.detail_level {
            DetailLevel::Detailed => twist,
            DetailLevel::Basic => 0.0,
        }
    }
}

impl Default for KinematicsEngine {
    fn default() -> Self {
        KinematicsEngine::new(DetailLevel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcore::constants::{MAX, MIN, SAMPLE_COUNT};
    use dashcore::error::KinematicsError;

    fn unit_command() -> DriveCommand {
        DriveCommand::new(0.0, 1.0, 0.0, 1.0)
    }

    #[test]
    fn test_direction_zero_marker_at_domain_start() {
        let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
        let outputs = engine.update(unit_command()).unwrap();
        assert!((outputs.marker_x - CHART_MIN_X).abs() < 1e-12);
        assert_eq!(outputs.frbl.len(), SAMPLE_COUNT);
        assert_eq!(outputs.flbr.len(), SAMPLE_COUNT);
    }

    #[test]
    fn test_full_turn_marker_at_domain_end() {
        let mut engine = KinematicsEngine::default();
        let outputs = engine
            .update(DriveCommand::new(2.0 * PI, 1.0, 0.0, 1.0))
            .unwrap();
        assert!((outputs.marker_x - CHART_MAX_X).abs() < 1e-9);
    }

    #[test]
    fn test_mid_cycle_fixture_through_engine() {
        // direction = 0, magnitude = 1, twist = 0, scale = 1, Detailed:
        // sample 181 carries ±sin(3π/4).
        let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
        let outputs = engine.update(unit_command()).unwrap();
        assert!((outputs.frbl[180].value - 0.70711).abs() < 1e-4);
        assert!((outputs.flbr[180].value + 0.70711).abs() < 1e-4);
    }

    #[test]
    fn test_negative_direction_wraps() {
        let mut engine = KinematicsEngine::default();
        let wrapped = engine
            .update(DriveCommand::new(-PI / 2.0, 0.5, 0.0, 1.0))
            .unwrap()
            .clone();
        let explicit = engine
            .update(DriveCommand::new(3.0 * PI / 2.0, 0.5, 0.0, 1.0))
            .unwrap();
        // Floating-point wrap may differ by an ulp; the 5-decimal curve
        // resolution absorbs it, the marker gets a tolerance.
        assert_eq!(wrapped.frbl, explicit.frbl);
        assert_eq!(wrapped.flbr, explicit.flbr);
        assert!((wrapped.marker_x - explicit.marker_x).abs() < 1e-9);
    }

    #[test]
    fn test_zero_scale_coerced_to_one() {
        let mut engine = KinematicsEngine::default();
        let coerced = engine
            .update(DriveCommand::new(1.0, 0.8, 0.3, 0.0))
            .unwrap()
            .clone();
        let explicit = engine.update(DriveCommand::new(1.0, 0.8, 0.3, 1.0)).unwrap();
        assert_eq!(&coerced, explicit);
    }

    #[test]
    fn test_invalid_command_retains_prior_outputs() {
        let mut engine = KinematicsEngine::default();
        engine.update(unit_command()).unwrap();
        let before = engine.outputs().clone();

        let err = engine
            .update(DriveCommand::new(f64::NAN, 1.0, 0.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, KinematicsError::InvalidCommand(_)));
        assert_eq!(engine.outputs(), &before);
        assert_eq!(engine.command(), unit_command().normalized());
    }

    #[test]
    fn test_basic_level_omits_twist() {
        let mut detailed = KinematicsEngine::new(DetailLevel::Detailed);
        let mut basic = KinematicsEngine::new(DetailLevel::Basic);

        let with_twist = DriveCommand::new(0.0, 0.5, 0.75, 1.0);
        let without_twist = DriveCommand::new(0.0, 0.5, 0.0, 1.0);

        let basic_out = basic.update(with_twist).unwrap().clone();
        let detailed_zero = detailed.update(without_twist).unwrap();
        assert_eq!(&basic_out, detailed_zero);

        let detailed_out = detailed.update(with_twist).unwrap();
        assert_ne!(&basic_out, detailed_out);
    }

    #[test]
    fn test_outputs_replaced_wholesale() {
        let mut engine = KinematicsEngine::default();
        engine.update(unit_command()).unwrap();
        let first = engine.outputs().clone();
        engine
            .update(DriveCommand::new(PI, 0.25, -0.5, 1.0))
            .unwrap();
        assert_ne!(engine.outputs(), &first);
        assert_eq!(engine.outputs().frbl.len(), first.frbl.len());
    }

    #[test]
    fn test_wheel_values_share_pair_curves() {
        let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
        engine.update(DriveCommand::new(1.2, 0.9, 0.1, 1.0)).unwrap();
        let values = engine.wheel_values();
        // FR/BL share one pair, FL/BR the other.
        assert_eq!(values[0], values[1]);
        assert_eq!(values[2], values[3]);
        for v in values {
            assert!(v >= MIN && v <= MAX);
        }
    }

    #[test]
    fn test_wheel_values_match_marker_operating_point() {
        // At direction 0 the marker sits at sample 1; the instantaneous
        // values equal the first curve samples.
        let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
        let outputs = engine.update(unit_command()).unwrap().clone();
        let values = engine.wheel_values();
        assert!((values[0] - outputs.frbl[0].value).abs() < 1e-9);
        assert!((values[2] - outputs.flbr[0].value).abs() < 1e-9);
    }
}
