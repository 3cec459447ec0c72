use dashcore::constants::{
    ARROW_SCALE_MAX, ARROW_SCALE_MIN, MIN_SLIDER, SIDE_ARROW_OFFSET_MAX, SIDE_ARROW_OFFSET_MIN,
    SIDE_ARROW_SCALE_MAX, SIDE_ARROW_SCALE_MIN, SLIDER_AMPLIFY,
};
use dashcore::error::Result;
use dashcore::types::{CurveSet, DriveCommand, WheelPairCurve};
use kinematics::mapping::linear_map;
use serde::{Deserialize, Serialize};

/// Fill values for one wheel's paired top/bottom sliders, each in the
/// 100-unit half range (`bottom` carries the negative mirror).
///
/// At most one half is nonzero, so a slider never shows an ambiguous state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderDrive {
    pub top: f64,
    pub bottom: f64,
}

/// Rotation and scale of the direction arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowTransform {
    /// Heading in degrees, renormalized into [0, 360).
    pub rotation_deg: f64,
    pub scale: f64,
}

/// Which rotation-in-place arrow is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Placement of the active side arrow. `None` when twist is zero; the
/// unselected side is always disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideArrowTransform {
    pub side: Side,
    /// Distance past the frame edge along the travel axis.
    pub offset: f64,
    pub scale: f64,
}

/// Everything the chart, slider, and scene adapters need from one update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedOutputs {
    pub frbl_curve: WheelPairCurve,
    pub flbr_curve: WheelPairCurve,
    pub marker_x: f64,
    /// Per-wheel slider drives, ordered per [`dashcore::Wheel::ALL`].
    pub wheel_sliders: [SliderDrive; 4],
    /// Direction arrow, `None` when hidden.
    pub arrow: Option<ArrowTransform>,
    /// Side (twist) arrow, `None` when twist is zero.
    pub side_arrow: Option<SideArrowTransform>,
}

/// Splits one normalized wheel value across the paired sliders.
///
/// The value is amplified into the 100-unit half range; the sign picks which
/// half is driven while the other is forced to zero, and magnitudes under
/// [`MIN_SLIDER`] are clamped up to it so any nonzero command shows visible
/// travel. Exact zero drives both halves to zero.
pub fn slider_drive(wheel_value: f64) -> SliderDrive {
    let amplified = wheel_value * SLIDER_AMPLIFY;
    if amplified > 0.0 {
        SliderDrive {
            top: amplified.max(MIN_SLIDER),
            bottom: 0.0,
        }
    } else if amplified < 0.0 {
        SliderDrive {
            top: 0.0,
            bottom: amplified.min(-MIN_SLIDER),
        }
    } else {
        SliderDrive::default()
    }
}

/// Direction arrow transform: hidden at zero magnitude, otherwise the
/// heading in degrees (renormalized into [0, 360)) with magnitude mapped
/// onto the arrow scale range.
pub fn arrow_transform(magnitude: f64, direction: f64) -> Result<Option<ArrowTransform>> {
    if magnitude <= 0.0 {
        return Ok(None);
    }
    let mut rotation_deg = direction.to_degrees();
    if rotation_deg < 0.0 {
        rotation_deg += 360.0;
    }
    let scale = linear_map(magnitude, 0.0, 1.0, ARROW_SCALE_MIN, ARROW_SCALE_MAX)?;
    Ok(Some(ArrowTransform {
        rotation_deg,
        scale,
    }))
}

/// Side arrow transform: the sign of twist selects left or right (zero
/// selects neither), |twist| maps onto the offset and scale ranges.
pub fn side_arrow_transform(twist: f64) -> Result<Option<SideArrowTransform>> {
    if twist == 0.0 {
        return Ok(None);
    }
    let offset = linear_map(
        twist.abs(),
        0.0,
        1.0,
        SIDE_ARROW_OFFSET_MIN,
        SIDE_ARROW_OFFSET_MAX,
    )?;
    let scale = linear_map(
        twist.abs(),
        0.0,
        1.0,
        SIDE_ARROW_SCALE_MIN,
        SIDE_ARROW_SCALE_MAX,
    )?;
    let side = if twist < 0.0 { Side::Left } else { Side::Right };
    Ok(Some(SideArrowTransform {
        side,
        offset,
        scale,
    }))
}

/// Assembles the full projection for one accepted command: curves and marker
/// from the engine, slider drives from the instantaneous wheel values, and
/// both arrow transforms from the command itself.
pub fn project(
    curves: &CurveSet,
    wheel_values: [f64; 4],
    command: &DriveCommand,
) -> Result<ProjectedOutputs> {
    Ok(ProjectedOutputs {
        frbl_curve: curves.frbl.clone(),
        flbr_curve: curves.flbr.clone(),
        marker_x: curves.marker_x,
        wheel_sliders: wheel_values.map(slider_drive),
        arrow: arrow_transform(command.magnitude, command.direction)?,
        side_arrow: side_arrow_transform(command.twist)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcore::types::DetailLevel;
    use kinematics::engine::KinematicsEngine;
    use std::f64::consts::PI;

    #[test]
    fn test_slider_zero_drives_both_halves_to_zero() {
        let drive = slider_drive(0.0);
        assert_eq!(drive, SliderDrive::default());
    }

    #[test]
    fn test_slider_positive_drives_top_only() {
        let drive = slider_drive(0.5);
        assert!((drive.top - 50.0).abs() < 1e-12);
        assert_eq!(drive.bottom, 0.0);
    }

    #[test]
    fn test_slider_negative_drives_bottom_only() {
        let drive = slider_drive(-0.5);
        assert_eq!(drive.top, 0.0);
        assert!((drive.bottom + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_slider_small_values_clamped_to_visible_travel() {
        let drive = slider_drive(0.01);
        assert!((drive.top - MIN_SLIDER).abs() < 1e-12);
        assert_eq!(drive.bottom, 0.0);

        let drive = slider_drive(-0.01);
        assert_eq!(drive.top, 0.0);
        assert!((drive.bottom + MIN_SLIDER).abs() < 1e-12);
    }

    #[test]
    fn test_slider_threshold_boundary_passes_through() {
        let at_threshold = slider_drive(MIN_SLIDER / SLIDER_AMPLIFY);
        assert!((at_threshold.top - MIN_SLIDER).abs() < 1e-12);

        let above = slider_drive((MIN_SLIDER + 1.0) / SLIDER_AMPLIFY);
        assert!((above.top - (MIN_SLIDER + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_arrow_hidden_at_zero_magnitude() {
        assert_eq!(arrow_transform(0.0, 1.0).unwrap(), None);
        assert_eq!(arrow_transform(-0.1, 1.0).unwrap(), None);
    }

    #[test]
    fn test_arrow_rotation_renormalized_to_degrees() {
        let arrow = arrow_transform(1.0, -PI / 2.0).unwrap().unwrap();
        assert!((arrow.rotation_deg - 270.0).abs() < 1e-9);

        let arrow = arrow_transform(1.0, PI).unwrap().unwrap();
        assert!((arrow.rotation_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrow_scale_spans_configured_range() {
        let faint = arrow_transform(1e-9, 0.0).unwrap().unwrap();
        assert!((faint.scale - ARROW_SCALE_MIN).abs() < 1e-6);

        let full = arrow_transform(1.0, 0.0).unwrap().unwrap();
        assert!((full.scale - ARROW_SCALE_MAX).abs() < 1e-12);
    }

    #[test]
    fn test_side_arrow_none_at_zero_twist() {
        assert_eq!(side_arrow_transform(0.0).unwrap(), None);
    }

    #[test]
    fn test_side_arrow_selection_by_twist_sign() {
        let left = side_arrow_transform(-0.5).unwrap().unwrap();
        assert_eq!(left.side, Side::Left);

        let right = side_arrow_transform(0.5).unwrap().unwrap();
        assert_eq!(right.side, Side::Right);
    }

    #[test]
    fn test_side_arrow_ranges_at_full_twist() {
        let full = side_arrow_transform(1.0).unwrap().unwrap();
        assert!((full.offset - SIDE_ARROW_OFFSET_MAX).abs() < 1e-12);
        assert!((full.scale - SIDE_ARROW_SCALE_MAX).abs() < 1e-12);

        let mirrored = side_arrow_transform(-1.0).unwrap().unwrap();
        assert!((mirrored.offset - full.offset).abs() < 1e-12);
        assert!((mirrored.scale - full.scale).abs() < 1e-12);
    }

    #[test]
    fn test_project_assembles_consistent_outputs() {
        let mut engine = KinematicsEngine::new(DetailLevel::Detailed);
        let command = DriveCommand::new(PI / 3.0, 0.9, 0.4, 1.0);
        engine.update(command).unwrap();

        let outputs = project(engine.outputs(), engine.wheel_values(), &engine.command()).unwrap();

        assert_eq!(outputs.frbl_curve, engine.outputs().frbl);
        assert_eq!(outputs.flbr_curve, engine.outputs().flbr);
        assert!((outputs.marker_x - engine.outputs().marker_x).abs() < 1e-12);
        assert!(outputs.arrow.is_some());
        assert_eq!(outputs.side_arrow.unwrap().side, Side::Right);
        // FR/BL share a drive, FL/BR share a drive.
        assert_eq!(outputs.wheel_sliders[0], outputs.wheel_sliders[1]);
        assert_eq!(outputs.wheel_sliders[2], outputs.wheel_sliders[3]);
    }

    #[test]
    fn test_project_zero_command_is_fully_idle() {
        let mut engine = KinematicsEngine::default();
        engine.update(DriveCommand::default()).unwrap();
        let outputs = project(engine.outputs(), engine.wheel_values(), &engine.command()).unwrap();

        assert_eq!(outputs.arrow, None);
        assert_eq!(outputs.side_arrow, None);
        for drive in outputs.wheel_sliders {
            assert_eq!(drive, SliderDrive::default());
        }
    }
}
