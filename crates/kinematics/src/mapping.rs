use dashcore::error::{KinematicsError, Result};

/// Maps `value` from the closed interval [`from_min`, `from_max`] onto
/// [`to_min`, `to_max`] with an affine transform.
///
/// The source interval must be non-empty; equal bounds fail with
/// [`KinematicsError::DegenerateDomain`] instead of dividing by zero.
pub fn linear_map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> Result<f64> {
    if from_min == from_max {
        return Err(KinematicsError::DegenerateDomain(from_min));
    }
    Ok(to_min + (value - from_min) * (to_max - to_min) / (from_max - from_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_mapping() {
        for v in [-3.0, 0.0, 0.25, 7.5] {
            let mapped = linear_map(v, -5.0, 10.0, -5.0, 10.0).unwrap();
            assert!((mapped - v).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let x = 0.37;
        let forward = linear_map(x, 0.0, 1.0, 0.13, 0.4).unwrap();
        let back = linear_map(forward, 0.13, 0.4, 0.0, 1.0).unwrap();
        assert_relative_eq!(back, x, max_relative = 1e-12);
    }

    #[test]
    fn test_endpoints_map_to_endpoints() {
        assert!((linear_map(0.0, 0.0, 1.0, 0.4, 1.5).unwrap() - 0.4).abs() < 1e-12);
        assert!((linear_map(1.0, 0.0, 1.0, 0.4, 1.5).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_extrapolates_outside_source_interval() {
        // The transform is affine, not clamping; clamping is the sampler's job.
        let mapped = linear_map(2.0, 0.0, 1.0, 0.0, 10.0).unwrap();
        assert!((mapped - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_from_bounds_rejected() {
        assert_eq!(
            linear_map(0.5, 1.0, 1.0, 0.0, 10.0),
            Err(KinematicsError::DegenerateDomain(1.0))
        );
    }
}
