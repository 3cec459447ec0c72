use thiserror::Error;

/// Failures of the kinematics-to-visual mapping pipeline.
///
/// Out-of-range *intermediate* values are not errors: they are clamped into
/// the IO bounds by the documented normalization policy. Everything else in
/// the pipeline is pure and deterministic, so every failure here is
/// synchronous and local to the call that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// A drive command carried a NaN/infinite or out-of-domain field.
    /// The command is rejected before any sampling takes place.
    #[error("invalid drive command: {0}")]
    InvalidCommand(&'static str),

    /// A linear map was requested over an empty source interval.
    #[error("degenerate map domain: from_min == from_max ({0})")]
    DegenerateDomain(f64),

    /// Curve sampling was requested with zero points.
    #[error("degenerate curve: sample count is zero")]
    EmptyCurve,
}

pub type Result<T> = std::result::Result<T, KinematicsError>;
