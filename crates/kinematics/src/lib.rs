//! Kinematics-to-visual mapping engine for a mecanum drivetrain
//!
//! This crate provides:
//! - Interval mapping shared by the chart, sliders, and scene overlays
//! - The parametric sinusoid sampler behind the wheel-pair power curves
//! - The engine that turns one drive command into a consistent curve set

pub mod engine;
pub mod mapping;
pub mod sampler;

pub use engine::*;
pub use mapping::*;
pub use sampler::*;
