//! Shared types for the mecanum dashboard
//!
//! This crate provides:
//! - The drive command and sampled-curve value types
//! - Engine-wide normalization and chart constants
//! - The error taxonomy shared by every crate in the workspace

pub mod constants;
pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
