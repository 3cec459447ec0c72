//! View projections over engine output
//!
//! This crate turns one engine update into the pure data each view consumes:
//! - Paired slider fill values with a minimum-visible-travel clamp
//! - The direction arrow transform (hidden at zero magnitude)
//! - The side (twist) arrow transform with left/right exclusivity
//!
//! The projections return data rather than driving widgets, so the engine
//! stays independent of any UI toolkit.

pub mod projector;

pub use projector::*;
