//! Shared numeric utilities for the Faderdeck mixer front-end.

pub mod db;
pub mod math;

/// Convenience type alias for values expressed in decibels.
pub type Decibels = f32;
