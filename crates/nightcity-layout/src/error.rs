//! This module defines the error types used by the `nightcity-layout` crate.

#![warn(missing_docs)]

/// Error type for layout setup.
///
/// Generation itself never fails; these errors come from building a grid or
/// from a configuration that falls outside the ranges the engine trusts.
#[derive(Debug, PartialEq)]
pub enum LayoutError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when a grid of zero cells is requested.
    InvalidDimensions(&'static str),
    /// Error for an inconsistent configuration.
    /// This variant is returned when fields contradict each other.
    InvalidConfig(&'static str),
    /// Error for a configuration value outside its allowed range.
    OutOfRange(&'static str),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            LayoutError::InvalidConfig(msg) => write!(f, "Invalid city configuration: {}", msg),
            LayoutError::OutOfRange(msg) => write!(f, "Configuration value out of range: {}", msg),
        }
    }
}

impl core::error::Error for LayoutError {}
