//! Typed errors for the sampling and color core.
//!
//! These are precondition violations: the caller shows the message and leaves
//! its result state untouched.

use thiserror::Error;

/// Rejected number or list sampling request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("Minimum {min} is greater than maximum {max}")]
    InvertedRange { min: i64, max: i64 },

    #[error("Minimum {min} is greater than maximum {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("Count must be at least 1")]
    ZeroCount,

    #[error("Decimals must be between 0 and {max}, got {decimals}")]
    TooManyDecimals { decimals: u32, max: u32 },

    #[error(
        "Cannot generate {requested} unique numbers from range {min}-{max}. Maximum unique numbers: {available}"
    )]
    RangeTooSmall {
        requested: usize,
        min: i64,
        max: i64,
        available: u128,
    },

    #[error("Please add at least one item to the list")]
    EmptyList,

    #[error("Please add at least one weighted value")]
    EmptyValues,

    #[error("Cannot select {requested} items from a list of {available} items")]
    TooManyItems { requested: usize, available: usize },

    #[error("Weight {weight} at position {index} is not allowed")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Total weight must be greater than zero")]
    ZeroTotalWeight,
}

/// Rejected color request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format '{0}'. Please provide a hex code like #RRGGBB.")]
    InvalidHex(String),

    #[error("Palette size must be between {min} and {max}, got {size}")]
    PaletteSize { size: usize, min: usize, max: usize },
}
