//! Pricing configuration errors
//!
//! Pricing operations never fail; these errors only surface while building
//! zone maps and rate tables from configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Rate table must contain at least one row")]
    EmptyRateTable,

    #[error("Rate table has more than one row for {weight_kg} kg")]
    DuplicateBreakpoint { weight_kg: f64 },

    #[error("Rate table breakpoint {weight_kg} kg must be finite and positive")]
    InvalidBreakpoint { weight_kg: f64 },

    #[error("Rate for {weight_kg} kg in zone {zone} must be finite and non-negative")]
    InvalidRate { weight_kg: f64, zone: String },

    #[error("Unknown zone: {0}")]
    InvalidZone(String),

    #[error("Country alias is empty after normalization")]
    EmptyAlias,
}

/// Result type for building pricing tables
pub type PricingResult<T> = Result<T, PricingError>;
