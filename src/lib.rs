//! # DMX Pricing
//!
//! Shipment pricing for the DMX logistics booking platform.
//!
//! ## Architecture
//!
//! - **domain**: Zones, the carrier rate sheet, booking tariffs, and the
//!   values they produce
//! - **application**: The pricing service and free functions over the
//!   built-in tables
//! - **config**: TOML configuration for tariffs, rates, and aliases
//! - **telemetry**: Tracing subscriber setup for host applications
//!
//! Every pricing call is pure and synchronous. An unsupported destination
//! comes back as `None` and a non-positive weight costs nothing; neither is
//! an error.
//!
//! ```
//! use dmx_pricing::{apply_markup, lookup_carrier_cost, resolve_zone};
//!
//! let zone = resolve_zone(" United Kingdom").unwrap();
//! let cost = lookup_carrier_cost(0.5, zone);
//! assert_eq!(apply_markup(cost as f64, 20.0), 35248);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod shared;
pub mod telemetry;

pub use config::{config_path, default_config_path, AppConfig, ConfigError};

// Re-export the pricing surface
pub use application::services::{
    apply_markup, calculate_booking_price, lookup_carrier_cost, resolve_zone, PricingService,
};
pub use domain::{
    BookingOptions, BookingPriceBreakdown, BookingTariff, CountryZoneMap, PricingError, RateRow,
    RateTable, ZoneId, ZoneQuote, DEFAULT_PROFIT_MARKUP_PERCENT,
};

pub use telemetry::{init_tracing, try_init_tracing};
