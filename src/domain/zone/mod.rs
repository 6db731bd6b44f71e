//! Zone aggregate
//!
//! Pricing zones and the country-name lookup that feeds them.

pub mod model;

pub use model::{normalize_country, CountryZoneMap, ZoneId};
