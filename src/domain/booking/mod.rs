//! Booking aggregate
//!
//! Contains the booking tariff, booking options, and the itemised fee
//! breakdown.

pub mod model;

pub use model::{
    BookingOptions, BookingPriceBreakdown, BookingTariff, BASE_RATE, FRAGILE_FEE,
    FUEL_SURCHARGE_RATE, INSURANCE_RATE, PER_KG_RATE, VAT_RATE,
};
