//! Booking domain entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::round_half_up;

/// Flat handling charge per booking
pub const BASE_RATE: f64 = 500.0;
/// Charge per kilogram
pub const PER_KG_RATE: f64 = 150.0;
/// Fuel surcharge, as a fraction of base shipping
pub const FUEL_SURCHARGE_RATE: f64 = 0.10;
/// Premium insurance, as a fraction of declared value
pub const INSURANCE_RATE: f64 = 0.015;
/// VAT, as a fraction of the pre-tax subtotal
pub const VAT_RATE: f64 = 0.075;
/// Fixed surcharge for fragile items
pub const FRAGILE_FEE: i64 = 500;

/// Rates used to price a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookingTariff {
    #[validate(range(min = 0.0, message = "base_rate must be non-negative"))]
    pub base_rate: f64,
    #[validate(range(min = 0.0, message = "per_kg_rate must be non-negative"))]
    pub per_kg_rate: f64,
    #[validate(range(min = 0.0, max = 1.0, message = "fuel_surcharge_rate must be between 0 and 1"))]
    pub fuel_surcharge_rate: f64,
    #[validate(range(min = 0.0, max = 1.0, message = "insurance_rate must be between 0 and 1"))]
    pub insurance_rate: f64,
    #[validate(range(min = 0.0, max = 1.0, message = "vat_rate must be between 0 and 1"))]
    pub vat_rate: f64,
    #[validate(range(min = 0, message = "fragile_fee must be non-negative"))]
    pub fragile_fee: i64,
}

impl Default for BookingTariff {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            per_kg_rate: PER_KG_RATE,
            fuel_surcharge_rate: FUEL_SURCHARGE_RATE,
            insurance_rate: INSURANCE_RATE,
            vat_rate: VAT_RATE,
            fragile_fee: FRAGILE_FEE,
        }
    }
}

/// Optional extras chosen for a booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingOptions {
    /// Declared value of the goods, used for premium insurance
    pub declared_value: Option<f64>,
    pub premium_insurance: bool,
    pub fragile: bool,
}

impl BookingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declared_value(mut self, value: f64) -> Self {
        self.declared_value = Some(value);
        self
    }

    pub fn premium_insurance(mut self, enabled: bool) -> Self {
        self.premium_insurance = enabled;
        self
    }

    pub fn fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }
}

/// Itemised price for one booking, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPriceBreakdown {
    pub base_shipping: i64,
    pub fuel_surcharge: i64,
    pub insurance: i64,
    pub fragile_fee: i64,
    pub subtotal_before_vat: i64,
    pub vat: i64,
    pub grand_total: i64,
}

impl BookingPriceBreakdown {
    /// Format the grand total with a currency code, e.g. `"1467 NGN"`
    pub fn format_total(&self, currency: &str) -> String {
        format!("{} {}", self.grand_total, currency)
    }
}

impl BookingTariff {
    /// Calculate the fee breakdown for a parcel of `weight_kg`.
    ///
    /// Each line is rounded before it feeds the next one. Base shipping
    /// never goes below 0, so very negative weights price as an empty
    /// parcel. A `NaN` weight is priced as 0 kg. Amounts too large for
    /// `i64` saturate at `i64::MAX` rather than overflowing, so an infinite
    /// weight or declared value prices at the ceiling.
    pub fn calculate(&self, weight_kg: f64, options: &BookingOptions) -> BookingPriceBreakdown {
        let base_shipping = self.base_shipping(weight_kg);
        let fuel_surcharge = round_half_up(base_shipping as f64 * self.fuel_surcharge_rate);

        let insurance = match options.declared_value {
            Some(value) if options.premium_insurance && value > 0.0 => {
                round_half_up(value * self.insurance_rate)
            }
            _ => 0,
        };
        let fragile_fee = if options.fragile { self.fragile_fee } else { 0 };

        let subtotal_before_vat = base_shipping
            .saturating_add(fuel_surcharge)
            .saturating_add(insurance)
            .saturating_add(fragile_fee);
        let vat = round_half_up(subtotal_before_vat as f64 * self.vat_rate);

        BookingPriceBreakdown {
            base_shipping,
            fuel_surcharge,
            insurance,
            fragile_fee,
            subtotal_before_vat,
            vat,
            grand_total: subtotal_before_vat.saturating_add(vat),
        }
    }

    fn base_shipping(&self, weight_kg: f64) -> i64 {
        let weight_kg = if weight_kg.is_nan() { 0.0 } else { weight_kg };
        // 0 × ∞ is NaN; a zero per-kg rate charges nothing for weight
        let weight_charge = if self.per_kg_rate == 0.0 {
            0.0
        } else {
            weight_kg * self.per_kg_rate
        };
        round_half_up(self.base_rate + weight_charge).max(0)
    }
}

// ── Tests ──────────────────────────────────────────────────────
