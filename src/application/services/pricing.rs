//! Pricing service
//!
//! Holds one zone map, rate sheet, and booking tariff, and prices parcels
//! against them. The free functions at the bottom of this module use the
//! built-in tables.

use std::sync::OnceLock;

use tracing::debug;

use crate::config::{AppConfig, ConfigError};
use crate::domain::{
    BookingOptions, BookingPriceBreakdown, BookingTariff, CountryZoneMap, RateTable, ZoneId,
    ZoneQuote, DEFAULT_PROFIT_MARKUP_PERCENT,
};
use crate::shared::round_half_up;

/// Service for shipment pricing. Immutable once built, so it can be shared
/// behind an `Arc` by any number of request handlers.
#[derive(Debug, Clone)]
pub struct PricingService {
    zones: CountryZoneMap,
    rates: RateTable,
    booking: BookingTariff,
    default_markup_percent: f64,
    currency: String,
}

impl PricingService {
    pub fn new(zones: CountryZoneMap, rates: RateTable, booking: BookingTariff) -> Self {
        Self {
            zones,
            rates,
            booking,
            default_markup_percent: DEFAULT_PROFIT_MARKUP_PERCENT,
            currency: "NGN".to_string(),
        }
    }

    /// Build tables from config, failing on an invalid rate sheet or alias.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let service = Self::new(config.zone_map()?, config.rate_table()?, config.booking.clone())
            .with_default_markup(config.pricing.default_markup_percent)
            .with_currency(config.pricing.currency.clone());

        debug!(
            aliases = service.zones.len(),
            breakpoints = service.rates.rows().len(),
            max_weight_kg = service.rates.max_weight_kg(),
            default_markup_percent = service.default_markup_percent,
            "Pricing service configured"
        );

        Ok(service)
    }

    pub fn with_default_markup(mut self, markup_percent: f64) -> Self {
        self.default_markup_percent = markup_percent;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Resolve a free-text country name to its zone.
    pub fn resolve_zone(&self, country: &str) -> Option<ZoneId> {
        self.zones.resolve(country)
    }

    /// Carrier cost for `weight_kg` in `zone` from the rate sheet.
    pub fn lookup_carrier_cost(&self, weight_kg: f64, zone: ZoneId) -> i64 {
        self.rates.carrier_cost(weight_kg, zone)
    }

    /// Resolve, look up, and mark up in one step.
    ///
    /// `None` when the destination is unsupported; callers should show that
    /// to the user rather than treat it as a fault. A missing
    /// `markup_percent` uses the configured default.
    pub fn quote(
        &self,
        country: &str,
        weight_kg: f64,
        markup_percent: Option<f64>,
    ) -> Option<ZoneQuote> {
        let Some(zone) = self.resolve_zone(country) else {
            debug!(country, "Unsupported destination");
            return None;
        };

        let markup_percent = markup_percent.unwrap_or(self.default_markup_percent);
        let carrier_cost = self.lookup_carrier_cost(weight_kg, zone);
        let sell_price = apply_markup(carrier_cost as f64, markup_percent);

        debug!(
            country,
            zone = %zone,
            weight_kg,
            carrier_cost,
            markup_percent,
            sell_price,
            "Zone quote calculated"
        );

        Some(ZoneQuote {
            zone,
            zone_label: zone.label(),
            weight_kg,
            carrier_cost,
            markup_percent,
            sell_price,
        })
    }

    /// Itemised booking price under this service's tariff.
    pub fn calculate_booking_price(
        &self,
        weight_kg: f64,
        options: &BookingOptions,
    ) -> BookingPriceBreakdown {
        let breakdown = self.booking.calculate(weight_kg, options);
        debug!(
            weight_kg,
            premium_insurance = options.premium_insurance,
            fragile = options.fragile,
            grand_total = breakdown.grand_total,
            "Booking price calculated"
        );
        breakdown
    }

    /// Format an amount with the configured currency, e.g. `"35248 NGN"`
    pub fn format_amount(&self, amount: i64) -> String {
        format!("{} {}", amount, self.currency)
    }

    pub fn zones(&self) -> &CountryZoneMap {
        &self.zones
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn booking_tariff(&self) -> &BookingTariff {
        &self.booking
    }

    pub fn default_markup_percent(&self) -> f64 {
        self.default_markup_percent
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(
            CountryZoneMap::with_defaults(),
            RateTable::with_defaults(),
            BookingTariff::default(),
        )
    }
}

fn builtin() -> &'static PricingService {
    static SERVICE: OnceLock<PricingService> = OnceLock::new();
    SERVICE.get_or_init(PricingService::default)
}

/// Resolve a country name against the built-in alias list.
pub fn resolve_zone(country: &str) -> Option<ZoneId> {
    builtin().resolve_zone(country)
}

/// Carrier cost from the built-in rate sheet.
pub fn lookup_carrier_cost(weight_kg: f64, zone: ZoneId) -> i64 {
    builtin().lookup_carrier_cost(weight_kg, zone)
}

/// Sell price = cost × (1 + markup / 100), rounded.
///
/// The markup is not validated; a negative markup gives a discount.
pub fn apply_markup(cost: f64, markup_percent: f64) -> i64 {
    round_half_up(cost * (1.0 + markup_percent / 100.0))
}

/// Booking price under the built-in tariff.
pub fn calculate_booking_price(weight_kg: f64, options: &BookingOptions) -> BookingPriceBreakdown {
    builtin().calculate_booking_price(weight_kg, options)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RateRow;

    #[test]
    fn resolve_zone_normalizes_input() {
        assert_eq!(resolve_zone("UK "), Some(ZoneId::Zone1));
        assert_eq!(resolve_zone("uk"), Some(ZoneId::Zone1));
        assert_eq!(resolve_zone(" United Kingdom"), Some(ZoneId::Zone1));
        assert_eq!(resolve_zone("Atlantis"), None);
        assert_eq!(resolve_zone(""), None);
    }

    #[test]
    fn lookup_carrier_cost_edges() {
        for zone in ZoneId::all() {
            assert_eq!(lookup_carrier_cost(0.0, zone), 0);
            assert_eq!(lookup_carrier_cost(-3.0, zone), 0);
        }
        assert_eq!(lookup_carrier_cost(0.5, ZoneId::Zone1), 29373);
        assert_eq!(lookup_carrier_cost(1.0, ZoneId::Zone2), 16800);
        assert_eq!(lookup_carrier_cost(25.0, ZoneId::Zone4), 144900);
    }

    #[test]
    fn apply_markup_examples() {
        assert_eq!(apply_markup(1000.0, 20.0), 1200);
        assert_eq!(apply_markup(1000.0, 0.0), 1000);
        assert_eq!(apply_markup(1000.0, -10.0), 900);
        assert_eq!(apply_markup(29373.0, 20.0), 35248);
    }

    #[test]
    fn calculate_booking_price_examples() {
        let plain = calculate_booking_price(0.5, &BookingOptions::default());
        assert_eq!(plain.grand_total, 680);

        let options = BookingOptions::new()
            .declared_value(10_000.0)
            .premium_insurance(true)
            .fragile(true);
        let full = calculate_booking_price(1.0, &options);
        assert_eq!(full.subtotal_before_vat, 1365);
        assert_eq!(full.grand_total, 1467);
    }

    #[test]
    fn quote_uses_default_markup() {
        let service = PricingService::default();
        let quote = service.quote("  England", 0.5, None).unwrap();
        assert_eq!(quote.zone, ZoneId::Zone1);
        assert_eq!(quote.zone_label, "UK (Zone 1)");
        assert_eq!(quote.carrier_cost, 29373);
        assert_eq!(quote.markup_percent, 20.0);
        assert_eq!(quote.sell_price, 35248);
        assert_eq!(quote.margin(), 5875);
    }

    #[test]
    fn quote_with_explicit_markup() {
        let service = PricingService::default();
        let quote = service.quote("ghana", 2.0, Some(0.0)).unwrap();
        assert_eq!(quote.carrier_cost, 20400);
        assert_eq!(quote.sell_price, 20400);
    }

    #[test]
    fn quote_for_unsupported_destination_is_none() {
        let service = PricingService::default();
        assert!(service.quote("Atlantis", 1.0, None).is_none());
        assert!(service.quote("   ", 1.0, None).is_none());
    }

    #[test]
    fn quote_serializes_in_camel_case() {
        let quote = PricingService::default().quote("canada", 1.0, None).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["zone"], "3");
        assert_eq!(json["zoneLabel"], "Canada & USA (Zone 3)");
        assert_eq!(json["carrierCost"], 38500);
        assert_eq!(json["sellPrice"], 46200);
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            [pricing]
            currency = "USD"
            default_markup_percent = 50

            [zones.aliases]
            "eire" = 1

            [[rates]]
            weight_kg = 1
            zone1 = 100
            zone2 = 200
            zone3 = 300
            zone4 = 400
            "#,
        )
        .unwrap();
        let service = PricingService::from_config(&config).unwrap();
        let quote = service.quote("EIRE", 3.0, None).unwrap();
        assert_eq!(quote.carrier_cost, 100);
        assert_eq!(quote.sell_price, 150);
        assert_eq!(service.format_amount(quote.sell_price), "150 USD");
        assert_eq!(service.default_markup_percent(), 50.0);
    }

    #[test]
    fn from_config_rejects_invalid_rate_sheet() {
        let config = AppConfig {
            rates: vec![RateRow::new(-1.0, 1.0, 1.0, 1.0, 1.0)],
            ..AppConfig::default()
        };
        assert!(matches!(
            PricingService::from_config(&config),
            Err(ConfigError::Pricing(_))
        ));
    }

    #[test]
    fn custom_tariff_flows_through_service() {
        let tariff = BookingTariff {
            per_kg_rate: 200.0,
            ..BookingTariff::default()
        };
        let service = PricingService::new(
            CountryZoneMap::with_defaults(),
            RateTable::with_defaults(),
            tariff,
        );
        let bd = service.calculate_booking_price(1.0, &BookingOptions::default());
        assert_eq!(bd.base_shipping, 700);
        assert_eq!(bd.fuel_surcharge, 70);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let service = PricingService::default();
        assert_eq!(service.quote("usa", 4.2, None), service.quote("usa", 4.2, None));
        assert_eq!(
            lookup_carrier_cost(f64::NAN, ZoneId::Zone1),
            lookup_carrier_cost(f64::NAN, ZoneId::Zone1)
        );
    }

    #[test]
    fn service_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingService>();
    }
}
