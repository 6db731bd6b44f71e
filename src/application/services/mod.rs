pub mod pricing;

pub use pricing::{
    apply_markup, calculate_booking_price, lookup_carrier_cost, resolve_zone, PricingService,
};
