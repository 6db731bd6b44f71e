pub mod booking;
pub mod error;
pub mod quote;
pub mod rate_table;
pub mod zone;

// Re-export commonly used types
pub use booking::{BookingOptions, BookingPriceBreakdown, BookingTariff};
pub use error::{PricingError, PricingResult};
pub use quote::{ZoneQuote, DEFAULT_PROFIT_MARKUP_PERCENT};
pub use rate_table::{RateRow, RateTable};
pub use zone::{CountryZoneMap, ZoneId};
