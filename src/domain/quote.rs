//! Zone quote value

use serde::Serialize;

use crate::domain::zone::ZoneId;

/// Default profit markup applied to carrier cost, in percent
pub const DEFAULT_PROFIT_MARKUP_PERCENT: f64 = 20.0;

/// Sell price for a parcel to a resolved destination
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneQuote {
    pub zone: ZoneId,
    pub zone_label: &'static str,
    pub weight_kg: f64,
    /// Carrier cost from the rate sheet
    pub carrier_cost: i64,
    pub markup_percent: f64,
    /// Carrier cost with markup applied
    pub sell_price: i64,
}

impl ZoneQuote {
    pub fn margin(&self) -> i64 {
        self.sell_price - self.carrier_cost
    }
}
