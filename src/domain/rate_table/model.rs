//! Rate sheet domain entity

use serde::{Deserialize, Serialize};

use crate::domain::error::{PricingError, PricingResult};
use crate::domain::zone::ZoneId;
use crate::shared::round_half_up;

/// One rate sheet row: a weight breakpoint and the carrier cost (NGN) for
/// each zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub weight_kg: f64,
    pub zone1: f64,
    pub zone2: f64,
    pub zone3: f64,
    pub zone4: f64,
}

impl RateRow {
    pub const fn new(weight_kg: f64, zone1: f64, zone2: f64, zone3: f64, zone4: f64) -> Self {
        Self {
            weight_kg,
            zone1,
            zone2,
            zone3,
            zone4,
        }
    }

    /// Unrounded carrier cost for `zone`.
    pub fn cost(&self, zone: ZoneId) -> f64 {
        self.costs()[zone.index()]
    }

    fn costs(&self) -> [f64; 4] {
        [self.zone1, self.zone2, self.zone3, self.zone4]
    }
}

/// Demo rate sheet. 0.5 kg to the UK costs 29372.63 and the rest scale
/// from there.
const DEFAULT_ROWS: [RateRow; 12] = [
    RateRow::new(0.5, 29372.63, 15200.0, 34760.8, 31245.2),
    RateRow::new(1.0, 32500.0, 16800.0, 38500.0, 34800.0),
    RateRow::new(1.5, 36500.0, 18900.0, 43200.0, 38900.0),
    RateRow::new(2.0, 39500.0, 20400.0, 46800.0, 42200.0),
    RateRow::new(2.5, 41000.0, 21200.0, 48500.0, 43800.0),
    RateRow::new(3.0, 44800.0, 23200.0, 53100.0, 47800.0),
    RateRow::new(4.0, 51200.0, 26500.0, 60700.0, 54700.0),
    RateRow::new(5.0, 57500.0, 29800.0, 68200.0, 61500.0),
    RateRow::new(7.5, 71200.0, 36800.0, 84400.0, 76100.0),
    RateRow::new(10.0, 84800.0, 43900.0, 100500.0, 90600.0),
    RateRow::new(15.0, 110200.0, 57000.0, 130600.0, 117800.0),
    RateRow::new(20.0, 135500.0, 70100.0, 160700.0, 144900.0),
];

/// Validated rate sheet.
///
/// Rows are sorted ascending by weight, no two rows share a weight, and
/// the sheet is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rows: Vec<RateRow>,
}

impl RateTable {
    /// Build a table from rows in any order.
    pub fn new(mut rows: Vec<RateRow>) -> PricingResult<Self> {
        if rows.is_empty() {
            return Err(PricingError::EmptyRateTable);
        }

        for row in &rows {
            if !row.weight_kg.is_finite() || row.weight_kg <= 0.0 {
                return Err(PricingError::InvalidBreakpoint {
                    weight_kg: row.weight_kg,
                });
            }
            for zone in ZoneId::all() {
                let cost = row.cost(zone);
                if !cost.is_finite() || cost < 0.0 {
                    return Err(PricingError::InvalidRate {
                        weight_kg: row.weight_kg,
                        zone: zone.to_string(),
                    });
                }
            }
        }

        // weights are finite here, so total_cmp orders them numerically
        rows.sort_by(|a, b| a.weight_kg.total_cmp(&b.weight_kg));
        if let Some(pair) = rows.windows(2).find(|w| w[0].weight_kg == w[1].weight_kg) {
            return Err(PricingError::DuplicateBreakpoint {
                weight_kg: pair[0].weight_kg,
            });
        }

        Ok(Self { rows })
    }

    /// The built-in demo sheet.
    pub fn with_defaults() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_vec(),
        }
    }

    /// Carrier cost for a parcel of `weight_kg` going to `zone`, rounded to
    /// a whole currency unit.
    ///
    /// Picks the lightest row whose weight is at least `weight_kg`. Parcels
    /// heavier than every breakpoint are charged at the heaviest row.
    /// Non-positive weights cost nothing.
    pub fn carrier_cost(&self, weight_kg: f64, zone: ZoneId) -> i64 {
        if weight_kg <= 0.0 {
            return 0;
        }
        round_half_up(self.row_for(weight_kg).cost(zone))
    }

    /// Row a ceiling lookup selects for `weight_kg`.
    pub fn row_for(&self, weight_kg: f64) -> &RateRow {
        self.rows
            .iter()
            .find(|row| row.weight_kg >= weight_kg)
            .unwrap_or_else(|| self.heaviest())
    }

    /// Last row of the sheet.
    pub fn heaviest(&self) -> &RateRow {
        // `new` rejects empty sheets and the defaults have twelve rows
        &self.rows[self.rows.len() - 1]
    }

    pub fn rows(&self) -> &[RateRow] {
        &self.rows
    }

    pub fn max_weight_kg(&self) -> f64 {
        self.heaviest().weight_kg
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows_pass_validation() {
        let built = RateTable::new(DEFAULT_ROWS.to_vec()).unwrap();
        assert_eq!(built, RateTable::with_defaults());
    }

    #[test]
    fn non_positive_weight_costs_nothing() {
        let table = RateTable::with_defaults();
        for zone in ZoneId::all() {
            assert_eq!(table.carrier_cost(0.0, zone), 0);
            assert_eq!(table.carrier_cost(-1.0, zone), 0);
            assert_eq!(table.carrier_cost(-0.0, zone), 0);
        }
    }

    #[test]
    fn breakpoint_weight_uses_its_own_row() {
        let table = RateTable::with_defaults();
        for row in table.rows() {
            for zone in ZoneId::all() {
                assert_eq!(
                    table.carrier_cost(row.weight_kg, zone),
                    round_half_up(row.cost(zone))
                );
            }
        }
        assert_eq!(table.carrier_cost(0.5, ZoneId::Zone1), 29373);
        assert_eq!(table.carrier_cost(0.5, ZoneId::Zone3), 34761);
        assert_eq!(table.carrier_cost(2.0, ZoneId::Zone2), 20400);
    }

    #[test]
    fn between_breakpoints_rounds_up_to_next_row() {
        let table = RateTable::with_defaults();
        assert_eq!(table.carrier_cost(0.1, ZoneId::Zone1), 29373);
        assert_eq!(table.carrier_cost(0.51, ZoneId::Zone1), 32500);
        assert_eq!(table.carrier_cost(5.5, ZoneId::Zone4), 76100);
    }

    #[test]
    fn heavier_than_sheet_uses_heaviest_row() {
        let table = RateTable::with_defaults();
        assert_eq!(table.max_weight_kg(), 20.0);
        assert_eq!(table.carrier_cost(20.01, ZoneId::Zone1), 135500);
        assert_eq!(table.carrier_cost(500.0, ZoneId::Zone3), 160700);
    }

    #[test]
    fn row_for_picks_ceiling_or_heaviest() {
        let table = RateTable::with_defaults();
        assert_eq!(table.row_for(0.01).weight_kg, 0.5);
        assert_eq!(table.row_for(3.0).weight_kg, 3.0);
        assert_eq!(table.row_for(3.01).weight_kg, 4.0);
        assert_eq!(table.row_for(99.0), table.heaviest());
        assert_eq!(table.heaviest().weight_kg, 20.0);
    }

    #[test]
    fn single_row_sheet_serves_every_weight() {
        let table = RateTable::new(vec![RateRow::new(1.0, 10.0, 20.0, 30.0, 40.0)]).unwrap();
        assert_eq!(table.carrier_cost(0.2, ZoneId::Zone2), 20);
        assert_eq!(table.carrier_cost(50.0, ZoneId::Zone4), 40);
        assert_eq!(table.max_weight_kg(), 1.0);
    }

    #[test]
    fn nan_weight_falls_back_to_heaviest_row() {
        let table = RateTable::with_defaults();
        assert_eq!(table.carrier_cost(f64::NAN, ZoneId::Zone2), 70100);
    }

    #[test]
    fn unsorted_rows_are_sorted() {
        let table = RateTable::new(vec![
            RateRow::new(2.0, 200.0, 200.0, 200.0, 200.0),
            RateRow::new(1.0, 100.0, 100.0, 100.0, 100.0),
        ])
        .unwrap();
        assert_eq!(table.rows()[0].weight_kg, 1.0);
        assert_eq!(table.carrier_cost(0.7, ZoneId::Zone1), 100);
        assert_eq!(table.carrier_cost(1.2, ZoneId::Zone1), 200);
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(RateTable::new(Vec::new()), Err(PricingError::EmptyRateTable));
    }

    #[test]
    fn duplicate_breakpoint_is_rejected() {
        let result = RateTable::new(vec![
            RateRow::new(1.0, 100.0, 100.0, 100.0, 100.0),
            RateRow::new(1.0, 110.0, 110.0, 110.0, 110.0),
        ]);
        assert_eq!(result, Err(PricingError::DuplicateBreakpoint { weight_kg: 1.0 }));
    }

    #[test]
    fn invalid_breakpoint_is_rejected() {
        let result = RateTable::new(vec![RateRow::new(0.0, 1.0, 1.0, 1.0, 1.0)]);
        assert_eq!(result, Err(PricingError::InvalidBreakpoint { weight_kg: 0.0 }));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let result = RateTable::new(vec![RateRow::new(1.0, 1.0, 1.0, -5.0, 1.0)]);
        assert_eq!(
            result,
            Err(PricingError::InvalidRate {
                weight_kg: 1.0,
                zone: "3".to_string()
            })
        );
    }
}
