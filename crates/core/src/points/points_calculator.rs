use crate::points::parsing::{parse_amount, parse_purchase_date, parse_purchase_time};
use crate::points::rules;
use crate::receipts::Receipt;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Evaluates every rule against the receipt.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let total = parse_amount(&receipt.total);

        PointsBreakdown {
            retailer: rules::retailer_points(&receipt.retailer),
            round_dollar: rules::round_dollar_points(total),
            quarter_multiple: rules::quarter_multiple_points(total),
            item_pairs: rules::item_pair_points(&receipt.items),
            item_descriptions: receipt
                .items
                .iter()
                .map(rules::item_description_points)
                .fold(0, u64::saturating_add),
            odd_day: rules::odd_day_points(parse_purchase_date(&receipt.purchase_date)),
            afternoon: rules::afternoon_points(parse_purchase_time(&receipt.purchase_time)),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points a receipt earns.
///
/// Total function: never fails, and malformed amounts, dates or times
/// simply earn nothing from the rules that read them (except the odd-day
/// rule, whose fallback date falls on the 1st).
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}
