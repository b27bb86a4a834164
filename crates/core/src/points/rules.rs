//! The individual scoring rules.
//!
//! Each rule looks at one aspect of a receipt and returns its contribution.
//! Rules are independent of each other; amounts and dates are passed in
//! already parsed.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::points::parsing::parse_amount;
use crate::receipts::Item;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

pub const QUARTER: f64 = 0.25;
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Purchase hours `[start, end)` that earn the afternoon bonus.
pub const AFTERNOON_HOURS: (u32, u32) = (14, 16);

/// One point for every ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64
}

/// Bonus when the total has no cents.
pub fn round_dollar_points(total: f64) -> u64 {
    if total.fract() == 0.0 {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Bonus when the total is an exact multiple of 0.25.
///
/// Uses exact floating-point remainder, so every round-dollar total also
/// qualifies.
pub fn quarter_multiple_points(total: f64) -> u64 {
    if total % QUARTER == 0.0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Five points for every two items; a trailing odd item earns nothing.
pub fn item_pair_points(items: &[Item]) -> u64 {
    ((items.len() / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// Bonus for an item whose trimmed description length (in bytes) is a
/// multiple of three: the price times 0.2, rounded up.
///
/// An empty description has length zero and qualifies. Negative prices
/// contribute nothing.
pub fn item_description_points(item: &Item) -> u64 {
    let description = item.short_description.trim();
    if description.len() % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    let bonus = (parse_amount(&item.price) * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if bonus > 0.0 {
        bonus as u64
    } else {
        0
    }
}

/// Bonus when the purchase happened on an odd day of the month.
pub fn odd_day_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Bonus for purchases from 2:00pm up to, but not including, 4:00pm.
pub fn afternoon_points(time: NaiveTime) -> u64 {
    let (start, end) = AFTERNOON_HOURS;
    if (start..end).contains(&time.hour()) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
