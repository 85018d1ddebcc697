//! Aggregate monthly price over a pool collection.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use rust_decimal::{Decimal, RoundingStrategy};

use super::pools::Pool;

/// Sum of `monthly_price_per_node * count` across `pools`.
///
/// Zero-count pools contribute zero; an empty slice totals zero.
pub fn total_price(pools: &[Pool]) -> Decimal {
    pools.iter().map(Pool::monthly_cost).sum()
}

/// Render a total as `$<amount>/month` with exactly two fractional digits.
pub fn format_monthly_estimate(total: Decimal) -> String {
    let mut rounded = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("${rounded}/month")
}
