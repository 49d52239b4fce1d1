//! Monetary amounts and quantity formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use stocktally_core::ValueObject;

/// Number of decimal places shown for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Exact decimal currency amount.
///
/// Amounts keep full precision internally; rounding only happens when they
/// are displayed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `stock × price`, or `None` when the product does not fit a `Decimal`.
    pub fn line_total(stock: Decimal, price: Money) -> Option<Money> {
        stock.checked_mul(price.0).map(Money)
    }

    /// `None` when the sum does not fit a `Decimal`.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Two-decimal rendering prefixed with `symbol`, e.g. `$25.00`.
    ///
    /// Midpoints round away from zero (`0.125` → `0.13`).
    pub fn format_with(&self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

/// Saturates at `Decimal::MAX`. `Inventory` refuses any add that would make
/// its running total overflow, so its sums never reach the cap.
impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

/// Plain rendering of a stock quantity: `10` stays `10`, `2.50` becomes `2.5`.
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::new(dec!(25)).to_string(), "25.00");
        assert_eq!(Money::new(dec!(2.5)).to_string(), "2.50");
        assert_eq!(Money::new(dec!(1.005)).to_string(), "1.01");
        assert_eq!(Money::new(dec!(0.004)).to_string(), "0.00");
    }

    #[test]
    fn format_with_prefixes_symbol() {
        assert_eq!(Money::new(dec!(30)).format_with("$"), "$30.00");
        assert_eq!(Money::new(dec!(30)).format_with("€"), "€30.00");
    }

    #[test]
    fn line_total_is_exact() {
        let total = Money::line_total(dec!(3), Money::new(dec!(0.10))).unwrap();
        assert_eq!(total.amount(), dec!(0.30));
    }

    #[test]
    fn line_total_reports_overflow() {
        assert_eq!(Money::line_total(Decimal::MAX, Money::new(dec!(2))), None);
    }

    #[test]
    fn checked_add_reports_overflow() {
        let half = Money::new(dec!(50000000000000000000000000000));
        assert_eq!(half.checked_add(half), None);
        assert_eq!(
            Money::new(dec!(1.25)).checked_add(Money::new(dec!(3.75))),
            Some(Money::new(dec!(5)))
        );
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn quantity_drops_trailing_zeros() {
        assert_eq!(format_quantity(dec!(10)), "10");
        assert_eq!(format_quantity(dec!(10.00)), "10");
        assert_eq!(format_quantity(dec!(2.50)), "2.5");
    }
}
