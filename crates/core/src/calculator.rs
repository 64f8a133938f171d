//! Discount Calculator

use rust_decimal::Decimal;
use tracing::debug;

use crate::discounts::DiscountStrategy;

/// Applies a discount strategy to an amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscountCalculator;

impl DiscountCalculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Returns `amount` after `discount` has been applied.
    pub fn calculate_discount<D>(&self, discount: &D, amount: Decimal) -> Decimal
    where
        D: DiscountStrategy + ?Sized,
    {
        let discounted = discount.calculate(amount);

        debug!(%amount, %discounted, "applied discount");

        discounted
    }
}

#[cfg(test)]
mod tests {
    use crate::discounts::{Discount, FixedDiscount, PercentageDiscount};

    use super::*;

    struct Halve;

    impl DiscountStrategy for Halve {
        fn calculate(&self, amount: Decimal) -> Decimal {
            amount / Decimal::TWO
        }
    }

    #[test]
    fn returns_strategy_result_unchanged() {
        let calculator = DiscountCalculator::new();
        let discount = Discount::Fixed(FixedDiscount::new(Decimal::from(600)));

        assert_eq!(
            calculator.calculate_discount(&discount, Decimal::from(500)),
            Decimal::ZERO
        );
    }

    #[test]
    fn accepts_any_strategy() {
        let calculator = DiscountCalculator::new();

        assert_eq!(
            calculator.calculate_discount(&Halve, Decimal::from(9)),
            Decimal::new(45, 1)
        );
    }

    #[test]
    fn accepts_trait_objects() {
        let calculator = DiscountCalculator::new();
        let strategies: [Box<dyn DiscountStrategy>; 2] = [
            Box::new(Halve),
            Box::new(PercentageDiscount::new(Decimal::from(10))),
        ];

        let results: Vec<Decimal> = strategies
            .iter()
            .map(|strategy| calculator.calculate_discount(strategy.as_ref(), Decimal::from(100)))
            .collect();

        assert_eq!(results, [Decimal::from(50), Decimal::from(90)]);
    }
}
