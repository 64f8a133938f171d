//! Seasonal Discount

use rust_decimal::Decimal;

use crate::discounts::{DiscountStrategy, percent_of};

/// A seasonal percentage and a general percentage, both taken from the
/// original amount.
///
/// The two deductions are not compounded: 10% + 5% off 1000 is 850, not 855.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalDiscount {
    seasonal_discount: Decimal,
    general_discount: Decimal,
}

impl SeasonalDiscount {
    /// Create a new seasonal discount.
    pub fn new(seasonal_discount: Decimal, general_discount: Decimal) -> Self {
        Self {
            seasonal_discount,
            general_discount,
        }
    }

    /// Returns the seasonal percentage in points
    pub fn seasonal_discount(&self) -> Decimal {
        self.seasonal_discount
    }

    /// Returns the general percentage in points
    pub fn general_discount(&self) -> Decimal {
        self.general_discount
    }
}

impl DiscountStrategy for SeasonalDiscount {
    fn calculate(&self, amount: Decimal) -> Decimal {
        amount
            .saturating_sub(percent_of(amount, self.seasonal_discount))
            .saturating_sub(percent_of(amount, self.general_discount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deductions_are_additive() {
        let discount = SeasonalDiscount::new(Decimal::from(10), Decimal::from(5));

        assert_eq!(discount.calculate(Decimal::from(1000)), Decimal::from(850));
    }

    #[test]
    fn zero_general_matches_seasonal_only() {
        let discount = SeasonalDiscount::new(Decimal::from(20), Decimal::ZERO);

        assert_eq!(discount.calculate(Decimal::from(50)), Decimal::from(40));
    }

    #[test]
    fn combined_over_hundred_goes_negative() {
        let discount = SeasonalDiscount::new(Decimal::from(60), Decimal::from(60));

        assert_eq!(discount.calculate(Decimal::from(100)), Decimal::from(-20));
    }

    #[test]
    fn matches_formula_for_fractional_inputs() {
        let amount = Decimal::new(12_345, 2);
        let seasonal = Decimal::new(75, 1);
        let general = Decimal::new(25, 1);
        let discount = SeasonalDiscount::new(seasonal, general);

        let expected = amount
            - amount * (seasonal / Decimal::ONE_HUNDRED)
            - amount * (general / Decimal::ONE_HUNDRED);

        assert_eq!(discount.calculate(amount), expected);
    }
}
