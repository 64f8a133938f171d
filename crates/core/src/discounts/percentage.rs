//! Percentage Discount

use rust_decimal::Decimal;

use crate::discounts::{DiscountStrategy, percent_of};

/// Takes a percentage off the amount.
///
/// The percentage is in points (`10` means 10%). Values above 100 are
/// accepted and drive the result negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percentage: Decimal,
}

impl PercentageDiscount {
    /// Create a new percentage discount.
    pub fn new(percentage: Decimal) -> Self {
        Self { percentage }
    }

    /// Returns the percentage in points
    pub fn percentage(&self) -> Decimal {
        self.percentage
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn calculate(&self, amount: Decimal) -> Decimal {
        amount.saturating_sub(percent_of(amount, self.percentage))
    }
}
