//! Fixed Discount

use rust_decimal::Decimal;

use crate::discounts::DiscountStrategy;

/// Subtracts a fixed amount, never going below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDiscount {
    fixed_amount: Decimal,
}

impl FixedDiscount {
    /// Create a new fixed amount discount.
    pub fn new(fixed_amount: Decimal) -> Self {
        Self { fixed_amount }
    }

    /// Returns the amount taken off
    pub fn fixed_amount(&self) -> Decimal {
        self.fixed_amount
    }
}

impl DiscountStrategy for FixedDiscount {
    fn calculate(&self, amount: Decimal) -> Decimal {
        amount.saturating_sub(self.fixed_amount).max(Decimal::ZERO)
    }
}
