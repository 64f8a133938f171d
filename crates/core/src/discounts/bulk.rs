//! Bulk Discount
//!
//! A flat amount off once the amount reaches a threshold. The threshold is
//! inclusive and the result is not clamped: a discount larger than the
//! amount yields a negative total.

use rust_decimal::Decimal;

use crate::discounts::DiscountStrategy;

/// A flat discount applied at or above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkDiscount {
    threshold: Decimal,
    bulk_discount_amount: Decimal,
}

impl BulkDiscount {
    /// Create a new bulk discount.
    pub fn new(threshold: Decimal, bulk_discount_amount: Decimal) -> Self {
        Self {
            threshold,
            bulk_discount_amount,
        }
    }

    /// Returns the minimum qualifying amount
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Returns the amount taken off qualifying amounts
    pub fn bulk_discount_amount(&self) -> Decimal {
        self.bulk_discount_amount
    }

    /// Whether `amount` qualifies for the discount.
    pub fn qualifies(&self, amount: Decimal) -> bool {
        amount >= self.threshold
    }
}

impl DiscountStrategy for BulkDiscount {
    fn calculate(&self, amount: Decimal) -> Decimal {
        if self.qualifies(amount) {
            amount.saturating_sub(self.bulk_discount_amount)
        } else {
            amount
        }
    }
}
