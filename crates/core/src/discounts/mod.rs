//! Discounts
//!
//! The discount strategies an amount can be run through. Each strategy is a
//! small immutable value; [`Discount`] is the closed set of them that the
//! factory hands out.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

pub mod bulk;
pub mod fixed;
pub mod percentage;
pub mod seasonal;

pub use bulk::BulkDiscount;
pub use fixed::FixedDiscount;
pub use percentage::PercentageDiscount;
pub use seasonal::SeasonalDiscount;

/// Something that maps an amount to a discounted amount.
///
/// Implementations are pure: the result depends only on `amount` and the
/// parameters fixed at construction. Arithmetic saturates at the bounds of
/// [`Decimal`] rather than failing.
pub trait DiscountStrategy {
    /// Apply the discount to `amount`.
    fn calculate(&self, amount: Decimal) -> Decimal;
}

/// Errors raised while parsing a discount type tag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KindError {
    /// The tag does not name a known discount type.
    #[error("unknown discount type: {0}")]
    Unknown(String),
}

/// The discount types that can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// Percentage off the amount
    Percentage,

    /// Fixed amount off, never going below zero
    Fixed,

    /// Flat amount off once a threshold is met
    Bulk,

    /// Seasonal plus general percentage off
    Seasonal,
}

impl DiscountKind {
    /// Every kind, in display order.
    pub const ALL: [DiscountKind; 4] = [
        DiscountKind::Percentage,
        DiscountKind::Fixed,
        DiscountKind::Bulk,
        DiscountKind::Seasonal,
    ];

    /// The tag used for this kind in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
            DiscountKind::Bulk => "bulk",
            DiscountKind::Seasonal => "seasonal",
        }
    }

    /// Whether constructing this kind needs a caller-supplied value.
    ///
    /// Bulk discounts take everything from configuration.
    pub fn requires_value(self) -> bool {
        !matches!(self, DiscountKind::Bulk)
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiscountKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| KindError::Unknown(s.to_string()))
    }
}

/// A constructed discount strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Percentage off the amount.
    Percentage(PercentageDiscount),

    /// Fixed amount off, clamped at zero.
    Fixed(FixedDiscount),

    /// Flat amount off at or above a threshold.
    Bulk(BulkDiscount),

    /// Seasonal and general percentages off the original amount.
    Seasonal(SeasonalDiscount),
}

impl Discount {
    /// The kind of this discount.
    pub fn kind(&self) -> DiscountKind {
        match self {
            Discount::Percentage(_) => DiscountKind::Percentage,
            Discount::Fixed(_) => DiscountKind::Fixed,
            Discount::Bulk(_) => DiscountKind::Bulk,
            Discount::Seasonal(_) => DiscountKind::Seasonal,
        }
    }
}

impl DiscountStrategy for Discount {
    fn calculate(&self, amount: Decimal) -> Decimal {
        match self {
            Discount::Percentage(discount) => discount.calculate(amount),
            Discount::Fixed(discount) => discount.calculate(amount),
            Discount::Bulk(discount) => discount.calculate(amount),
            Discount::Seasonal(discount) => discount.calculate(amount),
        }
    }
}

impl From<PercentageDiscount> for Discount {
    fn from(discount: PercentageDiscount) -> Self {
        Discount::Percentage(discount)
    }
}

impl From<FixedDiscount> for Discount {
    fn from(discount: FixedDiscount) -> Self {
        Discount::Fixed(discount)
    }
}

impl From<BulkDiscount> for Discount {
    fn from(discount: BulkDiscount) -> Self {
        Discount::Bulk(discount)
    }
}

impl From<SeasonalDiscount> for Discount {
    fn from(discount: SeasonalDiscount) -> Self {
        Discount::Seasonal(discount)
    }
}

/// `percent` percent of `amount`.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent / Decimal::ONE_HUNDRED)
}
