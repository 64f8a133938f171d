//! Pricewise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculator::DiscountCalculator,
    config::{ConfigError, ConfigLoader, ConfigProvider, DiscountConfig, DiscountEntry},
    discounts::{
        BulkDiscount, Discount, DiscountKind, DiscountStrategy, FixedDiscount, KindError,
        PercentageDiscount, SeasonalDiscount,
    },
    factory::{DiscountFactory, FactoryError},
};
