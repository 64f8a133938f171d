//! Discount Factory
//!
//! Turns a discount tag, plus an optional caller-supplied value, into a
//! [`Discount`]. Tags must be present in the configuration; bulk and seasonal
//! discounts read their remaining numbers from the configured parameters.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{ConfigError, ConfigProvider, DiscountConfig, DiscountEntry},
    discounts::{
        BulkDiscount, Discount, DiscountKind, FixedDiscount, PercentageDiscount, SeasonalDiscount,
    },
};

/// Parameter holding the bulk discount threshold.
pub const THRESHOLD: &str = "threshold";

/// Parameter holding the amount a bulk discount takes off.
pub const BULK_DISCOUNT_AMOUNT: &str = "bulkDiscountAmount";

/// Parameter holding the seasonal percentage.
pub const SEASONAL_DISCOUNT: &str = "seasonalDiscount";

/// Errors raised while constructing a discount.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The tag is not present in the configuration.
    #[error("invalid discount type specified: {0}")]
    InvalidType(String),

    /// The tag is configured but no discount can be built for it.
    #[error("discount class for {0} not found")]
    UnsupportedType(String),

    /// The discount kind needs a value and none was given.
    #[error("{0} discount requires a value")]
    MissingValue(DiscountKind),

    /// A parameter the discount needs is absent from its configuration.
    #[error("{tag} discount is missing the `{name}` parameter")]
    MissingParameter {
        /// Discount tag
        tag: String,

        /// Parameter name
        name: &'static str,
    },
}

/// Builds discounts from tags using a configuration source.
#[derive(Debug)]
pub struct DiscountFactory<P: ConfigProvider = DiscountConfig> {
    provider: P,
}

impl<P: ConfigProvider> DiscountFactory<P> {
    /// Create a new factory reading configuration from `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the configuration source
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Create the discount configured for `tag`.
    ///
    /// `value` is the percentage for `percentage`, the amount off for `fixed`
    /// and the general percentage for `seasonal`. `bulk` ignores it.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::Configuration`]: the configuration could not be loaded.
    /// - [`FactoryError::InvalidType`]: `tag` is not configured.
    /// - [`FactoryError::UnsupportedType`]: `tag` is configured but is not a known discount kind.
    /// - [`FactoryError::MissingValue`]: the kind needs `value` and it is `None`.
    /// - [`FactoryError::MissingParameter`]: a required parameter is not configured.
    pub fn create_discount(
        &self,
        tag: &str,
        value: Option<Decimal>,
    ) -> Result<Discount, FactoryError> {
        let config = self.provider.config()?;

        let entry = config
            .entry(tag)
            .ok_or_else(|| FactoryError::InvalidType(tag.to_string()))?;

        let kind: DiscountKind = tag
            .parse()
            .map_err(|_unknown| FactoryError::UnsupportedType(tag.to_string()))?;

        let discount = match kind {
            DiscountKind::Percentage => {
                PercentageDiscount::new(require_value(kind, value)?).into()
            }
            DiscountKind::Fixed => FixedDiscount::new(require_value(kind, value)?).into(),
            DiscountKind::Bulk => BulkDiscount::new(
                require_parameter(tag, entry, THRESHOLD)?,
                require_parameter(tag, entry, BULK_DISCOUNT_AMOUNT)?,
            )
            .into(),
            DiscountKind::Seasonal => SeasonalDiscount::new(
                require_parameter(tag, entry, SEASONAL_DISCOUNT)?,
                require_value(kind, value)?,
            )
            .into(),
        };

        debug!(tag, class = %entry.class, ?discount, "created discount");

        Ok(discount)
    }
}

fn require_value(kind: DiscountKind, value: Option<Decimal>) -> Result<Decimal, FactoryError> {
    value.ok_or(FactoryError::MissingValue(kind))
}

fn require_parameter(
    tag: &str,
    entry: &DiscountEntry,
    name: &'static str,
) -> Result<Decimal, FactoryError> {
    entry
        .parameter(name)
        .ok_or_else(|| FactoryError::MissingParameter {
            tag: tag.to_string(),
            name,
        })
}
