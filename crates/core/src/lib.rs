//! Pricewise
//!
//! Pricewise applies a single discount strategy to an amount. Strategies are
//! built by a [`factory::DiscountFactory`] from a discount tag and a
//! configuration mapping, then applied with a [`calculator::DiscountCalculator`].

pub mod calculator;
pub mod config;
pub mod discounts;
pub mod factory;
pub mod prelude;
