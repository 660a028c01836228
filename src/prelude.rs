//! Panier prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    config::{CartConfig, ConfigError, MergePricing},
    fixtures::{Fixture, FixtureError},
    lines::Line,
    pricing::{TotalPriceError, line_total, total_price, with_tax},
    summary::{CartSummary, SummaryError},
};
