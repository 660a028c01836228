//! Cart

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{CartConfig, MergePricing},
    lines::Line,
    pricing::{line_total, total_price, with_tax},
};

/// Errors related to cart mutation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The quantity resulting from an add would be negative.
    #[error("final quantity of {name} in the cart cannot be negative (got {quantity})")]
    InvalidQuantity {
        /// Product name
        name: String,

        /// Quantity the line would have ended up with
        quantity: i64,
    },

    /// The resulting quantity or cart total does not fit in its numeric type.
    #[error("quantity or total overflowed while adding {name}")]
    Overflow {
        /// Product name
        name: String,
    },
}

/// Cart
///
/// Holds at most one [`Line`] per product name, each with a positive quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: FxHashMap<String, Line>,
    config: CartConfig,
}

impl Cart {
    /// Create an empty cart with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with the given configuration.
    pub fn with_config(config: CartConfig) -> Self {
        Cart {
            lines: FxHashMap::default(),
            config,
        }
    }

    /// Add a line to the cart.
    ///
    /// If a line with the same name and the same unit price is already present,
    /// the quantities are summed and the unit price is chosen according to the
    /// cart's [`MergePricing`]. Otherwise the given line replaces any line with
    /// the same name. A resulting quantity of zero removes the product.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the resulting quantity is negative.
    /// - [`CartError::Overflow`]: the resulting quantity or cart total overflowed.
    ///
    /// The cart is left unchanged on error.
    pub fn add(&mut self, line: Line) -> Result<(), CartError> {
        let line = self.merge(line)?;
        let quantity = line.quantity();

        if quantity < 0 {
            debug!(name = line.name(), quantity, "rejected negative quantity");

            return Err(CartError::InvalidQuantity {
                name: line.name().to_string(),
                quantity,
            });
        }

        if quantity == 0 {
            if self.lines.remove(line.name()).is_some() {
                debug!(name = line.name(), "removed line");
            }

            return Ok(());
        }

        self.ensure_total_fits(&line)?;

        debug!(
            name = line.name(),
            quantity,
            unit_price = %line.unit_price_excl_tax(),
            "stored line"
        );

        self.lines.insert(line.name().to_string(), line);

        Ok(())
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Get the line stored for a product.
    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.get(name)
    }

    /// Iterate over the lines in the cart, in no particular order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Get the merge pricing used by this cart.
    pub fn merge_pricing(&self) -> MergePricing {
        self.config.merge_pricing
    }

    /// Calculate the total of the cart, excluding tax.
    pub fn total_excluding_tax(&self) -> Decimal {
        // `add` rejects lines whose total would overflow, so this never saturates.
        self.lines
            .values()
            .filter_map(line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Calculate the total of the cart, including tax at the given rate.
    ///
    /// The rate is a fraction (`0.2` is 20%) and is not validated.
    pub fn total_including_tax(&self, tax_rate: impl Into<Percentage>) -> Decimal {
        with_tax(self.total_excluding_tax(), tax_rate.into())
    }

    /// Combine `line` with a stored line of the same name and price, if any.
    fn merge(&self, line: Line) -> Result<Line, CartError> {
        let Some(existing) = self.lines.get(line.name()) else {
            return Ok(line);
        };

        if existing.unit_price_excl_tax() != line.unit_price_excl_tax() {
            return Ok(line);
        }

        let quantity = existing
            .quantity()
            .checked_add(line.quantity())
            .ok_or_else(|| CartError::Overflow {
                name: line.name().to_string(),
            })?;

        let unit_price = match self.config.merge_pricing {
            MergePricing::KeepUnitPrice => existing.unit_price_excl_tax(),
            MergePricing::PreMergeTotal => self.total_excluding_tax(),
        };

        debug!(
            name = line.name(),
            quantity,
            unit_price = %unit_price,
            "merged line"
        );

        Ok(line.with_quantity_and_price(quantity, unit_price))
    }

    /// Fail if storing `line` would make the cart total unrepresentable.
    fn ensure_total_fits(&self, line: &Line) -> Result<(), CartError> {
        let others = self
            .lines
            .values()
            .filter(|other| other.name() != line.name());

        total_price(others.chain([line]))
            .map(drop)
            .map_err(|_err| CartError::Overflow {
                name: line.name().to_string(),
            })
    }
}
