//! Lines

use rust_decimal::Decimal;

/// A single product entry: name, quantity and unit price excluding tax.
///
/// When passed to [`Cart::add`](crate::cart::Cart::add) the quantity is a delta
/// and may be negative. Lines stored in a cart always have a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    quantity: i64,
    unit_price_excl_tax: Decimal,
}

impl Line {
    /// Creates a new line.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price_excl_tax: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price_excl_tax,
        }
    }

    /// Product name, the line's identity within a cart.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity of the product.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price excluding tax.
    pub fn unit_price_excl_tax(&self) -> Decimal {
        self.unit_price_excl_tax
    }

    /// Returns a copy of this line with a different quantity and unit price.
    pub(crate) fn with_quantity_and_price(
        &self,
        quantity: i64,
        unit_price_excl_tax: Decimal,
    ) -> Self {
        Self {
            name: self.name.clone(),
            quantity,
            unit_price_excl_tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_values_from_constructor() {
        let line = Line::new("Apple", 3, Decimal::new(125, 2));

        assert_eq!(line.name(), "Apple");
        assert_eq!(line.quantity(), 3);
        assert_eq!(line.unit_price_excl_tax(), Decimal::new(125, 2));
    }

    #[test]
    fn with_quantity_and_price_keeps_name() {
        let line = Line::new("Apple", 3, Decimal::new(125, 2));

        let updated = line.with_quantity_and_price(5, Decimal::TEN);

        assert_eq!(updated, Line::new("Apple", 5, Decimal::TEN));
    }

    #[test]
    fn negative_quantity_is_representable() {
        let line = Line::new("Apple", -2, Decimal::ONE);

        assert_eq!(line.quantity(), -2);
    }
}
