//! Summary

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    lines::Line,
    pricing::{line_total, with_tax},
};

/// Errors that can occur when writing a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// Printable summary of a cart and its totals at a given tax rate.
#[derive(Debug)]
pub struct CartSummary<'a> {
    cart: &'a Cart,
    tax_rate: Percentage,
}

impl<'a> CartSummary<'a> {
    /// Create a summary of the given cart.
    pub fn new(cart: &'a Cart, tax_rate: impl Into<Percentage>) -> Self {
        Self {
            cart,
            tax_rate: tax_rate.into(),
        }
    }

    /// Total excluding tax
    pub fn total_excluding_tax(&self) -> Decimal {
        self.cart.total_excluding_tax()
    }

    /// Total including tax
    pub fn total_including_tax(&self) -> Decimal {
        with_tax(self.total_excluding_tax(), self.tax_rate)
    }

    /// Tax due, the difference between both totals
    pub fn tax(&self) -> Decimal {
        self.total_including_tax()
            .saturating_sub(self.total_excluding_tax())
    }

    /// Write the summary table, lines sorted by name, followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if writing to `out` fails.
    pub fn write_to(&self, out: &mut impl io::Write) -> Result<(), SummaryError> {
        let mut lines: Vec<&Line> = self.cart.lines().collect();
        lines.sort_by(|a, b| a.name().cmp(b.name()));

        let mut builder = Builder::default();
        builder.push_record(["Product", "Qty", "Unit price", "Line total"]);

        for line in lines {
            builder.push_record([
                line.name().to_string(),
                line.quantity().to_string(),
                line.unit_price_excl_tax().to_string(),
                line_total(line).map_or_else(String::new, |total| total.to_string()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;

        let rate_points = (self.tax_rate * Decimal::ONE)
            .saturating_mul(Decimal::ONE_HUNDRED)
            .normalize();

        writeln!(
            out,
            " Total excl. tax: {}",
            self.total_excluding_tax().round_dp(2)
        )?;
        writeln!(out, " Tax ({rate_points}%): {}", self.tax().round_dp(2))?;
        writeln!(
            out,
            " Total incl. tax: {}",
            self.total_including_tax().round_dp(2)
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_cart() -> Result<Cart, crate::cart::CartError> {
        let mut cart = Cart::new();

        cart.add(Line::new("Pear", 1, Decimal::new(350, 2)))?;
        cart.add(Line::new("Apple", 2, Decimal::TEN))?;

        Ok(cart)
    }

    #[test]
    fn totals_use_tax_rate() -> TestResult {
        let cart = test_cart()?;
        let summary = CartSummary::new(&cart, Decimal::new(20, 2));

        assert_eq!(summary.total_excluding_tax(), Decimal::new(2350, 2));
        assert_eq!(summary.total_including_tax(), Decimal::new(2820, 2));
        assert_eq!(summary.tax(), Decimal::new(470, 2));

        Ok(())
    }

    #[test]
    fn write_to_lists_lines_sorted_by_name() -> TestResult {
        let cart = test_cart()?;
        let summary = CartSummary::new(&cart, Decimal::new(20, 2));

        let mut out = Vec::new();
        summary.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        let apple = text.find("Apple").ok_or("missing Apple row")?;
        let pear = text.find("Pear").ok_or("missing Pear row")?;

        assert!(apple < pear, "rows should be sorted by name");
        assert!(text.contains("Total excl. tax: 23.50"));
        assert!(text.contains("Tax (20%): 4.70"));
        assert!(text.contains("Total incl. tax: 28.20"));

        Ok(())
    }

    #[test]
    fn write_to_empty_cart() -> TestResult {
        let cart = Cart::new();
        let summary = CartSummary::new(&cart, Decimal::ZERO);

        let mut out = Vec::new();
        summary.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Total excl. tax: 0"));
        assert!(text.contains("Total incl. tax: 0"));

        Ok(())
    }

    #[test]
    fn write_to_with_huge_tax_rate_saturates() -> TestResult {
        let cart = test_cart()?;
        let summary = CartSummary::new(&cart, Decimal::MAX);

        let mut out = Vec::new();
        summary.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains(&format!("Tax ({}%)", Decimal::MAX)));
        assert!(text.contains(&format!("Total incl. tax: {}", Decimal::MAX)));

        Ok(())
    }
}
