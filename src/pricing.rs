//! Pricing

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::lines::Line;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// A line total or the running sum does not fit in a `Decimal`.
    #[error("total overflowed while adding line {0}")]
    Overflow(String),
}

/// Calculates `quantity × unit price` for a single line.
///
/// Returns `None` if the result does not fit in a `Decimal`.
pub fn line_total(line: &Line) -> Option<Decimal> {
    Decimal::from(line.quantity()).checked_mul(line.unit_price_excl_tax())
}

/// Calculates the total price, excluding tax, of a set of lines.
///
/// An empty set totals zero. Decimal addition is exact, so the result does not
/// depend on iteration order.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total or the sum overflowed.
pub fn total_price<'a>(
    lines: impl IntoIterator<Item = &'a Line>,
) -> Result<Decimal, TotalPriceError> {
    lines.into_iter().try_fold(Decimal::ZERO, |acc, line| {
        line_total(line)
            .and_then(|total| acc.checked_add(total))
            .ok_or_else(|| TotalPriceError::Overflow(line.name().to_string()))
    })
}

/// Scales an amount by `1 + tax_rate`.
///
/// `tax_rate` is a fraction (`0.2` is 20%) and is not validated: zero and
/// negative rates are applied as given. Saturates at the `Decimal` bounds.
pub fn with_tax(amount: Decimal, tax_rate: Percentage) -> Decimal {
    // `Percentage` only exposes its value through multiplication.
    let rate = tax_rate * Decimal::ONE;

    amount.saturating_mul(Decimal::ONE.saturating_add(rate))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn line_total_multiplies_quantity_by_price() {
        let line = Line::new("Apple", 3, Decimal::new(250, 2));

        assert_eq!(line_total(&line), Some(Decimal::new(750, 2)));
    }

    #[test]
    fn line_total_overflow_is_none() {
        let line = Line::new("Gold", 2, Decimal::MAX);

        assert_eq!(line_total(&line), None);
    }

    #[test]
    fn total_price_sums_lines() -> TestResult {
        let lines = [
            Line::new("Apple", 2, Decimal::TEN),
            Line::new("Pear", 1, Decimal::new(35, 1)),
        ];

        assert_eq!(total_price(&lines)?, Decimal::new(235, 1));

        Ok(())
    }

    #[test]
    fn total_price_empty_is_zero() -> TestResult {
        let lines: [Line; 0] = [];

        assert_eq!(total_price(&lines)?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn total_price_overflow_names_the_line() {
        let lines = [
            Line::new("Apple", 1, Decimal::MAX),
            Line::new("Pear", 1, Decimal::MAX),
        ];

        assert_eq!(
            total_price(&lines),
            Err(TotalPriceError::Overflow("Pear".to_string()))
        );
    }

    #[test]
    fn with_tax_applies_rate() {
        let rate = Percentage::from(Decimal::new(20, 2));

        assert_eq!(with_tax(Decimal::ONE_HUNDRED, rate), Decimal::new(120, 0));
    }

    #[test]
    fn with_tax_zero_rate_is_identity() {
        let rate = Percentage::from(Decimal::ZERO);

        assert_eq!(with_tax(Decimal::new(4299, 2), rate), Decimal::new(4299, 2));
    }

    #[test]
    fn with_tax_negative_rate_is_not_validated() {
        let rate = Percentage::from(Decimal::new(-50, 2));

        assert_eq!(with_tax(Decimal::ONE_HUNDRED, rate), Decimal::new(50, 0));
    }
}
