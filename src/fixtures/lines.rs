//! Line Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{fixtures::FixtureError, lines::Line};

/// Line Fixture
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineFixture {
    /// Product name
    pub name: String,

    /// Quantity delta to add
    pub quantity: i64,

    /// Unit price excluding tax (e.g., "2.99")
    pub price: String,
}

impl TryFrom<&LineFixture> for Line {
    type Error = FixtureError;

    fn try_from(fixture: &LineFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(Line::new(fixture.name.clone(), fixture.quantity, price))
    }
}

/// Parse a price string (e.g., "2.99") into a `Decimal`.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the string is not a decimal number.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_decimal() -> TestResult {
        assert_eq!(parse_price("2.99")?, Decimal::new(299, 2));
        assert_eq!(parse_price(" 10 ")?, Decimal::TEN);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_garbage() {
        let result = parse_price("ten pounds");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(s)) if s == "ten pounds"));
    }

    #[test]
    fn line_from_fixture() -> TestResult {
        let fixture = LineFixture {
            name: "Apple".to_string(),
            quantity: -1,
            price: "0.75".to_string(),
        };

        let line = Line::try_from(&fixture)?;

        assert_eq!(line, Line::new("Apple", -1, Decimal::new(75, 2)));

        Ok(())
    }
}
