//! Parsing and validation of the pending stock/price text.

use core::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Why an add attempt was rejected.
///
/// The `Display` text is exactly what the form shows beneath the inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Stock or price (or both) left empty.
    #[error("Please fill both stock and price fields")]
    MissingField,

    /// Stock or price is not a number, or is not strictly positive.
    #[error("Stock and price must be positive numbers")]
    InvalidNumber,
}

impl ValidationError {
    /// Short machine-friendly kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "missing field",
            ValidationError::InvalidNumber => "invalid number",
        }
    }
}

/// Parsed, strictly positive stock and price.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub stock: Decimal,
    pub price: Decimal,
}

/// Validate both fields.
///
/// Emptiness is checked on both fields before either is parsed, so an empty
/// field always wins over a malformed one.
pub fn validate(stock: &str, price: &str) -> Result<ValidInput, ValidationError> {
    if is_blank(stock) || is_blank(price) {
        return Err(ValidationError::MissingField);
    }

    Ok(ValidInput {
        stock: parse_positive(stock)?,
        price: parse_positive(price)?,
    })
}

/// Parse a strictly positive decimal.
///
/// Accepts plain (`12`, `2.50`) and scientific (`1e3`) notation,
/// surrounded by optional whitespace. Values `Decimal` cannot represent
/// (above ~7.9e28, or below 1e-28) are invalid.
pub fn parse_positive(text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();
    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ValidationError::InvalidNumber)?;

    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidNumber);
    }
    Ok(value)
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_match_the_form() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill both stock and price fields"
        );
        assert_eq!(
            ValidationError::InvalidNumber.to_string(),
            "Stock and price must be positive numbers"
        );
    }

    #[test]
    fn empty_or_blank_is_missing() {
        assert_eq!(validate("", "1"), Err(ValidationError::MissingField));
        assert_eq!(validate("1", ""), Err(ValidationError::MissingField));
        assert_eq!(validate("  ", "1"), Err(ValidationError::MissingField));
    }

    #[test]
    fn missing_wins_over_invalid() {
        assert_eq!(validate("abc", ""), Err(ValidationError::MissingField));
    }

    #[test]
    fn non_positive_or_non_numeric_is_invalid() {
        assert_eq!(validate("-5", "1"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate("1", "0"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate("ten", "1"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate("1", "NaN"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate("1", "1.2.3"), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn values_outside_decimal_range_are_invalid() {
        assert_eq!(parse_positive("1e30"), Err(ValidationError::InvalidNumber));
        assert_eq!(parse_positive("1e-30"), Err(ValidationError::InvalidNumber));
        assert_eq!(
            parse_positive("123456789012345678901234567890"),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(
            parse_positive("79228162514264337593543950335"),
            Ok(Decimal::MAX)
        );
    }

    #[test]
    fn accepts_decimal_and_scientific() {
        assert_eq!(
            validate(" 10 ", "2.50"),
            Ok(ValidInput {
                stock: dec!(10),
                price: dec!(2.50)
            })
        );
        assert_eq!(parse_positive("1e3"), Ok(dec!(1000)));
        assert_eq!(parse_positive("0.5"), Ok(dec!(0.5)));
    }
}
