//! Validation utilities shared by the API services

use rust_decimal::Decimal;

/// Validate that a quantity is strictly positive
pub fn validate_positive_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("quantity must be greater than zero");
    }
    Ok(())
}

/// Validate that a stock value is not negative
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("value cannot be negative");
    }
    Ok(())
}

/// Validate that a required name/id field is non-empty after trimming
pub fn validate_required_text(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("value cannot be empty");
    }
    Ok(())
}

/// Normalize an optional free-text field to a trimmed string
pub fn normalized_text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_quantity_checks() {
        assert!(validate_positive_quantity(dec!(0.5)).is_ok());
        assert!(validate_positive_quantity(Decimal::ZERO).is_err());
        assert!(validate_positive_quantity(dec!(-1)).is_err());
    }

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("vinyl sheet").is_ok());
        assert!(validate_required_text("   ").is_err());
        assert!(validate_required_text("").is_err());
    }

    #[test]
    fn normalized_text_trims_and_defaults() {
        assert_eq!(normalized_text(Some("  feria  ".into())), "feria");
        assert_eq!(normalized_text(None), "");
    }
}
