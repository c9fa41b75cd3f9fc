//! # Validation Module
//!
//! Turns raw form input into store input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  ├── Text fields, numeric keyboards                                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (basket-shell)                                       │
//! │  └── THIS MODULE: names required, numbers parsed                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ListStore                                                    │
//! │  ├── Accepts any string                                                │
//! │  └── Defaults amount/category/price at item creation only              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lenient where the add-item form always was (a bad amount becomes 1, a bad
//! estimate becomes 0), strict where a wrong value would be recorded as fact
//! (the real price paid). Both prices are capped at [`MAX_PRICE_MAJOR`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewItem;
use crate::{DEFAULT_AMOUNT, MAX_NAME_LENGTH, MAX_PRICE_MAJOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Name Validators
// =============================================================================

/// Validates a list name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 100 characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_list_name;
///
/// assert_eq!(validate_list_name("  Weekly Market ").unwrap(), "Weekly Market");
/// assert!(validate_list_name("   ").is_err());
/// ```
pub fn validate_list_name(name: &str) -> ValidationResult<String> {
    validate_name("list name", name)
}

/// Validates an item name. Same rules as [`validate_list_name`].
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    validate_name("item name", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses the amount field. Empty, unparsable or zero input gives 1.
///
/// ## Example
/// ```rust
/// use basket_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("3"), 3);
/// assert_eq!(parse_amount(""), 1);
/// assert_eq!(parse_amount("two"), 1);
/// ```
pub fn parse_amount(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(amount) if amount > 0 => amount,
        _ => DEFAULT_AMOUNT,
    }
}

/// Parses the estimated price field. Empty, unparsable or negative input
/// gives zero; a price above [`MAX_PRICE_MAJOR`] is rejected.
///
/// ## Example
/// ```rust
/// use basket_core::validation::parse_estimated_price;
/// use basket_core::Money;
///
/// assert_eq!(parse_estimated_price("4,99").unwrap(), Money::from_cents(499));
/// assert_eq!(parse_estimated_price("abc").unwrap(), Money::zero());
/// assert!(parse_estimated_price("90000000000000000").is_err());
/// ```
pub fn parse_estimated_price(text: &str) -> ValidationResult<Money> {
    match Money::parse_decimal(text) {
        Some(price) if price.is_negative() => Ok(Money::zero()),
        Some(price) if price > max_price() => Err(price_out_of_range("estimated price")),
        Some(price) => Ok(price),
        None => Ok(Money::zero()),
    }
}

/// Parses the real price a user paid.
///
/// ## Rules
/// - Must not be empty
/// - Must be a decimal with at most two fraction digits
/// - Must be between 0 (free items) and [`MAX_PRICE_MAJOR`]
///
/// ## Example
/// ```rust
/// use basket_core::validation::parse_real_price;
/// use basket_core::Money;
///
/// assert_eq!(parse_real_price("18").unwrap(), Money::from_cents(1800));
/// assert!(parse_real_price("").is_err());
/// assert!(parse_real_price("-1").is_err());
/// assert!(parse_real_price("cheap").is_err());
/// ```
pub fn parse_real_price(text: &str) -> ValidationResult<Money> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "real price".to_string(),
        });
    }

    let price = Money::parse_decimal(text).ok_or_else(|| ValidationError::InvalidFormat {
        field: "real price".to_string(),
        reason: "must be a number with at most two decimals".to_string(),
    })?;

    if price.is_negative() || price > max_price() {
        return Err(price_out_of_range("real price"));
    }

    Ok(price)
}

fn max_price() -> Money {
    Money::from_major_minor(MAX_PRICE_MAJOR, 0)
}

fn price_out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: MAX_PRICE_MAJOR,
    }
}

// =============================================================================
// Add-Item Form
// =============================================================================

/// The add-item form exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct NewItemForm {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub estimated_price: String,
}

impl NewItemForm {
    /// Validates the form and converts it into store input.
    ///
    /// The name and an out-of-range estimated price can fail; otherwise the
    /// numeric fields fall back to their defaults. A blank category is passed through as absent so the store
    /// files it under "Other".
    pub fn into_new_item(self) -> ValidationResult<NewItem> {
        let name = validate_item_name(&self.name)?;
        let category = self.category.trim();

        Ok(NewItem {
            name,
            amount: Some(parse_amount(&self.amount)),
            category: (!category.is_empty()).then(|| category.to_string()),
            estimated_price: Some(parse_estimated_price(&self.estimated_price)?),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_list_name() {
        assert_eq!(validate_list_name("Party").unwrap(), "Party");
        assert_eq!(validate_list_name("  Party  ").unwrap(), "Party");

        assert!(validate_list_name("").is_err());
        assert!(validate_list_name(" \t ").is_err());
        assert_eq!(
            validate_list_name(&"A".repeat(101)).unwrap_err(),
            ValidationError::TooLong {
                field: "list name".to_string(),
                max: 100
            }
        );
        assert!(validate_list_name(&"A".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_item_name_counts_chars_not_bytes() {
        assert!(validate_item_name(&"ş".repeat(100)).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1"), 1);
        assert_eq!(parse_amount(" 12 "), 12);
        assert_eq!(parse_amount("0"), 1);
        assert_eq!(parse_amount("-2"), 1);
        assert_eq!(parse_amount("1.5"), 1);
        assert_eq!(parse_amount(""), 1);
    }

    #[test]
    fn test_parse_estimated_price() {
        assert_eq!(parse_estimated_price("20").unwrap(), Money::from_cents(2000));
        assert_eq!(parse_estimated_price("4,99").unwrap(), Money::from_cents(499));
        assert_eq!(parse_estimated_price("").unwrap(), Money::zero());
        assert_eq!(parse_estimated_price("abc").unwrap(), Money::zero());
        assert_eq!(parse_estimated_price("-5").unwrap(), Money::zero());
        assert_eq!(
            parse_estimated_price("1000000").unwrap(),
            Money::from_cents(100_000_000)
        );
    }

    #[test]
    fn test_parse_estimated_price_rejects_huge_values() {
        let expected = ValidationError::OutOfRange {
            field: "estimated price".to_string(),
            min: 0,
            max: 1_000_000,
        };
        assert_eq!(parse_estimated_price("1000000.01").unwrap_err(), expected);
        assert_eq!(parse_estimated_price("90000000000000000").unwrap_err(), expected);
    }

    #[test]
    fn test_parse_real_price() {
        assert_eq!(parse_real_price("18").unwrap(), Money::from_cents(1800));
        assert_eq!(parse_real_price("0").unwrap(), Money::zero());

        assert!(matches!(
            parse_real_price("  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_real_price("1.234"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(parse_real_price("1000000").unwrap(), Money::from_cents(100_000_000));
    }

    #[test]
    fn test_parse_real_price_range_reports_price_cap() {
        let expected = ValidationError::OutOfRange {
            field: "real price".to_string(),
            min: 0,
            max: 1_000_000,
        };
        assert_eq!(parse_real_price("-3").unwrap_err(), expected);
        assert_eq!(parse_real_price("90000000000000000").unwrap_err(), expected);
        assert_eq!(
            expected.to_string(),
            "real price must be between 0 and 1000000"
        );
    }

    #[test]
    fn test_form_into_new_item() {
        let form = NewItemForm {
            name: " Tomato ".to_string(),
            amount: "2".to_string(),
            category: "Vegetable".to_string(),
            estimated_price: "20".to_string(),
        };
        let item = form.into_new_item().unwrap();

        assert_eq!(item.name, "Tomato");
        assert_eq!(item.amount, Some(2));
        assert_eq!(item.category.as_deref(), Some("Vegetable"));
        assert_eq!(item.estimated_price, Some(Money::from_cents(2000)));
    }

    #[test]
    fn test_form_defaults() {
        let form = NewItemForm {
            name: "Bread".to_string(),
            ..NewItemForm::default()
        };
        let item = form.into_new_item().unwrap();

        assert_eq!(item.amount, Some(1));
        assert_eq!(item.category, None);
        assert_eq!(item.estimated_price, Some(Money::zero()));
    }

    #[test]
    fn test_form_rejects_huge_estimated_price() {
        let form = NewItemForm {
            name: "Gold".to_string(),
            amount: "2".to_string(),
            estimated_price: "90000000000000000".to_string(),
            ..NewItemForm::default()
        };
        assert!(matches!(
            form.into_new_item(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_form_requires_name() {
        let err = NewItemForm::default().into_new_item().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "item name".to_string()
            }
        );
    }

    #[test]
    fn test_form_json_accepts_missing_fields() {
        let form: NewItemForm = serde_json::from_str(r#"{"name":"Milk"}"#).unwrap();
        assert_eq!(form.name, "Milk");
        assert!(form.amount.is_empty());
    }
}
