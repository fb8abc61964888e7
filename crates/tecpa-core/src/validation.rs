//! # Validation Module
//!
//! Input validation for the Product Entry and Sales screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen form state (desktop)                                  │
//! │  ├── Collects raw text from the widgets                                │
//! │  └── Turns errors into inline advisory messages                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required / length checks on text fields                           │
//! │  ├── Decimal price parsing (integer cents)                             │
//! │  └── Whole-number quantity parsing                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tecpa_core::validation::{parse_quantity, validate_new_product};
//!
//! let product = validate_new_product("Yerba 1kg", "Almacén", "Don Pedro", "10.00").unwrap();
//! assert_eq!(product.purchase_price.cents(), 1000);
//!
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("0").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewProduct;
use crate::MAX_TEXT_FIELD_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_TEXT_FIELD_LEN`] characters
///
/// ## Example
/// ```rust
/// use tecpa_core::validation::validate_text_field;
///
/// assert_eq!(validate_text_field("name", "  Cola  ").unwrap(), "Cola");
/// assert!(validate_text_field("name", "   ").is_err());
/// ```
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_FIELD_LEN,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses the purchase price field.
///
/// ## Rules
/// - A decimal with at most two fraction digits
/// - Zero is allowed (free samples), negatives are not
pub fn parse_purchase_price(input: &str) -> ValidationResult<Money> {
    let price = Money::parse_named("purchase price", input)?;

    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "purchase price".to_string(),
        });
    }

    Ok(price)
}

/// True when `text` is a non-empty run of ASCII digits.
///
/// This is the test the Sales screen applies on every keystroke. Signs,
/// spaces and decimal points all fail it.
///
/// ## Example
/// ```rust
/// use tecpa_core::validation::is_whole_number;
///
/// assert!(is_whole_number("12"));
/// assert!(is_whole_number("0"));
/// assert!(!is_whole_number(" 12"));
/// assert!(!is_whole_number("-1"));
/// assert!(!is_whole_number(""));
/// ```
pub fn is_whole_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a non-negative whole quantity, as used for the live total.
///
/// Returns `None` for anything [`is_whole_number`] rejects or that does
/// not fit an `i64`.
pub fn parse_whole_number(text: &str) -> Option<i64> {
    if !is_whole_number(text) {
        return None;
    }
    text.parse().ok()
}

/// Parses the quantity field at submission time.
///
/// ## Rules
/// - Digits only (no sign, no whitespace, no decimal point)
/// - Greater than zero
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sales: Register Sale                                                   │
/// │                                                                         │
/// │  User typed quantity: "3"                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("3") ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── not digits?  → "quantity must be a positive whole number"    │
/// │       ├── zero?        → "quantity must be a positive whole number"    │
/// │       └── OK(3)        → Record Sale                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let must_be_positive = || ValidationError::MustBePositive {
        field: "quantity".to_string(),
    };

    if !is_whole_number(text) {
        return Err(must_be_positive());
    }

    let qty: i64 = text
        .parse()
        .map_err(|_| ValidationError::invalid_format("quantity", "number is too large"))?;

    if qty <= 0 {
        return Err(must_be_positive());
    }

    Ok(qty)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the four Product Entry fields together.
///
/// Fields are checked in on-screen order and the first failure is returned.
pub fn validate_new_product(
    name: &str,
    category: &str,
    supplier: &str,
    purchase_price: &str,
) -> ValidationResult<NewProduct> {
    Ok(NewProduct {
        name: validate_text_field("name", name)?,
        category: validate_text_field("category", category)?,
        supplier: validate_text_field("supplier", supplier)?,
        purchase_price: parse_purchase_price(purchase_price)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
