//! # Validation Module
//!
//! Stateless field validators for Shelf.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (CLI / tests)                                      │
//! │  ├── Argument collection and parsing                                │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Applied by every product constructor                           │
//! │  └── Re-applied by every mutating store operation                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Catalog file load                                         │
//! │  └── A hand-edited file goes through the SAME constructors,         │
//! │      so it fails the same checks as interactive input               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Violations return a [`ValidationError`] carrying the field name and the
//! offending value; values are never coerced or clamped into range.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_NAME_LEN, MAX_PRICE_CENTS};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// Returns the trimmed id.
pub fn validate_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required { field: "id" });
    }

    Ok(id.to_string())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_name;
///
/// assert!(validate_name("Coca-Cola 330ml").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
///
/// Returns the trimmed name.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates an electronics brand. Must not be empty after trimming.
pub fn validate_brand(brand: &str) -> ValidationResult<String> {
    let brand = brand.trim();

    if brand.is_empty() {
        return Err(ValidationError::Required { field: "brand" });
    }

    Ok(brand.to_string())
}

/// Validates a clothing material. Must not be empty after trimming.
pub fn validate_material(material: &str) -> ValidationResult<String> {
    let material = material.trim();

    if material.is_empty() {
        return Err(ValidationError::Required { field: "material" });
    }

    Ok(material.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must be at most `MAX_PRICE_CENTS`, which also guarantees the decimal
///   price in the catalog file is exact
///
/// ## Example
/// ```rust
/// use shelf_core::money::Money;
/// use shelf_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price",
            value: price.cents(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::TooLarge {
            field: "price",
            max: MAX_PRICE_CENTS,
            value: price.cents(),
        });
    }

    Ok(())
}

/// Validates a stock quantity at construction time.
///
/// ## Rules
/// - Must be non-negative (>= 0)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity",
            value: quantity,
        });
    }

    Ok(())
}

/// Validates a sell/restock amount.
///
/// ## Rules
/// - Must be strictly positive (> 0)
pub fn validate_amount(amount: i64) -> ValidationResult<()> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount",
            value: amount,
        });
    }

    Ok(())
}

/// Validates an electronics warranty.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means no warranty
pub fn validate_warranty_months(months: i64) -> ValidationResult<()> {
    if months < 0 {
        return Err(ValidationError::Negative {
            field: "warranty_months",
            value: months,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
