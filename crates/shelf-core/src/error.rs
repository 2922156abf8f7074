//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  shelf-core errors (this file)                                      │
//! │  ├── ValidationError  - A field fails its invariant                 │
//! │  └── InventoryError   - Store operation failures                    │
//! │                                                                     │
//! │  shelf-store errors (separate crate)                                │
//! │  └── PersistenceError - Catalog file load/save failures             │
//! │                                                                     │
//! │  Flow: ValidationError → InventoryError → PersistenceError → caller │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every error surfaces to the caller; nothing is silently recovered

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A field failed its invariant at construction or mutation time.
///
/// Raised by the validators in [`crate::validation`] and by the product
/// constructors. Each variant carries the field name and offending value so
/// the caller can render a precise message. Values are never coerced or
/// clamped into range.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required text field is missing or empty after trimming.
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    /// Field value exceeds its maximum length.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric field holds a negative value where none is allowed.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },

    /// Numeric field exceeds its maximum value.
    #[error("{field} must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        max: i64,
        value: i64,
    },

    /// A mutation would push the field past the representable range.
    #[error("{field} exceeds the representable range")]
    Overflow { field: &'static str },

    /// Value must be strictly positive (sell/restock amounts).
    #[error("{field} must be positive (got {value})")]
    MustBePositive { field: &'static str, value: i64 },

    /// Clothing size is not in the recognized set.
    #[error("size '{value}' is not recognized (expected one of XS, S, M, L, XL, XXL)")]
    UnknownSize { value: String },

    /// Invalid format (malformed date, price with sub-cent precision, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Inventory Error
// =============================================================================

/// Inventory store operation failures.
///
/// ## When These Occur
/// - `DuplicateId`: adding a product whose id is already present
/// - `NotFound`: sell/restock/remove referencing an absent id
/// - `InsufficientStock`: a sale that would drive quantity negative
///
/// A failed operation never partially applies: quantity is unchanged after
/// a rejected sale.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Add with an id already present in the store.
    #[error("product id '{id}' already exists")]
    DuplicateId { id: String },

    /// Operation references an id that is not in the store.
    #[error("product id '{id}' not found")]
    NotFound { id: String },

    /// Sale amount exceeds the available quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { id: "COKE-330", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// CLI shows: "Only 3 in stock"
    /// ```
    #[error("insufficient stock for '{id}': available {available}, requested {requested}")]
    InsufficientStock {
        id: String,
        available: i64,
        requested: i64,
    },

    /// A field failed validation (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for inventory results.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
