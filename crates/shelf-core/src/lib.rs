//! # shelf-core: Pure Business Logic for Shelf
//!
//! This crate is the **heart** of Shelf. It contains the product model,
//! validation and the inventory store as pure logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                              │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Caller (CLI menu loop, tests)                 │  │
//! │  │     collects arguments, renders describe() output             │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │               ★ shelf-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌───────────┐  ┌────────────┐    │  │
//! │  │   │ product │  │  money  │  │ inventory │  │ validation │    │  │
//! │  │   │ Product │  │  Money  │  │ Inventory │  │   rules    │    │  │
//! │  │   │ variants│  │  cents  │  │ sell/stock│  │   checks   │    │  │
//! │  │   └─────────┘  └─────────┘  └───────────┘  └────────────┘    │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS             │  │
//! │  └───────────────────────────────┬───────────────────────────────┘  │
//! │                                  │  explicit save / load             │
//! │  ┌───────────────────────────────▼───────────────────────────────┐  │
//! │  │                 shelf-store (Storage Layer)                   │  │
//! │  │           JSON catalog file, atomic save, re-validating load  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The product model (Electronics, Grocery, Clothing)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - The in-memory store owning all stock mutations
//! - [`record`] - Serialization contract consumed by the codec
//! - [`validation`] - Field validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - expiry checks
//!    take an explicit `as_of` date instead of reading the clock
//! 2. **No I/O**: Filesystem and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::inventory::Inventory;
//! use shelf_core::money::Money;
//! use shelf_core::product::Product;
//!
//! let mut inv = Inventory::new();
//! let tv = Product::electronics("E-1", "TV", Money::from_cents(49999), 4, "Acme", 12)?;
//! inv.add(tv)?;
//!
//! assert_eq!(inv.sell("E-1", 1)?, 3);
//! assert_eq!(inv.total_value(), Money::from_cents(3 * 49999));
//! # Ok::<(), shelf_core::InventoryError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod record;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelf_core::Product` instead of
// `use shelf_core::product::Product`

pub use error::{InventoryError, InventoryResult, ValidationError, ValidationResult};
pub use inventory::{Inventory, SearchQuery};
pub use money::Money;
pub use product::{generate_product_id, ClothingSize, Product, ProductDetail, ProductKind};
pub use record::ProductRecord;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// ## Business Reason
/// Keeps descriptions renderable on one receipt line and catches obviously
/// corrupted input.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum unit price, in cents ($999,999,999.99).
///
/// ## Business Reason
/// Catches obviously corrupted input (no single catalog item costs a
/// billion dollars) and keeps every valid price far below 2^53 cents, the
/// point where the catalog file's decimal price representation stops being
/// exact. With this cap, save/load round-trips every price to the cent.
pub const MAX_PRICE_CENTS: i64 = 99_999_999_999;
