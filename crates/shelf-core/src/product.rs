//! # Product Model
//!
//! The polymorphic product model for Shelf.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Product Model                               │
//! │                                                                     │
//! │  ┌─────────────────┐          ┌────────────────────────────────┐   │
//! │  │    Product      │          │        ProductDetail           │   │
//! │  │  ─────────────  │          │  ────────────────────────────  │   │
//! │  │  id             │  owns    │  Electronics { brand,          │   │
//! │  │  name           │ ───────► │                warranty_months}│   │
//! │  │  price (Money)  │          │  Grocery { expiry_date }       │   │
//! │  │  quantity       │          │  Clothing { size, material }   │   │
//! │  └─────────────────┘          └────────────────────────────────┘   │
//! │                                                                     │
//! │  A closed tagged union, not open inheritance: the store and the     │
//! │  codec work against Product's shared capability set; only the       │
//! │  codec's reconstruction step dispatches on the `kind` tag.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Encapsulation
//! All fields are private. Reads go through getters; quantity and price
//! mutate only through the inventory store ([`crate::inventory::Inventory`]),
//! which is what keeps `quantity >= 0` a real invariant rather than a
//! convention.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult, ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{
    validate_amount, validate_brand, validate_id, validate_material, validate_name,
    validate_price, validate_quantity, validate_warranty_months,
};

// =============================================================================
// Product Kind
// =============================================================================

/// The concrete product variants in the catalog.
///
/// Doubles as the `kind` discriminator in the persisted file format, hence
/// the lowercase serde renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Electronics,
    Grocery,
    Clothing,
}

impl ProductKind {
    /// Returns the discriminator string used in the catalog file.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Electronics => "electronics",
            ProductKind::Grocery => "grocery",
            ProductKind::Clothing => "clothing",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Clothing Size
// =============================================================================

/// The recognized clothing size set.
///
/// Anything outside this set is rejected at construction with
/// [`ValidationError::UnknownSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClothingSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl ClothingSize {
    /// Returns the canonical label ("XS" .. "XXL").
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClothingSize::Xs => "XS",
            ClothingSize::S => "S",
            ClothingSize::M => "M",
            ClothingSize::L => "L",
            ClothingSize::Xl => "XL",
            ClothingSize::Xxl => "XXL",
        }
    }
}

impl fmt::Display for ClothingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse: "m", "M", " xl " are all accepted.
impl FromStr for ClothingSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XS" => Ok(ClothingSize::Xs),
            "S" => Ok(ClothingSize::S),
            "M" => Ok(ClothingSize::M),
            "L" => Ok(ClothingSize::L),
            "XL" => Ok(ClothingSize::Xl),
            "XXL" => Ok(ClothingSize::Xxl),
            _ => Err(ValidationError::UnknownSize {
                value: s.trim().to_string(),
            }),
        }
    }
}

// =============================================================================
// Product Detail
// =============================================================================

/// Variant-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDetail {
    Electronics {
        brand: String,
        /// Warranty length; zero means no warranty.
        warranty_months: i64,
    },
    Grocery {
        expiry_date: NaiveDate,
    },
    Clothing {
        size: ClothingSize,
        material: String,
    },
}

impl ProductDetail {
    /// The discriminator for this detail payload.
    pub const fn kind(&self) -> ProductKind {
        match self {
            ProductDetail::Electronics { .. } => ProductKind::Electronics,
            ProductDetail::Grocery { .. } => ProductKind::Grocery,
            ProductDetail::Clothing { .. } => ProductKind::Clothing,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Constructed only through [`Product::electronics`], [`Product::grocery`]
/// and [`Product::clothing`], which enforce every field invariant. Fields
/// are private; quantity and price mutate only via the inventory store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
    quantity: i64,
    detail: ProductDetail,
}

impl Product {
    /// Shared-field construction; the variant constructors validate their
    /// extra attributes before delegating here.
    fn new(
        id: &str,
        name: &str,
        price: Money,
        quantity: i64,
        detail: ProductDetail,
    ) -> ValidationResult<Self> {
        let id = validate_id(id)?;
        let name = validate_name(name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(Product {
            id,
            name,
            price,
            quantity,
            detail,
        })
    }

    /// Creates an electronics product.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::money::Money;
    /// use shelf_core::product::Product;
    ///
    /// let tv = Product::electronics("E-1", "55\" TV", Money::from_cents(49999), 4, "Acme", 24)
    ///     .unwrap();
    /// assert_eq!(tv.quantity(), 4);
    /// ```
    pub fn electronics(
        id: &str,
        name: &str,
        price: Money,
        quantity: i64,
        brand: &str,
        warranty_months: i64,
    ) -> ValidationResult<Self> {
        let brand = validate_brand(brand)?;
        validate_warranty_months(warranty_months)?;

        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetail::Electronics {
                brand,
                warranty_months,
            },
        )
    }

    /// Creates a grocery product.
    pub fn grocery(
        id: &str,
        name: &str,
        price: Money,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> ValidationResult<Self> {
        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetail::Grocery { expiry_date },
        )
    }

    /// Creates a clothing product.
    pub fn clothing(
        id: &str,
        name: &str,
        price: Money,
        quantity: i64,
        size: ClothingSize,
        material: &str,
    ) -> ValidationResult<Self> {
        let material = validate_material(material)?;

        Self::new(
            id,
            name,
            price,
            quantity,
            ProductDetail::Clothing { size, material },
        )
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    /// Unique identifier, immutable after creation.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level; never negative.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The concrete variant of this product.
    #[inline]
    pub fn kind(&self) -> ProductKind {
        self.detail.kind()
    }

    /// Variant-specific attributes, for read-only inspection.
    #[inline]
    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    // -------------------------------------------------------------------------
    // Capability set
    // -------------------------------------------------------------------------

    /// Total inventory value for this product (`price × quantity`).
    #[inline]
    pub fn total_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Whether this product is expired as of the given date.
    ///
    /// Only Grocery carries an expiry date; every other variant reports
    /// `false` unconditionally, so callers never need a type check.
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        match &self.detail {
            ProductDetail::Grocery { expiry_date } => *expiry_date < as_of,
            _ => false,
        }
    }

    /// Variant-specific one-line summary. Pure; no side effects.
    pub fn describe(&self) -> String {
        match &self.detail {
            ProductDetail::Electronics {
                brand,
                warranty_months,
            } => format!(
                "Electronics - ID: {}, Name: {}, Brand: {}, Price: {}, Warranty: {} months, Stock: {}",
                self.id, self.name, brand, self.price, warranty_months, self.quantity
            ),
            ProductDetail::Grocery { expiry_date } => format!(
                "Grocery - ID: {}, Name: {}, Price: {}, Expiry: {}, Stock: {}",
                self.id, self.name, self.price, expiry_date, self.quantity
            ),
            ProductDetail::Clothing { size, material } => format!(
                "Clothing - ID: {}, Name: {}, Size: {}, Material: {}, Price: {}, Stock: {}",
                self.id, self.name, size, material, self.price, self.quantity
            ),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations (crate-private: callers go through the inventory store)
    // -------------------------------------------------------------------------

    /// Decrements stock by `amount`.
    ///
    /// Rejects non-positive amounts and amounts exceeding the available
    /// quantity; on rejection the quantity is untouched (no partial
    /// decrement). Returns the resulting quantity.
    pub(crate) fn sell(&mut self, amount: i64) -> InventoryResult<i64> {
        validate_amount(amount)?;

        if amount > self.quantity {
            return Err(InventoryError::InsufficientStock {
                id: self.id.clone(),
                available: self.quantity,
                requested: amount,
            });
        }

        self.quantity -= amount;
        Ok(self.quantity)
    }

    /// Increments stock by `amount` (must be positive; no business cap).
    /// Returns the resulting quantity.
    ///
    /// The only rejection beyond amount validation is i64 overflow, in
    /// which case the quantity is untouched.
    pub(crate) fn restock(&mut self, amount: i64) -> InventoryResult<i64> {
        validate_amount(amount)?;

        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or(ValidationError::Overflow { field: "quantity" })?;
        Ok(self.quantity)
    }

    /// Replaces the unit price after validating it.
    pub(crate) fn set_price(&mut self, price: Money) -> ValidationResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

/// Display delegates to the variant-specific summary.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Id Generation
// =============================================================================

/// Generates a fresh product id (UUID v4) for callers that do not supply
/// a business id.
///
/// ## Usage
/// ```rust
/// use shelf_core::product::generate_product_id;
///
/// let id = generate_product_id();
/// assert_eq!(id.len(), 36);
/// ```
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
