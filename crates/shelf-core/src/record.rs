//! # Product Records
//!
//! The serialization contract between the product model and the catalog
//! file codec.
//!
//! ## Discriminator Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                save                         load                    │
//! │                                                                     │
//! │  Product ──to_record()──► ProductRecord ──into_product()──► Product │
//! │                                │                   │                │
//! │                          "kind" tag on       dispatches on the      │
//! │                          every record        tag and re-validates   │
//! │                                              EVERY field through    │
//! │                                              the constructors       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loosely-typed on purpose: `price` is a decimal number, `size` and
//! `expiry_date` are plain strings. A hand-edited catalog file must fail
//! the same validation as interactive input, not a different serde error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::product::{Product, ProductDetail, ProductKind};

/// Date format used for grocery expiry in the catalog file.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Product Record
// =============================================================================

/// One serialized product, tagged with its `kind` discriminator.
///
/// This is the exact shape of the entries in the catalog file's
/// `products` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductRecord {
    Electronics {
        id: String,
        name: String,
        price: f64,
        quantity: i64,
        brand: String,
        warranty_months: i64,
    },
    Grocery {
        id: String,
        name: String,
        price: f64,
        quantity: i64,
        /// `YYYY-MM-DD`.
        expiry_date: String,
    },
    Clothing {
        id: String,
        name: String,
        price: f64,
        quantity: i64,
        size: String,
        material: String,
    },
}

impl ProductRecord {
    /// The discriminator of this record.
    pub const fn kind(&self) -> ProductKind {
        match self {
            ProductRecord::Electronics { .. } => ProductKind::Electronics,
            ProductRecord::Grocery { .. } => ProductKind::Grocery,
            ProductRecord::Clothing { .. } => ProductKind::Clothing,
        }
    }

    /// Reconstructs the concrete product this record represents.
    ///
    /// Every field goes back through the variant constructor, so a record
    /// with a negative quantity, an empty name or an unrecognized size
    /// fails exactly as interactive input would.
    pub fn into_product(self) -> ValidationResult<Product> {
        match self {
            ProductRecord::Electronics {
                id,
                name,
                price,
                quantity,
                brand,
                warranty_months,
            } => Product::electronics(
                &id,
                &name,
                price_from_decimal(price)?,
                quantity,
                &brand,
                warranty_months,
            ),
            ProductRecord::Grocery {
                id,
                name,
                price,
                quantity,
                expiry_date,
            } => Product::grocery(
                &id,
                &name,
                price_from_decimal(price)?,
                quantity,
                parse_expiry_date(&expiry_date)?,
            ),
            ProductRecord::Clothing {
                id,
                name,
                price,
                quantity,
                size,
                material,
            } => Product::clothing(
                &id,
                &name,
                price_from_decimal(price)?,
                quantity,
                size.parse()?,
                &material,
            ),
        }
    }
}

impl Product {
    /// Produces the serialized form of this product: all shared and
    /// variant-specific fields plus the `kind` discriminator.
    ///
    /// Used exclusively by the persistence codec.
    pub fn to_record(&self) -> ProductRecord {
        let id = self.id().to_string();
        let name = self.name().to_string();
        let price = self.price().as_major_units();
        let quantity = self.quantity();

        match self.detail() {
            ProductDetail::Electronics {
                brand,
                warranty_months,
            } => ProductRecord::Electronics {
                id,
                name,
                price,
                quantity,
                brand: brand.clone(),
                warranty_months: *warranty_months,
            },
            ProductDetail::Grocery { expiry_date } => ProductRecord::Grocery {
                id,
                name,
                price,
                quantity,
                expiry_date: expiry_date.format(EXPIRY_DATE_FORMAT).to_string(),
            },
            ProductDetail::Clothing { size, material } => ProductRecord::Clothing {
                id,
                name,
                price,
                quantity,
                size: size.as_str().to_string(),
                material: material.clone(),
            },
        }
    }
}

// =============================================================================
// Field Conversions
// =============================================================================

fn price_from_decimal(price: f64) -> ValidationResult<Money> {
    Money::from_major_units(price).ok_or_else(|| ValidationError::InvalidFormat {
        field: "price",
        reason: "must be a decimal amount with at most two decimal places".to_string(),
    })
}

fn parse_expiry_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EXPIRY_DATE_FORMAT).map_err(|err| {
        ValidationError::InvalidFormat {
            field: "expiry_date",
            reason: format!("expected YYYY-MM-DD: {err}"),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ClothingSize;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_round_trip_each_variant() {
        let products = vec![
            Product::electronics("E-1", "TV", Money::from_cents(49999), 4, "Acme", 12).unwrap(),
            Product::grocery("G-1", "Milk", Money::from_cents(250), 3, date(2026, 9, 1)).unwrap(),
            Product::clothing(
                "C-1",
                "Shirt",
                Money::from_cents(1999),
                7,
                ClothingSize::M,
                "cotton",
            )
            .unwrap(),
        ];

        for product in products {
            let record = product.to_record();
            assert_eq!(record.kind(), product.kind());

            let rebuilt = record.into_product().unwrap();
            assert_eq!(rebuilt, product);
        }
    }

    #[test]
    fn test_record_kind_tag_is_lowercase() {
        let tv = Product::electronics("E-1", "TV", Money::from_cents(100), 1, "Acme", 12).unwrap();
        let json = serde_json::to_value(tv.to_record()).unwrap();
        assert_eq!(json["kind"], "electronics");
        assert_eq!(json["warranty_months"], 12);
        assert_eq!(json["price"], 1.0);
    }

    #[test]
    fn test_price_preserved_to_the_cent() {
        let p = Product::grocery("G-1", "Milk", Money::from_cents(1099), 1, date(2027, 1, 1))
            .unwrap();
        let rebuilt = p.to_record().into_product().unwrap();
        assert_eq!(rebuilt.price(), Money::from_cents(1099));
    }

    #[test]
    fn test_into_product_revalidates_fields() {
        // Negative quantity fails construction, not deserialization.
        let record = ProductRecord::Electronics {
            id: "E-1".to_string(),
            name: "TV".to_string(),
            price: 1.0,
            quantity: -4,
            brand: "Acme".to_string(),
            warranty_months: 12,
        };
        assert!(matches!(
            record.into_product(),
            Err(ValidationError::Negative {
                field: "quantity",
                ..
            })
        ));

        // Unrecognized size
        let record = ProductRecord::Clothing {
            id: "C-1".to_string(),
            name: "Shirt".to_string(),
            price: 19.99,
            quantity: 1,
            size: "HUGE".to_string(),
            material: "cotton".to_string(),
        };
        assert!(matches!(
            record.into_product(),
            Err(ValidationError::UnknownSize { .. })
        ));

        // Malformed date
        let record = ProductRecord::Grocery {
            id: "G-1".to_string(),
            name: "Milk".to_string(),
            price: 2.50,
            quantity: 1,
            expiry_date: "01/09/2026".to_string(),
        };
        assert!(matches!(
            record.into_product(),
            Err(ValidationError::InvalidFormat {
                field: "expiry_date",
                ..
            })
        ));

        // Sub-cent price precision
        let record = ProductRecord::Grocery {
            id: "G-1".to_string(),
            name: "Milk".to_string(),
            price: 2.509,
            quantity: 1,
            expiry_date: "2026-09-01".to_string(),
        };
        assert!(matches!(
            record.into_product(),
            Err(ValidationError::InvalidFormat { field: "price", .. })
        ));
    }
}
