//! # Catalog File Codec
//!
//! Save and load the full inventory as a JSON catalog file.
//!
//! ## File Format (version 1)
//! ```text
//! {
//!   "format_version": 1,
//!   "products": [
//!     {"kind": "electronics", "id": "...", "name": "...", "price": 10.99,
//!      "quantity": 5, "brand": "...", "warranty_months": 12},
//!     {"kind": "grocery",     "id": "...", "name": "...", "price": 2.50,
//!      "quantity": 3, "expiry_date": "2026-09-01"},
//!     {"kind": "clothing",    "id": "...", "name": "...", "price": 19.99,
//!      "quantity": 7, "size": "M", "material": "cotton"}
//!   ]
//! }
//! ```
//!
//! ## Atomic Replace
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  save(inventory, "catalog.json")                                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  write "catalog.json.tmp"   ← crash here leaves the old file intact │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  rename over "catalog.json" ← single filesystem-level swap          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Load rebuilds every product through the shelf-core constructors, so a
//! corrupted or hand-edited file fails the same validation as interactive
//! input. Persistence is an explicit step; the store never triggers it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use shelf_core::{Inventory, Product, ProductKind, ProductRecord};

use crate::error::{PersistenceError, PersistenceResult};

/// The catalog format version this codec reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Discriminators with a matching record variant.
const KNOWN_KINDS: [&str; 3] = [
    ProductKind::Electronics.as_str(),
    ProductKind::Grocery.as_str(),
    ProductKind::Clothing.as_str(),
];

// =============================================================================
// Document Shapes
// =============================================================================

/// The document written on save: versioned wrapper around the records.
#[derive(Serialize)]
struct CatalogDoc {
    format_version: u32,
    products: Vec<ProductRecord>,
}

/// The document read on load. Records stay untyped until the version is
/// checked and each record's `kind` is probed, so unknown kinds get a
/// precise error instead of a generic parse failure.
#[derive(Deserialize)]
struct RawCatalogDoc {
    format_version: u32,
    products: Vec<Value>,
}

// =============================================================================
// Save
// =============================================================================

/// Serializes the full inventory to `path`, atomically.
///
/// Every product is converted via `to_record()` in store order, wrapped
/// with the format version, written to a sibling `.tmp` file and renamed
/// into place. A crash mid-write never corrupts the previously saved
/// catalog.
pub fn save(inventory: &Inventory, path: &Path) -> PersistenceResult<()> {
    debug!(path = %path.display(), products = inventory.len(), "saving catalog");

    let doc = CatalogDoc {
        format_version: FORMAT_VERSION,
        products: inventory.list_all().map(Product::to_record).collect(),
    };

    let mut json = serde_json::to_string_pretty(&doc).map_err(PersistenceError::Serialize)?;
    json.push('\n');

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(|source| PersistenceError::Write {
        path: tmp.display().to_string(),
        source,
    })?;

    fs::rename(&tmp, path).map_err(|source| {
        // The swap failed; do not leave the temp file behind.
        let _ = fs::remove_file(&tmp);
        PersistenceError::Rename {
            path: path.display().to_string(),
            source,
        }
    })?;

    debug!(path = %path.display(), "catalog saved");
    Ok(())
}

/// Sibling temp file: `catalog.json` → `catalog.json.tmp`.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

// =============================================================================
// Load
// =============================================================================

/// Reconstructs an inventory from the catalog file at `path`.
///
/// Fails with a [`PersistenceError`] if the file is unreadable, malformed,
/// has an unknown format version, an unknown `kind`, a record that fails
/// field validation, or records that do not form a valid store. On any
/// failure nothing is returned; the caller's state is never partially
/// populated.
pub fn load(path: &Path) -> PersistenceResult<Inventory> {
    debug!(path = %path.display(), "loading catalog");

    let contents = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let doc: RawCatalogDoc =
        serde_json::from_str(&contents).map_err(PersistenceError::Malformed)?;

    if doc.format_version != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: doc.format_version,
            expected: FORMAT_VERSION,
        });
    }

    let mut inventory = Inventory::new();
    for (index, value) in doc.products.into_iter().enumerate() {
        let record = decode_record(index, value)?;
        let product = record
            .into_product()
            .map_err(|source| PersistenceError::InvalidRecord { index, source })?;
        inventory.add(product)?;
    }

    debug!(path = %path.display(), products = inventory.len(), "catalog loaded");
    Ok(inventory)
}

/// Decodes one record, dispatching on its `kind` discriminator.
fn decode_record(index: usize, value: Value) -> PersistenceResult<ProductRecord> {
    if let Some(kind) = value.get("kind").and_then(Value::as_str) {
        if !KNOWN_KINDS.contains(&kind) {
            return Err(PersistenceError::UnknownKind {
                kind: kind.to_string(),
                index,
            });
        }
    }

    serde_json::from_value(value)
        .map_err(|source| PersistenceError::MalformedRecord { index, source })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shelf_core::{ClothingSize, InventoryError, Money, SearchQuery};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Unique path under the system temp dir; removed by `Cleanup`.
    fn temp_catalog() -> (PathBuf, Cleanup) {
        let path = std::env::temp_dir().join(format!("shelf-catalog-{}.json", uuid::Uuid::new_v4()));
        let cleanup = Cleanup(path.clone());
        (path, cleanup)
    }

    struct Cleanup(PathBuf);

    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
            let _ = fs::remove_file(tmp_path(&self.0));
        }
    }

    fn sample_inventory() -> Inventory {
        let mut inv = Inventory::new();
        inv.add(
            Product::electronics("E-1", "TV", Money::from_cents(49999), 4, "Acme", 12).unwrap(),
        )
        .unwrap();
        inv.add(
            // Expiry in the past
            Product::grocery("G-1", "Milk", Money::from_cents(250), 3, date(2020, 1, 1)).unwrap(),
        )
        .unwrap();
        inv.add(
            Product::clothing(
                "C-1",
                "Shirt",
                Money::from_cents(1999),
                7,
                ClothingSize::M,
                "cotton",
            )
            .unwrap(),
        )
        .unwrap();
        inv
    }

    #[test]
    fn test_save_load_round_trip() {
        let (path, _cleanup) = temp_catalog();
        let original = sample_inventory();

        save(&original, &path).unwrap();
        let mut loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), original.len());
        // Same ids, identical fields, correct concrete variant
        for product in original.list_all() {
            assert_eq!(loaded.get(product.id()), Some(product));
        }
        // Insertion order survives the round trip
        let ids: Vec<&str> = loaded.list_all().map(|p| p.id()).collect();
        assert_eq!(ids, ["E-1", "G-1", "C-1"]);

        // The expired grocery is the only product swept after reload
        let removed = loaded.remove_expired(date(2026, 8, 26));
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id(), "G-1");
        assert_eq!(loaded.get("E-1"), original.get("E-1"));
        assert_eq!(loaded.get("C-1"), original.get("C-1"));
    }

    #[test]
    fn test_save_load_exact_cents_at_price_cap() {
        let (path, _cleanup) = temp_catalog();
        let mut inv = Inventory::new();
        inv.add(
            Product::electronics(
                "E-1",
                "Mainframe",
                Money::from_cents(shelf_core::MAX_PRICE_CENTS),
                1,
                "Acme",
                12,
            )
            .unwrap(),
        )
        .unwrap();

        save(&inv, &path).unwrap();
        let loaded = load(&path).unwrap();

        // The largest valid price survives the decimal file format to the cent
        assert_eq!(
            loaded.get("E-1").unwrap().price(),
            Money::from_cents(shelf_core::MAX_PRICE_CENTS)
        );
    }

    #[test]
    fn test_load_rejects_price_above_cap() {
        let (path, _cleanup) = temp_catalog();
        fs::write(
            &path,
            r#"{
              "format_version": 1,
              "products": [
                {"kind": "electronics", "id": "E-1", "name": "TV", "price": 9007199254740993.0,
                 "quantity": 1, "brand": "Acme", "warranty_months": 12}
              ]
            }"#,
        )
        .unwrap();

        // A price past the cap would no longer round-trip exactly; it must
        // fail validation instead of loading with silently altered cents.
        assert!(matches!(
            load(&path),
            Err(PersistenceError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_saved_file_shape() {
        let (path, _cleanup) = temp_catalog();
        save(&sample_inventory(), &path).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["format_version"], 1);
        assert_eq!(value["products"].as_array().unwrap().len(), 3);
        assert_eq!(value["products"][0]["kind"], "electronics");
        assert_eq!(value["products"][1]["kind"], "grocery");
        assert_eq!(value["products"][1]["expiry_date"], "2020-01-01");
        assert_eq!(value["products"][2]["kind"], "clothing");
        assert_eq!(value["products"][2]["size"], "M");
    }

    #[test]
    fn test_save_leaves_no_temp_file_and_overwrites() {
        let (path, _cleanup) = temp_catalog();
        let inv = sample_inventory();

        save(&inv, &path).unwrap();
        assert!(!tmp_path(&path).exists());

        // Saving again over an existing catalog replaces it cleanly
        let mut smaller = Inventory::new();
        smaller
            .add(Product::electronics("E-9", "Radio", Money::from_cents(100), 1, "Acme", 6).unwrap())
            .unwrap();
        save(&smaller, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get("E-9").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let (path, _cleanup) = temp_catalog();
        assert!(matches!(
            load(&path),
            Err(PersistenceError::Read { .. })
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let (path, _cleanup) = temp_catalog();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load(&path),
            Err(PersistenceError::Malformed(_))
        ));
    }

    #[test]
    fn test_load_unknown_format_version() {
        let (path, _cleanup) = temp_catalog();
        fs::write(&path, r#"{"format_version": 2, "products": []}"#).unwrap();
        assert!(matches!(
            load(&path),
            Err(PersistenceError::UnsupportedVersion {
                found: 2,
                expected: 1,
            })
        ));
    }

    #[test]
    fn test_load_unknown_kind() {
        let (path, _cleanup) = temp_catalog();
        fs::write(
            &path,
            r#"{
              "format_version": 1,
              "products": [
                {"kind": "electronics", "id": "E-1", "name": "TV", "price": 1.0,
                 "quantity": 1, "brand": "Acme", "warranty_months": 12},
                {"kind": "food", "id": "G-1", "name": "Milk", "price": 2.5, "quantity": 3}
              ]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(PersistenceError::UnknownKind { kind, index: 1 }) if kind == "food"
        ));
    }

    #[test]
    fn test_load_revalidates_records() {
        let (path, _cleanup) = temp_catalog();
        // Negative quantity must fail validation, not be accepted from disk
        fs::write(
            &path,
            r#"{
              "format_version": 1,
              "products": [
                {"kind": "electronics", "id": "E-1", "name": "TV", "price": 1.0,
                 "quantity": -4, "brand": "Acme", "warranty_months": 12}
              ]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(PersistenceError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_load_record_with_missing_fields() {
        let (path, _cleanup) = temp_catalog();
        fs::write(
            &path,
            r#"{
              "format_version": 1,
              "products": [
                {"kind": "grocery", "id": "G-1", "name": "Milk", "price": 2.5, "quantity": 3}
              ]
            }"#,
        )
        .unwrap();

        // Grocery without an expiry_date has the wrong shape for its kind
        assert!(matches!(
            load(&path),
            Err(PersistenceError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_load_duplicate_ids() {
        let (path, _cleanup) = temp_catalog();
        fs::write(
            &path,
            r#"{
              "format_version": 1,
              "products": [
                {"kind": "clothing", "id": "C-1", "name": "Shirt", "price": 19.99,
                 "quantity": 7, "size": "M", "material": "cotton"},
                {"kind": "clothing", "id": "C-1", "name": "Shirt", "price": 19.99,
                 "quantity": 7, "size": "L", "material": "cotton"}
              ]
            }"#,
        )
        .unwrap();

        assert!(matches!(
            load(&path),
            Err(PersistenceError::Catalog(InventoryError::DuplicateId { id })) if id == "C-1"
        ));
    }

    #[test]
    fn test_loaded_store_is_fully_operational() {
        let (path, _cleanup) = temp_catalog();
        save(&sample_inventory(), &path).unwrap();
        let mut loaded = load(&path).unwrap();

        assert_eq!(loaded.sell("E-1", 1).unwrap(), 3);
        assert_eq!(loaded.restock("E-1", 1).unwrap(), 4);

        let query = SearchQuery::NameContains("shirt".to_string());
        assert_eq!(loaded.search(&query).count(), 1);
    }
}
