//! # Inventory Store
//!
//! The in-memory store that owns every product and every stock mutation.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Inventory                                   │
//! │                                                                     │
//! │   products: id ──► Product        (exclusive ownership)             │
//! │   order:    [id, id, ...]         (stable insertion order)          │
//! │                                                                     │
//! │   Callers receive &Product for inspection and must go through       │
//! │   sell / restock / set_price to mutate quantity or price, which     │
//! │   is where the quantity >= 0 invariant is enforced.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence is an explicit, separate step: the store never talks to the
//! codec implicitly. Single-threaded by design; a future multi-client
//! wrapper would put one mutex around each logical operation.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::{InventoryError, InventoryResult};
use crate::money::Money;
use crate::product::{Product, ProductKind};

// =============================================================================
// Search Query
// =============================================================================

/// A search predicate over the store.
///
/// Name matching is case-insensitive; results always come back in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Exact name match (case-insensitive).
    NameExact(String),
    /// Substring name match (case-insensitive).
    NameContains(String),
    /// All products of one concrete variant.
    Kind(ProductKind),
}

impl SearchQuery {
    fn matches(&self, product: &Product) -> bool {
        match self {
            SearchQuery::NameExact(name) => {
                product.name().to_lowercase() == name.trim().to_lowercase()
            }
            SearchQuery::NameContains(needle) => product
                .name()
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            SearchQuery::Kind(kind) => product.kind() == *kind,
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// In-memory mapping from product id to product, with preserved insertion
/// order for listing.
///
/// ## Usage
/// ```rust
/// use shelf_core::inventory::Inventory;
/// use shelf_core::money::Money;
/// use shelf_core::product::Product;
///
/// let mut inv = Inventory::new();
/// let tv = Product::electronics("E-1", "TV", Money::from_cents(49999), 4, "Acme", 12).unwrap();
/// inv.add(tv).unwrap();
///
/// assert_eq!(inv.sell("E-1", 3).unwrap(), 1);
/// assert_eq!(inv.total_value(), Money::from_cents(49999));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: HashMap<String, Product>,
    /// Insertion order of ids; kept in sync with `products` on removal.
    order: Vec<String>,
}

impl Inventory {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // -------------------------------------------------------------------------
    // Lifecycle operations
    // -------------------------------------------------------------------------

    /// Inserts a product.
    ///
    /// Fails with [`InventoryError::DuplicateId`] if the id is already
    /// present; the store is unchanged on failure.
    pub fn add(&mut self, product: Product) -> InventoryResult<()> {
        if self.products.contains_key(product.id()) {
            return Err(InventoryError::DuplicateId {
                id: product.id().to_string(),
            });
        }

        self.order.push(product.id().to_string());
        self.products.insert(product.id().to_string(), product);
        Ok(())
    }

    /// Deletes a product and returns it.
    ///
    /// Fails with [`InventoryError::NotFound`] if the id is absent.
    pub fn remove(&mut self, id: &str) -> InventoryResult<Product> {
        let product = self
            .products
            .remove(id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })?;

        self.order.retain(|entry| entry != id);
        Ok(product)
    }

    /// Read-only lookup by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    // -------------------------------------------------------------------------
    // Stock mutations
    // -------------------------------------------------------------------------

    /// Sells `amount` units of the given product.
    ///
    /// `amount` must be positive; fails with
    /// [`InventoryError::InsufficientStock`] if it exceeds the available
    /// quantity, leaving the quantity unchanged. Returns the resulting
    /// quantity.
    pub fn sell(&mut self, id: &str, amount: i64) -> InventoryResult<i64> {
        self.get_mut(id)?.sell(amount)
    }

    /// Restocks `amount` units of the given product.
    ///
    /// `amount` must be positive; there is no upper bound. Returns the
    /// resulting quantity.
    pub fn restock(&mut self, id: &str, amount: i64) -> InventoryResult<i64> {
        self.get_mut(id)?.restock(amount)
    }

    /// Updates the unit price of the given product.
    pub fn set_price(&mut self, id: &str, price: Money) -> InventoryResult<()> {
        self.get_mut(id)?.set_price(price)?;
        Ok(())
    }

    /// Sweeps all grocery products expired as of `as_of` and returns them
    /// in store order.
    ///
    /// Non-grocery products are never affected. An empty sweep returns an
    /// empty vec and leaves the store untouched.
    pub fn remove_expired(&mut self, as_of: NaiveDate) -> Vec<Product> {
        let expired_ids: Vec<String> = self
            .order
            .iter()
            .filter(|id| {
                self.products
                    .get(id.as_str())
                    .is_some_and(|p| p.is_expired(as_of))
            })
            .cloned()
            .collect();

        expired_ids
            .iter()
            .filter_map(|id| {
                self.order.retain(|entry| entry != id);
                self.products.remove(id)
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns a lazy iterator over products matching the query, in
    /// insertion order. Restartable: call again with the same query for a
    /// fresh pass. Never mutates.
    pub fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.list_all().filter(move |product| query.matches(product))
    }

    /// Total value of the store: Σ price × quantity over all products.
    ///
    /// Exact integer-cent accumulation (see [`Money`]); zero for an empty
    /// store. Saturates at the i64 bounds instead of wrapping.
    pub fn total_value(&self) -> Money {
        self.list_all().fold(Money::zero(), |acc, product| {
            acc.saturating_add(product.total_value())
        })
    }

    /// Iterates over all products in stable insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> {
        self.order
            .iter()
            .filter_map(move |id| self.products.get(id))
    }

    fn get_mut(&mut self, id: &str) -> InventoryResult<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ClothingSize;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_inventory() -> Inventory {
        let mut inv = Inventory::new();
        inv.add(
            Product::electronics("E-1", "TV", Money::from_cents(49999), 4, "Acme", 12).unwrap(),
        )
        .unwrap();
        inv.add(
            Product::grocery("G-1", "Milk", Money::from_cents(250), 3, date(2026, 9, 1)).unwrap(),
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
    fn test_add_rejects_duplicate_id() {
        let mut inv = sample_inventory();
        let dup =
            Product::electronics("E-1", "Radio", Money::from_cents(100), 1, "Acme", 6).unwrap();
        assert!(matches!(
            inv.add(dup),
            Err(InventoryError::DuplicateId { id }) if id == "E-1"
        ));
        assert_eq!(inv.len(), 3);
        // Original product untouched
        assert_eq!(inv.get("E-1").unwrap().name(), "TV");
    }

    #[test]
    fn test_remove_returns_product() {
        let mut inv = sample_inventory();
        let removed = inv.remove("G-1").unwrap();
        assert_eq!(removed.id(), "G-1");
        assert_eq!(inv.len(), 2);
        assert!(inv.get("G-1").is_none());

        assert!(matches!(
            inv.remove("G-1"),
            Err(InventoryError::NotFound { id }) if id == "G-1"
        ));
    }

    #[test]
    fn test_sell_then_restock_restores_quantity() {
        let mut inv = sample_inventory();
        let before = inv.get("E-1").unwrap().quantity();

        assert_eq!(inv.sell("E-1", 3).unwrap(), before - 3);
        assert_eq!(inv.restock("E-1", 3).unwrap(), before);
    }

    #[test]
    fn test_oversell_leaves_quantity_unchanged() {
        let mut inv = sample_inventory();
        assert!(matches!(
            inv.sell("E-1", 5),
            Err(InventoryError::InsufficientStock {
                available: 4,
                requested: 5,
                ..
            })
        ));
        assert_eq!(inv.get("E-1").unwrap().quantity(), 4);
    }

    #[test]
    fn test_sell_unknown_id() {
        let mut inv = sample_inventory();
        assert!(matches!(
            inv.sell("nope", 1),
            Err(InventoryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_set_price() {
        let mut inv = sample_inventory();
        inv.set_price("C-1", Money::from_cents(1499)).unwrap();
        assert_eq!(inv.get("C-1").unwrap().price(), Money::from_cents(1499));

        // Negative price rejected, old price kept
        assert!(inv.set_price("C-1", Money::from_cents(-1)).is_err());
        assert_eq!(inv.get("C-1").unwrap().price(), Money::from_cents(1499));
    }

    #[test]
    fn test_total_value() {
        let mut inv = Inventory::new();
        assert_eq!(inv.total_value(), Money::zero());

        // price $10.00 × quantity 5 adds exactly $50.00
        inv.add(
            Product::electronics("E-1", "Radio", Money::from_cents(1000), 5, "Acme", 6).unwrap(),
        )
        .unwrap();
        assert_eq!(inv.total_value(), Money::from_cents(5000));

        inv.add(
            Product::grocery("G-1", "Milk", Money::from_cents(250), 3, date(2026, 9, 1)).unwrap(),
        )
        .unwrap();
        assert_eq!(inv.total_value(), Money::from_cents(5750));
    }

    #[test]
    fn test_remove_expired_sweeps_only_expired_groceries() {
        let mut inv = sample_inventory();
        inv.add(
            Product::grocery("G-2", "Yogurt", Money::from_cents(150), 2, date(2026, 8, 1))
                .unwrap(),
        )
        .unwrap();

        let removed = inv.remove_expired(date(2026, 8, 26));
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id(), "G-2");

        // Fresh grocery and non-grocery products untouched
        assert!(inv.get("G-1").is_some());
        assert!(inv.get("E-1").is_some());
        assert!(inv.get("C-1").is_some());
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_remove_expired_on_fresh_store_is_a_no_op() {
        let mut inv = sample_inventory();
        let removed = inv.remove_expired(date(2026, 8, 26));
        assert!(removed.is_empty());
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let mut inv = sample_inventory();
        let ids: Vec<&str> = inv.list_all().map(|p| p.id()).collect();
        assert_eq!(ids, ["E-1", "G-1", "C-1"]);

        // Order survives removal of a middle element
        inv.remove("G-1").unwrap();
        let ids: Vec<&str> = inv.list_all().map(|p| p.id()).collect();
        assert_eq!(ids, ["E-1", "C-1"]);
    }

    #[test]
    fn test_search_by_name_substring_is_case_insensitive() {
        let mut inv = sample_inventory();
        inv.add(
            Product::grocery(
                "G-2",
                "Chocolate Milkshake",
                Money::from_cents(399),
                1,
                date(2026, 9, 1),
            )
            .unwrap(),
        )
        .unwrap();

        let query = SearchQuery::NameContains("MILK".to_string());
        let ids: Vec<&str> = inv.search(&query).map(|p| p.id()).collect();
        assert_eq!(ids, ["G-1", "G-2"]);

        // Restartable: a second pass yields the same results
        let ids_again: Vec<&str> = inv.search(&query).map(|p| p.id()).collect();
        assert_eq!(ids, ids_again);
    }

    #[test]
    fn test_search_by_exact_name() {
        let inv = sample_inventory();
        let query = SearchQuery::NameExact("milk".to_string());
        let ids: Vec<&str> = inv.search(&query).map(|p| p.id()).collect();
        assert_eq!(ids, ["G-1"]);

        let query = SearchQuery::NameExact("milkshake".to_string());
        assert_eq!(inv.search(&query).count(), 0);
    }

    #[test]
    fn test_search_by_kind() {
        let inv = sample_inventory();
        let query = SearchQuery::Kind(ProductKind::Clothing);
        let ids: Vec<&str> = inv.search(&query).map(|p| p.id()).collect();
        assert_eq!(ids, ["C-1"]);
    }

    #[test]
    fn test_search_never_mutates() {
        let inv = sample_inventory();
        let query = SearchQuery::Kind(ProductKind::Grocery);
        let _ = inv.search(&query).count();
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.get("G-1").unwrap().quantity(), 3);
    }
}
