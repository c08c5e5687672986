//! Merchandise cart.

use chrono::{DateTime, Utc};
use linkpage_core::{CartItemId, Price};
use serde::{Deserialize, Serialize};

use super::{Persisted, PersistedState};
use crate::storage::KeyValueStorage;

/// A product as added from the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub image: String,
    pub color: String,
    pub price: Price,
}

/// A cart line with its stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: CartItemId,
    pub added_at: DateTime<Utc>,
    #[serde(flatten)]
    pub item: CartItem,
}

/// Persisted cart contents, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartEntry>,
}

impl PersistedState for CartState {
    const KEY: &'static str = "cart-storage";
    // v0 entries had no id and were removed by position only.
    const VERSION: u32 = 1;
}

/// The shopping cart.
///
/// Adding the same product twice yields two entries.
#[derive(Debug)]
pub struct CartStore<S> {
    inner: Persisted<CartState, S>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    pub fn load(storage: S) -> Self {
        Self {
            inner: Persisted::load(storage),
        }
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartEntry] {
        &self.inner.state().items
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Sum of all entry prices, saturating at the largest representable amount.
    pub fn subtotal(&self) -> Price {
        self.items().iter().map(|entry| entry.item.price).sum()
    }

    /// Append an item and return the id of the new entry.
    pub fn add_to_cart(&mut self, item: CartItem) -> CartItemId {
        let entry = CartEntry {
            id: CartItemId::generate(),
            added_at: Utc::now(),
            item,
        };
        let id = entry.id;
        tracing::debug!(%id, name = %entry.item.name, "Adding cart item");
        self.inner.update(|state| state.items.push(entry));
        id
    }

    /// Remove the entry at `index`. Out-of-range indexes leave the cart as is.
    pub fn remove_from_cart(&mut self, index: usize) -> Option<CartEntry> {
        if index >= self.len() {
            return None;
        }
        Some(self.inner.update(|state| state.items.remove(index)))
    }

    /// Remove the entry with the given id.
    pub fn remove_item(&mut self, id: CartItemId) -> Option<CartEntry> {
        let index = self.items().iter().position(|entry| entry.id == id)?;
        self.remove_from_cart(index)
    }

    /// Remove every entry.
    pub fn clear_cart(&mut self) {
        self.inner.update(|state| state.items.clear());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn item(name: &str, price: i64) -> CartItem {
        CartItem {
            name: name.to_owned(),
            image: format!("/images/merch/{name}.png"),
            color: "black".to_owned(),
            price: Price::from_units(price),
        }
    }

    #[test]
    fn test_subtotal_and_positional_removal() {
        let storage = MemoryStorage::new();
        let mut cart = CartStore::load(&storage);
        cart.add_to_cart(item("tee", 35_000));
        cart.add_to_cart(item("hoodie", 50_000));
        assert_eq!(cart.subtotal(), Price::from_units(85_000));

        let removed = cart.remove_from_cart(0).unwrap();
        assert_eq!(removed.item.name, "tee");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items().first().unwrap().item.name, "hoodie");
        assert_eq!(cart.subtotal(), Price::from_units(50_000));
    }

    #[test]
    fn test_subtotal_saturates_instead_of_panicking() {
        let huge: Price = "50000000000000000000000000000".parse().unwrap();
        let mut cart = CartStore::load(MemoryStorage::new());
        for name in ["vault", "vault"] {
            cart.add_to_cart(CartItem {
                price: huge,
                ..item(name, 0)
            });
        }
        let max: Price = "79228162514264337593543950335".parse().unwrap();
        assert_eq!(cart.subtotal(), max);
    }

    #[test]
    fn test_no_deduplication() {
        let mut cart = CartStore::load(MemoryStorage::new());
        let a = cart.add_to_cart(item("tee", 35_000));
        let b = cart.add_to_cart(item("tee", 35_000));
        assert_ne!(a, b);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_to_cart(item("tee", 1));
        let middle = cart.add_to_cart(item("cap", 2));
        cart.add_to_cart(item("mug", 3));

        assert_eq!(cart.remove_item(middle).unwrap().item.name, "cap");
        let names: Vec<_> = cart.items().iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(names, ["tee", "mug"]);
        assert!(cart.remove_item(middle).is_none());
    }

    #[test]
    fn test_out_of_range_removal_is_noop() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_to_cart(item("tee", 1));
        assert!(cart.remove_from_cart(5).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::load(MemoryStorage::new());
        cart.add_to_cart(item("tee", 1));
        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Price::ZERO);
    }

    #[test]
    fn test_rehydrates_from_storage() {
        let storage = MemoryStorage::new();
        {
            let mut cart = CartStore::load(&storage);
            cart.add_to_cart(item("tee", 35_000));
        }
        let cart = CartStore::load(&storage);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Price::from_units(35_000));
    }

    #[test]
    fn test_corrupt_snapshot_is_empty_cart() {
        let storage = MemoryStorage::with_entries([("cart-storage", "[[[")]);
        let cart = CartStore::load(&storage);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_legacy_snapshot_is_discarded() {
        let storage = MemoryStorage::with_entries([(
            "cart-storage",
            r#"{"state":{"items":[{"name":"tee","image":"","color":"","price":1}]},"version":0}"#,
        )]);
        assert!(CartStore::load(&storage).is_empty());
    }
}
