//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! lp-cli cart add -n "Tote" -i /img/tote.png -c black -p 35000
//! lp-cli cart remove 0
//! lp-cli cart remove-id 1b4e28ba-2fa1-11d2-883f-0016d3cca427
//! lp-cli cart list
//! ```

use linkpage_client::storage::FileStorage;
use linkpage_client::stores::{CartItem, CartStore};
use linkpage_core::{CartItemId, Price};
use serde_json::json;

use super::{CommandError, print_json};

pub fn add(
    storage: &FileStorage,
    name: String,
    image: String,
    color: String,
    price: &str,
) -> Result<(), CommandError> {
    let price: Price = price
        .parse()
        .map_err(|e| CommandError::InvalidArgument(format!("price {price:?}: {e}")))?;

    let mut cart = CartStore::load(storage);
    let id = cart.add_to_cart(CartItem {
        name,
        image,
        color,
        price,
    });
    tracing::info!("Added item {id} ({} in cart)", cart.len());
    println!("{id}");
    Ok(())
}

pub fn remove(storage: &FileStorage, index: usize) -> Result<(), CommandError> {
    let mut cart = CartStore::load(storage);
    let removed = cart
        .remove_from_cart(index)
        .ok_or_else(|| CommandError::NotFound(format!("cart position {index}")))?;
    tracing::info!("Removed {}", removed.item.name);
    Ok(())
}

pub fn remove_id(storage: &FileStorage, id: &str) -> Result<(), CommandError> {
    let id: CartItemId = id
        .parse()
        .map_err(|_| CommandError::InvalidArgument(format!("cart item id {id:?}")))?;

    let mut cart = CartStore::load(storage);
    let removed = cart
        .remove_item(id)
        .ok_or_else(|| CommandError::NotFound(format!("cart item {id}")))?;
    tracing::info!("Removed {}", removed.item.name);
    Ok(())
}

pub fn clear(storage: &FileStorage) {
    CartStore::load(storage).clear_cart();
    tracing::info!("Cart cleared");
}

pub fn list(storage: &FileStorage) -> Result<(), CommandError> {
    let cart = CartStore::load(storage);
    print_json(&json!({
        "items": cart.items(),
        "subtotal": cart.subtotal(),
    }))
}
