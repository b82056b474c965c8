//! Local shopping cart.
//!
//! The cart is pure client-side state; its snapshot feeds order creation.
//! The cart is only cleared after the order call has completed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Product;

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product being ordered.
    pub product_id: Uuid,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price in minor units at the time it was added.
    pub unit_price_cents: i64,
    /// Quantity ordered.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line for one unit of a product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
        }
    }

    /// Total for this line in minor units.
    #[must_use]
    pub const fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity as i64
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines currently in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, merging quantities when the product is already present.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
    }

    /// Sets the quantity of a product; zero removes the line.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a product from the cart.
    pub fn remove(&mut self, product_id: Uuid) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal in minor units.
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: Uuid, price: i64, qty: u32) -> CartItem {
        CartItem {
            product_id: id,
            name: "Test".to_string(),
            unit_price_cents: price,
            quantity: qty,
        }
    }

    #[test]
    fn add_merges_same_product() {
        let id = Uuid::now_v7();
        let mut cart = Cart::new();
        cart.add(item(id, 1250, 1));
        cart.add(item(id, 1250, 2));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.unit_count(), 3);
        assert_eq!(cart.subtotal_cents(), 3750);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let id = Uuid::now_v7();
        let mut cart = Cart::new();
        cart.add(item(id, 900, 2));
        cart.set_quantity(id, 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn subtotal_spans_lines() {
        let mut cart = Cart::new();
        cart.add(item(Uuid::now_v7(), 1250, 2));
        cart.add(item(Uuid::now_v7(), 450, 3));

        assert_eq!(cart.subtotal_cents(), 2 * 1250 + 3 * 450);
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(item(Uuid::now_v7(), 100, 1));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }
}
