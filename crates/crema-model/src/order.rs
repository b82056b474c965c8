//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::catalog::Currency;

/// Shipping address for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient name.
    pub name: String,
    /// Street and house number.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Contact phone number.
    pub phone: String,
    /// Country code.
    pub country: String,
}

/// Request to create an order from the current cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Snapshot of the cart lines.
    pub items: Vec<CartItem>,
    /// Where to ship.
    pub shipping: ShippingAddress,
    /// Discount code to apply, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

impl NewOrder {
    /// Builds an order request from a cart snapshot.
    #[must_use]
    pub fn from_cart(cart: &Cart, shipping: ShippingAddress) -> Self {
        Self {
            items: cart.items.clone(),
            shipping,
            discount_code: None,
        }
    }

    /// Attaches a discount code.
    #[must_use]
    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, awaiting payment.
    Pending,
    /// Paid, awaiting shipment.
    Paid,
    /// Handed to the carrier.
    Shipped,
    /// Delivered to the recipient.
    Delivered,
    /// Cancelled before shipment.
    Cancelled,
}

/// An order as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier.
    pub id: Uuid,
    /// Current status.
    pub status: OrderStatus,
    /// Total charged, in minor units, after discounts.
    pub total_cents: i64,
    /// Currency of the total.
    #[serde(default)]
    pub currency: Currency,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            name: "Jane Doe".to_string(),
            street: "Bergmannstr. 1".to_string(),
            city: "Berlin".to_string(),
            zip: "10961".to_string(),
            phone: "+49 170 1234567".to_string(),
            country: "DE".to_string(),
        }
    }

    #[test]
    fn order_snapshot_copies_cart_lines() {
        let mut cart = Cart::new();
        cart.add(CartItem {
            product_id: Uuid::now_v7(),
            name: "House Blend".to_string(),
            unit_price_cents: 1250,
            quantity: 2,
        });

        let order = NewOrder::from_cart(&cart, address());
        assert_eq!(order.items, cart.items);
        assert!(order.discount_code.is_none());

        // Clearing the cart afterwards must not touch the snapshot
        cart.clear();
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn discount_code_is_optional_in_wire_form() {
        let cart = Cart::new();
        let order = NewOrder::from_cart(&cart, address());
        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("discountCode"));

        let with_code = NewOrder::from_cart(&cart, address()).with_discount_code("WELCOME10");
        let json = serde_json::to_string(&with_code).unwrap();
        assert!(json.contains("discountCode"));
    }

    #[test]
    fn status_round_trips() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"SHIPPED\"");
    }
}
