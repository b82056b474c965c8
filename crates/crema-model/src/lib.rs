//! # crema-model
//!
//! Domain models and wire DTOs for the crema storefront client.
//!
//! Everything here is plain data: users and tokens, the product catalog,
//! the local cart, orders, and discount codes.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod order;
pub mod token;
pub mod user;

pub use cart::{Cart, CartItem};
pub use catalog::{Accessory, CatalogQuery, Currency, Product, RoastLevel};
pub use discount::DiscountCode;
pub use order::{NewOrder, Order, OrderStatus, ShippingAddress};
pub use token::{
    Credentials, GoogleLoginRequest, PasswordResetRequest, RefreshRequest, RegisterRequest,
    TokenPair, TokenResponse,
};
pub use user::{UserProfile, UserRole};
