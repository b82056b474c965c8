//! Order endpoints. All bearer-authorized.
//!
//! Order creation must complete before the caller clears any local cart
//! state; the returned future resolves only once the server has answered.

use crema_model::{NewOrder, Order};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Creates an order from a cart snapshot.
    pub async fn create_order(&self, access_token: &str, order: &NewOrder) -> ClientResult<Order> {
        self.post_auth("/orders", access_token, order).await
    }

    /// Lists the user's past orders.
    pub async fn orders(&self, access_token: &str) -> ClientResult<Vec<Order>> {
        self.get_auth("/orders", access_token).await
    }
}
