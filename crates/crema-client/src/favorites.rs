//! Favorites endpoints. All bearer-authorized.

use uuid::Uuid;

use crema_model::Product;

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Lists the user's favorite products.
    pub async fn favorites(&self, access_token: &str) -> ClientResult<Vec<Product>> {
        self.get_auth("/favorites", access_token).await
    }

    /// Marks a product as favorite.
    pub async fn add_favorite(&self, access_token: &str, product_id: Uuid) -> ClientResult<()> {
        self.put_auth_no_response(&format!("/favorites/{product_id}"), access_token)
            .await
    }

    /// Removes a product from the favorites.
    pub async fn remove_favorite(&self, access_token: &str, product_id: Uuid) -> ClientResult<()> {
        self.delete_auth(&format!("/favorites/{product_id}"), access_token)
            .await
    }
}
