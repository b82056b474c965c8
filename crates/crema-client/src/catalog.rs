//! Catalog endpoints.

use uuid::Uuid;

use crema_model::{Accessory, CatalogQuery, Product};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Lists products matching a filter.
    pub async fn products(&self, query: &CatalogQuery) -> ClientResult<Vec<Product>> {
        let pairs = query.to_query_pairs();
        if pairs.is_empty() {
            self.get("/products").await
        } else {
            self.get_with_query("/products", &pairs).await
        }
    }

    /// Fetches a single product.
    pub async fn product(&self, id: Uuid) -> ClientResult<Product> {
        self.get(&format!("/products/{id}")).await
    }

    /// Lists accessories.
    pub async fn accessories(&self) -> ClientResult<Vec<Accessory>> {
        self.get("/accessories").await
    }
}
