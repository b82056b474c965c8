//! Discount code endpoints.

use serde::Serialize;

use crema_model::DiscountCode;

use crate::client::ApiClient;
use crate::error::ClientResult;

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    code: &'a str,
}

impl ApiClient {
    /// Validates a discount code against the server.
    ///
    /// Invalid or expired codes come back as 400 with the server's
    /// order-level message, surfaced verbatim.
    pub async fn validate_discount(
        &self,
        access_token: &str,
        code: &str,
    ) -> ClientResult<DiscountCode> {
        self.post_auth("/discount-codes/validate", access_token, &ValidateRequest { code })
            .await
    }
}
