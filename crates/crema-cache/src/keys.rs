//! Well-known cache keys.

/// The cached access token.
pub const ACCESS_TOKEN: &str = "access";

/// The cached refresh token.
pub const REFRESH_TOKEN: &str = "refresh";

/// The preferred display currency.
pub const CURRENCY: &str = "currency";
