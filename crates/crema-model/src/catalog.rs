//! Product catalog models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency of a listed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    #[default]
    Eur,
    /// US dollar.
    Usd,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            other => Err(format!("unknown currency: {other}")),
        }
    }
}

/// Roast level of a coffee product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    /// Light roast.
    Light,
    /// Medium roast.
    Medium,
    /// Dark roast.
    Dark,
}

/// A coffee product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g. "espresso", "filter").
    pub category: String,
    /// Roast level, absent for non-coffee items listed as products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roast: Option<RoastLevel>,
    /// Unit price in minor units (cents).
    pub price_cents: i64,
    /// Currency of the price.
    #[serde(default)]
    pub currency: Currency,
    /// Whether the product can currently be ordered.
    #[serde(default)]
    pub in_stock: bool,
}

/// An accessory (grinder, filter paper, cup...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price in minor units (cents).
    pub price_cents: i64,
    /// Currency of the price.
    #[serde(default)]
    pub currency: Currency,
    /// Whether the accessory can currently be ordered.
    #[serde(default)]
    pub in_stock: bool,
}

/// Filter parameters for catalog listings.
///
/// Translated into query-string pairs; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Category slug to filter by.
    pub category: Option<String>,
    /// Roast level to filter by.
    pub roast: Option<RoastLevel>,
    /// Minimum price in minor units.
    pub min_price_cents: Option<i64>,
    /// Maximum price in minor units.
    pub max_price_cents: Option<i64>,
    /// Free-text search term.
    pub search: Option<String>,
}

impl CatalogQuery {
    /// Creates an empty query matching everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters by roast level.
    #[must_use]
    pub const fn with_roast(mut self, roast: RoastLevel) -> Self {
        self.roast = Some(roast);
        self
    }

    /// Filters by a price band in minor units.
    #[must_use]
    pub const fn with_price_band(mut self, min_cents: i64, max_cents: i64) -> Self {
        self.min_price_cents = Some(min_cents);
        self.max_price_cents = Some(max_cents);
        self
    }

    /// Filters by a free-text search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Renders the query as URL query pairs.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(roast) = self.roast {
            let value = match roast {
                RoastLevel::Light => "light",
                RoastLevel::Medium => "medium",
                RoastLevel::Dark => "dark",
            };
            pairs.push(("roast".to_string(), value.to_string()));
        }
        if let Some(min) = self.min_price_cents {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = self.max_price_cents {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("q".to_string(), search.clone()));
        }
        pairs
    }
}
