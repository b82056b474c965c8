//! Catalog commands: products and accessories.

use serde::Serialize;
use tabled::Tabled;

use crema_model::{Accessory, CatalogQuery, Product, RoastLevel};

use crate::cli::{AccessoryCommand, ProductCommand};
use crate::commands::Context;
use crate::config::OutputFormat;
use crate::output;

/// Display row for a product listing.
#[derive(Debug, Tabled, Serialize)]
pub struct ProductRow {
    /// Product ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category slug.
    pub category: String,
    /// Roast level.
    pub roast: String,
    /// Price in minor units.
    pub price_cents: i64,
    /// Currency code.
    pub currency: String,
    /// Stock state.
    pub in_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            roast: product
                .roast
                .map(|r| format!("{r:?}").to_lowercase())
                .unwrap_or_else(|| "-".to_string()),
            price_cents: product.price_cents,
            currency: product.currency.code().to_string(),
            in_stock: product.in_stock,
        }
    }
}

/// Display row for an accessory listing.
#[derive(Debug, Tabled, Serialize)]
pub struct AccessoryRow {
    /// Accessory ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in minor units.
    pub price_cents: i64,
    /// Currency code.
    pub currency: String,
    /// Stock state.
    pub in_stock: bool,
}

impl From<&Accessory> for AccessoryRow {
    fn from(accessory: &Accessory) -> Self {
        Self {
            id: accessory.id.to_string(),
            name: accessory.name.clone(),
            price_cents: accessory.price_cents,
            currency: accessory.currency.code().to_string(),
            in_stock: accessory.in_stock,
        }
    }
}

/// Parses a roast level argument.
fn parse_roast(value: &str) -> crate::CliResult<RoastLevel> {
    match value.to_ascii_lowercase().as_str() {
        "light" => Ok(RoastLevel::Light),
        "medium" => Ok(RoastLevel::Medium),
        "dark" => Ok(RoastLevel::Dark),
        other => Err(crate::CliError::InvalidArgument(format!(
            "unknown roast level: {other} (expected light, medium, or dark)"
        ))),
    }
}

/// Runs a product command.
pub async fn run_product(
    command: ProductCommand,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    match command {
        ProductCommand::List {
            category,
            roast,
            search,
            max_price,
        } => {
            let mut query = CatalogQuery::new();
            if let Some(category) = category {
                query = query.with_category(category);
            }
            if let Some(roast) = roast {
                query = query.with_roast(parse_roast(&roast)?);
            }
            if let Some(search) = search {
                query = query.with_search(search);
            }
            if let Some(max_price) = max_price {
                query = query.with_price_band(0, max_price);
            }

            let products = ctx.api.products(&query).await?;
            let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
            output::output(&rows, format)
        }
        ProductCommand::Get { id } => {
            let product = ctx.api.product(id).await?;
            output::output_single(&product, format)
        }
    }
}

/// Runs an accessory command.
pub async fn run_accessory(
    command: AccessoryCommand,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    match command {
        AccessoryCommand::List => {
            let accessories = ctx.api.accessories().await?;
            let rows: Vec<AccessoryRow> = accessories.iter().map(AccessoryRow::from).collect();
            output::output(&rows, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roast_parsing() {
        assert_eq!(parse_roast("dark").unwrap(), RoastLevel::Dark);
        assert_eq!(parse_roast("LIGHT").unwrap(), RoastLevel::Light);
        assert!(parse_roast("burnt").is_err());
    }
}
