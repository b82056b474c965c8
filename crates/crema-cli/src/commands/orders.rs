//! Order commands.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use crema_core::event::{Event, EventOutcome, EventType};
use crema_model::{Cart, CartItem, NewOrder, Order, ShippingAddress};

use crate::cli::{CreateOrderArgs, OrderCommand};
use crate::commands::Context;
use crate::config::OutputFormat;
use crate::output;

/// Display row for an order listing.
#[derive(Debug, Tabled, Serialize)]
pub struct OrderRow {
    /// Order ID.
    pub id: String,
    /// Current status.
    pub status: String,
    /// Total in minor units.
    pub total_cents: i64,
    /// Currency code.
    pub currency: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: format!("{:?}", order.status).to_uppercase(),
            total_cents: order.total_cents,
            currency: order.currency.code().to_string(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

/// Parses an `<product-id>:<quantity>` item spec.
fn parse_item_spec(spec: &str) -> crate::CliResult<(Uuid, u32)> {
    let (id, quantity) = spec.split_once(':').ok_or_else(|| {
        crate::CliError::InvalidArgument(format!(
            "expected <product-id>:<quantity>, got: {spec}"
        ))
    })?;

    let id = id
        .parse()
        .map_err(|_| crate::CliError::InvalidArgument(format!("invalid product id: {id}")))?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| crate::CliError::InvalidArgument(format!("invalid quantity: {quantity}")))?;
    if quantity == 0 {
        return Err(crate::CliError::InvalidArgument(
            "quantity must be at least 1".to_string(),
        ));
    }

    Ok((id, quantity))
}

/// Runs an order command. All of these require a signed-in session.
pub async fn run_order(
    command: OrderCommand,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    ctx.hydrate().await?;

    match command {
        OrderCommand::List => {
            let api = Arc::clone(&ctx.api);
            let orders = ctx
                .store
                .with_auth(move |token| {
                    let api = Arc::clone(&api);
                    async move { api.orders(&token).await }
                })
                .await?;
            let rows: Vec<OrderRow> = orders.iter().map(OrderRow::from).collect();
            output::output(&rows, format)
        }
        OrderCommand::Create(args) => create_order(args, ctx, format).await,
    }
}

/// Builds a cart from the item specs and places the order.
async fn create_order(
    args: CreateOrderArgs,
    ctx: &Context,
    format: OutputFormat,
) -> crate::CliResult<()> {
    let mut cart = Cart::new();
    for spec in &args.items {
        let (id, quantity) = parse_item_spec(spec)?;
        let product = ctx.api.product(id).await?;
        cart.add(CartItem::from_product(&product));
        cart.set_quantity(id, quantity);
    }

    // Check the code before placing the order so a dead code fails fast
    if let Some(code) = &args.discount {
        let api = Arc::clone(&ctx.api);
        let code = code.clone();
        let discount = ctx
            .store
            .with_auth(move |token| {
                let api = Arc::clone(&api);
                let code = code.clone();
                async move { api.validate_discount(&token, &code).await }
            })
            .await?;

        if discount.is_expired(chrono::Utc::now()) {
            return Err(crate::CliError::InvalidArgument(format!(
                "discount code {} has expired",
                discount.code
            )));
        }
        // Informational only; the server computes the charged total
        output::info(&format!(
            "Applying {}: -{}%, {} cents before, {} cents after",
            discount.code,
            discount.percent_off,
            cart.subtotal_cents(),
            discount.apply_to(cart.subtotal_cents())
        ));
    }

    let shipping = ShippingAddress {
        name: args.name,
        street: args.street,
        city: args.city,
        zip: args.zip,
        phone: args.phone,
        country: args.country,
    };

    let mut request = NewOrder::from_cart(&cart, shipping);
    if let Some(code) = args.discount {
        request = request.with_discount_code(code);
    }

    let api = Arc::clone(&ctx.api);
    let request = Arc::new(request);
    let result = ctx
        .store
        .with_auth(move |token| {
            let api = Arc::clone(&api);
            let request = Arc::clone(&request);
            async move { api.create_order(&token, &request).await }
        })
        .await;

    let order = match result {
        Ok(order) => {
            Event::new(EventType::OrderCreated, EventOutcome::Success)
                .with_detail(order.id.to_string())
                .emit();
            order
        }
        Err(err) => {
            Event::new(EventType::OrderError, EventOutcome::Failure)
                .with_detail(err.to_string())
                .emit();
            return Err(err.into());
        }
    };

    // The order is confirmed; only now is the local cart emptied
    cart.clear();

    output::success(&format!("Order {} placed.", order.id));
    output::output_single(&OrderRow::from(&order), format)
}
