//! CLI argument parsing.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::config::OutputFormat;

/// crema - command-line storefront client.
#[derive(Debug, Parser)]
#[command(name = "crema")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Server URL (overrides config).
    #[arg(short, long, env = "CREMA_SERVER_URL")]
    pub server: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with email and password.
    Login {
        /// Account email.
        email: String,
        /// Account password.
        password: String,
    },

    /// Sign in with a Google identity token.
    GoogleLogin {
        /// ID token issued by Google.
        id_token: String,
    },

    /// Sign out and drop cached tokens.
    Logout,

    /// Create a new account.
    Register(RegisterArgs),

    /// Request a password reset email.
    ResetPassword {
        /// Account email.
        email: String,
    },

    /// Show the signed-in user's profile.
    Profile,

    /// Show connection and session status.
    Status,

    /// Product commands.
    #[command(subcommand)]
    Product(ProductCommand),

    /// Accessory commands.
    #[command(subcommand)]
    Accessory(AccessoryCommand),

    /// Favorites commands.
    #[command(subcommand)]
    Favorite(FavoriteCommand),

    /// Order commands.
    #[command(subcommand)]
    Order(OrderCommand),

    /// Discount code commands.
    #[command(subcommand)]
    Discount(DiscountCommand),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Registration arguments.
#[derive(Debug, clap::Args)]
pub struct RegisterArgs {
    /// Account email.
    pub email: String,

    /// Account password.
    pub password: String,

    /// First name.
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name.
    #[arg(long)]
    pub last_name: Option<String>,

    /// Contact phone number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Postal code.
    #[arg(long)]
    pub zip: Option<String>,
}

/// Product commands.
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List products.
    List {
        /// Filter by category slug.
        #[arg(long)]
        category: Option<String>,

        /// Filter by roast level (light, medium, dark).
        #[arg(long)]
        roast: Option<String>,

        /// Free-text search term.
        #[arg(long)]
        search: Option<String>,

        /// Maximum price in cents.
        #[arg(long)]
        max_price: Option<i64>,
    },

    /// Get product details.
    Get {
        /// Product ID.
        id: Uuid,
    },
}

/// Accessory commands.
#[derive(Debug, Subcommand)]
pub enum AccessoryCommand {
    /// List accessories.
    List,
}

/// Favorites commands.
#[derive(Debug, Subcommand)]
pub enum FavoriteCommand {
    /// List favorite products.
    List,

    /// Add a product to the favorites.
    Add {
        /// Product ID.
        id: Uuid,
    },

    /// Remove a product from the favorites.
    Remove {
        /// Product ID.
        id: Uuid,
    },
}

/// Order commands.
#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List past orders.
    List,

    /// Create an order from item specs.
    Create(CreateOrderArgs),
}

/// Arguments for order creation.
#[derive(Debug, clap::Args)]
pub struct CreateOrderArgs {
    /// Items as `<product-id>:<quantity>`, repeatable.
    #[arg(long = "item", required = true)]
    pub items: Vec<String>,

    /// Recipient name.
    #[arg(long)]
    pub name: String,

    /// Street and house number.
    #[arg(long)]
    pub street: String,

    /// City.
    #[arg(long)]
    pub city: String,

    /// Postal code.
    #[arg(long)]
    pub zip: String,

    /// Contact phone number.
    #[arg(long)]
    pub phone: String,

    /// Country code.
    #[arg(long, default_value = "DE")]
    pub country: String,

    /// Discount code to apply.
    #[arg(long)]
    pub discount: Option<String>,
}

/// Discount code commands.
#[derive(Debug, Subcommand)]
pub enum DiscountCommand {
    /// Validate a discount code.
    Check {
        /// The code to validate.
        code: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Key to set (server_url, currency, refresh_interval_secs).
        key: String,
        /// New value.
        value: String,
    },

    /// Print the configuration file path.
    Path,
}
