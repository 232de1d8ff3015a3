//! Tiendita CLI - Command-line storefront front end.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! tiendita products list
//! tiendita products show 1
//!
//! # Manage the local cart (persists across invocations)
//! tiendita cart add 1
//! tiendita cart set 1 5
//! tiendita cart remove 1
//! tiendita cart show
//! tiendita cart clear
//!
//! # Submit the cart; clears it on confirmed success
//! tiendita checkout
//! ```
//!
//! # Configuration
//!
//! - `TIENDITA_API_URL` - Backend API base URL (required)
//! - `TIENDITA_DATA_DIR` - Local state directory (default: `.tiendita`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use tiendita_storefront::config::StorefrontConfig;
use tiendita_storefront::error::Result;
use tiendita_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "tiendita")]
#[command(author, version, about = "Tiendita storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Submit the cart to the backend
    Checkout,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List all products
    List,
    /// Show a single product
    Show {
        /// Product id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: i32,
    },
    /// Set the quantity of a cart line (0 removes it)
    Set {
        /// Product id
        id: i32,
        /// New quantity
        quantity: i64,
    },
    /// Remove a cart line
    Remove {
        /// Product id
        id: i32,
    },
    /// Remove all cart lines
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&state).await?,
            ProductsAction::Show { id } => commands::products::show(&state, id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { id } => commands::cart::add(&state, id).await?,
            CartAction::Set { id, quantity } => commands::cart::set(&state, id, quantity),
            CartAction::Remove { id } => commands::cart::remove(&state, id),
            CartAction::Clear => commands::cart::clear(&state),
        },
        Commands::Checkout => commands::checkout::submit(&state).await?,
    }
    Ok(())
}
