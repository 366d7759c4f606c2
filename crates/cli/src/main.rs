//! Mark Store CLI - seed checks and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Validate a seed file before deploying it
//! mark-cli seed check seed/catalog.yaml
//!
//! # Manage the catalog of a running storefront
//! mark-cli catalog categories list
//! mark-cli catalog categories add Phones
//! mark-cli catalog products list --category-id 1
//! mark-cli catalog products set-price 3 12500
//! mark-cli --url http://storefront:3000 catalog reviews list
//! ```
//!
//! # Commands
//!
//! - `seed check` - Parse and validate a YAML seed file
//! - `catalog categories` - List, add and delete categories
//! - `catalog products` - List, add, reprice and delete products
//! - `catalog reviews` - List reviews

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use mark_store_core::{CategoryId, NewProduct, Price, ProductId};

mod commands;

use commands::catalog::CatalogClient;

#[derive(Parser)]
#[command(name = "mark-cli")]
#[command(author, version, about = "Mark Store CLI tools")]
struct Cli {
    /// Storefront base URL for catalog commands
    #[arg(
        long,
        global = true,
        env = "MARK_STORE_URL",
        default_value = "http://localhost:3000"
    )]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with seed files
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Manage the catalog of a running storefront
    Catalog {
        #[command(subcommand)]
        target: CatalogTarget,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// Parse and validate a seed file
    Check {
        /// Path to the YAML seed file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CatalogTarget {
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Read reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    List,
    /// Create a category
    Add {
        /// Category name
        name: String,
    },
    /// Delete a category (its products are kept)
    Delete {
        /// Category ID
        id: CategoryId,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Only products with this category ID
        #[arg(short, long)]
        category_id: Option<CategoryId>,
    },
    /// Create a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product description
        #[arg(short, long)]
        description: String,

        /// Price in dinars (e.g. 12500 or 99.99)
        #[arg(short, long)]
        price: Price,

        /// Image URL or path
        #[arg(short, long)]
        image: String,

        /// Category ID
        #[arg(short, long)]
        category_id: CategoryId,
    },
    /// Change a product's price
    SetPrice {
        /// Product ID
        id: ProductId,
        /// New price
        price: Price,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews
    List,
}

#[tokio::main]
async fn main() {
    // Load environment variables (MARK_STORE_URL may live in .env)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = CatalogClient::new(cli.url);

    match cli.command {
        Commands::Seed { action } => match action {
            SeedAction::Check { file } => commands::seed::check(&file)?,
        },
        Commands::Catalog { target } => match target {
            CatalogTarget::Categories { action } => match action {
                CategoryAction::List => commands::catalog::list_categories(&client).await?,
                CategoryAction::Add { name } => {
                    commands::catalog::add_category(&client, &name).await?;
                }
                CategoryAction::Delete { id } => {
                    commands::catalog::delete_category(&client, id).await?;
                }
            },
            CatalogTarget::Products { action } => match action {
                ProductAction::List { category_id } => {
                    commands::catalog::list_products(&client, category_id).await?;
                }
                ProductAction::Add {
                    name,
                    description,
                    price,
                    image,
                    category_id,
                } => {
                    let input = NewProduct {
                        name,
                        description,
                        price,
                        image,
                        category_id,
                    };
                    commands::catalog::add_product(&client, &input).await?;
                }
                ProductAction::SetPrice { id, price } => {
                    commands::catalog::set_price(&client, id, price).await?;
                }
                ProductAction::Delete { id } => {
                    commands::catalog::delete_product(&client, id).await?;
                }
            },
            CatalogTarget::Reviews { action } => match action {
                ReviewAction::List => commands::catalog::list_reviews(&client).await?,
            },
        },
    }
    Ok(())
}
