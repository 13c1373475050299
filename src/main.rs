use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bookingtogo::api::StoreApiClient;
use bookingtogo::catalog::{Catalog, CatalogStore};
use bookingtogo::config::Config;
use bookingtogo::logging;

/// Fetch and print the BookingToGo storefront catalog.
#[derive(Debug, Parser)]
#[command(name = "bookingtogo", version, about)]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog API base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Fetch the product listing only.
    #[arg(long, conflicts_with = "categories_only")]
    products_only: bool,

    /// Fetch the category names only.
    #[arg(long)]
    categories_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("validating config overrides")?;
    }

    let store = CatalogStore::new();
    let catalog = Catalog::new(store.clone(), StoreApiClient::new(&config.api));

    // The storefront page dispatches both actions on load; do the same.
    if cli.products_only {
        catalog.fetch_products().await;
    } else if cli.categories_only {
        catalog.fetch_categories().await;
    } else {
        tokio::join!(catalog.fetch_products(), catalog.fetch_categories());
    }

    print_catalog(&store);

    Ok(())
}

fn print_catalog(store: &CatalogStore) {
    let state = store.snapshot();

    if !state.categories.is_empty() {
        println!("Categories ({}):", state.categories.len());
        for category in &state.categories {
            println!("  {category}");
        }
        println!();
    }

    println!("Products ({}):", state.products.len());
    for product in &state.products {
        let title = product
            .get("title")
            .and_then(|t| t.as_str())
            .unwrap_or("<untitled>");
        match product.get("price").and_then(|p| p.as_f64()) {
            Some(price) => println!("  {title} ({price:.2})"),
            None => println!("  {title}"),
        }
    }

    if let Some(error) = &state.error {
        eprintln!("{error}");
    }
}
