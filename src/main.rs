//! Orderdesk CLI
//!
//! - `serve`: run the HTTP server
//! - `routes`: list page routes
//! - `init-config`: print a default config file
//! - `seed`: create the schema and insert sample rows

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use orderdesk::pages::{document_title, page_routes};
use orderdesk::{logging, serve, AppState, Config, OrderConfirmation, SpecialRequest, Store};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin dashboard server for order confirmations and special requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve,

    /// List page routes with their layout, title and intended view
    Routes,

    /// Print a default configuration file
    InitConfig,

    /// Create the schema and insert sample data
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, Some(path.clone()))
        }
        None => Config::load_default().context("loading default config")?,
    };

    match cli.command {
        Commands::Serve => run_server(config, source).await,
        Commands::Routes => {
            print_routes(&config);
            Ok(())
        }
        Commands::InitConfig => {
            print!("{}", orderdesk::generate_default_config());
            Ok(())
        }
        Commands::Seed => {
            init_logging(&config, source.as_deref())?;
            seed(&config)
        }
    }
}

fn init_logging(config: &Config, source: Option<&Path>) -> anyhow::Result<()> {
    logging::init(&config.logging).context("initializing logging")?;

    match source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    Ok(())
}

async fn run_server(config: Config, source: Option<PathBuf>) -> anyhow::Result<()> {
    init_logging(&config, source.as_deref())?;

    tracing::info!("Starting Orderdesk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", config.database.path);
    if config.pages.dashboard_guard {
        tracing::info!("Dashboard guard enabled");
    }

    let store = Store::open(&config.database.path)
        .with_context(|| format!("opening database {}", config.database.path))?;

    let api_config = config.api.clone();
    serve(AppState::new(store, config), &api_config).await?;

    tracing::info!("Orderdesk stopped");
    Ok(())
}

fn print_routes(config: &Config) {
    println!("{:<34} {:<10} {:<44} VIEW", "PATH", "LAYOUT", "TITLE");
    for route in page_routes() {
        println!(
            "{:<34} {:<10} {:<44} {}",
            route.path,
            route.layout.as_str(),
            document_title(route.title.as_ref(), &config.app.name),
            route.view
        );
    }
}

fn seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::open(&config.database.path)
        .with_context(|| format!("opening database {}", config.database.path))?;

    let requests = [
        SpecialRequest::new(1, "No onions", "no-onions", 1),
        SpecialRequest::new(2, "Extra sauce", "extra-sauce", 2),
        SpecialRequest::new(3, "Gluten free", "gluten-free", 2),
        SpecialRequest::new(4, "Gift wrap", "gift-wrap", 3),
        SpecialRequest::new(5, "Paper straw", "paper-straw", 9).inactive(),
    ];
    for req in &requests {
        store.insert_special_request(req)?;
    }

    let order = OrderConfirmation::new(1001, "Sample Customer", "customer@example.com")
        .items(json!([
            {"sku": "burger", "name": "Classic Burger", "qty": 2, "priceCents": 1150},
            {"sku": "fries", "name": "Fries", "qty": 1, "priceCents": 450}
        ]))
        .special_requests(json!(["no-onions"]))
        .total_cents(2750)
        .status("ready")
        .created_at(Utc::now());
    store.insert_order_confirmation(&order)?;

    tracing::info!(
        special_requests = requests.len(),
        order_id = order.order_id,
        "Seeded {}",
        config.database.path
    );
    Ok(())
}
