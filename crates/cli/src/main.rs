//! Landing CLI - Seed, inspect and edit the landing page content.
//!
//! # Usage
//!
//! ```bash
//! # Seed the store from data.json (or defaults if it is unavailable)
//! landing init
//!
//! # Factory reset
//! landing reset
//!
//! # Edit the catalog
//! landing products add --name "Starter" --price "₪299" --feature "1 page"
//! landing products update a1B2c3 --price "₪349"
//! landing products remove a1B2c3
//!
//! # Chat link for a product
//! landing order-link p1
//! ```
//!
//! # Commands
//!
//! - `init` / `reset` / `export` - Seeding and backups
//! - `profile` - Show or edit the owner profile
//! - `products` / `testimonials` - List, show, add, update, remove
//! - `order-link` - Build the chat deep link for a product

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use landing_content::{ContentConfig, SeedLocation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about = "Landing page content tools")]
struct Cli {
    /// Store directory (overrides `LANDING_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed file path or http(s) URL (overrides `LANDING_SEED_URL`/`LANDING_SEED_PATH`)
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate missing content from the seed document
    Init,
    /// Delete all content and seed again
    Reset,
    /// Write the current content as a seed document
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or edit the owner profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage testimonials
    Testimonials {
        #[command(subcommand)]
        action: TestimonialAction,
    },
    /// Print the chat deep link for ordering a product
    OrderLink {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the profile
    Show,
    /// Change profile fields
    Set(ProfileFields),
}

#[derive(Args, Default)]
pub struct ProfileFields {
    #[arg(long)]
    pub brand_name: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,
    /// Print one product
    Show { id: String },
    /// Add a product
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        price: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Feature line (repeatable)
        #[arg(short, long = "feature")]
        features: Vec<String>,
    },
    /// Change fields of an existing product
    Update {
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Remove a product
    Remove { id: String },
}

#[derive(Args, Default)]
pub struct ProductFields {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub price: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Replace the feature list (repeatable)
    #[arg(short, long = "feature")]
    pub features: Vec<String>,
    /// Clear the feature list
    #[arg(long, conflicts_with = "features")]
    pub clear_features: bool,
}

#[derive(Subcommand)]
enum TestimonialAction {
    /// List all testimonials
    List,
    /// Print one testimonial
    Show { id: String },
    /// Add a testimonial
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        text: String,
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Change fields of an existing testimonial
    Update {
        id: String,
        #[command(flatten)]
        fields: TestimonialFields,
    },
    /// Remove a testimonial
    Remove { id: String },
}

#[derive(Args, Default)]
pub struct TestimonialFields {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub text: Option<String>,
    #[arg(short, long)]
    pub image: Option<String>,
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "landing=info,landing_content=info".into());

    // Logs go to stderr so command output on stdout stays machine-readable
    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<ContentConfig, Box<dyn std::error::Error>> {
    let mut config = ContentConfig::from_env()?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(seed) = &cli.seed {
        config.seed = SeedLocation::parse(seed);
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let repo = commands::open(&config).await?;

    // Every invocation is a cold start: make sure content exists before reading it
    if !matches!(cli.command, Commands::Init | Commands::Reset) {
        repo.init_data().await?;
    }

    match cli.command {
        Commands::Init => commands::content::init(&repo).await?,
        Commands::Reset => commands::content::reset(&repo).await?,
        Commands::Export { output } => commands::content::export(&repo, output.as_deref()).await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&repo).await?,
            ProfileAction::Set(fields) => commands::profile::set(&repo, fields).await?,
        },
        Commands::Products { action } => match action {
            ProductAction::List => commands::products::list(&repo).await?,
            ProductAction::Show { id } => commands::products::show(&repo, id).await?,
            ProductAction::Add {
                name,
                price,
                description,
                features,
            } => {
                commands::products::add(&repo, name, price, description, features).await?;
            }
            ProductAction::Update { id, fields } => {
                commands::products::update(&repo, id, fields).await?;
            }
            ProductAction::Remove { id } => commands::products::remove(&repo, id).await?,
        },
        Commands::Testimonials { action } => match action {
            TestimonialAction::List => commands::testimonials::list(&repo).await?,
            TestimonialAction::Show { id } => commands::testimonials::show(&repo, id).await?,
            TestimonialAction::Add { name, text, image } => {
                commands::testimonials::add(&repo, name, text, image).await?;
            }
            TestimonialAction::Update { id, fields } => {
                commands::testimonials::update(&repo, id, fields).await?;
            }
            TestimonialAction::Remove { id } => {
                commands::testimonials::remove(&repo, id).await?;
            }
        },
        Commands::OrderLink { id } => commands::order_link::print(&repo, id).await?,
    }
    Ok(())
}
