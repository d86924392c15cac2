//! Osteria CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run core (storefront) database migrations
//! osteria-cli migrate storefront
//!
//! # Run admin database migrations
//! osteria-cli migrate admin
//!
//! # Run all database migrations
//! osteria-cli migrate all
//!
//! # Create an admin user
//! osteria-cli admin create -e admin@example.com -n "Admin Name" \
//!     -p 'a-long-password' -r super_admin
//!
//! # Seed a demo catalog
//! osteria-cli seed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "osteria-cli")]
#[command(author, version, about = "Osteria CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database with a demo catalog
    Seed,
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Run core schema migrations (catalog, content, orders)
    Storefront,
    /// Run admin schema migrations (accounts)
    Admin,
    /// Run all database migrations
    All,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin user
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin display name
        #[arg(short, long)]
        name: String,

        /// Admin password (min 12 characters)
        #[arg(short, long)]
        password: String,

        /// Admin role (`super_admin`, `admin`, `viewer`)
        #[arg(short, long, default_value = "admin")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
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
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Storefront => commands::migrate::storefront().await?,
            MigrateTarget::Admin => commands::migrate::admin().await?,
            MigrateTarget::All => {
                commands::migrate::storefront().await?;
                commands::migrate::admin().await?;
            }
        },
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                name,
                password,
                role,
            } => {
                let id = commands::admin::create_user(&email, &name, &password, &role).await?;
                tracing::info!(admin_id = id, "Admin user created");
            }
        },
        Commands::Seed => commands::seed::demo_catalog().await?,
    }
    Ok(())
}
