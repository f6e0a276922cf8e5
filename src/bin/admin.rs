//! CLI administration tool for blog-api.
//!
//! Provides database maintenance and user removal without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Empty every table and restart ids at 1
//! cargo run --bin admin -- db reset
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Remove a user together with their articles and comments
//! cargo run --bin admin -- users delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use blog_api::application::services::UserService;
use blog_api::error::AppError;
use blog_api::infrastructure::MIGRATOR;
use blog_api::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing blog-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show row counts
    Stats,

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Remove every row and restart ids
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Delete a user and everything they wrote
    Delete {
        /// User id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Users { action } => handle_user_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => check_connection(pool).await,
        DbAction::Migrate => migrate(pool).await,
        DbAction::Reset { yes } => reset(pool, yes).await,
    }
}

async fn check_connection(pool: &PgPool) -> Result<()> {
    println!("{}", "Database check".bright_blue().bold());
    println!();

    let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    if one == 1 {
        println!("  {}", "Connection OK".green().bold());
    }
    println!("  Server: {}", version.bright_black());
    println!();

    Ok(())
}

async fn migrate(pool: &PgPool) -> Result<()> {
    println!("{}", "Applying migrations".bright_blue().bold());

    MIGRATOR
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    println!("  {}", "Done".green().bold());
    Ok(())
}

/// Empties all tables after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Restarts identity sequences, so the next row in each table gets id 1
async fn reset(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Reset database".bright_blue().bold());
    println!();
    println!(
        "{}",
        "  This deletes every user, article and comment."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    sqlx::query("TRUNCATE users, articles, comments RESTART IDENTITY CASCADE")
        .execute(pool)
        .await
        .context("Failed to truncate tables")?;

    println!("  {}", "All tables emptied".green().bold());
    Ok(())
}

/// Displays row counts per table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    for table in ["users", "articles", "comments"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;

        println!(
            "  {:<10} {}",
            table.cyan(),
            count.to_string().bright_white().bold()
        );
    }
    println!();

    Ok(())
}

/// Dispatches user commands through the same service the API uses.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await,
    }
}

async fn delete_user(service: &UserService, id: i64, skip_confirm: bool) -> Result<()> {
    let user = match service.get_user(id).await {
        Ok(user) => user,
        Err(AppError::NotFound(message)) => {
            println!("{}", message.yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  User: {}", user.name.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user with their articles and comments?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "User deleted".green().bold());
    Ok(())
}
