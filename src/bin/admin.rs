//! CLI administration tool for shortly.
//!
//! Works directly against the Redis store, without going through the HTTP
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link add https://example.com
//!
//! # List every link, newest first
//! cargo run --bin admin -- link list
//!
//! # Show a link with its click count
//! cargo run --bin admin -- link show 1b
//!
//! # Register a user
//! cargo run --bin admin -- user add alice
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL`, or `REDIS_HOST` / `REDIS_PORT` / `REDIS_PASSWORD` / `REDIS_DB`
//! - `BASE_URL` (optional): printed in front of short identifiers
//! - `BCRYPT_COST` (optional): password hashing cost for `user add`

use shortly::application::services::{ClickService, LinkService, UserService};
use shortly::config::{Config, check_bcrypt_cost, mask_connection_string};
use shortly::domain::store::KeyValueStore;
use shortly::infrastructure::store::RedisStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;

/// CLI tool for managing shortly.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL (returns the existing id if already shortened)
    Add {
        /// Absolute http(s) URL
        url: String,
    },

    /// List all links
    List,

    /// Show a link and its click count
    Show {
        /// Short identifier
        short_id: String,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Register a user, replacing any existing user with the same name
    Add {
        /// Username (prompted if omitted)
        username: Option<String>,

        /// Email address (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let redis_url = Config::load_redis_url();
    let store = Arc::new(
        RedisStore::connect(&redis_url)
            .await
            .with_context(|| format!("Failed to connect to {}", mask_connection_string(&redis_url)))?,
    );

    match cli.command {
        Commands::Link { action } => handle_link_action(action, store).await?,
        Commands::User { action } => handle_user_action(action, store).await?,
        Commands::Stats => handle_stats(store).await?,
        Commands::Store { action } => handle_store_action(action, store, &redis_url).await?,
    }

    Ok(())
}

fn base_url() -> String {
    std::env::var("BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, store: Arc<RedisStore>) -> Result<()> {
    let service = LinkService::new(store);

    match action {
        LinkAction::Add { url } => {
            let short_id = service
                .shorten(&url)
                .await
                .context("Failed to shorten URL")?;

            println!("{}", "✅ Short link ready".green().bold());
            println!("  Id:     {}", short_id.bright_yellow().bold());
            println!("  Short:  {}/{}", base_url(), short_id.cyan());
            println!("  Target: {}", url.bright_white());
        }
        LinkAction::List => list_links(&service).await?,
        LinkAction::Show { short_id } => {
            let details = service
                .details(&short_id)
                .await
                .with_context(|| format!("Failed to load link '{}'", short_id))?;

            println!("{}", "🔗 Short Link".bright_blue().bold());
            println!();
            println!("  Id:     {}", details.short_id.bright_yellow().bold());
            println!("  Short:  {}/{}", base_url(), details.short_id.cyan());
            println!("  Target: {}", details.long_url.bright_white());
            println!("  Host:   {}", details.hostname().bright_black());
            println!(
                "  Clicks: {}",
                details.click_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Lists all links, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   Id     Host                       Target
///   ──────────────────────────────────────────────────────────────
///   2      example.org                https://example.org/b
///   1      example.com                https://example.com/a
/// ```
async fn list_links(service: &LinkService<RedisStore>) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = service
        .list_all()
        .await
        .context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Create one with: {} admin link add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {:<26} {}",
        "Id".bright_white().bold(),
        "Host".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<6} {:<26} {}",
            link.short_id.bright_yellow(),
            link.hostname().cyan(),
            link.long_url.bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, store: Arc<RedisStore>) -> Result<()> {
    let bcrypt_cost = Config::load_bcrypt_cost()?;
    check_bcrypt_cost(bcrypt_cost)?;

    let service = UserService::with_cost(store, bcrypt_cost);

    match action {
        UserAction::Add {
            username,
            email,
            yes,
        } => add_user(&service, username, email, yes).await,
    }
}

/// Registers a user with interactive prompts.
///
/// The password is always prompted, never taken from the command line.
/// Registering an existing username replaces the stored password and email.
async fn add_user(
    service: &UserService<RedisStore>,
    username: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Register User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    shortly::application::services::user_service::validate_username(&username)
        .context("Invalid username")?;

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if !skip_confirm {
        if service
            .authenticate(&username)
            .await
            .context("Failed to look up user")?
            .is_some()
        {
            println!(
                "{}",
                format!("⚠️  User '{}' exists and will be replaced", username).yellow()
            );
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Register '{}'?", username))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .sign_up(&username, &email, &password)
        .await
        .context("Failed to register user")?;

    println!();
    println!("{}", "✅ User registered".green().bold());
    println!();

    Ok(())
}

/// Displays store statistics.
///
/// Shows:
/// - Number of allocated short links
/// - Total clicks across all links
async fn handle_stats(store: Arc<RedisStore>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = LinkService::new(store.clone());
    let clicks = ClickService::new(store);

    let link_count = links
        .link_count()
        .await
        .context("Failed to read link counter")?;

    let mut click_total: u64 = 0;
    for link in links
        .list_all()
        .await
        .context("Failed to list links")?
    {
        click_total += clicks
            .get(&link.short_id)
            .await
            .with_context(|| format!("Failed to read clicks of '{}'", link.short_id))?;
    }

    println!(
        "  Links:  {}",
        link_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        click_total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(
    action: StoreAction,
    store: Arc<RedisStore>,
    redis_url: &str,
) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());
            println!("  {}", mask_connection_string(redis_url).bright_black());

            store.ping().await?;

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
