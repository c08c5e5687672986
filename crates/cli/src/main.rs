//! Linkpage CLI - Profile preview and local client state tools.
//!
//! # Usage
//!
//! ```bash
//! # Render display props from exported payloads
//! lp-cli preview --settings settings.json --links links.json --user me.json
//!
//! # Render display props from the live API
//! lp-cli preview --remote
//!
//! # Work with the persisted cart
//! lp-cli cart add --name "Tote" --image /img/tote.png --color black --price 35000
//! lp-cli cart list
//!
//! # Step through the onboarding draft
//! lp-cli onboarding set email jane@example.com
//! lp-cli onboarding next
//! ```
//!
//! # Commands
//!
//! - `preview` - Build the profile display props
//! - `cart` - Inspect and edit the persisted cart
//! - `template` - Pick a profile template
//! - `onboarding` - Edit the onboarding draft
//! - `auth` - Manage the stored session
//! - `appearance` - Convert editor styles into the backend payload
//!
//! Persisted state lives under `LINKPAGE_STATE_DIR` (default `.linkpage`).

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use linkpage_client::config::ClientConfig;
use linkpage_client::storage::FileStorage;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::onboarding::Field;

#[derive(Parser)]
#[command(name = "lp-cli")]
#[command(author, version, about = "Linkpage CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the profile display props and print them as JSON
    Preview {
        /// Settings payload (JSON file)
        #[arg(long, conflicts_with = "remote")]
        settings: Option<PathBuf>,

        /// Links payload (JSON file)
        #[arg(long, conflicts_with = "remote")]
        links: Option<PathBuf>,

        /// Current user record (JSON file)
        #[arg(long, conflicts_with = "remote")]
        user: Option<PathBuf>,

        /// Fetch every input from the API instead
        #[arg(long)]
        remote: bool,
    },
    /// Inspect and edit the persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Pick a profile template
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Edit the onboarding draft
    Onboarding {
        #[command(subcommand)]
        action: OnboardingAction,
    },
    /// Manage the stored session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Convert editor styles into the backend appearance payload
    Appearance {
        #[command(subcommand)]
        action: AppearanceAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an item
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        image: String,

        #[arg(short, long, default_value = "")]
        color: String,

        /// Unit price, e.g. `35000` or `12.50`
        #[arg(short, long)]
        price: String,
    },
    /// Remove the item at a position (0-based)
    Remove { index: usize },
    /// Remove the item with the given id
    RemoveId { id: String },
    /// Empty the cart
    Clear,
    /// Print the cart and its subtotal
    List,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List the built-in templates
    List,
    /// Select a built-in template by id
    Select { id: String },
    /// Print the selected template
    Show,
    /// Select the default template if none is selected
    Init,
}

#[derive(Subcommand)]
enum OnboardingAction {
    /// Print the draft
    Show,
    /// Advance one step
    Next,
    /// Go back one step
    Prev,
    /// Clear the draft
    Reset,
    /// Set a draft field
    Set { field: Field, value: String },
    /// Select or deselect a platform
    TogglePlatform { id: String, name: String },
    /// Set the URL of a custom link slot (1-3)
    Link { slot: usize, url: String },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Verify a token against the API and store the session
    Login {
        /// Bearer token issued by the backend
        #[arg(short, long)]
        token: String,
    },
    /// Forget the stored session
    Logout,
    /// Print the stored session
    Status,
}

#[derive(Subcommand)]
enum AppearanceAction {
    /// Print the backend payload for the given editor styles
    Export {
        /// `ButtonStyle` JSON file
        #[arg(long)]
        button_style: PathBuf,

        /// `FontStyle` JSON file
        #[arg(long)]
        font_style: PathBuf,

        /// Preview theme string, e.g. `gradient:#FF7E5F:#FEB47B`
        #[arg(long)]
        theme: Option<String>,

        /// Also save the payload through the API
        #[arg(long)]
        push: bool,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let storage = FileStorage::new(&config.state_dir);
    tracing::debug!(?config, "Loaded configuration");
    commands::template::ensure_initialized(&storage);

    match cli.command {
        Commands::Preview {
            settings,
            links,
            user,
            remote,
        } => {
            if remote {
                commands::preview::remote(&config, &storage).await?;
            } else {
                commands::preview::from_files(
                    settings.as_deref(),
                    links.as_deref(),
                    user.as_deref(),
                )?;
            }
        }
        Commands::Cart { action } => match action {
            CartAction::Add {
                name,
                image,
                color,
                price,
            } => commands::cart::add(&storage, name, image, color, &price)?,
            CartAction::Remove { index } => commands::cart::remove(&storage, index)?,
            CartAction::RemoveId { id } => commands::cart::remove_id(&storage, &id)?,
            CartAction::Clear => commands::cart::clear(&storage),
            CartAction::List => commands::cart::list(&storage)?,
        },
        Commands::Template { action } => match action {
            TemplateAction::List => commands::template::list(&storage),
            TemplateAction::Select { id } => commands::template::select(&storage, &id)?,
            TemplateAction::Show => commands::template::show(&storage)?,
            TemplateAction::Init => commands::template::init(&storage),
        },
        Commands::Onboarding { action } => match action {
            OnboardingAction::Show => commands::onboarding::show(&storage)?,
            OnboardingAction::Next => commands::onboarding::next(&storage),
            OnboardingAction::Prev => commands::onboarding::prev(&storage),
            OnboardingAction::Reset => commands::onboarding::reset(&storage),
            OnboardingAction::Set { field, value } => {
                commands::onboarding::set(&storage, field, &value)?;
            }
            OnboardingAction::TogglePlatform { id, name } => {
                commands::onboarding::toggle_platform(&storage, id, name);
            }
            OnboardingAction::Link { slot, url } => {
                commands::onboarding::link(&storage, slot, url)?;
            }
        },
        Commands::Auth { action } => match action {
            AuthAction::Login { token } => commands::auth::login(&config, &storage, token).await?,
            AuthAction::Logout => commands::auth::logout(&storage),
            AuthAction::Status => commands::auth::status(&storage)?,
        },
        Commands::Appearance { action } => match action {
            AppearanceAction::Export {
                button_style,
                font_style,
                theme,
                push,
            } => {
                commands::appearance::export(
                    &config,
                    &storage,
                    &button_style,
                    &font_style,
                    theme.as_deref(),
                    push,
                )
                .await?;
            }
        },
    }
    Ok(())
}
