mod commands;
mod logs;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fest_core::catalog::EventFilter;
use fest_core::config::FestConfig;
use fest_core::fest::Fest;

#[derive(Parser)]
#[command(name = "fest")]
#[command(about = "Browse Varnothsava events, register for them and count down to the festival")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events
    Events {
        /// all, external, internal, free, or a category (e.g. "cultural")
        #[arg(short, long, default_value = "all")]
        filter: EventFilter,
    },
    /// Show an event's details
    Show { id: String },
    /// Add an event to your cart
    Add { id: String },
    /// Remove an event from your cart
    Remove { id: String },
    /// Show your cart
    Cart,
    /// Empty your cart
    Clear,
    /// Confirm registration for everything in your cart
    Checkout {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Cancel a confirmed registration
    Unregister { id: String },
    /// Count down to the festival or to one event
    Countdown {
        /// Count down to this event instead of the festival start
        #[arg(short, long)]
        event: Option<String>,

        /// Keep updating every second until Ctrl-C
        #[arg(short, long)]
        watch: bool,

        /// Print the countdown as JSON
        #[arg(long, conflicts_with = "watch")]
        json: bool,
    },
    /// List gallery images
    Gallery {
        /// Read every image once in small batches to warm the cache
        #[arg(long)]
        preload: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Update your name, college or year. Prompts when no flags are given.
    Edit {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        college: Option<String>,

        #[arg(long)]
        year: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut fest = load_fest()?;

    match cli.command {
        Commands::Events { filter } => commands::events::run(&fest, filter),
        Commands::Show { id } => commands::show::run(&mut fest, &id),
        Commands::Add { id } => commands::cart::add(&mut fest, &id),
        Commands::Remove { id } => commands::cart::remove(&mut fest, &id),
        Commands::Cart => commands::cart::list(&fest),
        Commands::Clear => commands::cart::clear(&mut fest),
        Commands::Checkout { yes } => commands::checkout::run(&mut fest, yes),
        Commands::Profile { action } => match action {
            None => commands::profile::show(&fest),
            Some(ProfileAction::Edit {
                name,
                college,
                year,
            }) => commands::profile::edit(&mut fest, name, college, year),
        },
        Commands::Unregister { id } => commands::profile::unregister(&mut fest, &id),
        Commands::Countdown { event, watch, json } => {
            commands::countdown::run(&fest, event.as_deref(), watch, json).await
        }
        Commands::Gallery { preload } => commands::gallery::run(&fest, preload).await,
    }
}

fn load_fest() -> Result<Fest> {
    let config = FestConfig::load().context("Failed to load fest config")?;
    logs::init_logger(&config.log_level).context("Failed to initialize logger")?;

    Ok(Fest::load(config)?)
}
