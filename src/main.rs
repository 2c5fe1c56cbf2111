mod commands;
mod config;
mod provider;
mod store;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};

use annum_core::Layout;

#[derive(Parser)]
#[command(name = "annum")]
#[command(about = "Plan your year: events across horizontal, vertical and cyclic calendar layouts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the year in one of the three layouts
    Show {
        /// Year to render (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Layout override: horizontal, vertical or cyclic
        #[arg(short, long)]
        layout: Option<CliLayout>,

        /// Only render events in these categories (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },
    /// Create a new local event
    Add {
        /// Event title
        title: String,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD), defaults to the start date
        #[arg(short, long)]
        end: Option<String>,

        /// Category id (see `annum categories`)
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List stored events
    List {
        /// Only events touching this year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Remove an event by id
    Remove {
        /// Event id (as shown by `annum list`)
        id: String,
    },
    /// List categories
    Categories,
    /// Authenticate with an import provider
    Auth {
        /// Provider to authenticate with (e.g., "gcal")
        provider: String,
    },
    /// Import events from the configured provider
    Pull {
        /// Year to import (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Provider override (defaults to the [import] config section)
        #[arg(short, long)]
        provider: Option<String>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliLayout {
    Horizontal,
    Vertical,
    Cyclic,
}

impl From<CliLayout> for Layout {
    fn from(layout: CliLayout) -> Self {
        match layout {
            CliLayout::Horizontal => Layout::Horizontal,
            CliLayout::Vertical => Layout::Vertical,
            CliLayout::Cyclic => Layout::Cyclic,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    match cli.command {
        Commands::Show {
            year,
            layout,
            categories,
        } => commands::cmd_show(&config, year, layout.map(Into::into), categories),
        Commands::Add {
            title,
            start,
            end,
            category,
            notes,
        } => commands::cmd_add(&config, title, start, end, category, notes),
        Commands::List { year } => commands::cmd_list(&config, year),
        Commands::Remove { id } => commands::cmd_remove(&config, id),
        Commands::Categories => commands::cmd_categories(&config),
        Commands::Auth { provider } => commands::cmd_auth(&provider).await,
        Commands::Pull { year, provider } => commands::cmd_pull(&config, year, provider).await,
    }
}
