//! CLI - argument parsing and shared command context.

pub mod account;
pub mod lesson;
pub mod profile;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};

use lingoquest::profile::types::Difficulty;
use lingoquest::storage::config::{self, AppConfig};
use lingoquest::{Database, ProfileStore};

/// LingoQuest command-line learner
#[derive(Parser)]
#[command(name = "lingoquest")]
#[command(about = "LingoQuest - AI-generated language lessons with streaks, goals and achievements")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to config.toml in the data directory)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show profile, energy, streak and current language
    Status,

    /// List supported languages
    Languages,

    /// Switch the current language
    Select {
        /// Language code, e.g. "es" or "ja"
        code: String,
    },

    /// Show today's goals
    Goals,

    /// Show unlocked and locked achievements
    Achievements,

    /// Show the league tiers
    Leagues,

    /// Show or change preferences
    Prefs(PrefsArgs),

    /// Set name, avatar and native language
    Onboard {
        name: String,
        #[arg(long)]
        avatar: Option<String>,
        /// Native language code
        #[arg(long)]
        native: Option<String>,
    },

    /// Create an account from the current guest progress
    Register {
        email: String,
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Sign into an account
    Login { email: String, password: String },

    /// Sign out and return to the guest profile
    Logout,

    /// Take a lesson in the current language (costs one energy)
    Start {
        /// Used when auto difficulty is off
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Review weak areas (free, does not count as a lesson)
    Practice {
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },

    /// Drill the writing system of the current language
    Drill {
        /// Character group id; lists groups when omitted
        group: Option<String>,
    },

    /// Record a lesson taken elsewhere (costs one energy unless practice)
    Complete(CompleteArgs),

    /// Save lessons for offline use
    Download {
        #[arg(long, default_value_t = 2)]
        count: u32,
    },
}

#[derive(Args)]
pub struct PrefsArgs {
    #[arg(long)]
    pub auto_difficulty: Option<bool>,
    #[arg(long)]
    pub streak_freeze: Option<bool>,
    #[arg(long)]
    pub sound_effects: Option<bool>,
    #[arg(long)]
    pub show_characters: Option<bool>,
    #[arg(long)]
    pub daily_goal_xp: Option<u32>,
    /// Questions per lesson
    #[arg(long)]
    pub lesson_duration: Option<u32>,
    #[arg(long)]
    pub dark_mode: Option<bool>,
}

#[derive(Args)]
pub struct CompleteArgs {
    /// Language code; defaults to the current language
    #[arg(long)]
    pub lang: Option<String>,
    #[arg(long)]
    pub total: u32,
    #[arg(long)]
    pub correct: u32,
    /// Topic answered incorrectly (repeatable)
    #[arg(long = "weak")]
    pub weak: Vec<String>,
    /// Topic answered correctly (repeatable)
    #[arg(long = "strong")]
    pub strong: Vec<String>,
    #[arg(long)]
    pub practice: bool,
}

/// Loaded configuration and profile store.
pub struct Context {
    pub config: AppConfig,
    pub store: ProfileStore<Database>,
}

impl Context {
    pub fn open(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::load_config_from(path),
            None => config::load_config(),
        }
        .context("Failed to load configuration")?;

        let db_path = config.database_path();
        tracing::debug!("Opening database at {}", db_path.display());
        let db = Database::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

        let store = ProfileStore::new(db, config.energy);
        Ok(Self { config, store })
    }
}
