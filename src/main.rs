//! LingoQuest - Language Learning Core
//!
//! Command-line entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::{Cli, Command, Context};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting LingoQuest v{}", env!("CARGO_PKG_VERSION"));

    let mut ctx = Context::open(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Status) {
        Command::Status => cli::profile::status(&mut ctx),
        Command::Languages => cli::profile::languages(&mut ctx),
        Command::Select { code } => cli::profile::select(&mut ctx, &code),
        Command::Goals => cli::profile::goals(&mut ctx),
        Command::Achievements => cli::profile::achievements(&mut ctx),
        Command::Leagues => cli::profile::leagues(&mut ctx),
        Command::Prefs(prefs) => cli::profile::prefs(&mut ctx, prefs),
        Command::Onboard {
            name,
            avatar,
            native,
        } => cli::profile::onboard(&mut ctx, &name, avatar.as_deref(), native.as_deref()),
        Command::Register {
            email,
            password,
            name,
            username,
            avatar,
        } => cli::account::register(&mut ctx, email, password, name, username, avatar),
        Command::Login { email, password } => cli::account::login(&mut ctx, &email, &password),
        Command::Logout => cli::account::logout(&mut ctx),
        Command::Start { difficulty } => cli::lesson::start(&mut ctx, false, difficulty).await,
        Command::Practice { difficulty } => cli::lesson::start(&mut ctx, true, difficulty).await,
        Command::Drill { group } => cli::lesson::drill(&mut ctx, group.as_deref()).await,
        Command::Complete(result) => cli::lesson::complete(&mut ctx, result),
        Command::Download { count } => cli::lesson::download(&mut ctx, count).await,
    }
}
