use std::sync::Arc;

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use client::config::{ClientConfig, ConfigError, DEFAULT_API_URL, DEFAULT_BATCH_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS};
use client::controller::Controller;
use client::net::api::HttpApi;
use client::net::error::ApiError;
use client::net::types::Player;
use client::state::dialog::PlayerDraft;
use client::state::leaderboard::LeaderboardState;
use client::util::podium::podium;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    ListFailed(String),
    #[error("no player with id or name `{0}`")]
    UnknownPlayer(String),
    #[error("player name must be non-empty")]
    InvalidPlayer,
    #[error("`{0}` is destructive; pass --yes to confirm")]
    NotConfirmed(&'static str),
    #[error("{0}")]
    ActionFailed(String),
}

#[derive(Parser, Debug)]
#[command(name = "leaderboard-cli", about = "Leaderboard service administration CLI")]
struct Cli {
    #[arg(long, env = "LEADERBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "LEADERBOARD_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every player in rank order.
    List,
    /// Print the top three as second, first, third.
    Podium,
    /// Claim points for a player (id or exact name).
    Claim { player: String },
    /// Add one player.
    Add {
        name: String,
        #[arg(long)]
        points: Option<u64>,
    },
    /// Create randomly named test players concurrently.
    Generate {
        #[arg(
            long,
            env = "LEADERBOARD_BATCH_SIZE",
            default_value_t = DEFAULT_BATCH_SIZE,
            value_parser = clap::value_parser!(u64).range(1..).map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        )]
        count: usize,
    },
    /// Reset every player's points.
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Delete one player (id or exact name).
    Delete {
        player: String,
        #[arg(long)]
        yes: bool,
    },
    /// Delete every player.
    DeleteAll {
        #[arg(long)]
        yes: bool,
    },
}

impl Command {
    /// Destructive commands must carry `--yes`.
    fn confirmation(&self) -> Result<(), CliError> {
        match self {
            Self::Reset { yes: false } => Err(CliError::NotConfirmed("reset")),
            Self::Delete { yes: false, .. } => Err(CliError::NotConfirmed("delete")),
            Self::DeleteAll { yes: false } => Err(CliError::NotConfirmed("delete-all")),
            _ => Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.confirmation()?;

    let config = ClientConfig {
        request_timeout_secs: cli.timeout_secs,
        ..ClientConfig::with_api_url(&cli.api_url)?
    };
    tracing::debug!(api_url = %config.api_url, timeout_secs = config.request_timeout_secs, "connecting");
    let controller = Controller::new(Arc::new(HttpApi::new(&config)?));

    run(&controller, cli.command).await
}

async fn run(controller: &Controller, command: Command) -> Result<(), CliError> {
    match command {
        Command::List => {
            let state = load(controller).await?;
            print_table(&state.list.players);
        }
        Command::Podium => {
            let state = load(controller).await?;
            for slot in podium(&state.list.players) {
                println!("#{} {} ({} pts)", slot.place, slot.player.name, slot.player.points);
            }
        }
        Command::Claim { player } => {
            let state = load(controller).await?;
            let target = resolve_player(&state.list.players, &player)?;
            controller.select_player(&target.id);
            let succeeded = controller.claim_points().await;
            finish(controller, succeeded)?;
        }
        Command::Add { name, points } => {
            let draft = PlayerDraft::new(name, points.map(|p| p.to_string()).unwrap_or_default());
            if draft.to_request().is_none() {
                return Err(CliError::InvalidPlayer);
            }
            controller.open_add_player();
            let succeeded = controller.submit_add_player(&draft).await;
            finish(controller, succeeded)?;
        }
        Command::Generate { count } => {
            let report = controller.generate_players(count).await;
            tracing::info!(created = report.success_count(), requested = report.requested(), "generate finished");
            finish(controller, report.success_count() > 0)?;
        }
        Command::Reset { .. } => {
            controller.open_reset_scores();
            let succeeded = controller.confirm_reset_scores().await;
            finish(controller, succeeded)?;
        }
        Command::Delete { player, .. } => {
            let state = load(controller).await?;
            let target = resolve_player(&state.list.players, &player)?;
            controller.open_delete_player(&target.id);
            let succeeded = controller.confirm_delete_player().await;
            finish(controller, succeeded)?;
        }
        Command::DeleteAll { .. } => {
            controller.open_delete_all_players();
            let succeeded = controller.confirm_delete_all_players().await;
            finish(controller, succeeded)?;
        }
    }
    Ok(())
}

/// Fetch the list and fail if the fetch did.
async fn load(controller: &Controller) -> Result<LeaderboardState, CliError> {
    controller.refresh().await;
    let state = controller.snapshot();
    match &state.list.error {
        Some(message) => Err(CliError::ListFailed(message.clone())),
        None => Ok(state),
    }
}

/// Print the outcome notification, then fail if the closing refresh failed.
fn finish(controller: &Controller, succeeded: bool) -> Result<(), CliError> {
    let state = controller.snapshot();
    println!("{}", outcome(&state, succeeded)?);
    match state.list.error {
        Some(message) => Err(CliError::ListFailed(message)),
        None => Ok(()),
    }
}

/// The notification text, or an error carrying it when the request failed.
fn outcome(state: &LeaderboardState, succeeded: bool) -> Result<String, CliError> {
    let message = state.notification.message().unwrap_or_default().to_owned();
    if succeeded { Ok(message) } else { Err(CliError::ActionFailed(message)) }
}

/// Match an exact id first, then an exact name.
fn resolve_player(players: &[Player], key: &str) -> Result<Player, CliError> {
    players
        .iter()
        .find(|p| p.id == key)
        .or_else(|| players.iter().find(|p| p.name == key))
        .cloned()
        .ok_or_else(|| CliError::UnknownPlayer(key.to_owned()))
}

fn print_table(players: &[Player]) {
    if players.is_empty() {
        println!("No players yet.");
        return;
    }
    let width = players.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);
    println!("{:>4}  {:<width$}  {:>8}  ID", "RANK", "NAME", "POINTS");
    for player in players {
        println!("{:>4}  {:<width$}  {:>8}  {}", player.rank, player.name, player.points, player.id);
    }
}
