use std::env;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use matchday::config::ClientConfig;
use matchday::display::{render_board, render_standings};
use matchday::screen::{LeagueSource, MatchesSource, Screen, ViewState};
use matchday::{ordering, MatchdayClient};

#[derive(Parser)]
#[command(name = "matchday", about = "Match schedules and league standings in the terminal")]
struct Cli {
    /// API base url; overrides MATCHDAY_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds; overrides MATCHDAY_TIMEOUT_SECS.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Live and other matches.
    Matches,
    /// Current league standings followed by its matches.
    League,
    /// Dump an ordered payload as JSON.
    Json {
        #[arg(value_enum)]
        resource: Resource,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Resource {
    Matches,
    Leagues,
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let timeout = match cli.timeout_secs {
        Some(0) => bail!("--timeout-secs must be positive"),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };
    ClientConfig::resolve(cli.api_url.as_deref(), timeout).context("invalid API configuration")
}

/// Print the screen's data, or its error.
fn show<T>(state: ViewState<T>, render: impl Fn(&T) -> String) -> anyhow::Result<()> {
    match state {
        ViewState::Loaded(data) => {
            print!("{}", render(&data));
            Ok(())
        }
        ViewState::Failed {
            message,
            data_error,
            ..
        } => {
            if data_error {
                bail!("the server sent data that could not be read: {message}")
            }
            bail!("could not reach the server: {message}")
        }
        ViewState::Loading => bail!("no data loaded"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(base_url = %config.base_url, timeout = ?config.timeout, "starting");
    let client = MatchdayClient::new(config)?;

    match cli.command {
        Command::Matches => {
            let screen = Screen::new(MatchesSource::new(client));
            screen.load().await;
            show(screen.state().await, |board| render_board(board, &Local))?;
        }
        Command::League => {
            let league = Screen::new(LeagueSource::new(client.clone()));
            let matches = Screen::new(MatchesSource::new(client));
            tokio::join!(league.load(), matches.load());
            show(league.state().await, render_standings)?;
            println!();
            show(matches.state().await, |board| render_board(board, &Local))?;
        }
        Command::Json { resource } => {
            let json = match resource {
                Resource::Matches => serde_json::to_string_pretty(&client.fetch_matches().await?)?,
                Resource::Leagues => {
                    let leagues: Vec<_> = client
                        .get_leagues()
                        .await?
                        .into_iter()
                        .map(|mut league| {
                            league.teams = ordering::sort_standings(league.teams);
                            league
                        })
                        .collect();
                    serde_json::to_string_pretty(&leagues)?
                }
            };
            println!("{json}");
        }
    }
    Ok(())
}
