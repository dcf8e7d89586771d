use std::io::IsTerminal;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use koleo_board::Error;
use koleo_board::board::{ConfigureOutcome, configure, load_board};
use koleo_board::clock::SystemClock;
use koleo_board::domain::CarrierRegistry;
use koleo_board::format::DEFAULT_LIMIT;
use koleo_board::koleo::{KoleoClient, KoleoConfig};
use koleo_board::picker::TerminalPrompter;
use koleo_board::preferences::{self, PreferenceStore};
use koleo_board::render::{Surface, render};
use koleo_board::web::{AppState, create_router};

/// Next rail connections between two saved stations, both ways.
#[derive(Parser)]
#[command(name = "koleo-board", version)]
struct Cli {
    /// File holding the saved station pair
    #[arg(long, global = true, env = "KOLEO_BOARD_PREFERENCES", default_value = preferences::DEFAULT_PATH)]
    preferences: PathBuf,

    /// Journey API base URL
    #[arg(long, global = true, env = "KOLEO_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true, env = "KOLEO_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Choose the departure and arrival stations
    Configure,

    /// Print the board once
    Show {
        #[arg(long, value_enum, default_value_t = Surface::Text)]
        format: Surface,

        /// Connections shown per direction
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Disable ANSI colors in text output
        #[arg(long)]
        no_color: bool,
    },

    /// Serve the board over HTTP, refreshed on every request
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Connections shown per direction
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Seconds between automatic page reloads (0 disables)
        #[arg(long, default_value_t = 300)]
        refresh_secs: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("koleo_board=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    let mut config = KoleoConfig::new();
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(secs);
    }
    let client = KoleoClient::new(config).map_err(Error::Client)?;
    let store = PreferenceStore::new(cli.preferences);

    match cli.command {
        Command::Configure => {
            let mut prompter = TerminalPrompter::stdio();
            match configure(&client, &mut prompter, &store).await? {
                ConfigureOutcome::Saved(pref) => println!(
                    "Saved {} - {} to {}",
                    pref.departure_station.name,
                    pref.arrival_station.name,
                    store.path().display()
                ),
                ConfigureOutcome::Cancelled => println!("Cancelled; nothing saved."),
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Show {
            format,
            limit,
            no_color,
        } => {
            let registry = CarrierRegistry::koleo();
            let board = load_board(&client, &registry, &SystemClock, &store, limit).await?;

            let color = !no_color && std::io::stdout().is_terminal();
            print!("{}", render(format, board.views(), color)?);

            Ok(if board.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }

        Command::Serve {
            addr,
            limit,
            refresh_secs,
        } => {
            let state = AppState::new(
                client,
                CarrierRegistry::koleo(),
                store,
                SystemClock,
                limit,
                refresh_secs,
            );
            let app = create_router(state);

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(Error::Serve)?;
            info!(%addr, "serving board");
            println!("Koleo board listening on http://{addr}");

            axum::serve(listener, app).await.map_err(Error::Serve)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
