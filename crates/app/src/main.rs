//! Parley - terminal chat client
//!
//! Connects to a Parley server, shows the active room's messages live and
//! sends what you type. Plain lines are sent as messages; `/room`, `/reply`,
//! `/edit`, `/delete`, `/toggle`, `/away`, `/back` and `/quit` cover the rest.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod network;
mod notify;
mod render;
mod state;
mod viewmodel;

use cli::Args;
use config::ClientConfig;
use error::Result;
use network::SessionEnd;
use notify::TerminalNotifier;
use parley_net::ApiClient;
use render::TerminalRenderer;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they do not interleave with the chat view
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("Parley exited with an error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ClientConfig::from_args(&args)?;
    info!(server = %config.server_url, socket = %config.socket_addr, "Starting Parley");

    let api = ApiClient::new(&config.api_config())?;
    if let Some(room) = &args.room {
        api.enter_room(room).await?;
    }

    let mut input = spawn_input_reader();
    let mut renderer = TerminalRenderer::default();
    let mut notifier = TerminalNotifier::new(config.notifications);

    loop {
        match network::run_session(&config, &api, &mut input, &mut renderer, &mut notifier).await? {
            SessionEnd::Navigate(room_code) => api.enter_room(&room_code).await?,
            SessionEnd::Quit => {
                info!("Goodbye");
                return Ok(());
            }
            SessionEnd::Disconnected => {
                warn!("Server closed the connection");
                return Ok(());
            }
        }
    }
}

/// Forward stdin lines to a channel until stdin closes
fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(32);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    break;
                }
            }
        }
    });
    rx
}
