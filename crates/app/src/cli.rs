use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "parley")]
#[command(version)]
#[command(about = "Terminal client for Parley chat rooms")]
pub struct Args {
    /// Config file (defaults to the platform config dir's parley.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Server base URL for the HTTP API
    #[arg(long)]
    pub server: Option<String>,

    /// Socket address (host:port) for live events
    #[arg(long)]
    pub socket: Option<String>,

    /// Room to enter before connecting
    #[arg(long)]
    pub room: Option<String>,

    /// Session cookie of a logged-in browser session
    #[arg(long)]
    pub cookie: Option<String>,

    /// Never raise notifications
    #[arg(long)]
    pub quiet: bool,
}
