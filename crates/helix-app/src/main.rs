use clap::Parser;
use tracing_subscriber::EnvFilter;

use helix_app::cli::Cli;
use helix_app::{app, HostError};

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    app::run(config)
}
