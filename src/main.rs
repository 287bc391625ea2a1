mod cli;

use cli::Cli;
use node_config::AppConfig;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_args(env::args_os());

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!(config = %cli.config.display(), error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    info!(
        config = %cli.config.display(),
        namespace = %config.network.namespace,
        topics = ?config.network.topics,
        max_peers = config.network.max_peers,
        port = config.network.port,
        "Config loaded"
    );

    ExitCode::SUCCESS
}
