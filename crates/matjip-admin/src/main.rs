//! matjip-admin entry point
//!
//! Run with:
//! ```bash
//! cargo run -p matjip-admin -- seed
//! cargo run -p matjip-admin -- rank-tags
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use clap::Parser;
use matjip_admin::Cli;
use matjip_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration before tracing so the log format follows APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => fail(&AppError::from(e)),
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_app(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.app.env, command = ?cli.command, "Starting matjip-admin");

    if let Err(e) = matjip_admin::run(cli.command, &config).await {
        error!(code = e.error_code(), error = ?e, "Command failed");
        fail(&e);
    }
}

fn fail(err: &AppError) -> ! {
    eprintln!("{}", matjip_admin::error_body(err));
    std::process::exit(matjip_admin::exit_code(err));
}
