mod cli;
mod config;
mod error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unisweep_core::{LegacySession, SweepOutcome, run_sweep};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    // Ctrl-C ends the run quietly; whatever was in flight is dropped.
    tokio::select! {
        result = run(cli) => {
            if let Err(err) = result {
                let code = err.exit_code();
                eprintln!("{:?}", miette::Report::new(err));
                std::process::exit(code);
            }
        }
        _ = tokio::signal::ctrl_c() => {}
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting unisweep");

    let settings = config::load_settings(cli.config.as_deref())?;
    let controller = config::resolve(&cli, settings)?;

    info!(
        host = %controller.host,
        username = %controller.username,
        port = controller.port,
        site = %controller.site,
        "connecting to UniFi controller"
    );

    let login_timeout = controller.login_timeout;
    let session = LegacySession::new(controller);

    match run_sweep(session, login_timeout).await? {
        SweepOutcome::LoginFailed(failure) => {
            tracing::debug!(%failure, "sweep skipped");
        }
        SweepOutcome::Completed { known, forgotten } => {
            info!("Forgot {} of {} known clients", forgotten.len(), known);
        }
    }
    Ok(())
}
