// ── Sweep orchestration ──
//
// login (bounded) -> fetch -> filter -> forget, strictly in sequence.
// A failed login is an outcome, not an error: the run ends with nothing
// sent to the controller. Fetch and forget errors propagate unchanged.

use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::{CoreError, LoginFailure};
use crate::filter::extraneous_macs;
use crate::session::ControllerSession;

/// How a sweep ended.
#[derive(Debug)]
pub enum SweepOutcome {
    /// Login failed; nothing was fetched or forgotten.
    LoginFailed(LoginFailure),
    /// The forget command was accepted.
    Completed {
        /// Number of client records the controller returned.
        known: usize,
        /// MACs sent in the forget command, in controller order.
        forgotten: Vec<String>,
    },
}

/// Run one sweep over `session`.
///
/// Only the login sequence is bounded by `login_timeout`. The session is
/// closed on the login-failure path and after a successful forget.
pub async fn run_sweep<S: ControllerSession + Send + Sync>(
    mut session: S,
    login_timeout: Duration,
) -> Result<SweepOutcome, CoreError> {
    let host = session.host().to_owned();

    let failure = match tokio::time::timeout(login_timeout, session.login()).await {
        Ok(Ok(())) => None,
        Ok(Err(failure)) => Some(failure),
        Err(_elapsed) => Some(LoginFailure::timed_out(login_timeout)),
    };

    if let Some(failure) = failure {
        log_login_failure(&host, &failure);
        error!("Couldn't connect to UniFi controller");
        session.close().await;
        return Ok(SweepOutcome::LoginFailed(failure));
    }

    let clients = session.request_clients().await?;
    let forgotten = extraneous_macs(&clients);

    session.forget(&forgotten).await?;
    info!(count = forgotten.len(), "forget command accepted");

    session.close().await;
    Ok(SweepOutcome::Completed {
        known: clients.len(),
        forgotten,
    })
}

fn log_login_failure(host: &str, failure: &LoginFailure) {
    match failure {
        LoginFailure::LoginRequired { .. } => {
            warn!("Connected to UniFi at {host} but couldn't log in");
        }
        LoginFailure::Unauthorized { .. } => {
            warn!("Connected to UniFi at {host} but not registered");
        }
        LoginFailure::Connection { .. } => {
            error!(%failure, "Error connecting to the UniFi controller at {host}");
        }
        LoginFailure::Unknown { .. } => {
            error!(%failure, "Unknown UniFi communication error occurred");
        }
    }
}
