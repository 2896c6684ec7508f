// ── Core error types ──
//
// `CoreError` is what a failed fetch or forget looks like to the binary.
// `LoginFailure` is the classified outcome of a failed login; it never
// escapes `run_sweep` as an error because a failed login ends the run
// without touching the controller.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unisweep_api::Error> for CoreError {
    fn from(err: unisweep_api::Error) -> Self {
        match err {
            unisweep_api::Error::Authentication { message }
            | unisweep_api::Error::Unauthorized { message } => {
                CoreError::AuthenticationFailed { message }
            }
            unisweep_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            unisweep_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            unisweep_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            unisweep_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            unisweep_api::Error::LegacyApi { message } => CoreError::Api {
                message,
                status: None,
            },
            unisweep_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

impl CoreError {
    /// Stamp the request deadline onto a timeout.
    ///
    /// reqwest does not report which limit it hit, so timeouts converted from
    /// a transport error carry `0` until the session fills in its own value.
    pub(crate) fn with_request_timeout(self, limit: Duration) -> Self {
        match self {
            Self::Timeout { .. } => Self::Timeout {
                timeout_secs: limit.as_secs(),
            },
            other => other,
        }
    }
}

// ── Login classification ─────────────────────────────────────────────

/// Why a login attempt did not produce a usable session.
#[derive(Debug, Error)]
pub enum LoginFailure {
    /// The controller rejected the username/password.
    #[error("controller rejected the credentials: {message}")]
    LoginRequired { message: String },

    /// Credentials are valid but the account has no access to the site.
    #[error("account is not authorized for this site: {message}")]
    Unauthorized { message: String },

    /// The controller could not be reached in time.
    #[error("could not reach the controller: {reason}")]
    Connection { reason: String },

    /// Anything else the protocol layer reported.
    #[error("unexpected controller response: {message}")]
    Unknown { message: String },
}

impl LoginFailure {
    /// Sort an API error into one of the four login outcomes.
    pub fn classify(err: &unisweep_api::Error) -> Self {
        if err.is_auth_failure() {
            Self::LoginRequired {
                message: err.to_string(),
            }
        } else if err.is_unauthorized() {
            Self::Unauthorized {
                message: err.to_string(),
            }
        } else if err.is_transient() || matches!(err, unisweep_api::Error::Transport(_)) {
            Self::Connection {
                reason: err.to_string(),
            }
        } else {
            Self::Unknown {
                message: err.to_string(),
            }
        }
    }

    /// The login sequence ran past its deadline.
    pub fn timed_out(limit: Duration) -> Self {
        Self::Connection {
            reason: format!("login did not complete within {}s", limit.as_secs()),
        }
    }
}
