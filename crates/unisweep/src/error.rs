//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use unisweep_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}: {reason}")]
    #[diagnostic(
        code(unisweep::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Standalone controllers listen on 8443; UniFi OS consoles on 443 (--port 443)."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Session rejected by the controller: {message}")]
    #[diagnostic(
        code(unisweep::session_rejected),
        help("The session was lost after login. Run again; nothing was forgotten by the failed step.")
    )]
    SessionRejected { message: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(unisweep::timeout),
        help("Raise request_timeout_secs in the settings file or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller API error: {message}")]
    #[diagnostic(code(unisweep::api_error))]
    ApiError { message: String },

    #[error("Internal error: {0}")]
    #[diagnostic(code(unisweep::internal))]
    Internal(String),

    // ── Validation / configuration ───────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unisweep::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid controller address: {message}")]
    #[diagnostic(
        code(unisweep::invalid_address),
        help("Check the host, --port and --site values.")
    )]
    InvalidAddress { message: String },

    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(unisweep::no_config),
        help("Check the --config path, or drop the flag to use built-in defaults.")
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(unisweep::config))]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::SessionRejected { .. } => exit_code::AUTH,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::InvalidAddress { .. }
            | Self::NoConfig { .. }
            | Self::Config(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::AuthenticationFailed { message } => CliError::SessionRejected { message },
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::Api { message, .. } => CliError::ApiError { message },
            CoreError::Config { message } => CliError::InvalidAddress { message },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}
