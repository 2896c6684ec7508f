//! Settings resolution: built-in defaults < TOML settings file < CLI flags.
//!
//! The settings file only tunes the connection. Host and credentials
//! always come from the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use unisweep_core::config::{
    DEFAULT_LOGIN_TIMEOUT, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SITE,
};
use unisweep_core::{ControllerConfig, TlsVerification};

use crate::cli::Cli;
use crate::error::CliError;

/// Connection tuning read from the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub port: u16,
    pub site: String,
    /// PEM file to verify the controller certificate against.
    pub ca_cert: Option<PathBuf>,
    pub login_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            site: DEFAULT_SITE.into(),
            ca_cert: None,
            login_timeout_secs: DEFAULT_LOGIN_TIMEOUT.as_secs(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

/// Canonical settings path, e.g. `~/.config/unisweep/config.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "unisweep", "unisweep").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load settings from `path`, or the canonical location when `path` is `None`.
///
/// An explicit path must exist; the canonical one is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::NoConfig {
                    path: path.display().to_string(),
                });
            }
            figment = figment.merge(Toml::file(path));
        }
        None => {
            if let Some(default) = default_settings_path() {
                tracing::debug!(path = %default.display(), "checking for settings file");
                figment = figment.merge(Toml::file(default));
            }
        }
    }

    Ok(figment.extract()?)
}

/// Combine CLI arguments with loaded settings. CLI flags win.
pub fn resolve(cli: &Cli, settings: Settings) -> Result<ControllerConfig, CliError> {
    if cli.host.trim().is_empty() {
        return Err(CliError::Validation {
            field: "host".into(),
            reason: "must not be empty".into(),
        });
    }
    if settings.login_timeout_secs == 0 {
        return Err(CliError::Validation {
            field: "login_timeout_secs".into(),
            reason: "must be at least 1".into(),
        });
    }

    let tls = match cli.ca_cert.clone().or(settings.ca_cert) {
        Some(path) => TlsVerification::CustomCa(path),
        None => TlsVerification::DangerAcceptInvalid,
    };

    Ok(ControllerConfig {
        host: cli.host.clone(),
        port: cli.port.unwrap_or(settings.port),
        username: cli.username.clone(),
        password: SecretString::from(cli.password.clone()),
        site: cli.site.clone().unwrap_or(settings.site),
        tls,
        request_timeout: Duration::from_secs(settings.request_timeout_secs),
        login_timeout: Duration::from_secs(settings.login_timeout_secs),
    })
}
