// ── Runtime connection configuration ──
//
// These types describe *how* to connect to a UniFi controller.
// They carry credential data and connection tuning, but never touch disk.
// The binary constructs a `ControllerConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::CoreError;

/// Port of a standalone Network Application.
pub const DEFAULT_PORT: u16 = 8443;

/// Site every controller ships with.
pub const DEFAULT_SITE: &str = "default";

/// Upper bound on platform detection + login + site verification.
pub const DEFAULT_LOGIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request HTTP timeout applied by the transport.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed certs). Default for local controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Configuration for one sweep against a single controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Host name, address, or URL with explicit scheme.
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    /// Site to operate on (defaults to "default").
    pub site: String,
    pub tls: TlsVerification,
    pub request_timeout: Duration,
    pub login_timeout: Duration,
}

impl ControllerConfig {
    /// Config with every tunable at its default.
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password,
            site: DEFAULT_SITE.into(),
            tls: TlsVerification::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            login_timeout: DEFAULT_LOGIN_TIMEOUT,
        }
    }

    /// Controller root URL.
    ///
    /// A bare host gets `https://`; a host that already carries a scheme
    /// keeps it. The configured port always wins.
    pub fn base_url(&self) -> Result<Url, CoreError> {
        let host = self.host.trim().trim_end_matches('/');
        let raw = if host.contains("://") {
            host.to_owned()
        } else if host.contains(':') && !host.starts_with('[') {
            // Bare IPv6 literal.
            format!("https://[{host}]")
        } else {
            format!("https://{host}")
        };

        let mut url = Url::parse(&raw).map_err(|e| CoreError::Config {
            message: format!("invalid controller host '{}': {e}", self.host),
        })?;
        url.set_port(Some(self.port)).map_err(|()| CoreError::Config {
            message: format!("controller host '{}' cannot carry a port", self.host),
        })?;
        Ok(url)
    }
}
