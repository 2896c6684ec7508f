use thiserror::Error;

/// Top-level error type for the `unisweep-api` crate.
///
/// Covers every failure mode of the legacy API surface: authentication,
/// authorization, transport, and envelope decoding. `unisweep-core` maps
/// these into login classifications and user-facing errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (wrong credentials, session expired, etc.)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Credentials were accepted but the account may not use this site.
    #[error("Not authorized: {message}")]
    Unauthorized { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Legacy API ──────────────────────────────────────────────────
    /// Error from the legacy API (parsed from the `{meta: {rc, msg}}` envelope).
    #[error("Legacy API error: {message}")]
    LegacyApi { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the controller rejected the credentials themselves.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Returns `true` if the credentials were valid but lack site access.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns `true` if this is a connectivity problem rather than a
    /// protocol-level rejection.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Timeout { .. } | Self::Tls(_) => true,
            _ => false,
        }
    }

    /// Map a legacy `meta.msg` error code onto the matching variant.
    ///
    /// The controller reports auth problems inside an otherwise normal
    /// envelope, so these codes must be lifted out of `LegacyApi`.
    pub(crate) fn from_legacy_code(message: String) -> Self {
        match message.as_str() {
            "api.err.LoginRequired" => Self::Authentication { message },
            "api.err.Invalid" | "api.err.NoPermission" | "api.err.NoSiteContext" => {
                Self::Unauthorized { message }
            }
            _ => Self::LegacyApi { message },
        }
    }
}
