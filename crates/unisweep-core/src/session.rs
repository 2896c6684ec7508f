// ── Controller session ──
//
// The sweep talks to the controller only through `ControllerSession`.
// `LegacySession` is the real thing: cookie login against the legacy API.

use std::future::Future;

use secrecy::SecretString;
use tracing::{debug, info};

use unisweep_api::transport::{TlsMode, TransportConfig};
use unisweep_api::LegacyClient;

use crate::config::{ControllerConfig, TlsVerification};
use crate::error::{CoreError, LoginFailure};
use crate::model::ClientRecord;

/// One authenticated conversation with a controller.
pub trait ControllerSession {
    /// Controller address, for log messages.
    fn host(&self) -> &str;

    /// Authenticate and confirm the account can use the configured site.
    fn login(&mut self) -> impl Future<Output = Result<(), LoginFailure>> + Send;

    /// Every client the controller knows about, active or historical.
    fn request_clients(&self) -> impl Future<Output = Result<Vec<ClientRecord>, CoreError>> + Send;

    /// Forget all `macs` with a single command. An empty slice is still sent.
    fn forget(&self, macs: &[String]) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// End the session. Never fails; problems are only logged.
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// [`ControllerSession`] over the legacy cookie-authenticated API.
pub struct LegacySession {
    config: ControllerConfig,
    client: Option<LegacyClient>,
}

impl LegacySession {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    fn transport(&self) -> TransportConfig {
        let tls = match &self.config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.config.request_timeout,
            cookie_jar: None,
        }
        .with_cookie_jar()
    }

    fn client(&self) -> Result<&LegacyClient, CoreError> {
        self.client
            .as_ref()
            .ok_or_else(|| CoreError::Internal("controller session is not logged in".into()))
    }

    fn password(&self) -> &SecretString {
        &self.config.password
    }

    fn request_error(&self, err: unisweep_api::Error) -> CoreError {
        CoreError::from(err).with_request_timeout(self.config.request_timeout)
    }
}

impl ControllerSession for LegacySession {
    fn host(&self) -> &str {
        &self.config.host
    }

    async fn login(&mut self) -> Result<(), LoginFailure> {
        let base_url = self.config.base_url().map_err(|e| LoginFailure::Unknown {
            message: e.to_string(),
        })?;
        let http = self
            .transport()
            .build_client()
            .map_err(|e| LoginFailure::classify(&e))?;

        let platform = LegacyClient::detect_platform(&http, &base_url)
            .await
            .map_err(|e| LoginFailure::classify(&e))?;
        debug!(?platform, "controller platform detected");

        let client = LegacyClient::with_client(http, base_url, self.config.site.clone(), platform);
        client
            .login(&self.config.username, self.password())
            .await
            .map_err(|e| LoginFailure::classify(&e))?;

        // Keep the client before verifying so close() can log out.
        let client = self.client.insert(client);
        client
            .verify_site_access()
            .await
            .map_err(|e| LoginFailure::classify(&e))?;

        info!(site = %self.config.site, "logged in to UniFi controller");
        Ok(())
    }

    async fn request_clients(&self) -> Result<Vec<ClientRecord>, CoreError> {
        let users = self
            .client()?
            .list_all_users()
            .await
            .map_err(|e| self.request_error(e))?;
        Ok(users.into_iter().map(ClientRecord::from).collect())
    }

    async fn forget(&self, macs: &[String]) -> Result<(), CoreError> {
        self.client()?
            .forget_clients(macs)
            .await
            .map_err(|e| self.request_error(e))?;
        Ok(())
    }

    async fn close(self) {
        let Some(client) = self.client else {
            debug!("closing session that never logged in");
            return;
        };
        if let Err(e) = client.logout().await {
            debug!(error = %e, "logout failed");
        }
    }
}
