// Legacy API known-user endpoints
//
// The full client history via stat/alluser and bulk forgetting via
// cmd/stamgr.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Error;
use crate::legacy::client::LegacyClient;
use crate::legacy::models::LegacyUser;

/// Body of a `cmd/stamgr` forget request.
#[derive(Debug, Serialize)]
struct ForgetStations<'a> {
    cmd: &'static str,
    macs: &'a [String],
}

impl LegacyClient {
    /// List every client the controller knows about, connected or not.
    ///
    /// `GET /api/s/{site}/stat/alluser`
    ///
    /// Entries are decoded one by one; an entry that is not a JSON object is
    /// logged and skipped rather than failing the whole listing.
    pub async fn list_all_users(&self) -> Result<Vec<LegacyUser>, Error> {
        let url = self.site_url("stat/alluser")?;
        debug!("listing all known clients");
        let raw: Vec<serde_json::Value> = self.get(url).await?;

        let users = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(index, error = %e, "skipping undecodable known-client entry");
                    None
                }
            })
            .collect();
        Ok(users)
    }

    /// Forget (permanently remove) a batch of clients in one command.
    ///
    /// `POST /api/s/{site}/cmd/stamgr` with `{"cmd": "forget-sta", "macs": [...]}`.
    /// An empty `macs` list is sent as-is.
    pub async fn forget_clients(&self, macs: &[String]) -> Result<(), Error> {
        let url = self.site_url("cmd/stamgr")?;
        debug!(count = macs.len(), "forgetting clients");
        let _: Vec<serde_json::Value> = self
            .post(
                url,
                &ForgetStations {
                    cmd: "forget-sta",
                    macs,
                },
            )
            .await?;
        Ok(())
    }
}
