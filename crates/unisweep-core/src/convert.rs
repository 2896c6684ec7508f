// ── API-to-domain type conversions ──
//
// Bridges raw `unisweep_api` response types into `unisweep_core::model`.

use serde_json::Value;
use unisweep_api::LegacyUser;

use crate::model::ClientRecord;

impl From<LegacyUser> for ClientRecord {
    fn from(user: LegacyUser) -> Self {
        let mut extra = user.extra;

        // Only a string MAC can be forgotten; anything else stays in `extra`.
        let mac = match user.mac {
            Some(Value::String(mac)) => Some(mac),
            Some(other) => {
                extra.insert("mac".into(), other);
                None
            }
            None => None,
        };

        Self {
            mac,
            hostname: user.hostname,
            name: user.name,
            fixed_ip: user.fixed_ip,
            tx_bytes: user.tx_bytes,
            rx_bytes: user.rx_bytes,
            extra,
        }
    }
}
