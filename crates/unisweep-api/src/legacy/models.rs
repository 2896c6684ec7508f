// Legacy API response types
//
// All responses are wrapped in the `LegacyResponse<T>` envelope. Fields use
// `#[serde(default)]` liberally because the API is inconsistent about field
// presence across firmware versions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// Every legacy endpoint wraps its payload:
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Known user ───────────────────────────────────────────────────────

/// A client known to the controller, from `stat/alluser`.
///
/// Unlike `stat/sta` this includes clients that are not currently
/// connected, so almost every field is optional. Historical entries often
/// carry nothing but a MAC address and a first/last-seen timestamp.
///
/// The fields the sweep inspects are kept as raw JSON. Controllers are loose
/// about their types (`tx_bytes` may arrive as `0.0`), and a key that is
/// present with a `null` value must stay distinguishable from a missing key:
/// missing is `None`, present is `Some`, even when the value is `Value::Null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyUser {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub mac: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub hostname: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub fixed_ip: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tx_bytes: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rx_bytes: Option<Value>,
    /// Catch-all for undocumented fields, `_id` included.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Any value, `null` included, means the key was present.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
