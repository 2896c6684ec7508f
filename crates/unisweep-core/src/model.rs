// ── Client record ──
//
// One entry of the controller's known-client table, reduced to the fields
// that decide whether the entry is worth keeping.

use serde_json::Value;

/// A client the controller remembers, identified by MAC address.
///
/// The identity fields and traffic counters hold the controller's raw JSON.
/// `None` means the key was absent; `Some(Value::Null)` means it was present
/// with a `null` value, which counts as present. Fields not modelled here are
/// kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientRecord {
    pub mac: Option<String>,
    pub hostname: Option<Value>,
    pub name: Option<Value>,
    pub fixed_ip: Option<Value>,
    /// Bytes transmitted.
    pub tx_bytes: Option<Value>,
    /// Bytes received.
    pub rx_bytes: Option<Value>,
    pub extra: serde_json::Map<String, Value>,
}

impl ClientRecord {
    /// A record that only carries a MAC address.
    pub fn with_mac(mac: impl Into<String>) -> Self {
        Self {
            mac: Some(mac.into()),
            ..Self::default()
        }
    }
}
