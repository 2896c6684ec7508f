// unisweep-api: Async Rust client for the UniFi controller legacy API
//
// Covers the session login flow, platform detection, and the two endpoints
// the sweep needs: `stat/alluser` and `cmd/stamgr`.

pub mod auth;
pub mod error;
pub mod legacy;
pub mod transport;

pub use auth::ControllerPlatform;
pub use error::Error;
pub use legacy::LegacyClient;
pub use legacy::models::LegacyUser;
pub use transport::{TlsMode, TransportConfig};
