//! Sweep logic between `unisweep-api` and the `unisweep` binary.
//!
//! - **[`extraneous_macs`]** — Pure filter that picks the MAC addresses of
//!   client records carrying no identity and no traffic.
//!
//! - **[`ControllerSession`]** — The seam between the sweep and the
//!   controller transport: `login()`, `request_clients()`, `forget()`,
//!   `close()`. [`LegacySession`] implements it over the legacy API.
//!
//! - **[`run_sweep`]** — Login (bounded), fetch, filter, forget. Login
//!   failures are classified into [`LoginFailure`] and end the run quietly;
//!   fetch and forget failures propagate as [`CoreError`].

pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod sweep;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, TlsVerification};
pub use error::{CoreError, LoginFailure};
pub use filter::extraneous_macs;
pub use model::ClientRecord;
pub use session::{ControllerSession, LegacySession};
pub use sweep::{SweepOutcome, run_sweep};
