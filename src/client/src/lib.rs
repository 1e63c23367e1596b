//! Client for the Peasy ingest API.
//!
//! ```no_run
//! use peasy_client::config_manager::Config;
//! use peasy_client::events::properties;
//! use peasy_client::PeasyClient;
//!
//! # async fn run() -> Result<(), peasy_client::PeasyError> {
//! let client = PeasyClient::new(Config::new("site_1"));
//!
//! client
//!     .set_profile("user123", &properties([("email", "john@peasy.so")]))
//!     .await?;
//! client
//!     .record_event("user_signup", "user123", &properties([("plan", "premium")]))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Delivery is fire-and-forget by default: once the server answers, the call
//! succeeds whatever the status code. Use [`StatusPolicy::Strict`] to get
//! non-2xx responses back as errors.

pub mod config_manager;
pub mod events;

pub mod peasy_client;

pub use peasy_client::PeasyClient;
pub use peasy_common::http_client::StatusPolicy;
pub use peasy_common::PeasyError;
