use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use peasy_common::constants::{EVENT_ENDPOINT, PROFILE_ENDPOINT};
use peasy_common::http_client::send_json;
use peasy_common::PeasyError;

use crate::config_manager::Config;
use crate::events::{EventPayload, ProfilePayload, Properties};

/// Sends events and profiles for one website.
///
/// The configuration is fixed at construction, so a client can be cloned and
/// shared across tasks freely. Clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PeasyClient {
    config: Config,
    http: Client,
}

impl PeasyClient {
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Uses a caller-built `reqwest::Client`, e.g. one with a timeout or a
    /// proxy configured.
    pub fn with_http_client(config: Config, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Records `event_name` for `profile_id`.
    ///
    /// The profile should already have been created with
    /// [`set_profile`](Self::set_profile); the server drops events for unknown
    /// profiles, which is not visible here unless the client runs with
    /// [`StatusPolicy::Strict`](crate::StatusPolicy).
    pub async fn record_event(
        &self,
        event_name: &str,
        profile_id: &str,
        metadata: &Properties,
    ) -> Result<(), PeasyError> {
        let payload = EventPayload {
            website_id: &self.config.website_id,
            name: event_name,
            profile_id,
            metadata,
        };

        debug!(event = event_name, profile_id, "recording event");
        self.send(EVENT_ENDPOINT, &payload).await
    }

    /// Sets the attributes of `profile_id`.
    pub async fn set_profile(
        &self,
        profile_id: &str,
        profile: &Properties,
    ) -> Result<(), PeasyError> {
        let payload = ProfilePayload {
            profile_id,
            profile,
            website_id: &self.config.website_id,
        };

        debug!(profile_id, "setting profile");
        self.send(PROFILE_ENDPOINT, &payload).await
    }

    async fn send<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<(), PeasyError> {
        send_json(
            &self.http,
            &self.config.ingest_url,
            endpoint,
            payload,
            self.config.status_policy,
        )
        .await?;

        Ok(())
    }
}
