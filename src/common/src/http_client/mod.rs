use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{MAX_ERROR_BODY_BYTES, PEASY_SERVER_HEADER, PEASY_SERVER_NAME};
use crate::error::PeasyError;

mod url_builder;

pub use url_builder::join_endpoint;

/// How a response status is treated once a request reached the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Any response counts as delivered. Non-2xx statuses are only logged.
    #[default]
    FireAndForget,
    /// Non-2xx statuses become [`PeasyError::Status`].
    Strict,
}

/// POSTs `payload` as JSON to `base_url` joined with `endpoint`.
///
/// The url is joined and the payload serialized before anything touches the
/// network. Returns the response status. The response is released before
/// returning without reading its body, so hyper closes that connection
/// instead of reusing it.
pub async fn send_json<T>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    payload: &T,
    policy: StatusPolicy,
) -> Result<StatusCode, PeasyError>
where
    T: Serialize + ?Sized,
{
    let url = join_endpoint(base_url, endpoint)?;
    let body = serde_json::to_vec(payload)?;

    debug!(url = %url, bytes = body.len(), "sending payload");

    let response = client
        .post(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .header(PEASY_SERVER_HEADER, PEASY_SERVER_NAME)
        .body(body)
        .send()
        .await
        .map_err(|source| PeasyError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(url = %url, status = %status, "ingest responded");

    if status.is_success() {
        return Ok(status);
    }

    match policy {
        StatusPolicy::FireAndForget => {
            warn!(url = %url, status = %status, "ingest endpoint rejected payload");
            Ok(status)
        }
        StatusPolicy::Strict => {
            let body = read_capped_body(response, MAX_ERROR_BODY_BYTES).await;
            Err(PeasyError::Status {
                url: url.to_string(),
                status,
                body,
            })
        }
    }
}

/// Reads at most `limit` bytes of the body. Invalid utf-8, including a
/// character cut in half at the limit, is replaced rather than rejected.
async fn read_capped_body(mut response: Response, limit: usize) -> String {
    let mut body = Vec::new();

    while body.len() < limit {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(_) if body.is_empty() => return "Unknown error".to_string(),
            Err(_) => break,
        }
    }

    body.truncate(limit);
    String::from_utf8_lossy(&body).into_owned()
}
