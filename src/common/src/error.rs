use reqwest::StatusCode;

/// Everything that can go wrong between building a payload and handing it to
/// the ingest endpoint.
///
/// Remote-side rejections only show up as [`PeasyError::Status`], and only
/// when the client runs with [`StatusPolicy::Strict`](crate::http_client::StatusPolicy).
#[derive(Debug, thiserror::Error)]
pub enum PeasyError {
    #[error("invalid ingest url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("ingest url {url:?} contains a control character")]
    UrlControlCharacter { url: String },

    #[error("ingest url {url:?} cannot carry a path")]
    UrlCannotBeABase { url: String },

    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to send request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("ingest endpoint {url} responded with {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl PeasyError {
    pub fn is_url_error(&self) -> bool {
        matches!(
            self,
            Self::Url { .. } | Self::UrlControlCharacter { .. } | Self::UrlCannotBeABase { .. }
        )
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
