use thiserror::Error;

/// Failures raised by a [`WikiClient`](crate::client::WikiClient) implementation.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Client error: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum WikiError {
    #[error(
        "failed to get content from page {page_id}{}: {source}",
        .parent_id.as_ref().map(|p| format!(", child of {p}")).unwrap_or_default()
    )]
    Fetch {
        page_id: String,
        parent_id: Option<String>,
        source: ClientError,
    },

    #[error("failed to retrieve list of child pages for page {page_id}: {source}")]
    ListChildren { page_id: String, source: ClientError },

    #[error(
        "failed to create new page {title:?}{}: {source}",
        .parent_id.as_ref().map(|p| format!(" under {p}")).unwrap_or_default()
    )]
    Create {
        title: String,
        parent_id: Option<String>,
        source: ClientError,
    },

    #[error("failed to delete page {page_id}: {source}")]
    Delete { page_id: String, source: ClientError },

    #[error(
        "destination page space key ({found}) and destination space key ({expected}) do not match"
    )]
    DestinationMismatch { found: String, expected: String },

    #[error("{0}")]
    Config(String),

    #[error("failed to load config: {0}")]
    ConfigLoad(#[from] confique::Error),
}

impl WikiError {
    /// True for failures raised while reading the source tree.
    pub fn is_fetch(&self) -> bool {
        matches!(self, WikiError::Fetch { .. } | WikiError::ListChildren { .. })
    }
}

pub type Result<T> = std::result::Result<T, WikiError>;
