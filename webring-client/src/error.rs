use thiserror::Error;
use webring_core::RingError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    BadStatus { url: String, status: u16 },

    #[error("Could not parse the directory body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Both directory endpoints failed (primary: {primary}, fallback: {fallback})")]
    DirectoryUnavailable {
        primary: Box<ClientError>,
        fallback: Box<ClientError>,
    },

    #[error("Home marker carries no site UUID")]
    MissingUuid,

    #[error(transparent)]
    Ring(#[from] RingError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
