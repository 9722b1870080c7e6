use thiserror::Error;

/// Why a push or pull against the table service failed
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint {0}")]
    Endpoint(String),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode rows: {0}")]
    Decode(#[from] serde_json::Error),
}
