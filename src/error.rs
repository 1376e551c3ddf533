use thiserror::Error;

/// Why a request to the data endpoint did not produce records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {status}")]
    Status { status: u16 },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Top-level error type for the command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("writing {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("reading input: {0}")]
    Input(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
