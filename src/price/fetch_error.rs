use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("price request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("price feed returned http {status}")]
    Status { status: StatusCode },

    #[error("price feed returned an empty body")]
    EmptyBody,

    #[error("price feed returned malformed json: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("price feed response has no entry for `{asset}`")]
    MissingAsset { asset: String },

    #[error("price feed response for `{asset}` is missing `{field}`")]
    MissingField { asset: String, field: &'static str },
}
