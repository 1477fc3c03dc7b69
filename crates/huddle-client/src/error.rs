//! Error types for `huddle-client`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),

  #[error("{endpoint} failed: {source}")]
  Transport {
    endpoint: String,
    #[source]
    source:   reqwest::Error,
  },

  #[error("{endpoint} → {status}: {body}")]
  Status {
    endpoint: String,
    status:   reqwest::StatusCode,
    body:     String,
  },

  #[error("decoding response of {endpoint}: {source}")]
  Decode {
    endpoint: String,
    #[source]
    source:   serde_json::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
