//! Error types for `huddle-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The action string is outside the supported enumeration.
  #[error("Unknown activity action: {0}")]
  UnknownAction(String),

  #[error("invalid content for {action}: {source}")]
  InvalidContent {
    action: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("aggregated activity must contain at least one activity")]
  EmptyAggregate,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
