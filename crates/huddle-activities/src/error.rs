//! Error types for the activity renderer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Decoding or dispatch failed in `huddle-core` (unknown action, bad
  /// payload, empty aggregate).
  #[error(transparent)]
  Core(#[from] huddle_core::Error),

  /// The operation does not exist for this kind of activity. Always a bug at
  /// the call site.
  #[error("{operation} is not implemented for {action}")]
  NotImplemented {
    action:    &'static str,
    operation: &'static str,
  },

  /// A reference the action always carries was absent.
  #[error("{action}: missing required field `{field}`")]
  MissingField {
    action: &'static str,
    field:  &'static str,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
