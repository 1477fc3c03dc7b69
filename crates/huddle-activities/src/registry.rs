//! The dispatch table: action string → handler.
//!
//! Generated from [`huddle_core::for_each_action!`], so every supported
//! action has exactly one arm and the compiler rejects a row whose payload
//! lacks an [`ActivityHandler`] impl.

use huddle_core::{ActionKind, ActivityContent};
use serde::Serialize;

use crate::{Result, contract::ActivityHandler};

/// Resolve an action string against the supported enumeration.
pub fn resolve(action: &str) -> Result<ActionKind> {
  ActionKind::lookup(action).map_err(|e| {
    tracing::warn!(action, "activity action is not in the display allow-list");
    e.into()
  })
}

macro_rules! dispatch_table {
  ($($variant:ident => $action:literal),* $(,)?) => {
    /// The handler for a payload. Total over [`ActivityContent`].
    pub fn handler(content: &ActivityContent) -> &dyn ActivityHandler {
      match content {
        $(ActivityContent::$variant(payload) => payload as &dyn ActivityHandler,)*
      }
    }
  };
}

huddle_core::for_each_action!(dispatch_table);

/// Which optional capabilities a payload's handler carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
  pub page:     bool,
  pub comments: bool,
}

pub fn capabilities(content: &ActivityContent) -> Capabilities {
  let handler = handler(content);
  Capabilities {
    page:     handler.page().is_some(),
    comments: handler.comments().is_some(),
  }
}
