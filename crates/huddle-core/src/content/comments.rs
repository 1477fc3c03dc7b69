use serde::{Deserialize, Serialize};

use crate::refs::{Comment, Goal, Project, Space};

/// A comment left on another activity's thread (a goal closing, a project
/// retrospective, ...). The thread title names what was commented on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAdded {
  pub comment:      Option<Comment>,
  pub thread_title: Option<String>,
  pub space:        Option<Space>,
  pub goal:         Option<Goal>,
  pub project:      Option<Project>,
}
