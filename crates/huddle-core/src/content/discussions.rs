use serde::{Deserialize, Serialize};

use crate::refs::{Comment, Discussion, Space};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionPosting {
  pub space:      Option<Space>,
  pub discussion: Option<Discussion>,
  /// Title at posting time; survives deletion of the discussion.
  pub title:      String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionEditing {
  pub space:      Option<Space>,
  pub discussion: Option<Discussion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionCommentSubmitted {
  pub space:      Option<Space>,
  pub discussion: Option<Discussion>,
  pub comment:    Option<Comment>,
  pub title:      String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageArchiving {
  pub space: Option<Space>,
  pub title: String,
}
