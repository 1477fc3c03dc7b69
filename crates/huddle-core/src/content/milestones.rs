use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::refs::{Comment, Milestone, Project, RichText};

/// What the author did alongside a milestone comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneCommentAction {
  #[default]
  #[serde(rename = "none")]
  Plain,
  Complete,
  Reopen,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMilestoneCommented {
  pub project:        Option<Project>,
  pub milestone:      Option<Milestone>,
  pub comment:        Option<Comment>,
  #[serde(default)]
  pub comment_action: MilestoneCommentAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneTitleUpdating {
  pub project:   Option<Project>,
  pub milestone: Option<Milestone>,
  pub old_title: String,
  pub new_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDueDateUpdating {
  pub project:      Option<Project>,
  pub milestone:    Option<Milestone>,
  pub old_due_date: Option<NaiveDate>,
  pub new_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDescriptionUpdating {
  pub project:     Option<Project>,
  pub milestone:   Option<Milestone>,
  #[serde(default)]
  pub description: RichText,
}
