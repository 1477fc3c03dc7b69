use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::refs::{
  Comment, Goal, GoalCheckIn, Person, RichText, Space, SuccessStatus, Timeframe,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreated {
  pub goal:        Option<Goal>,
  pub space:       Option<Space>,
  pub parent_goal: Option<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalArchived {
  pub goal:      Option<Goal>,
  pub goal_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalClosing {
  pub goal:           Option<Goal>,
  pub success_status: SuccessStatus,
  #[serde(default)]
  pub message:        RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalReopening {
  pub goal:    Option<Goal>,
  #[serde(default)]
  pub message: RichText,
}

/// A multi-field edit of a goal. Only the fields that actually differ are
/// shown when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEditing {
  pub goal:          Option<Goal>,
  pub old_name:      String,
  pub new_name:      String,
  pub old_champion:  Option<Person>,
  pub new_champion:  Option<Person>,
  pub old_reviewer:  Option<Person>,
  pub new_reviewer:  Option<Person>,
  pub old_timeframe: Option<Timeframe>,
  pub new_timeframe: Option<Timeframe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalNameUpdating {
  pub goal:     Option<Goal>,
  pub old_name: String,
  pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDescriptionChanged {
  pub goal:        Option<Goal>,
  #[serde(default)]
  pub description: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDueDateUpdating {
  pub goal:         Option<Goal>,
  pub old_due_date: Option<NaiveDate>,
  pub new_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalChampionUpdating {
  pub goal:         Option<Goal>,
  pub old_champion: Option<Person>,
  pub new_champion: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalReviewerUpdating {
  pub goal:         Option<Goal>,
  pub old_reviewer: Option<Person>,
  pub new_reviewer: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalReparent {
  pub goal:            Option<Goal>,
  pub old_parent_goal: Option<Goal>,
  pub new_parent_goal: Option<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSpaceUpdating {
  pub goal:      Option<Goal>,
  pub old_space: Option<Space>,
  pub new_space: Option<Space>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTargetAdding {
  pub goal:        Option<Goal>,
  pub target_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTargetDeleting {
  pub goal:        Option<Goal>,
  pub target_name: String,
}

/// `goal_check_in`: a progress update was submitted for a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckInSubmitted {
  pub goal:     Option<Goal>,
  pub check_in: Option<GoalCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckInEdit {
  pub goal:     Option<Goal>,
  pub check_in: Option<GoalCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckInAcknowledgement {
  pub goal:     Option<Goal>,
  pub check_in: Option<GoalCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCheckInCommented {
  pub goal:     Option<Goal>,
  pub check_in: Option<GoalCheckIn>,
  pub comment:  Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDiscussionCreation {
  pub goal:    Option<Goal>,
  pub title:   String,
  #[serde(default)]
  pub message: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDiscussionEditing {
  pub goal:  Option<Goal>,
  pub title: String,
}
