use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::refs::{
  Comment, Discussion, Goal, KeyResource, Person, Project, ProjectCheckIn,
  RichText, Space, SuccessStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreated {
  pub project:  Option<Project>,
  pub space:    Option<Space>,
  pub champion: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArchived {
  pub project:      Option<Project>,
  pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectClosed {
  pub project:        Option<Project>,
  pub success_status: Option<SuccessStatus>,
  #[serde(default)]
  pub retrospective:  RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPausing {
  pub project: Option<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResuming {
  pub project: Option<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRenamed {
  pub project:  Option<Project>,
  pub old_name: String,
  pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMoved {
  pub project:   Option<Project>,
  pub old_space: Option<Space>,
  pub new_space: Option<Space>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptionChanged {
  pub project:     Option<Project>,
  #[serde(default)]
  pub description: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGoalConnection {
  pub project: Option<Project>,
  pub goal:    Option<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGoalDisconnection {
  pub project: Option<Project>,
  pub goal:    Option<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimelineEdited {
  pub project:        Option<Project>,
  pub old_start_date: Option<NaiveDate>,
  pub new_start_date: Option<NaiveDate>,
  pub old_end_date:   Option<NaiveDate>,
  pub new_end_date:   Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDueDateUpdating {
  pub project:      Option<Project>,
  pub old_due_date: Option<NaiveDate>,
  pub new_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChampionUpdating {
  pub project:      Option<Project>,
  pub old_champion: Option<Person>,
  pub new_champion: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReviewerUpdating {
  pub project:      Option<Project>,
  pub old_reviewer: Option<Person>,
  pub new_reviewer: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContributorAddition {
  pub project:        Option<Project>,
  pub person:         Option<Person>,
  pub responsibility: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContributorEdited {
  pub project:                 Option<Project>,
  pub person:                  Option<Person>,
  pub previous_responsibility: Option<String>,
  pub updated_responsibility:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContributorRemoved {
  pub project:     Option<Project>,
  pub person:      Option<Person>,
  pub person_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheckInSubmitted {
  pub project:  Option<Project>,
  pub check_in: Option<ProjectCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheckInEdit {
  pub project:  Option<Project>,
  pub check_in: Option<ProjectCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheckInAcknowledged {
  pub project:  Option<Project>,
  pub check_in: Option<ProjectCheckIn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCheckInCommented {
  pub project:  Option<Project>,
  pub check_in: Option<ProjectCheckIn>,
  pub comment:  Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDiscussionSubmitted {
  pub project:    Option<Project>,
  pub discussion: Option<Discussion>,
  pub title:      String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKeyResourceAdded {
  pub project:  Option<Project>,
  pub resource: KeyResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKeyResourceDeleted {
  pub project: Option<Project>,
  pub title:   String,
}
