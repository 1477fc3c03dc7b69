use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::refs::{Milestone, Person, Project, RichText, Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAdding {
  pub project:   Option<Project>,
  pub milestone: Option<Milestone>,
  pub task:      Option<Task>,
  pub task_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNameEditing {
  pub project:  Option<Project>,
  pub task:     Option<Task>,
  pub old_name: String,
  pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdating {
  pub project:    Option<Project>,
  pub task:       Option<Task>,
  pub old_status: TaskStatus,
  pub new_status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssigneeUpdating {
  pub project:      Option<Project>,
  pub task:         Option<Task>,
  pub old_assignee: Option<Person>,
  pub new_assignee: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDueDateUpdating {
  pub project:      Option<Project>,
  pub task:         Option<Task>,
  pub old_due_date: Option<NaiveDate>,
  pub new_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptionChange {
  pub project:     Option<Project>,
  pub task:        Option<Task>,
  #[serde(default)]
  pub description: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDeleting {
  pub project:   Option<Project>,
  pub task_name: String,
}
