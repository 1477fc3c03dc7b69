//! Entity references carried inside activity payloads.
//!
//! A reference is a resolved snapshot (id plus display name) of the entity as
//! it looked when the activity was fetched. The entity itself may since have
//! been deleted, in which case payloads carry `None` and a last-known name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Rich text ───────────────────────────────────────────────────────────────

/// A stored rich-text document. Opaque to this workspace: it is handed to the
/// rich-content renderer untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub serde_json::Value);

impl RichText {
  /// Null, blank, `{}`, or a document whose `content` list is empty.
  pub fn is_empty(&self) -> bool {
    match &self.0 {
      serde_json::Value::Null => true,
      serde_json::Value::String(s) => s.trim().is_empty(),
      serde_json::Value::Object(map) => match map.get("content") {
        Some(serde_json::Value::Array(nodes)) => nodes.is_empty(),
        _ => map.is_empty(),
      },
      _ => false,
    }
  }
}

// ─── People and containers ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:         String,
  pub full_name:  String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title:      Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
}

impl Person {
  /// The first whitespace-separated token of the full name.
  pub fn first_name(&self) -> &str {
    self
      .full_name
      .split_whitespace()
      .next()
      .unwrap_or(&self.full_name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
  pub id:    String,
  pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
  pub id:   String,
  pub name: String,
}

// ─── Resource hub entries ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHub {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFile {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
  pub id:   String,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
  pub id:   String,
  pub name: String,
  pub url:  String,
}

// ─── Conversations ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
  pub id:    String,
  pub title: String,
  #[serde(default)]
  pub body:  RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
  pub id:      String,
  #[serde(default)]
  pub content: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCheckIn {
  pub id:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:  Option<ProjectHealth>,
  #[serde(default)]
  pub message: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCheckIn {
  pub id:          String,
  pub status:      ProjectHealth,
  #[serde(default)]
  pub description: RichText,
}

/// A titled external link attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResource {
  pub title: String,
  pub link:  String,
}

// ─── Statuses ────────────────────────────────────────────────────────────────

/// Outcome recorded when a goal or project is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessStatus {
  Achieved,
  Missed,
}

impl SuccessStatus {
  pub fn label(self) -> &'static str {
    match self {
      Self::Achieved => "achieved",
      Self::Missed => "missed",
    }
  }
}

/// Self-reported health on a goal or project check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHealth {
  OnTrack,
  Caution,
  #[serde(alias = "off_track")]
  Issue,
}

impl ProjectHealth {
  pub fn label(self) -> &'static str {
    match self {
      Self::OnTrack => "on track",
      Self::Caution => "caution",
      Self::Issue => "issue",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
  Todo,
  InProgress,
  Done,
  Canceled,
}

impl TaskStatus {
  pub fn label(self) -> &'static str {
    match self {
      Self::Todo => "not started",
      Self::InProgress => "in progress",
      Self::Done => "done",
      Self::Canceled => "canceled",
    }
  }
}

/// Access level granted to a member of a company or space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
  NoAccess,
  View,
  Comment,
  Edit,
  Full,
}

impl AccessLevel {
  pub fn label(self) -> &'static str {
    match self {
      Self::NoAccess => "No access",
      Self::View => "Can view",
      Self::Comment => "Can comment",
      Self::Edit => "Can edit",
      Self::Full => "Full access",
    }
  }
}

/// One member's access change in a permissions edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAccess {
  pub person:                Person,
  pub previous_access_level: AccessLevel,
  pub updated_access_level:  AccessLevel,
}

/// A closed date range a goal is expected to be worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
  pub start_date: NaiveDate,
  pub end_date:   NaiveDate,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_name_is_first_token() {
    let person = Person {
      id:         "p1".into(),
      full_name:  "Ada  Lovelace King".into(),
      title:      None,
      avatar_url: None,
    };
    assert_eq!(person.first_name(), "Ada");
  }

  #[test]
  fn first_name_of_blank_name_is_blank() {
    let person = Person {
      id:         "p1".into(),
      full_name:  String::new(),
      title:      None,
      avatar_url: None,
    };
    assert_eq!(person.first_name(), "");
  }

  #[test]
  fn rich_text_emptiness() {
    assert!(RichText::default().is_empty());
    assert!(RichText(serde_json::json!("  ")).is_empty());
    assert!(!RichText(serde_json::json!({ "type": "doc" })).is_empty());
    assert!(RichText(serde_json::json!({ "type": "doc", "content": [] })).is_empty());
    assert!(
      !RichText(serde_json::json!({
        "type": "doc",
        "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Hi" }] }],
      }))
      .is_empty()
    );
  }

  #[test]
  fn check_in_health_accepts_issue() {
    let check_in: ProjectCheckIn =
      serde_json::from_value(serde_json::json!({ "id": "ci1", "status": "issue" })).unwrap();
    assert_eq!(check_in.status, ProjectHealth::Issue);
    assert_eq!(check_in.status.label(), "issue");

    let legacy: GoalCheckIn =
      serde_json::from_value(serde_json::json!({ "id": "ci2", "status": "off_track" })).unwrap();
    assert_eq!(legacy.status, Some(ProjectHealth::Issue));
  }
}
