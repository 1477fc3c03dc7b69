//! The activity record: one immutable event describing a domain action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  content::{ActionKind, ActivityContent},
  refs::{Person, RichText},
};

// ─── Attachments ─────────────────────────────────────────────────────────────

/// The discussion thread hanging off an activity, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
  pub id:             String,
  pub title:          Option<String>,
  #[serde(default)]
  pub message:        RichText,
  #[serde(default)]
  pub comments_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRef {
  pub id:   String,
  #[serde(default)]
  pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPermissions {
  #[serde(default)]
  pub can_comment_on_thread: bool,
}

// ─── Wire record ─────────────────────────────────────────────────────────────

/// The app-facing (camelCase) JSON shape of an activity or an aggregate.
///
/// `content` stays untyped here; it is narrowed against `action` when the
/// record is converted into an [`Activity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
  #[serde(default)]
  pub id:             String,
  pub action:         String,
  pub author:         Person,
  #[serde(default)]
  pub content:        serde_json::Value,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment_thread: Option<CommentThread>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub notifications:  Vec<NotificationRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub permissions:    Option<ActivityPermissions>,
  pub inserted_at:    DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at:     Option<DateTime<Utc>>,
  /// Only present on aggregates.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub activities:     Vec<ActivityRecord>,
}

// ─── Activity ────────────────────────────────────────────────────────────────

/// A resolved activity. The action discriminant is derived from `content`,
/// so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActivityRecord", into = "ActivityRecord")]
pub struct Activity {
  pub id:             String,
  pub author:         Person,
  pub content:        ActivityContent,
  pub comment_thread: Option<CommentThread>,
  pub notifications:  Vec<NotificationRef>,
  pub permissions:    Option<ActivityPermissions>,
  pub inserted_at:    DateTime<Utc>,
  pub updated_at:     Option<DateTime<Utc>>,
}

impl Activity {
  pub fn kind(&self) -> ActionKind { self.content.kind() }

  /// The wire discriminant, e.g. `"project_renamed"`.
  pub fn action(&self) -> &'static str { self.content.action() }
}

impl TryFrom<ActivityRecord> for Activity {
  type Error = Error;

  fn try_from(record: ActivityRecord) -> Result<Self> {
    let kind = ActionKind::lookup(&record.action)?;
    let content = ActivityContent::from_parts(kind, record.content)?;
    Ok(Self {
      id: record.id,
      author: record.author,
      content,
      comment_thread: record.comment_thread,
      notifications: record.notifications,
      permissions: record.permissions,
      inserted_at: record.inserted_at,
      updated_at: record.updated_at,
    })
  }
}

impl From<Activity> for ActivityRecord {
  fn from(activity: Activity) -> Self {
    let content = activity
      .content
      .to_json()
      .unwrap_or(serde_json::Value::Null);
    Self {
      id: activity.id,
      action: activity.content.action().to_string(),
      author: activity.author,
      content,
      comment_thread: activity.comment_thread,
      notifications: activity.notifications,
      permissions: activity.permissions,
      inserted_at: activity.inserted_at,
      updated_at: activity.updated_at,
      activities: Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::content::ActivityContent;

  fn record_json(action: &str, content: serde_json::Value) -> serde_json::Value {
    json!({
      "id": "a1",
      "action": action,
      "author": { "id": "p1", "fullName": "Grace Hopper" },
      "content": content,
      "commentThread": { "id": "t1", "title": null, "commentsCount": 3 },
      "insertedAt": "2025-03-01T12:00:00Z",
    })
  }

  #[test]
  fn decodes_a_known_action() {
    let activity: Activity = serde_json::from_value(record_json(
      "goal_closing",
      json!({
        "goal": { "id": "g1", "name": "Q3 Revenue" },
        "successStatus": "achieved",
      }),
    ))
    .unwrap();

    assert_eq!(activity.action(), "goal_closing");
    assert_eq!(activity.author.first_name(), "Grace");
    assert_eq!(activity.comment_thread.as_ref().unwrap().comments_count, 3);
    assert!(matches!(activity.content, ActivityContent::GoalClosing(_)));
  }

  #[test]
  fn rejects_an_unknown_action() {
    let err = serde_json::from_value::<Activity>(record_json("not_a_real_action", json!({})))
      .unwrap_err();
    assert!(
      err
        .to_string()
        .contains("Unknown activity action: not_a_real_action")
    );
  }

  #[test]
  fn missing_content_is_treated_as_empty() {
    let activity: Activity =
      serde_json::from_value(record_json("project_pausing", serde_json::Value::Null)).unwrap();
    let ActivityContent::ProjectPausing(p) = activity.content else {
      panic!("wrong variant");
    };
    assert!(p.project.is_none());
  }

  #[test]
  fn record_round_trip_keeps_action_and_content() {
    let original: Activity = serde_json::from_value(record_json(
      "space_joining",
      json!({ "space": { "id": "s1", "name": "Ops" } }),
    ))
    .unwrap();

    let record = ActivityRecord::from(original.clone());
    assert_eq!(record.action, "space_joining");
    assert_eq!(Activity::try_from(record).unwrap(), original);
  }
}
