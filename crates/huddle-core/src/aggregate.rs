//! Aggregated activities: several related records shown as one entry.
//!
//! Grouping is decided upstream; this module only models the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  activity::{Activity, ActivityRecord},
  refs::Person,
};

/// The discriminant used on the wire for aggregates.
pub const AGGREGATED_ACTION: &str = "aggregated";

/// An ordered, non-empty run of activities rendered as a single unit.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedActivity {
  author:     Person,
  activities: Vec<Activity>,
}

impl AggregatedActivity {
  pub fn new(author: Person, activities: Vec<Activity>) -> Result<Self> {
    if activities.is_empty() {
      return Err(Error::EmptyAggregate);
    }
    Ok(Self { author, activities })
  }

  pub fn action(&self) -> &'static str { AGGREGATED_ACTION }

  pub fn author(&self) -> &Person { &self.author }

  pub fn activities(&self) -> &[Activity] { &self.activities }

  /// The earliest contained activity; always present.
  pub fn first(&self) -> &Activity { &self.activities[0] }

  /// Timestamp of the most recent contained activity.
  pub fn inserted_at(&self) -> DateTime<Utc> {
    self
      .activities
      .iter()
      .map(|a| a.inserted_at)
      .max()
      .unwrap_or(self.activities[0].inserted_at)
  }
}

// ─── FeedEntry ───────────────────────────────────────────────────────────────

/// What a feed or notification list holds: a single activity or an aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ActivityRecord", into = "ActivityRecord")]
pub enum FeedEntry {
  Single(Activity),
  Aggregated(AggregatedActivity),
}

impl FeedEntry {
  pub fn action(&self) -> &'static str {
    match self {
      Self::Single(a) => a.action(),
      Self::Aggregated(a) => a.action(),
    }
  }

  pub fn author(&self) -> &Person {
    match self {
      Self::Single(a) => &a.author,
      Self::Aggregated(a) => a.author(),
    }
  }

  pub fn inserted_at(&self) -> DateTime<Utc> {
    match self {
      Self::Single(a) => a.inserted_at,
      Self::Aggregated(a) => a.inserted_at(),
    }
  }
}

impl From<Activity> for FeedEntry {
  fn from(activity: Activity) -> Self { Self::Single(activity) }
}

impl From<AggregatedActivity> for FeedEntry {
  fn from(aggregate: AggregatedActivity) -> Self { Self::Aggregated(aggregate) }
}

impl TryFrom<ActivityRecord> for FeedEntry {
  type Error = Error;

  fn try_from(record: ActivityRecord) -> Result<Self> {
    if record.action != AGGREGATED_ACTION {
      return Activity::try_from(record).map(Self::Single);
    }
    let activities = record
      .activities
      .into_iter()
      .map(Activity::try_from)
      .collect::<Result<Vec<_>>>()?;
    AggregatedActivity::new(record.author, activities).map(Self::Aggregated)
  }
}

impl From<FeedEntry> for ActivityRecord {
  fn from(entry: FeedEntry) -> Self {
    match entry {
      FeedEntry::Single(activity) => activity.into(),
      FeedEntry::Aggregated(aggregate) => {
        let inserted_at = aggregate.inserted_at();
        let id = aggregate.first().id.clone();
        ActivityRecord {
          id,
          action: AGGREGATED_ACTION.to_string(),
          author: aggregate.author,
          content: serde_json::Value::Null,
          comment_thread: None,
          notifications: Vec::new(),
          permissions: None,
          inserted_at,
          updated_at: None,
          activities: aggregate
            .activities
            .into_iter()
            .map(ActivityRecord::from)
            .collect(),
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn author() -> serde_json::Value { json!({ "id": "p1", "fullName": "Linus Pauling" }) }

  fn doc_edit(id: &str, name: &str, at: &str) -> serde_json::Value {
    json!({
      "id": id,
      "action": "resource_hub_document_edited",
      "author": author(),
      "content": { "document": { "id": id, "name": name }, "name": name },
      "insertedAt": at,
    })
  }

  #[test]
  fn single_entries_decode_as_single() {
    let entry: FeedEntry =
      serde_json::from_value(doc_edit("d1", "Doc A", "2025-01-01T00:00:00Z")).unwrap();
    assert!(matches!(entry, FeedEntry::Single(_)));
    assert_eq!(entry.action(), "resource_hub_document_edited");
  }

  #[test]
  fn aggregated_entries_collect_their_children() {
    let entry: FeedEntry = serde_json::from_value(json!({
      "action": "aggregated",
      "author": author(),
      "insertedAt": "2025-01-02T00:00:00Z",
      "activities": [
        doc_edit("d1", "Doc A", "2025-01-01T00:00:00Z"),
        doc_edit("d2", "Doc B", "2025-01-03T00:00:00Z"),
      ],
    }))
    .unwrap();

    let FeedEntry::Aggregated(aggregate) = &entry else {
      panic!("expected an aggregate");
    };
    assert_eq!(aggregate.activities().len(), 2);
    assert_eq!(aggregate.first().id, "d1");
    assert_eq!(entry.inserted_at().to_rfc3339(), "2025-01-03T00:00:00+00:00");
  }

  #[test]
  fn empty_aggregates_are_rejected() {
    let err = serde_json::from_value::<FeedEntry>(json!({
      "action": "aggregated",
      "author": author(),
      "insertedAt": "2025-01-02T00:00:00Z",
      "activities": [],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("at least one activity"));
  }
}
