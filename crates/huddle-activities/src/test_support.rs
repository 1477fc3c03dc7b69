//! Fixtures shared by the unit tests.

use huddle_core::{
  ActionKind, Activity, ActivityContent, AggregatedActivity,
  activity::CommentThread,
  refs::Person,
};
use serde_json::{Value, json};

use crate::paths::PathResolver;

/// Flat, predictable paths: `/goals/<id>`, `/people/<id>`, ...
pub struct TestPaths;

impl PathResolver for TestPaths {
  fn person(&self, id: &str) -> String { format!("/people/{id}") }

  fn company_admin(&self) -> String { "/admin".to_string() }

  fn space(&self, id: &str) -> String { format!("/spaces/{id}") }

  fn goal(&self, id: &str) -> String { format!("/goals/{id}") }

  fn project(&self, id: &str) -> String { format!("/projects/{id}") }

  fn milestone(&self, id: &str) -> String { format!("/milestones/{id}") }

  fn task(&self, id: &str) -> String { format!("/tasks/{id}") }

  fn resource_hub(&self, id: &str) -> String { format!("/resource-hubs/{id}") }

  fn document(&self, id: &str) -> String { format!("/documents/{id}") }

  fn file(&self, id: &str) -> String { format!("/files/{id}") }

  fn folder(&self, id: &str) -> String { format!("/folders/{id}") }

  fn link(&self, id: &str) -> String { format!("/links/{id}") }

  fn discussion(&self, id: &str) -> String { format!("/discussions/{id}") }

  fn goal_check_in(&self, id: &str) -> String { format!("/goal-check-ins/{id}") }

  fn project_check_in(&self, id: &str) -> String { format!("/project-check-ins/{id}") }

  fn activity(&self, id: &str) -> String { format!("/activities/{id}") }
}

pub fn grace() -> Person {
  Person {
    id:         "p1".into(),
    full_name:  "Grace Hopper".into(),
    title:      None,
    avatar_url: None,
  }
}

/// An activity by Grace with the given payload.
pub fn activity(kind: ActionKind, content: Value) -> Activity {
  Activity {
    id:             "a1".into(),
    author:         grace(),
    content:        ActivityContent::from_parts(kind, content).unwrap(),
    comment_thread: None,
    notifications:  Vec::new(),
    permissions:    None,
    inserted_at:    "2025-03-01T12:00:00Z".parse().unwrap(),
    updated_at:     None,
  }
}

/// Attach a comment thread with `count` comments.
pub fn with_comments(mut activity: Activity, count: u32) -> Activity {
  activity.comment_thread = Some(CommentThread {
    id:             "t1".into(),
    title:          None,
    message:        Default::default(),
    comments_count: count,
  });
  activity
}

pub fn aggregate(activities: Vec<Activity>) -> AggregatedActivity {
  AggregatedActivity::new(grace(), activities).unwrap()
}

/// A payload that satisfies every action's shape: each required field and
/// each reference any handler asks for. Unknown keys are ignored on decode.
pub fn full_payload() -> Value {
  let person = |id: &str, name: &str| json!({ "id": id, "fullName": name });
  json!({
    "company":       { "id": "c1", "name": "Acme" },
    "space":         { "id": "s1", "name": "Ops" },
    "oldSpace":      { "id": "s0", "name": "Marketing" },
    "newSpace":      { "id": "s1", "name": "Ops" },
    "goal":          { "id": "g1", "name": "Q3 Revenue" },
    "project":       { "id": "pr1", "name": "Apollo" },
    "milestone":     { "id": "m1", "title": "Beta" },
    "task":          { "id": "t1", "name": "Ship it" },
    "resourceHub":   { "id": "h1", "name": "Docs" },
    "document":      { "id": "d1", "name": "Plan" },
    "file":          { "id": "f1", "name": "deck.pdf" },
    "folder":        { "id": "fo1", "name": "Specs" },
    "link":          { "id": "l1", "name": "Dashboard", "url": "https://example.com" },
    "discussion":    { "id": "di1", "title": "Kickoff" },
    "checkIn":       { "id": "ci1", "status": "on_track" },
    "comment":       { "id": "co1", "content": { "type": "doc", "content": [] } },
    "person":        person("p2", "Ada Lovelace"),
    "member":        person("p2", "Ada Lovelace"),
    "newChampion":   person("p2", "Ada Lovelace"),
    "newReviewer":   person("p3", "Alan Turing"),
    "newAssignee":   person("p2", "Ada Lovelace"),
    "files":         [{ "id": "f1", "name": "deck.pdf" }],
    "resource":      { "title": "Repo", "link": "https://example.com/repo" },
    "message":       { "type": "doc", "content": [] },
    "successStatus": "achieved",
    "oldStatus":     "todo",
    "newStatus":     "done",
    "newDueDate":    "2025-06-30",
    "name":          "Plan",
    "oldName":       "Old",
    "newName":       "New",
    "oldTitle":      "Alpha",
    "newTitle":      "Beta",
    "title":         "Kickoff",
    "goalName":      "Q3 Revenue",
    "projectName":   "Apollo",
    "personName":    "Ada Lovelace",
    "memberName":    "Ada Lovelace",
    "taskName":      "Ship it",
    "targetName":    "Revenue > 1M",
    "previousName":  "Old dashboard",
  })
}
