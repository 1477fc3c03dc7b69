//! Link builders: one pure function per entity kind.
//!
//! Callers check presence first; the `*_or_name` variants cover entities that
//! may have been deleted since the activity was recorded.

use huddle_core::refs::{
  Discussion, Document, Folder, Goal, GoalCheckIn, Milestone, Person, Project,
  ProjectCheckIn, ResourceFile, ResourceHub, ResourceLink, Space, Task,
};

use crate::{
  paths::PathResolver,
  view::{Link, Span},
};

fn link(path: String, label: &str) -> Link {
  Link {
    path,
    label: label.to_string(),
  }
}

pub fn person(paths: &dyn PathResolver, person: &Person) -> Link {
  link(paths.person(&person.id), &person.full_name)
}

pub fn space(paths: &dyn PathResolver, space: &Space) -> Link {
  link(paths.space(&space.id), &space.name)
}

pub fn goal(paths: &dyn PathResolver, goal: &Goal) -> Link {
  link(paths.goal(&goal.id), &goal.name)
}

pub fn project(paths: &dyn PathResolver, project: &Project) -> Link {
  link(paths.project(&project.id), &project.name)
}

pub fn milestone(paths: &dyn PathResolver, milestone: &Milestone) -> Link {
  link(paths.milestone(&milestone.id), &milestone.title)
}

pub fn task(paths: &dyn PathResolver, task: &Task) -> Link {
  link(paths.task(&task.id), &task.name)
}

pub fn resource_hub(paths: &dyn PathResolver, hub: &ResourceHub) -> Link {
  link(paths.resource_hub(&hub.id), &hub.name)
}

pub fn document(paths: &dyn PathResolver, document: &Document) -> Link {
  link(paths.document(&document.id), &document.name)
}

pub fn file(paths: &dyn PathResolver, file: &ResourceFile) -> Link {
  link(paths.file(&file.id), &file.name)
}

pub fn folder(paths: &dyn PathResolver, folder: &Folder) -> Link {
  link(paths.folder(&folder.id), &folder.name)
}

pub fn resource_link(paths: &dyn PathResolver, resource: &ResourceLink) -> Link {
  link(paths.link(&resource.id), &resource.name)
}

pub fn discussion(paths: &dyn PathResolver, discussion: &Discussion) -> Link {
  link(paths.discussion(&discussion.id), &discussion.title)
}

pub fn goal_check_in(paths: &dyn PathResolver, check_in: &GoalCheckIn, label: &str) -> Link {
  link(paths.goal_check_in(&check_in.id), label)
}

pub fn project_check_in(
  paths: &dyn PathResolver,
  check_in: &ProjectCheckIn,
  label: &str,
) -> Link {
  link(paths.project_check_in(&check_in.id), label)
}

// ─── Deleted-entity fallback ─────────────────────────────────────────────────

/// A link when the entity still exists, otherwise its last-known name as text.
pub fn or_name<T>(
  entity: Option<&T>,
  fallback: &str,
  build: impl FnOnce(&T) -> Link,
) -> Span {
  match entity {
    Some(e) => Span::Link { link: build(e) },
    None => {
      tracing::debug!(name = fallback, "referenced entity unavailable, rendering as text");
      Span::Text {
        text: fallback.to_string(),
      }
    }
  }
}

pub fn document_or_name(
  paths: &dyn PathResolver,
  document: Option<&Document>,
  name: &str,
) -> Span {
  or_name(document, name, |d| self::document(paths, d))
}

pub fn goal_or_name(paths: &dyn PathResolver, goal: Option<&Goal>, name: &str) -> Span {
  or_name(goal, name, |g| self::goal(paths, g))
}

pub fn project_or_name(
  paths: &dyn PathResolver,
  project: Option<&Project>,
  name: &str,
) -> Span {
  or_name(project, name, |p| self::project(paths, p))
}

pub fn person_or_name(paths: &dyn PathResolver, person: Option<&Person>, name: &str) -> Span {
  or_name(person, name, |p| self::person(paths, p))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::TestPaths;

  #[test]
  fn goal_link_uses_the_resolver() {
    let g = Goal {
      id:   "g1".into(),
      name: "Q3 Revenue".into(),
    };
    assert_eq!(
      goal(&TestPaths, &g),
      Link {
        path:  "/goals/g1".into(),
        label: "Q3 Revenue".into(),
      }
    );
  }

  #[test]
  fn missing_entity_falls_back_to_text() {
    let span = document_or_name(&TestPaths, None, "Old plan");
    assert_eq!(
      span,
      Span::Text {
        text: "Old plan".into(),
      }
    );
  }
}
