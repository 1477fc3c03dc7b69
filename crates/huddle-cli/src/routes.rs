//! URL layout of the huddle web app, scoped to one company.

use huddle_activities::PathResolver;

/// Resolves entity ids to `/{company}/...` paths.
#[derive(Debug, Clone)]
pub struct CompanyRoutes {
  company: String,
}

impl CompanyRoutes {
  pub fn new(company: impl Into<String>) -> Self {
    Self {
      company: company.into(),
    }
  }

  fn path(&self, section: &str, id: &str) -> String {
    format!("/{}/{section}/{id}", self.company)
  }
}

impl PathResolver for CompanyRoutes {
  fn person(&self, id: &str) -> String { self.path("people", id) }

  fn company_admin(&self) -> String { format!("/{}/admin", self.company) }

  fn space(&self, id: &str) -> String { self.path("spaces", id) }

  fn goal(&self, id: &str) -> String { self.path("goals", id) }

  fn project(&self, id: &str) -> String { self.path("projects", id) }

  fn milestone(&self, id: &str) -> String { self.path("milestones", id) }

  fn task(&self, id: &str) -> String { self.path("tasks", id) }

  fn resource_hub(&self, id: &str) -> String { self.path("resource-hubs", id) }

  fn document(&self, id: &str) -> String { self.path("documents", id) }

  fn file(&self, id: &str) -> String { self.path("files", id) }

  fn folder(&self, id: &str) -> String { self.path("folders", id) }

  fn link(&self, id: &str) -> String { self.path("links", id) }

  fn discussion(&self, id: &str) -> String { self.path("discussions", id) }

  fn goal_check_in(&self, id: &str) -> String { self.path("goal-check-ins", id) }

  fn project_check_in(&self, id: &str) -> String { self.path("project-check-ins", id) }

  fn activity(&self, id: &str) -> String { self.path("feed", id) }
}

#[cfg(test)]
mod tests {
  use huddle_activities::{Page, Renderer};
  use huddle_core::Activity;
  use serde_json::json;

  use super::*;

  #[test]
  fn paths_are_scoped_to_the_company() {
    let routes = CompanyRoutes::new("acme");
    assert_eq!(routes.goal("g1"), "/acme/goals/g1");
    assert_eq!(routes.company_admin(), "/acme/admin");
    assert_eq!(routes.activity("a1"), "/acme/feed/a1");
  }

  #[test]
  fn renderer_links_through_company_routes() {
    let activity: Activity = serde_json::from_value(json!({
      "id": "a1",
      "action": "project_renamed",
      "author": { "id": "p1", "fullName": "Grace Hopper" },
      "content": {
        "project": { "id": "pr1", "name": "Apollo" },
        "oldName": "Gemini",
        "newName": "Apollo",
      },
      "insertedAt": "2025-03-01T12:00:00Z",
    }))
    .unwrap();

    let routes = CompanyRoutes::new("acme");
    let title = Renderer::new(&routes)
      .feed_item_title(&activity, Some(Page::Space))
      .unwrap();
    let paths: Vec<_> = title.links().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, ["/acme/projects/pr1"]);
  }
}
