//! The path-resolution boundary and the page-context tag.

use serde::{Deserialize, Serialize};

/// Which resource's own page the renderer is currently inside.
///
/// Used to drop location phrasing that would only repeat the page the reader
/// is already looking at.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
  strum::EnumString, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Page {
  Company,
  Space,
  Goal,
  Project,
  Profile,
}

/// Maps entity ids to URL paths. Supplied by the routing layer; the renderer
/// never constructs a path itself.
pub trait PathResolver {
  fn person(&self, id: &str) -> String;
  fn company_admin(&self) -> String;
  fn space(&self, id: &str) -> String;
  fn goal(&self, id: &str) -> String;
  fn project(&self, id: &str) -> String;
  fn milestone(&self, id: &str) -> String;
  fn task(&self, id: &str) -> String;
  fn resource_hub(&self, id: &str) -> String;
  fn document(&self, id: &str) -> String;
  fn file(&self, id: &str) -> String;
  fn folder(&self, id: &str) -> String;
  fn link(&self, id: &str) -> String;
  fn discussion(&self, id: &str) -> String;
  fn goal_check_in(&self, id: &str) -> String;
  fn project_check_in(&self, id: &str) -> String;
  /// The standalone page of an activity (closings, goal discussions, ...).
  fn activity(&self, id: &str) -> String;
}
