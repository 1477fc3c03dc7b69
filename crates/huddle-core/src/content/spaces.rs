use serde::{Deserialize, Serialize};

use crate::refs::{MemberAccess, Person, Space};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceAdded {
  pub space: Option<Space>,
}

/// A space was renamed and/or had its mission rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEditing {
  pub space:           Option<Space>,
  pub old_name:        String,
  pub new_name:        String,
  #[serde(default)]
  pub mission_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceJoining {
  pub space: Option<Space>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMembersAdded {
  pub space:   Option<Space>,
  #[serde(default)]
  pub members: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMemberRemoved {
  pub space:       Option<Space>,
  pub member:      Option<Person>,
  pub member_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMembersPermissionsEditing {
  pub space:   Option<Space>,
  #[serde(default)]
  pub members: Vec<MemberAccess>,
}
