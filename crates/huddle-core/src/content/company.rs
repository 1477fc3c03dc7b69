use serde::{Deserialize, Serialize};

use crate::refs::{Company, MemberAccess, Person};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAdding {
  pub company: Option<Company>,
  pub name:    String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEditing {
  pub company:  Option<Company>,
  pub old_name: String,
  pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMemberAdded {
  pub person: Option<Person>,
  /// Last-known name, used when the person record is gone.
  pub name:   String,
  pub title:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMemberRemoved {
  pub person: Option<Person>,
  pub name:   String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyMembersPermissionsEditing {
  #[serde(default)]
  pub members: Vec<MemberAccess>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOwnersAdding {
  #[serde(default)]
  pub people: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOwnerRemoving {
  pub person: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInvited {
  pub person: Option<Person>,
  pub name:   String,
}
