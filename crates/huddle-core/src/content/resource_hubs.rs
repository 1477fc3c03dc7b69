use serde::{Deserialize, Serialize};

use crate::refs::{
  Comment, Document, Folder, ResourceFile, ResourceHub, ResourceLink, Space,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubDocumentCreated {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub document:     Option<Document>,
  /// Set when the document was created as a copy of another.
  pub copied_from:  Option<Document>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubDocumentEdited {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub document:     Option<Document>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubDocumentDeleted {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubDocumentCommented {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub document:     Option<Document>,
  pub comment:      Option<Comment>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFileCreated {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  #[serde(default)]
  pub files:        Vec<ResourceFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFileDeleted {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFileCommented {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub file:         Option<ResourceFile>,
  pub comment:      Option<Comment>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFolderCreated {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub folder:       Option<Folder>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFolderRenamed {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub folder:       Option<Folder>,
  pub old_name:     String,
  pub new_name:     String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubFolderDeleted {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubLinkCreated {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub link:         Option<ResourceLink>,
  pub name:         String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubLinkEdited {
  pub space:         Option<Space>,
  pub resource_hub:  Option<ResourceHub>,
  pub link:          Option<ResourceLink>,
  pub previous_name: String,
  pub previous_url:  Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHubLinkDeleted {
  pub space:        Option<Space>,
  pub resource_hub: Option<ResourceHub>,
  pub name:         String,
}
