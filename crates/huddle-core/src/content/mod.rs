//! Activity payloads, one typed shape per action.
//!
//! The set of supported actions is closed. It is listed exactly once, in
//! [`for_each_action!`]; the payload union, the action enumeration, and the
//! renderer's dispatch table are all generated from that list, so a new kind
//! is one row here plus one payload struct plus one handler impl.

mod comments;
mod company;
mod discussions;
mod goals;
mod milestones;
mod projects;
mod resource_hubs;
mod spaces;
mod tasks;

pub use comments::*;
pub use company::*;
pub use discussions::*;
pub use goals::*;
pub use milestones::*;
pub use projects::*;
pub use resource_hubs::*;
pub use spaces::*;
pub use tasks::*;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{Error, Result};

// ─── The action table ────────────────────────────────────────────────────────

/// Invoke `$callback!` with every supported action as `Variant => "action"`.
///
/// Each `Variant` names both the [`ActivityContent`] variant and the payload
/// struct it wraps.
#[macro_export]
macro_rules! for_each_action {
  ($callback:ident) => {
    $callback! {
      // ── Comments ──────────────────────────────────────────────────────
      CommentAdded                      => "comment_added",

      // ── Company ───────────────────────────────────────────────────────
      CompanyAdding                     => "company_adding",
      CompanyEditing                    => "company_editing",
      CompanyMemberAdded                => "company_member_added",
      CompanyMemberRemoved              => "company_member_removed",
      CompanyMembersPermissionsEditing  => "company_members_permissions_editing",
      CompanyOwnersAdding               => "company_owners_adding",
      CompanyOwnerRemoving              => "company_owner_removing",
      GuestInvited                      => "guest_invited",

      // ── Spaces ────────────────────────────────────────────────────────
      SpaceAdded                        => "space_added",
      SpaceEditing                      => "space_editing",
      SpaceJoining                      => "space_joining",
      SpaceMembersAdded                 => "space_members_added",
      SpaceMemberRemoved                => "space_member_removed",
      SpaceMembersPermissionsEditing    => "space_members_permissions_editing",

      // ── Discussions ───────────────────────────────────────────────────
      DiscussionPosting                 => "discussion_posting",
      DiscussionEditing                 => "discussion_editing",
      DiscussionCommentSubmitted        => "discussion_comment_submitted",
      MessageArchiving                  => "message_archiving",

      // ── Goals ─────────────────────────────────────────────────────────
      GoalCreated                       => "goal_created",
      GoalArchived                      => "goal_archived",
      GoalClosing                       => "goal_closing",
      GoalReopening                     => "goal_reopening",
      GoalEditing                       => "goal_editing",
      GoalNameUpdating                  => "goal_name_updating",
      GoalDescriptionChanged            => "goal_description_changed",
      GoalDueDateUpdating               => "goal_due_date_updating",
      GoalChampionUpdating              => "goal_champion_updating",
      GoalReviewerUpdating              => "goal_reviewer_updating",
      GoalReparent                      => "goal_reparent",
      GoalSpaceUpdating                 => "goal_space_updating",
      GoalTargetAdding                  => "goal_target_adding",
      GoalTargetDeleting                => "goal_target_deleting",
      GoalCheckInSubmitted              => "goal_check_in",
      GoalCheckInEdit                   => "goal_check_in_edit",
      GoalCheckInAcknowledgement        => "goal_check_in_acknowledgement",
      GoalCheckInCommented              => "goal_check_in_commented",
      GoalDiscussionCreation            => "goal_discussion_creation",
      GoalDiscussionEditing             => "goal_discussion_editing",

      // ── Projects ──────────────────────────────────────────────────────
      ProjectCreated                    => "project_created",
      ProjectArchived                   => "project_archived",
      ProjectClosed                     => "project_closed",
      ProjectPausing                    => "project_pausing",
      ProjectResuming                   => "project_resuming",
      ProjectRenamed                    => "project_renamed",
      ProjectMoved                      => "project_moved",
      ProjectDescriptionChanged         => "project_description_changed",
      ProjectGoalConnection             => "project_goal_connection",
      ProjectGoalDisconnection          => "project_goal_disconnection",
      ProjectTimelineEdited             => "project_timeline_edited",
      ProjectDueDateUpdating            => "project_due_date_updating",
      ProjectChampionUpdating           => "project_champion_updating",
      ProjectReviewerUpdating           => "project_reviewer_updating",
      ProjectContributorAddition        => "project_contributor_addition",
      ProjectContributorEdited          => "project_contributor_edited",
      ProjectContributorRemoved         => "project_contributor_removed",
      ProjectCheckInSubmitted           => "project_check_in_submitted",
      ProjectCheckInEdit                => "project_check_in_edit",
      ProjectCheckInAcknowledged        => "project_check_in_acknowledged",
      ProjectCheckInCommented           => "project_check_in_commented",
      ProjectDiscussionSubmitted        => "project_discussion_submitted",
      ProjectKeyResourceAdded           => "project_key_resource_added",
      ProjectKeyResourceDeleted         => "project_key_resource_deleted",

      // ── Milestones ────────────────────────────────────────────────────
      ProjectMilestoneCommented         => "project_milestone_commented",
      MilestoneTitleUpdating            => "milestone_title_updating",
      MilestoneDueDateUpdating          => "milestone_due_date_updating",
      MilestoneDescriptionUpdating      => "milestone_description_updating",

      // ── Tasks ─────────────────────────────────────────────────────────
      TaskAdding                        => "task_adding",
      TaskNameEditing                   => "task_name_editing",
      TaskStatusUpdating                => "task_status_updating",
      TaskAssigneeUpdating              => "task_assignee_updating",
      TaskDueDateUpdating               => "task_due_date_updating",
      TaskDescriptionChange             => "task_description_change",
      TaskDeleting                      => "task_deleting",

      // ── Resource hubs ─────────────────────────────────────────────────
      ResourceHubDocumentCreated        => "resource_hub_document_created",
      ResourceHubDocumentEdited         => "resource_hub_document_edited",
      ResourceHubDocumentDeleted        => "resource_hub_document_deleted",
      ResourceHubDocumentCommented      => "resource_hub_document_commented",
      ResourceHubFileCreated            => "resource_hub_file_created",
      ResourceHubFileDeleted            => "resource_hub_file_deleted",
      ResourceHubFileCommented          => "resource_hub_file_commented",
      ResourceHubFolderCreated          => "resource_hub_folder_created",
      ResourceHubFolderRenamed          => "resource_hub_folder_renamed",
      ResourceHubFolderDeleted          => "resource_hub_folder_deleted",
      ResourceHubLinkCreated            => "resource_hub_link_created",
      ResourceHubLinkEdited             => "resource_hub_link_edited",
      ResourceHubLinkDeleted            => "resource_hub_link_deleted",
    }
  };
}

macro_rules! define_content {
  ($($variant:ident => $action:literal),* $(,)?) => {
    /// The typed payload of an activity. The serde tag is the action string,
    /// so a payload can never be paired with the wrong discriminant.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(tag = "action", content = "content")]
    pub enum ActivityContent {
      $(
        #[serde(rename = $action)]
        $variant($variant),
      )*
    }

    /// The closed enumeration of supported action strings.
    #[derive(
      Debug, Clone, Copy, PartialEq, Eq, Hash,
      EnumCount, EnumIter, IntoStaticStr, strum::EnumString, strum::Display,
    )]
    pub enum ActionKind {
      $(
        #[strum(serialize = $action)]
        $variant,
      )*
    }

    impl ActivityContent {
      pub fn kind(&self) -> ActionKind {
        match self {
          $(Self::$variant(_) => ActionKind::$variant,)*
        }
      }
    }
  };
}

for_each_action!(define_content);

// ─── ActionKind ──────────────────────────────────────────────────────────────

impl ActionKind {
  /// Resolve an action string against the supported enumeration.
  pub fn lookup(action: &str) -> Result<Self> {
    action
      .parse()
      .map_err(|_| Error::UnknownAction(action.to_string()))
  }

  /// The wire discriminant, e.g. `"goal_closing"`.
  pub fn as_str(self) -> &'static str { self.into() }

  /// Number of supported actions.
  pub const fn count() -> usize { <Self as EnumCount>::COUNT }
}

// ─── ActivityContent ─────────────────────────────────────────────────────────

impl ActivityContent {
  /// The discriminant string for this payload.
  pub fn action(&self) -> &'static str { self.kind().as_str() }

  /// Serialise the inner payload (without the action tag).
  pub fn to_json(&self) -> Result<serde_json::Value> {
    // The full serialised form is `{"action": "...", "content": <payload>}`.
    let full = serde_json::to_value(self)?;
    Ok(
      full
        .get("content")
        .cloned()
        .unwrap_or(serde_json::Value::Null),
    )
  }

  /// Decode a payload for an already-resolved action.
  pub fn from_parts(kind: ActionKind, content: serde_json::Value) -> Result<Self> {
    let content = match content {
      serde_json::Value::Null => serde_json::Value::Object(Default::default()),
      other => other,
    };
    let wrapped = serde_json::json!({ "action": kind.as_str(), "content": content });
    serde_json::from_value(wrapped).map_err(|source| Error::InvalidContent {
      action: kind.as_str(),
      source,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use serde_json::json;
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn every_action_string_round_trips() {
    for kind in ActionKind::iter() {
      assert_eq!(ActionKind::lookup(kind.as_str()).unwrap(), kind);
    }
  }

  #[test]
  fn action_strings_are_unique() {
    let seen: HashSet<&str> = ActionKind::iter().map(ActionKind::as_str).collect();
    assert_eq!(seen.len(), ActionKind::count());
  }

  #[test]
  fn unknown_action_is_rejected_with_its_name() {
    let err = ActionKind::lookup("not_a_real_action").unwrap_err();
    assert_eq!(err.to_string(), "Unknown activity action: not_a_real_action");
  }

  #[test]
  fn from_parts_decodes_camel_case_payload() {
    let content = ActivityContent::from_parts(
      ActionKind::ProjectRenamed,
      json!({
        "project": { "id": "p1", "name": "Apollo" },
        "oldName": "Gemini",
        "newName": "Apollo",
      }),
    )
    .unwrap();

    let ActivityContent::ProjectRenamed(renamed) = &content else {
      panic!("wrong variant: {content:?}");
    };
    assert_eq!(renamed.old_name, "Gemini");
    assert_eq!(content.kind(), ActionKind::ProjectRenamed);
    assert_eq!(content.action(), "project_renamed");
  }

  #[test]
  fn from_parts_reports_the_action_on_shape_mismatch() {
    let err = ActivityContent::from_parts(
      ActionKind::GoalClosing,
      json!({ "successStatus": "sort_of" }),
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("invalid content for goal_closing"));
  }

  #[test]
  fn to_json_strips_the_tag() {
    let content = ActivityContent::from_parts(
      ActionKind::SpaceJoining,
      json!({ "space": { "id": "s1", "name": "Ops" } }),
    )
    .unwrap();
    assert_eq!(content.to_json().unwrap(), json!({ "space": { "id": "s1", "name": "Ops" } }));
  }
}
