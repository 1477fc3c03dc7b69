//! Summaries of aggregated activities.
//!
//! An aggregate is a run of related activities grouped upstream. It renders
//! as one feed row: the author, a shared verb, the de-duplicated names of the
//! touched resources, and the location of the first activity.

use std::collections::BTreeSet;

use huddle_core::{
  Activity, ActivityContent, AggregatedActivity,
  refs::{Goal, Project, Space},
};

use crate::{
  Result,
  links,
  paths::{Page, PathResolver},
  phrase,
  view::{Alignment, FeedContent, Fragment, Link},
};

// ─── Name extraction ─────────────────────────────────────────────────────────

/// The human-readable name of the resource an activity touched, when its
/// action names one.
pub fn resource_name(content: &ActivityContent) -> Option<String> {
  use ActivityContent as C;

  let name = match content {
    C::CompanyEditing(c) => c.new_name.clone(),
    C::SpaceEditing(c) => c.new_name.clone(),
    C::DiscussionPosting(c) => c.title.clone(),
    C::DiscussionEditing(c) => c.discussion.as_ref()?.title.clone(),
    C::DiscussionCommentSubmitted(c) => c.title.clone(),

    C::GoalEditing(c) => c.new_name.clone(),
    C::GoalNameUpdating(c) => c.new_name.clone(),
    C::GoalDescriptionChanged(c) => c.goal.as_ref()?.name.clone(),
    C::GoalDueDateUpdating(c) => c.goal.as_ref()?.name.clone(),
    C::GoalChampionUpdating(c) => c.goal.as_ref()?.name.clone(),
    C::GoalReviewerUpdating(c) => c.goal.as_ref()?.name.clone(),
    C::GoalTargetAdding(c) => c.target_name.clone(),
    C::GoalTargetDeleting(c) => c.target_name.clone(),
    C::GoalDiscussionEditing(c) => c.title.clone(),

    C::ProjectRenamed(c) => c.new_name.clone(),
    C::ProjectDescriptionChanged(c) => c.project.as_ref()?.name.clone(),
    C::ProjectTimelineEdited(c) => c.project.as_ref()?.name.clone(),
    C::ProjectDueDateUpdating(c) => c.project.as_ref()?.name.clone(),
    C::ProjectChampionUpdating(c) => c.project.as_ref()?.name.clone(),
    C::ProjectReviewerUpdating(c) => c.project.as_ref()?.name.clone(),
    C::ProjectKeyResourceAdded(c) => c.resource.title.clone(),

    C::MilestoneTitleUpdating(c) => c.new_title.clone(),
    C::MilestoneDueDateUpdating(c) => c.milestone.as_ref()?.title.clone(),
    C::MilestoneDescriptionUpdating(c) => c.milestone.as_ref()?.title.clone(),

    C::TaskNameEditing(c) => c.new_name.clone(),
    C::TaskStatusUpdating(c) => c.task.as_ref()?.name.clone(),
    C::TaskAssigneeUpdating(c) => c.task.as_ref()?.name.clone(),
    C::TaskDueDateUpdating(c) => c.task.as_ref()?.name.clone(),
    C::TaskDescriptionChange(c) => c.task.as_ref()?.name.clone(),

    C::ResourceHubDocumentCreated(c) => c.name.clone(),
    C::ResourceHubDocumentEdited(c) => c.name.clone(),
    C::ResourceHubDocumentCommented(c) => c.name.clone(),
    C::ResourceHubFolderRenamed(c) => c.new_name.clone(),
    C::ResourceHubLinkEdited(c) => c
      .link
      .as_ref()
      .map_or_else(|| c.previous_name.clone(), |l| l.name.clone()),

    _ => return None,
  };
  Some(name)
}

/// The de-duplicated names touched by an aggregate, in sorted order.
pub fn resource_names(aggregate: &AggregatedActivity) -> BTreeSet<String> {
  aggregate
    .activities()
    .iter()
    .filter_map(|a| resource_name(&a.content))
    .collect()
}

/// `items`, `A`, `A and B`, `A, B, and C`.
pub fn format_resource_list<S: AsRef<str>>(names: &[S]) -> String {
  if names.is_empty() {
    return "items".to_string();
  }
  phrase::join_list(names)
}

// ─── Verb ────────────────────────────────────────────────────────────────────

/// The verb shared by every activity in an aggregate, keyed on the first.
pub fn shared_verb(first: &ActivityContent) -> &'static str {
  use ActivityContent as C;

  match first {
    C::DiscussionEditing(_)
    | C::GoalEditing(_)
    | C::GoalCheckInEdit(_)
    | C::GoalDiscussionEditing(_)
    | C::ProjectTimelineEdited(_)
    | C::ProjectContributorEdited(_)
    | C::ProjectCheckInEdit(_)
    | C::ResourceHubDocumentEdited(_)
    | C::ResourceHubLinkEdited(_) => "edited",

    C::CompanyEditing(_)
    | C::SpaceEditing(_)
    | C::GoalNameUpdating(_)
    | C::ProjectRenamed(_)
    | C::MilestoneTitleUpdating(_)
    | C::TaskNameEditing(_)
    | C::ResourceHubFolderRenamed(_) => "renamed",

    C::GoalDescriptionChanged(_)
    | C::GoalDueDateUpdating(_)
    | C::GoalChampionUpdating(_)
    | C::GoalReviewerUpdating(_)
    | C::ProjectDescriptionChanged(_)
    | C::ProjectDueDateUpdating(_)
    | C::ProjectChampionUpdating(_)
    | C::ProjectReviewerUpdating(_)
    | C::MilestoneDueDateUpdating(_)
    | C::MilestoneDescriptionUpdating(_)
    | C::TaskStatusUpdating(_)
    | C::TaskAssigneeUpdating(_)
    | C::TaskDueDateUpdating(_)
    | C::TaskDescriptionChange(_) => "updated",

    _ => "modified",
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// The container an activity happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
  pub page: Page,
  pub link: Link,
}

impl Location {
  fn noun(&self) -> &'static str {
    match self.page {
      Page::Space => "space",
      Page::Goal => "goal",
      Page::Project => "project",
      Page::Company => "company",
      Page::Profile => "profile",
    }
  }
}

/// The innermost goal, project or space an activity names.
pub fn location(paths: &dyn PathResolver, activity: &Activity) -> Option<Location> {
  use ActivityContent as C;

  let goal = |g: Option<&Goal>| {
    g.map(|g| Location {
      page: Page::Goal,
      link: links::goal(paths, g),
    })
  };
  let project = |p: Option<&Project>| {
    p.map(|p| Location {
      page: Page::Project,
      link: links::project(paths, p),
    })
  };
  let space = |s: Option<&Space>| {
    s.map(|s| Location {
      page: Page::Space,
      link: links::space(paths, s),
    })
  };

  match &activity.content {
    C::SpaceEditing(c) => space(c.space.as_ref()),
    C::DiscussionPosting(c) => space(c.space.as_ref()),
    C::DiscussionEditing(c) => space(c.space.as_ref()),
    C::DiscussionCommentSubmitted(c) => space(c.space.as_ref()),

    C::GoalEditing(c) => goal(c.goal.as_ref()),
    C::GoalNameUpdating(c) => goal(c.goal.as_ref()),
    C::GoalDescriptionChanged(c) => goal(c.goal.as_ref()),
    C::GoalDueDateUpdating(c) => goal(c.goal.as_ref()),
    C::GoalChampionUpdating(c) => goal(c.goal.as_ref()),
    C::GoalReviewerUpdating(c) => goal(c.goal.as_ref()),
    C::GoalTargetAdding(c) => goal(c.goal.as_ref()),
    C::GoalTargetDeleting(c) => goal(c.goal.as_ref()),
    C::GoalDiscussionEditing(c) => goal(c.goal.as_ref()),

    C::ProjectRenamed(c) => project(c.project.as_ref()),
    C::ProjectDescriptionChanged(c) => project(c.project.as_ref()),
    C::ProjectTimelineEdited(c) => project(c.project.as_ref()),
    C::ProjectDueDateUpdating(c) => project(c.project.as_ref()),
    C::ProjectChampionUpdating(c) => project(c.project.as_ref()),
    C::ProjectReviewerUpdating(c) => project(c.project.as_ref()),
    C::ProjectKeyResourceAdded(c) => project(c.project.as_ref()),
    C::MilestoneTitleUpdating(c) => project(c.project.as_ref()),
    C::MilestoneDueDateUpdating(c) => project(c.project.as_ref()),
    C::MilestoneDescriptionUpdating(c) => project(c.project.as_ref()),
    C::TaskNameEditing(c) => project(c.project.as_ref()),
    C::TaskStatusUpdating(c) => project(c.project.as_ref()),
    C::TaskAssigneeUpdating(c) => project(c.project.as_ref()),
    C::TaskDueDateUpdating(c) => project(c.project.as_ref()),
    C::TaskDescriptionChange(c) => project(c.project.as_ref()),

    C::ResourceHubDocumentCreated(c) => space(c.space.as_ref()),
    C::ResourceHubDocumentEdited(c) => space(c.space.as_ref()),
    C::ResourceHubDocumentCommented(c) => space(c.space.as_ref()),
    C::ResourceHubFolderRenamed(c) => space(c.space.as_ref()),
    C::ResourceHubLinkEdited(c) => space(c.space.as_ref()),

    _ => None,
  }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Feed and notification rendering for one aggregate.
pub struct Summary<'a> {
  aggregate: &'a AggregatedActivity,
  paths:     &'a dyn PathResolver,
  page:      Option<Page>,
}

impl<'a> Summary<'a> {
  pub fn new(
    aggregate: &'a AggregatedActivity,
    paths: &'a dyn PathResolver,
    page: Option<Page>,
  ) -> Self {
    Self {
      aggregate,
      paths,
      page,
    }
  }

  fn verb(&self) -> &'static str { shared_verb(&self.aggregate.first().content) }

  fn list(&self) -> String {
    let names: Vec<String> = resource_names(self.aggregate).into_iter().collect();
    format_resource_list(&names)
  }

  /// The first activity's location, unless the reader is already there.
  fn visible_location(&self) -> Option<Location> {
    location(self.paths, self.aggregate.first()).filter(|l| self.page != Some(l.page))
  }

  pub fn feed_item_title(&self) -> Result<Fragment> {
    let author = self.aggregate.author();
    let f = Fragment::new()
      .person(author.first_name(), self.paths.person(&author.id))
      .text(self.verb())
      .text(self.list());
    Ok(match self.visible_location() {
      Some(location) => {
        let noun = location.noun();
        f.text("in the").link(location.link).text(noun)
      }
      None => f,
    })
  }

  pub fn feed_item_content(&self) -> Result<Option<FeedContent>> {
    let n = self.aggregate.activities().len();
    Ok(Some(FeedContent::text(format!("{n} related changes"))))
  }

  pub fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsCenter }

  pub fn notification_title(&self) -> Result<String> {
    let mut verb = self.verb().chars();
    let capitalized: String = verb
      .next()
      .map(|c| c.to_ascii_uppercase())
      .into_iter()
      .chain(verb)
      .collect();
    Ok(format!("{capitalized} {}", self.list()))
  }

  pub fn notification_location(&self) -> Result<Option<String>> {
    Ok(location(self.paths, self.aggregate.first()).map(|l| l.link.label))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resource_list_formatting() {
    assert_eq!(format_resource_list::<&str>(&[]), "items");
    assert_eq!(format_resource_list(&["Doc A"]), "Doc A");
    assert_eq!(format_resource_list(&["Doc A", "Doc B"]), "Doc A and Doc B");
    assert_eq!(
      format_resource_list(&["Doc A", "Doc B", "Doc C"]),
      "Doc A, Doc B, and Doc C"
    );
  }
}
