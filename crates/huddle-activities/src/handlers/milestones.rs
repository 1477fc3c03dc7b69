use huddle_core::{
  content::{
    MilestoneCommentAction, MilestoneDescriptionUpdating, MilestoneDueDateUpdating,
    MilestoneTitleUpdating, ProjectMilestoneCommented,
  },
  refs::{Milestone, Project},
};

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  links, phrase,
  view::{Alignment, FeedContent, Fragment, Tone},
};

fn project_name(project: Option<&Project>) -> Option<String> {
  project.map(|p| p.name.clone())
}

/// `the milestone <link>`, falling back to the last-known title.
fn the_milestone(cx: &RenderCx<'_>, milestone: Option<&Milestone>, title: &str) -> Fragment {
  Fragment::new().text("the milestone").span(links::or_name(milestone, title, |m| {
    links::milestone(cx.paths, m)
  }))
}

impl FeedItem for ProjectMilestoneCommented {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    let verb = match self.comment_action {
      MilestoneCommentAction::Plain => "commented on",
      MilestoneCommentAction::Complete => "completed",
      MilestoneCommentAction::Reopen => "reopened",
    };
    let f = cx
      .by_author()
      .text(verb)
      .append(the_milestone(cx, Some(milestone), &milestone.title));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    let badge = match self.comment_action {
      MilestoneCommentAction::Plain => None,
      MilestoneCommentAction::Complete => Some(FeedContent::status("completed", Tone::Success)),
      MilestoneCommentAction::Reopen => Some(FeedContent::status("reopened", Tone::Neutral)),
    };
    Ok(phrase::parts([badge, phrase::comment(self.comment.as_ref())]))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectMilestoneCommented {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    Ok(match self.comment_action {
      MilestoneCommentAction::Plain => format!("Re: {}", milestone.title),
      MilestoneCommentAction::Complete => format!("Completed: {}", milestone.title),
      MilestoneCommentAction::Reopen => format!("Reopened: {}", milestone.title),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for MilestoneTitleUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("renamed")
      .append(the_milestone(cx, self.milestone.as_ref(), &self.new_title));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_title.clone()),
      Some(self.new_title.clone()),
    )))
  }
}

impl NotificationItem for MilestoneTitleUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the milestone to {}", self.new_title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for MilestoneDueDateUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    let f = cx
      .by_author()
      .text("changed the due date of")
      .append(the_milestone(cx, Some(milestone), &milestone.title));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      phrase::opt_date(self.old_due_date),
      phrase::opt_date(self.new_due_date),
    )))
  }
}

impl NotificationItem for MilestoneDueDateUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    Ok(match phrase::opt_date(self.new_due_date) {
      Some(date) => format!("Changed the due date of {} to {date}", milestone.title),
      None => format!("Removed the due date of {}", milestone.title),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for MilestoneDescriptionUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    let f = cx
      .by_author()
      .text("updated the description of")
      .append(the_milestone(cx, Some(milestone), &milestone.title));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.description))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for MilestoneDescriptionUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let milestone = cx.require(self.milestone.as_ref(), "milestone")?;
    Ok(format!("Updated the description of {}", milestone.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

feed_only!(
  ProjectMilestoneCommented,
  MilestoneTitleUpdating,
  MilestoneDueDateUpdating,
  MilestoneDescriptionUpdating,
);
