//! Goal lifecycle, edits, check-ins and goal discussions.

use huddle_core::{
  content::{
    GoalArchived, GoalChampionUpdating, GoalCheckInAcknowledgement, GoalCheckInCommented,
    GoalCheckInEdit, GoalCheckInSubmitted, GoalClosing, GoalCreated, GoalDescriptionChanged,
    GoalDiscussionCreation, GoalDiscussionEditing, GoalDueDateUpdating, GoalEditing,
    GoalNameUpdating, GoalReopening, GoalReparent, GoalReviewerUpdating, GoalSpaceUpdating,
    GoalTargetAdding, GoalTargetDeleting,
  },
  refs::{Goal, GoalCheckIn, Person},
};

use crate::{
  Result,
  contract::{ActivityPage, FeedItem, NotificationItem, RenderCx, feed_only, with_page},
  links,
  paths::Page,
  phrase,
  view::{Alignment, FeedContent, Fragment, Link, PageContent, PageOption},
};

fn goal_name(goal: Option<&Goal>) -> Option<String> { goal.map(|g| g.name.clone()) }

/// `a check-in` linked to the check-in page when it still exists.
fn check_in_phrase(cx: &RenderCx<'_>, article: &str, check_in: Option<&GoalCheckIn>) -> Fragment {
  let label = "check-in";
  let f = Fragment::new().text(article);
  match check_in {
    Some(ci) => f.link(links::goal_check_in(cx.paths, ci, label)),
    None => f.text(label),
  }
}

fn check_in_body(check_in: Option<&GoalCheckIn>) -> Option<FeedContent> {
  let check_in = check_in?;
  phrase::parts([check_in.status.map(phrase::health), phrase::summary(&check_in.message)])
}

fn edit_option(path: String) -> PageOption {
  PageOption {
    label: "Edit".to_string(),
    path:  format!("{path}/edit"),
  }
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

impl FeedItem for GoalCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let mut f = cx.by_author().text("added").append(phrase::the_goal(cx, goal));
    if let Some(parent) = &self.parent_goal {
      f = f.text("as a subgoal of").link(links::goal(cx.paths, parent));
    }
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for GoalCreated {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Added the goal {}", goal.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(self.space.as_ref().map(|s| s.name.clone()))
  }
}

impl FeedItem for GoalArchived {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("archived the goal");
    if cx.on(Page::Goal) {
      return Ok(f);
    }
    Ok(f.span(links::goal_or_name(cx.paths, self.goal.as_ref(), &self.goal_name)))
  }
}

impl NotificationItem for GoalArchived {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Archived the goal {}", self.goal_name))
  }
}

impl FeedItem for GoalClosing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(cx.by_author().text("closed").append(phrase::the_goal(cx, goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::parts([
      Some(phrase::success(self.success_status)),
      phrase::summary(&self.message),
    ]))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalClosing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Closed the goal as {}", self.success_status.label()))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl ActivityPage for GoalClosing {
  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Goal closed: {}", goal.name))
  }

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("closed the goal")
        .link(links::goal(cx.paths, goal)),
    )
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    let blocks = [
      Some(phrase::success(self.success_status)),
      phrase::summary(&self.message),
    ];
    Ok(PageContent {
      blocks: blocks.into_iter().flatten().collect(),
    })
  }
}

impl FeedItem for GoalReopening {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(cx.by_author().text("reopened").append(phrase::the_goal(cx, goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.message))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalReopening {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Reopened the goal".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl ActivityPage for GoalReopening {
  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Goal reopened: {}", goal.name))
  }

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("reopened the goal")
        .link(links::goal(cx.paths, goal)),
    )
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    Ok(PageContent {
      blocks: phrase::summary(&self.message).into_iter().collect(),
    })
  }
}

// ─── Edits ───────────────────────────────────────────────────────────────────

impl FeedItem for GoalEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(cx.by_author().text("edited").append(phrase::the_goal(cx, goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    let name = |p: &Option<Person>| p.as_ref().map(|p| p.full_name.clone());
    let mut changes = Vec::new();
    if self.old_name != self.new_name {
      changes.push(FeedContent::labeled_change(
        "Name",
        Some(self.old_name.clone()),
        Some(self.new_name.clone()),
      ));
    }
    if self.old_champion != self.new_champion {
      changes.push(FeedContent::labeled_change(
        "Champion",
        name(&self.old_champion),
        name(&self.new_champion),
      ));
    }
    if self.old_reviewer != self.new_reviewer {
      changes.push(FeedContent::labeled_change(
        "Reviewer",
        name(&self.old_reviewer),
        name(&self.new_reviewer),
      ));
    }
    if self.old_timeframe != self.new_timeframe {
      changes.push(FeedContent::labeled_change(
        "Timeframe",
        self.old_timeframe.as_ref().map(phrase::timeframe),
        self.new_timeframe.as_ref().map(phrase::timeframe),
      ));
    }
    Ok(FeedContent::stack(changes))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited the goal".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(Some(self.new_name.clone()))
  }
}

impl FeedItem for GoalNameUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(cx.by_author().text("renamed").append(phrase::the_goal(cx, goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for GoalNameUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the goal to {}", self.new_name))
  }
}

impl FeedItem for GoalDescriptionChanged {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("updated the description of")
        .append(phrase::the_goal(cx, goal)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.description))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalDescriptionChanged {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Updated the goal description".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalDueDateUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("changed the due date of")
        .append(phrase::the_goal(cx, goal)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      phrase::opt_date(self.old_due_date),
      phrase::opt_date(self.new_due_date),
    )))
  }
}

impl NotificationItem for GoalDueDateUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match phrase::opt_date(self.new_due_date) {
      Some(date) => format!("Changed the due date to {date}"),
      None => "Removed the due date".to_string(),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalChampionUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let change = phrase::role_change(
      cx,
      "champion",
      self.old_champion.as_ref(),
      self.new_champion.as_ref(),
    );
    Ok(cx.by_author().append(change).append(phrase::the_goal(cx, goal)))
  }
}

impl NotificationItem for GoalChampionUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(phrase::role_change_text(
      "champion",
      self.old_champion.as_ref(),
      self.new_champion.as_ref(),
    ))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalReviewerUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let change = phrase::role_change(
      cx,
      "reviewer",
      self.old_reviewer.as_ref(),
      self.new_reviewer.as_ref(),
    );
    Ok(cx.by_author().append(change).append(phrase::the_goal(cx, goal)))
  }
}

impl NotificationItem for GoalReviewerUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(phrase::role_change_text(
      "reviewer",
      self.old_reviewer.as_ref(),
      self.new_reviewer.as_ref(),
    ))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalReparent {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx.by_author().text("moved").append(phrase::the_goal(cx, goal));
    Ok(match &self.new_parent_goal {
      Some(parent) => f.text("under").link(links::goal(cx.paths, parent)),
      None => f.text("to the company-wide goals"),
    })
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      goal_name(self.old_parent_goal.as_ref()),
      goal_name(self.new_parent_goal.as_ref()),
    )))
  }
}

impl NotificationItem for GoalReparent {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match &self.new_parent_goal {
      Some(parent) => format!("Moved the goal under {}", parent.name),
      None => "Made the goal company-wide".to_string(),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalSpaceUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let space = cx.require(self.new_space.as_ref(), "new_space")?;
    Ok(
      cx.by_author()
        .text("moved")
        .append(phrase::the_goal(cx, goal))
        .text("to the")
        .link(links::space(cx.paths, space))
        .text("space"),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      self.old_space.as_ref().map(|s| s.name.clone()),
      self.new_space.as_ref().map(|s| s.name.clone()),
    )))
  }
}

impl NotificationItem for GoalSpaceUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let space = cx.require(self.new_space.as_ref(), "new_space")?;
    Ok(format!("Moved the goal to the {} space", space.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

// ─── Targets ─────────────────────────────────────────────────────────────────

impl FeedItem for GoalTargetAdding {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("added the target")
        .text(phrase::quoted(&self.target_name))
        .text("to")
        .append(phrase::the_goal(cx, goal)),
    )
  }
}

impl NotificationItem for GoalTargetAdding {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added the target {}", phrase::quoted(&self.target_name)))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalTargetDeleting {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("deleted the target")
        .text(phrase::quoted(&self.target_name))
        .text("from")
        .append(phrase::the_goal(cx, goal)),
    )
  }
}

impl NotificationItem for GoalTargetDeleting {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the target {}", phrase::quoted(&self.target_name)))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

// ─── Check-ins ───────────────────────────────────────────────────────────────

impl FeedItem for GoalCheckInSubmitted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx
      .by_author()
      .text("submitted")
      .append(check_in_phrase(cx, "a", self.check_in.as_ref()));
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(check_in_body(self.check_in.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalCheckInSubmitted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Submitted a check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl ActivityPage for GoalCheckInSubmitted {
  fn page_path(&self, cx: &RenderCx<'_>) -> Result<String> {
    let check_in = cx.require(self.check_in.as_ref(), "check_in")?;
    Ok(cx.paths.goal_check_in(&check_in.id))
  }

  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Check-in for {}", goal.name))
  }

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      Fragment::new()
        .text("Check-in for")
        .link(links::goal(cx.paths, goal)),
    )
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    let Some(check_in) = &self.check_in else {
      return Ok(PageContent::default());
    };
    let blocks = [check_in.status.map(phrase::health), phrase::summary(&check_in.message)];
    Ok(PageContent {
      blocks: blocks.into_iter().flatten().collect(),
    })
  }

  fn page_options(&self, cx: &RenderCx<'_>) -> Result<Vec<PageOption>> {
    Ok(
      self
        .check_in
        .iter()
        .map(|ci| edit_option(cx.paths.goal_check_in(&ci.id)))
        .collect(),
    )
  }
}

impl FeedItem for GoalCheckInEdit {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx
      .by_author()
      .text("edited")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(check_in_body(self.check_in.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalCheckInEdit {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited the check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalCheckInAcknowledgement {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx
      .by_author()
      .text("acknowledged")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }
}

impl NotificationItem for GoalCheckInAcknowledgement {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Acknowledged your check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl FeedItem for GoalCheckInCommented {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx
      .by_author()
      .text("commented on")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalCheckInCommented {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Commented on the check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

// ─── Goal discussions ────────────────────────────────────────────────────────

impl FeedItem for GoalDiscussionCreation {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let title = Link {
      path:  cx.paths.activity(&cx.activity.id),
      label: self.title.clone(),
    };
    let f = cx.by_author().text("started").link(title);
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.message))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for GoalDiscussionCreation {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Started: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

impl ActivityPage for GoalDiscussionCreation {
  fn page_html_title(&self, _cx: &RenderCx<'_>) -> Result<String> { Ok(self.title.clone()) }

  fn page_title(&self, _cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(Fragment::new().text(self.title.clone()))
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    Ok(PageContent {
      blocks: phrase::summary(&self.message).into_iter().collect(),
    })
  }

  fn page_options(&self, cx: &RenderCx<'_>) -> Result<Vec<PageOption>> {
    Ok(vec![edit_option(cx.paths.activity(&cx.activity.id))])
  }
}

impl FeedItem for GoalDiscussionEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    let f = cx
      .by_author()
      .text("edited the discussion")
      .text(phrase::quoted(&self.title));
    Ok(phrase::in_goal(f, cx, Some(goal)))
  }
}

impl NotificationItem for GoalDiscussionEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Edited: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(goal_name(self.goal.as_ref()))
  }
}

with_page!(GoalClosing, GoalReopening, GoalCheckInSubmitted, GoalDiscussionCreation);

feed_only!(
  GoalCreated,
  GoalArchived,
  GoalEditing,
  GoalNameUpdating,
  GoalDescriptionChanged,
  GoalDueDateUpdating,
  GoalChampionUpdating,
  GoalReviewerUpdating,
  GoalReparent,
  GoalSpaceUpdating,
  GoalTargetAdding,
  GoalTargetDeleting,
  GoalCheckInEdit,
  GoalCheckInAcknowledgement,
  GoalCheckInCommented,
  GoalDiscussionEditing,
);
