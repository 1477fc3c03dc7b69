//! Project lifecycle, edits, contributors, check-ins and key resources.

use huddle_core::{
  content::{
    ProjectArchived, ProjectChampionUpdating, ProjectCheckInAcknowledged,
    ProjectCheckInCommented, ProjectCheckInEdit, ProjectCheckInSubmitted, ProjectClosed,
    ProjectContributorAddition, ProjectContributorEdited, ProjectContributorRemoved,
    ProjectCreated, ProjectDescriptionChanged, ProjectDiscussionSubmitted,
    ProjectDueDateUpdating, ProjectGoalConnection, ProjectGoalDisconnection,
    ProjectKeyResourceAdded, ProjectKeyResourceDeleted, ProjectMoved, ProjectPausing,
    ProjectRenamed, ProjectResuming, ProjectReviewerUpdating, ProjectTimelineEdited,
  },
  refs::{Project, ProjectCheckIn},
};

use crate::{
  Result,
  contract::{ActivityPage, FeedItem, NotificationItem, RenderCx, feed_only, with_page},
  links,
  paths::Page,
  phrase,
  view::{Alignment, FeedContent, Fragment, PageContent, PageOption},
};

fn project_name(project: Option<&Project>) -> Option<String> {
  project.map(|p| p.name.clone())
}

fn check_in_phrase(
  cx: &RenderCx<'_>,
  article: &str,
  check_in: Option<&ProjectCheckIn>,
) -> Fragment {
  let label = "check-in";
  let f = Fragment::new().text(article);
  match check_in {
    Some(ci) => f.link(links::project_check_in(cx.paths, ci, label)),
    None => f.text(label),
  }
}

fn check_in_blocks(check_in: &ProjectCheckIn) -> Vec<FeedContent> {
  [
    Some(phrase::health(check_in.status)),
    phrase::summary(&check_in.description),
  ]
  .into_iter()
  .flatten()
  .collect()
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

impl FeedItem for ProjectCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let f = cx
      .by_author()
      .text("created")
      .append(phrase::the_project(cx, project));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.champion.as_ref().and_then(|champion| {
      // Only worth mentioning when somebody else was made champion.
      (champion.id != cx.author().id)
        .then(|| FeedContent::text(format!("Champion: {}", champion.full_name)))
    }))
  }
}

impl NotificationItem for ProjectCreated {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(format!("Created the project {}", project.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(self.space.as_ref().map(|s| s.name.clone()))
  }
}

impl FeedItem for ProjectArchived {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("archived the project");
    if cx.on(Page::Project) {
      return Ok(f);
    }
    Ok(f.span(links::project_or_name(
      cx.paths,
      self.project.as_ref(),
      &self.project_name,
    )))
  }
}

impl NotificationItem for ProjectArchived {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Archived the project {}", self.project_name))
  }
}

impl FeedItem for ProjectClosed {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("closed")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::parts([
      self.success_status.map(phrase::success),
      phrase::summary(&self.retrospective),
    ]))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectClosed {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Closed the project and submitted a retrospective".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl ActivityPage for ProjectClosed {
  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(format!("Retrospective: {}", project.name))
  }

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      Fragment::new()
        .text("Retrospective for")
        .link(links::project(cx.paths, project)),
    )
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    let blocks = [
      self.success_status.map(phrase::success),
      phrase::summary(&self.retrospective),
    ];
    Ok(PageContent {
      blocks: blocks.into_iter().flatten().collect(),
    })
  }

  fn page_options(&self, cx: &RenderCx<'_>) -> Result<Vec<PageOption>> {
    Ok(vec![PageOption {
      label: "Edit retrospective".to_string(),
      path:  format!("{}/edit", cx.paths.activity(&cx.activity.id)),
    }])
  }
}

impl FeedItem for ProjectPausing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("paused")
        .append(phrase::the_project(cx, project)),
    )
  }
}

impl NotificationItem for ProjectPausing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Paused the project".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectResuming {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("resumed")
        .append(phrase::the_project(cx, project)),
    )
  }
}

impl NotificationItem for ProjectResuming {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Resumed the project".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

// ─── Edits ───────────────────────────────────────────────────────────────────

impl FeedItem for ProjectRenamed {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("renamed")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for ProjectRenamed {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the project to {}", self.new_name))
  }
}

impl FeedItem for ProjectMoved {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let space = cx.require(self.new_space.as_ref(), "new_space")?;
    Ok(
      cx.by_author()
        .text("moved")
        .append(phrase::the_project(cx, project))
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

impl NotificationItem for ProjectMoved {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let space = cx.require(self.new_space.as_ref(), "new_space")?;
    Ok(format!("Moved the project to the {} space", space.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectDescriptionChanged {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("updated the description of")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.description))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectDescriptionChanged {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Updated the project description".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectGoalConnection {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("connected")
        .append(phrase::the_project(cx, project))
        .text("to")
        .append(phrase::the_goal(cx, goal)),
    )
  }
}

impl NotificationItem for ProjectGoalConnection {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Connected the project to the goal {}", goal.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectGoalDisconnection {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(
      cx.by_author()
        .text("disconnected")
        .append(phrase::the_project(cx, project))
        .text("from")
        .append(phrase::the_goal(cx, goal)),
    )
  }
}

impl NotificationItem for ProjectGoalDisconnection {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let goal = cx.require(self.goal.as_ref(), "goal")?;
    Ok(format!("Disconnected the project from the goal {}", goal.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectTimelineEdited {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("edited the timeline of")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    let mut changes = Vec::new();
    if self.old_start_date != self.new_start_date {
      changes.push(FeedContent::labeled_change(
        "Start date",
        phrase::opt_date(self.old_start_date),
        phrase::opt_date(self.new_start_date),
      ));
    }
    if self.old_end_date != self.new_end_date {
      changes.push(FeedContent::labeled_change(
        "Due date",
        phrase::opt_date(self.old_end_date),
        phrase::opt_date(self.new_end_date),
      ));
    }
    Ok(FeedContent::stack(changes))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectTimelineEdited {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited the project timeline".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectDueDateUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("changed the due date of")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      phrase::opt_date(self.old_due_date),
      phrase::opt_date(self.new_due_date),
    )))
  }
}

impl NotificationItem for ProjectDueDateUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match phrase::opt_date(self.new_due_date) {
      Some(date) => format!("Changed the due date to {date}"),
      None => "Removed the due date".to_string(),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

// ─── People ──────────────────────────────────────────────────────────────────

impl FeedItem for ProjectChampionUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let change = phrase::role_change(
      cx,
      "champion",
      self.old_champion.as_ref(),
      self.new_champion.as_ref(),
    );
    Ok(
      cx.by_author()
        .append(change)
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(phrase::person_change(
      self.old_champion.as_ref(),
      self.new_champion.as_ref(),
    )))
  }
}

impl NotificationItem for ProjectChampionUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(phrase::role_change_text(
      "champion",
      self.old_champion.as_ref(),
      self.new_champion.as_ref(),
    ))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectReviewerUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let change = phrase::role_change(
      cx,
      "reviewer",
      self.old_reviewer.as_ref(),
      self.new_reviewer.as_ref(),
    );
    Ok(
      cx.by_author()
        .append(change)
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(phrase::person_change(
      self.old_reviewer.as_ref(),
      self.new_reviewer.as_ref(),
    )))
  }
}

impl NotificationItem for ProjectReviewerUpdating {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(phrase::role_change_text(
      "reviewer",
      self.old_reviewer.as_ref(),
      self.new_reviewer.as_ref(),
    ))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectContributorAddition {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(
      cx.by_author()
        .text("added")
        .span(phrase::person(cx, person))
        .text("to")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(
      self
        .responsibility
        .as_ref()
        .filter(|r| !r.trim().is_empty())
        .map(|r| FeedContent::text(format!("Responsibility: {r}"))),
    )
  }
}

impl NotificationItem for ProjectContributorAddition {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(format!("Added {} as a contributor", person.full_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectContributorEdited {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(
      cx.by_author()
        .text("edited the responsibility of")
        .span(phrase::person(cx, person))
        .text("in")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      self.previous_responsibility.clone(),
      self.updated_responsibility.clone(),
    )))
  }
}

impl NotificationItem for ProjectContributorEdited {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(format!("Edited the responsibility of {}", person.full_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectContributorRemoved {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("removed")
        .span(links::person_or_name(
          cx.paths,
          self.person.as_ref(),
          &self.person_name,
        ))
        .text("from")
        .append(phrase::the_project(cx, project)),
    )
  }
}

impl NotificationItem for ProjectContributorRemoved {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Removed {} from the project", self.person_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

// ─── Check-ins ───────────────────────────────────────────────────────────────

impl FeedItem for ProjectCheckInSubmitted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let f = cx
      .by_author()
      .text("submitted")
      .append(check_in_phrase(cx, "a", self.check_in.as_ref()));
    Ok(phrase::in_project(f, cx, Some(project)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.check_in.as_ref().and_then(|ci| FeedContent::stack(check_in_blocks(ci))))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectCheckInSubmitted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match &self.check_in {
      Some(ci) => format!("Submitted a check-in: {}", ci.status.label()),
      None => "Submitted a check-in".to_string(),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl ActivityPage for ProjectCheckInSubmitted {
  fn page_path(&self, cx: &RenderCx<'_>) -> Result<String> {
    let check_in = cx.require(self.check_in.as_ref(), "check_in")?;
    Ok(cx.paths.project_check_in(&check_in.id))
  }

  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(format!("Check-in for {}", project.name))
  }

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      Fragment::new()
        .text("Check-in for")
        .link(links::project(cx.paths, project)),
    )
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    Ok(PageContent {
      blocks: self.check_in.as_ref().map(check_in_blocks).unwrap_or_default(),
    })
  }

  fn page_options(&self, cx: &RenderCx<'_>) -> Result<Vec<PageOption>> {
    Ok(
      self
        .check_in
        .iter()
        .map(|ci| PageOption {
          label: "Edit".to_string(),
          path:  format!("{}/edit", cx.paths.project_check_in(&ci.id)),
        })
        .collect(),
    )
  }
}

impl FeedItem for ProjectCheckInEdit {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let f = cx
      .by_author()
      .text("edited")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_project(f, cx, Some(project)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.check_in.as_ref().and_then(|ci| FeedContent::stack(check_in_blocks(ci))))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectCheckInEdit {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited the check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectCheckInAcknowledged {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let f = cx
      .by_author()
      .text("acknowledged")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_project(f, cx, Some(project)))
  }
}

impl NotificationItem for ProjectCheckInAcknowledged {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Acknowledged your check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectCheckInCommented {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let f = cx
      .by_author()
      .text("commented on")
      .append(check_in_phrase(cx, "the", self.check_in.as_ref()));
    Ok(phrase::in_project(f, cx, Some(project)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectCheckInCommented {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Commented on the check-in".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

// ─── Discussions and key resources ───────────────────────────────────────────

impl FeedItem for ProjectDiscussionSubmitted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    let discussion = links::or_name(self.discussion.as_ref(), &self.title, |d| {
      links::discussion(cx.paths, d)
    });
    let f = cx.by_author().text("posted").span(discussion);
    Ok(phrase::in_project(f, cx, Some(project)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.discussion.as_ref().and_then(|d| phrase::summary(&d.body)))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ProjectDiscussionSubmitted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Posted: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectKeyResourceAdded {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("added the key resource")
        .text(phrase::quoted(&self.resource.title))
        .text("to")
        .append(phrase::the_project(cx, project)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::text(self.resource.link.clone())))
  }
}

impl NotificationItem for ProjectKeyResourceAdded {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added the key resource {}", phrase::quoted(&self.resource.title)))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for ProjectKeyResourceDeleted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let project = cx.require(self.project.as_ref(), "project")?;
    Ok(
      cx.by_author()
        .text("removed the key resource")
        .text(phrase::quoted(&self.title))
        .text("from")
        .append(phrase::the_project(cx, project)),
    )
  }
}

impl NotificationItem for ProjectKeyResourceDeleted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Removed the key resource {}", phrase::quoted(&self.title)))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

with_page!(ProjectClosed, ProjectCheckInSubmitted);

feed_only!(
  ProjectCreated,
  ProjectArchived,
  ProjectPausing,
  ProjectResuming,
  ProjectRenamed,
  ProjectMoved,
  ProjectDescriptionChanged,
  ProjectGoalConnection,
  ProjectGoalDisconnection,
  ProjectTimelineEdited,
  ProjectDueDateUpdating,
  ProjectChampionUpdating,
  ProjectReviewerUpdating,
  ProjectContributorAddition,
  ProjectContributorEdited,
  ProjectContributorRemoved,
  ProjectCheckInEdit,
  ProjectCheckInAcknowledged,
  ProjectCheckInCommented,
  ProjectDiscussionSubmitted,
  ProjectKeyResourceAdded,
  ProjectKeyResourceDeleted,
);
