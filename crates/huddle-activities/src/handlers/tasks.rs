use huddle_core::{
  content::{
    TaskAdding, TaskAssigneeUpdating, TaskDeleting, TaskDescriptionChange, TaskDueDateUpdating,
    TaskNameEditing, TaskStatusUpdating,
  },
  refs::{Project, Task, TaskStatus},
};

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  links, phrase,
  view::{Alignment, FeedContent, Fragment, Span, Tone},
};

fn project_name(project: Option<&Project>) -> Option<String> {
  project.map(|p| p.name.clone())
}

fn task_span(cx: &RenderCx<'_>, task: Option<&Task>, name: &str) -> Span {
  links::or_name(task, name, |t| links::task(cx.paths, t))
}

fn status_badge(status: TaskStatus) -> FeedContent {
  let tone = match status {
    TaskStatus::Done => Tone::Success,
    TaskStatus::Canceled => Tone::Danger,
    TaskStatus::InProgress => Tone::Warning,
    TaskStatus::Todo => Tone::Neutral,
  };
  FeedContent::status(status.label(), tone)
}

impl FeedItem for TaskAdding {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let mut f = cx
      .by_author()
      .text("added the task")
      .span(task_span(cx, self.task.as_ref(), &self.task_name));
    if let Some(milestone) = &self.milestone {
      f = f.text("to").link(links::milestone(cx.paths, milestone));
    }
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }
}

impl NotificationItem for TaskAdding {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added the task {}", self.task_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskNameEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("renamed the task")
      .span(task_span(cx, self.task.as_ref(), &self.new_name));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for TaskNameEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the task to {}", self.new_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskStatusUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let task = cx.require(self.task.as_ref(), "task")?;
    let f = cx
      .by_author()
      .text("marked the task")
      .link(links::task(cx.paths, task))
      .text(format!("as {}", self.new_status.label()));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(status_badge(self.new_status)))
  }
}

impl NotificationItem for TaskStatusUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let task = cx.require(self.task.as_ref(), "task")?;
    Ok(format!("Marked {} as {}", task.name, self.new_status.label()))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskAssigneeUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let task = cx.require(self.task.as_ref(), "task")?;
    let f = match (&self.old_assignee, &self.new_assignee) {
      (_, Some(new)) => cx
        .by_author()
        .text("assigned")
        .span(phrase::person(cx, new))
        .text("to the task"),
      (Some(_), None) => cx.by_author().text("removed the assignee from the task"),
      (None, None) => cx.by_author().text("updated the assignee of the task"),
    };
    let f = f.link(links::task(cx.paths, task));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(match (&self.old_assignee, &self.new_assignee) {
      (None, None) => None,
      (old, new) => Some(phrase::person_change(old.as_ref(), new.as_ref())),
    })
  }
}

impl NotificationItem for TaskAssigneeUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let task = cx.require(self.task.as_ref(), "task")?;
    Ok(match &self.new_assignee {
      Some(new) => format!("Assigned {} to {}", new.full_name, task.name),
      None => format!("Removed the assignee from {}", task.name),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskDueDateUpdating {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let task = cx.require(self.task.as_ref(), "task")?;
    let f = cx
      .by_author()
      .text("changed the due date of the task")
      .link(links::task(cx.paths, task));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      phrase::opt_date(self.old_due_date),
      phrase::opt_date(self.new_due_date),
    )))
  }
}

impl NotificationItem for TaskDueDateUpdating {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let task = cx.require(self.task.as_ref(), "task")?;
    Ok(match phrase::opt_date(self.new_due_date) {
      Some(date) => format!("Changed the due date of {} to {date}", task.name),
      None => format!("Removed the due date of {}", task.name),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskDescriptionChange {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let task = cx.require(self.task.as_ref(), "task")?;
    let f = cx
      .by_author()
      .text("updated the description of the task")
      .link(links::task(cx.paths, task));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::summary(&self.description))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for TaskDescriptionChange {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let task = cx.require(self.task.as_ref(), "task")?;
    Ok(format!("Updated the description of {}", task.name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

impl FeedItem for TaskDeleting {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("deleted the task").text(phrase::quoted(&self.task_name));
    Ok(phrase::in_project(f, cx, self.project.as_ref()))
  }
}

impl NotificationItem for TaskDeleting {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the task {}", phrase::quoted(&self.task_name)))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(project_name(self.project.as_ref()))
  }
}

feed_only!(
  TaskAdding,
  TaskNameEditing,
  TaskStatusUpdating,
  TaskAssigneeUpdating,
  TaskDueDateUpdating,
  TaskDescriptionChange,
  TaskDeleting,
);
