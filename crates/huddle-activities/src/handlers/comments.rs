use huddle_core::content::CommentAdded;

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  phrase,
  view::{Alignment, FeedContent, Fragment},
};

impl FeedItem for CommentAdded {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let title = self.thread_title.as_deref().unwrap_or("an update");
    let f = cx.by_author().text("commented on").text(title);
    let f = phrase::in_goal(f, cx, self.goal.as_ref());
    let f = phrase::in_project(f, cx, self.project.as_ref());
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for CommentAdded {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match &self.thread_title {
      Some(title) => format!("Re: {title}"),
      None => "Commented".to_string(),
    })
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    let location = self
      .goal
      .as_ref()
      .map(|g| g.name.clone())
      .or_else(|| self.project.as_ref().map(|p| p.name.clone()))
      .or_else(|| self.space.as_ref().map(|s| s.name.clone()));
    Ok(location)
  }
}

feed_only!(CommentAdded);
