//! Space discussions (company-wide messages boards).

use huddle_core::{
  content::{DiscussionCommentSubmitted, DiscussionEditing, DiscussionPosting, MessageArchiving},
  refs::{Discussion, Space},
};

use crate::{
  Result,
  contract::{ActivityPage, FeedItem, NotificationItem, RenderCx, feed_only, with_page},
  links, phrase,
  view::{Alignment, FeedContent, Fragment, PageContent, PageOption, Span},
};

fn discussion_span(cx: &RenderCx<'_>, d: Option<&Discussion>, title: &str) -> Span {
  links::or_name(d, title, |d| links::discussion(cx.paths, d))
}

fn space_name(space: Option<&Space>) -> Option<String> { space.map(|s| s.name.clone()) }

// ─── Posting ─────────────────────────────────────────────────────────────────

impl FeedItem for DiscussionPosting {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("posted")
      .span(discussion_span(cx, self.discussion.as_ref(), &self.title));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.discussion.as_ref().and_then(|d| phrase::summary(&d.body)))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for DiscussionPosting {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Posted: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

impl ActivityPage for DiscussionPosting {
  fn page_path(&self, cx: &RenderCx<'_>) -> Result<String> {
    Ok(match &self.discussion {
      Some(d) => cx.paths.discussion(&d.id),
      None => cx.paths.activity(&cx.activity.id),
    })
  }

  fn page_html_title(&self, _cx: &RenderCx<'_>) -> Result<String> { Ok(self.title.clone()) }

  fn page_title(&self, _cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(Fragment::new().text(self.title.clone()))
  }

  fn page_content(&self, _cx: &RenderCx<'_>) -> Result<PageContent> {
    Ok(PageContent {
      blocks: self
        .discussion
        .as_ref()
        .and_then(|d| phrase::summary(&d.body))
        .into_iter()
        .collect(),
    })
  }

  fn page_options(&self, cx: &RenderCx<'_>) -> Result<Vec<PageOption>> {
    let Some(discussion) = &self.discussion else {
      return Ok(Vec::new());
    };
    Ok(vec![PageOption {
      label: "Edit".to_string(),
      path:  format!("{}/edit", cx.paths.discussion(&discussion.id)),
    }])
  }
}

// ─── Edits and comments ──────────────────────────────────────────────────────

impl FeedItem for DiscussionEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let discussion = cx.require(self.discussion.as_ref(), "discussion")?;
    let f = cx
      .by_author()
      .text("edited")
      .link(links::discussion(cx.paths, discussion));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for DiscussionEditing {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let discussion = cx.require(self.discussion.as_ref(), "discussion")?;
    Ok(format!("Edited: {}", discussion.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

impl FeedItem for DiscussionCommentSubmitted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("commented on")
      .span(discussion_span(cx, self.discussion.as_ref(), &self.title));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for DiscussionCommentSubmitted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Re: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

impl FeedItem for MessageArchiving {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("archived").text(phrase::quoted(&self.title));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for MessageArchiving {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Archived: {}", self.title))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

with_page!(DiscussionPosting);
feed_only!(DiscussionEditing, DiscussionCommentSubmitted, MessageArchiving);
