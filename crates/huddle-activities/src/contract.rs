//! The handler contract, split by capability.
//!
//! Every action renders in the feed and in notifications. Only some have a
//! standalone page, and only those carry a comment thread. A handler exposes
//! the optional capabilities through [`ActivityHandler::page`] and
//! [`ActivityHandler::comments`]; asking for one it lacks is answered by the
//! facade with [`Error::NotImplemented`].

use huddle_core::{Activity, refs::Person};

use crate::{
  Error, Result,
  paths::{Page, PathResolver},
  view::{Alignment, FeedContent, Fragment, PageContent, PageOption},
};

// ─── Render context ──────────────────────────────────────────────────────────

/// Everything a handler may consult besides its own payload.
#[derive(Clone, Copy)]
pub struct RenderCx<'a> {
  pub activity: &'a Activity,
  pub paths:    &'a dyn PathResolver,
  pub page:     Option<Page>,
}

impl<'a> RenderCx<'a> {
  pub fn new(activity: &'a Activity, paths: &'a dyn PathResolver, page: Option<Page>) -> Self {
    Self {
      activity,
      paths,
      page,
    }
  }

  pub fn author(&self) -> &'a Person { &self.activity.author }

  /// Whether the reader is already on a page of this kind.
  pub fn on(&self, page: Page) -> bool { self.page == Some(page) }

  /// A sentence opening with the author's first name.
  pub fn by_author(&self) -> Fragment {
    let author = self.author();
    Fragment::new().person(author.first_name(), self.paths.person(&author.id))
  }

  /// Unwrap a reference this action must always carry.
  pub fn require<'v, T>(&self, value: Option<&'v T>, field: &'static str) -> Result<&'v T> {
    value.ok_or(Error::MissingField {
      action: self.activity.action(),
      field,
    })
  }

  pub fn comments_count(&self) -> u32 {
    self
      .activity
      .comment_thread
      .as_ref()
      .map_or(0, |t| t.comments_count)
  }
}

// ─── Capabilities ────────────────────────────────────────────────────────────

/// Inline rendering in an activity feed.
pub trait FeedItem {
  /// Author-prefixed sentence with embedded links.
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment>;

  /// Supplementary detail, or `None` when the title says it all.
  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> { Ok(None) }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsCenter }
}

/// Short forms for notification lists. The author is shown separately.
pub trait NotificationItem {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String>;

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> { Ok(None) }
}

/// A standalone activity page.
pub trait ActivityPage {
  fn page_path(&self, cx: &RenderCx<'_>) -> Result<String> {
    Ok(cx.paths.activity(&cx.activity.id))
  }

  /// Plain title for the browser tab.
  fn page_html_title(&self, cx: &RenderCx<'_>) -> Result<String>;

  fn page_title(&self, cx: &RenderCx<'_>) -> Result<Fragment>;

  fn page_content(&self, cx: &RenderCx<'_>) -> Result<PageContent>;

  /// Page-level actions; empty when there are none.
  fn page_options(&self, _cx: &RenderCx<'_>) -> Result<Vec<PageOption>> { Ok(Vec::new()) }
}

/// The comment affordance, read from the activity's thread.
pub trait Commentable {
  fn comment_count(&self, cx: &RenderCx<'_>) -> u32 { cx.comments_count() }

  fn has_comments(&self, cx: &RenderCx<'_>) -> bool { self.comment_count(cx) > 0 }
}

/// The full per-action handler.
pub trait ActivityHandler: FeedItem + NotificationItem {
  fn page(&self) -> Option<&dyn ActivityPage> { None }

  fn comments(&self) -> Option<&dyn Commentable> { None }
}

/// Declare that the listed payloads render in the feed and notifications
/// only.
macro_rules! feed_only {
  ($($payload:ty),* $(,)?) => {
    $(impl $crate::contract::ActivityHandler for $payload {})*
  };
}

/// Declare that the listed payloads also have a page and a comment thread.
macro_rules! with_page {
  ($($payload:ty),* $(,)?) => {
    $(
      impl $crate::contract::Commentable for $payload {}

      impl $crate::contract::ActivityHandler for $payload {
        fn page(&self) -> Option<&dyn $crate::contract::ActivityPage> { Some(self) }

        fn comments(&self) -> Option<&dyn $crate::contract::Commentable> { Some(self) }
      }
    )*
  };
}

pub(crate) use {feed_only, with_page};
