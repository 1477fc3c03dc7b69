//! The rendering facade.
//!
//! [`Renderer`] is the only entry point callers need: it takes a single
//! activity, an aggregate, or a [`FeedEntry`], dispatches to the right
//! handler, and answers with render descriptions.

use huddle_core::{
  Activity, AggregatedActivity, FeedEntry, aggregate::AGGREGATED_ACTION,
};

use crate::{
  Error, Result,
  aggregation::Summary,
  contract::{ActivityHandler, ActivityPage, Commentable, RenderCx},
  paths::{Page, PathResolver},
  registry,
  view::{
    Alignment, CommentBadge, FeedContent, FeedItemView, Fragment, NotificationView,
    PageContent, PageOption, PageView,
  },
};

// ─── Entry ───────────────────────────────────────────────────────────────────

/// A borrowed feed entry: one activity or an aggregate of several.
#[derive(Debug, Clone, Copy)]
pub enum EntryRef<'a> {
  Single(&'a Activity),
  Aggregated(&'a AggregatedActivity),
}

impl<'a> EntryRef<'a> {
  pub fn action(&self) -> &'static str {
    match self {
      Self::Single(a) => a.action(),
      Self::Aggregated(_) => AGGREGATED_ACTION,
    }
  }
}

impl<'a> From<&'a Activity> for EntryRef<'a> {
  fn from(activity: &'a Activity) -> Self { Self::Single(activity) }
}

impl<'a> From<&'a AggregatedActivity> for EntryRef<'a> {
  fn from(aggregate: &'a AggregatedActivity) -> Self { Self::Aggregated(aggregate) }
}

impl<'a> From<&'a FeedEntry> for EntryRef<'a> {
  fn from(entry: &'a FeedEntry) -> Self {
    match entry {
      FeedEntry::Single(a) => Self::Single(a),
      FeedEntry::Aggregated(a) => Self::Aggregated(a),
    }
  }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Renders activities against an injected path resolver. Holds no state of
/// its own; cheap to construct per request.
#[derive(Clone, Copy)]
pub struct Renderer<'p> {
  paths: &'p dyn PathResolver,
}

impl<'p> Renderer<'p> {
  pub fn new(paths: &'p dyn PathResolver) -> Self { Self { paths } }

  fn cx<'a>(&'a self, activity: &'a Activity, page: Option<Page>) -> RenderCx<'a> {
    RenderCx::new(activity, self.paths, page)
  }

  fn handler(activity: &Activity) -> &dyn ActivityHandler { registry::handler(&activity.content) }

  fn unsupported(action: &'static str, operation: &'static str) -> Error {
    tracing::warn!(action, operation, "operation is not supported for this activity");
    Error::NotImplemented { action, operation }
  }

  fn page_handler<'e>(
    entry: EntryRef<'e>,
    operation: &'static str,
  ) -> Result<(&'e Activity, &'e dyn ActivityPage)> {
    let EntryRef::Single(activity) = entry else {
      return Err(Self::unsupported(AGGREGATED_ACTION, operation));
    };
    let page = Self::handler(activity)
      .page()
      .ok_or_else(|| Self::unsupported(activity.action(), operation))?;
    Ok((activity, page))
  }

  fn comment_handler<'e>(
    entry: EntryRef<'e>,
    operation: &'static str,
  ) -> Result<(&'e Activity, &'e dyn Commentable)> {
    let EntryRef::Single(activity) = entry else {
      return Err(Self::unsupported(AGGREGATED_ACTION, operation));
    };
    let comments = Self::handler(activity)
      .comments()
      .ok_or_else(|| Self::unsupported(activity.action(), operation))?;
    Ok((activity, comments))
  }

  // ─── Pages ─────────────────────────────────────────────────────────────────

  pub fn page_path<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<String> {
    let (activity, page) = Self::page_handler(entry.into(), "page_path")?;
    page.page_path(&self.cx(activity, None))
  }

  pub fn page_html_title<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<String> {
    let (activity, page) = Self::page_handler(entry.into(), "page_html_title")?;
    page.page_html_title(&self.cx(activity, None))
  }

  pub fn page_title<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<Fragment> {
    let (activity, page) = Self::page_handler(entry.into(), "page_title")?;
    page.page_title(&self.cx(activity, None))
  }

  pub fn page_content<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<PageContent> {
    let (activity, page) = Self::page_handler(entry.into(), "page_content")?;
    page.page_content(&self.cx(activity, None))
  }

  pub fn page_options<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<Vec<PageOption>> {
    let (activity, page) = Self::page_handler(entry.into(), "page_options")?;
    page.page_options(&self.cx(activity, None))
  }

  // ─── Feed ──────────────────────────────────────────────────────────────────

  pub fn feed_item_title<'e>(
    &self,
    entry: impl Into<EntryRef<'e>>,
    page: Option<Page>,
  ) -> Result<Fragment> {
    match entry.into() {
      EntryRef::Single(a) => Self::handler(a).feed_item_title(&self.cx(a, page)),
      EntryRef::Aggregated(agg) => Summary::new(agg, self.paths, page).feed_item_title(),
    }
  }

  pub fn feed_item_content<'e>(
    &self,
    entry: impl Into<EntryRef<'e>>,
    page: Option<Page>,
  ) -> Result<Option<FeedContent>> {
    match entry.into() {
      EntryRef::Single(a) => Self::handler(a).feed_item_content(&self.cx(a, page)),
      EntryRef::Aggregated(agg) => Summary::new(agg, self.paths, page).feed_item_content(),
    }
  }

  pub fn feed_item_alignment<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Alignment {
    match entry.into() {
      EntryRef::Single(a) => Self::handler(a).feed_item_alignment(),
      EntryRef::Aggregated(agg) => Summary::new(agg, self.paths, None).feed_item_alignment(),
    }
  }

  // ─── Comments ──────────────────────────────────────────────────────────────

  pub fn comment_count<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<u32> {
    let (activity, comments) = Self::comment_handler(entry.into(), "comment_count")?;
    Ok(comments.comment_count(&self.cx(activity, None)))
  }

  pub fn has_comments<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<bool> {
    let (activity, comments) = Self::comment_handler(entry.into(), "has_comments")?;
    Ok(comments.has_comments(&self.cx(activity, None)))
  }

  // ─── Notifications ─────────────────────────────────────────────────────────

  pub fn notification_title<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<String> {
    match entry.into() {
      EntryRef::Single(a) => Self::handler(a).notification_title(&self.cx(a, None)),
      EntryRef::Aggregated(agg) => Summary::new(agg, self.paths, None).notification_title(),
    }
  }

  pub fn notification_location<'e>(
    &self,
    entry: impl Into<EntryRef<'e>>,
  ) -> Result<Option<String>> {
    match entry.into() {
      EntryRef::Single(a) => Self::handler(a).notification_location(&self.cx(a, None)),
      EntryRef::Aggregated(agg) => Summary::new(agg, self.paths, None).notification_location(),
    }
  }

  // ─── Bundled views ─────────────────────────────────────────────────────────

  /// Everything a feed row needs, in one call.
  pub fn feed_item<'e>(
    &self,
    entry: impl Into<EntryRef<'e>>,
    page: Option<Page>,
  ) -> Result<FeedItemView> {
    let entry = entry.into();
    let (comments, inserted_at) = match entry {
      EntryRef::Single(a) => (self.comment_badge(a), a.inserted_at),
      EntryRef::Aggregated(agg) => (None, agg.inserted_at()),
    };
    Ok(FeedItemView {
      action: entry.action(),
      title: self.feed_item_title(entry, page)?,
      content: self.feed_item_content(entry, page)?,
      alignment: self.feed_item_alignment(entry),
      comments,
      inserted_at,
    })
  }

  /// Everything a notification row needs, in one call.
  pub fn notification<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<NotificationView> {
    let entry = entry.into();
    let author = match entry {
      EntryRef::Single(a) => &a.author,
      EntryRef::Aggregated(agg) => agg.author(),
    };
    Ok(NotificationView {
      action:   entry.action(),
      author:   author.full_name.clone(),
      title:    self.notification_title(entry)?,
      location: self.notification_location(entry)?,
    })
  }

  /// The standalone page for an activity that has one.
  pub fn page<'e>(&self, entry: impl Into<EntryRef<'e>>) -> Result<PageView> {
    let entry = entry.into();
    let (activity, _) = Self::page_handler(entry, "page")?;
    Ok(PageView {
      path:       self.page_path(entry)?,
      html_title: self.page_html_title(entry)?,
      title:      self.page_title(entry)?,
      content:    self.page_content(entry)?,
      options:    self.page_options(entry)?,
      comments:   self.comment_badge(activity),
    })
  }

  fn comment_badge(&self, activity: &Activity) -> Option<CommentBadge> {
    let comments = Self::handler(activity).comments()?;
    let cx = self.cx(activity, None);
    Some(CommentBadge {
      count:        comments.comment_count(&cx),
      has_comments: comments.has_comments(&cx),
    })
  }
}
