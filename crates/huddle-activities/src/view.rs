//! Render descriptions: the values handed back to feed, notification and
//! page containers. Nothing here is retained by the renderer.

use std::fmt;

use chrono::{DateTime, Utc};
use huddle_core::refs::RichText;
use serde::Serialize;

/// Character budget for rich-text previews in feed items.
pub const SUMMARY_LIMIT: usize = 200;

// ─── Links and spans ─────────────────────────────────────────────────────────

/// A navigable reference: where to go and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
  pub path:  String,
  pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
  Text { text: String },
  Link { link: Link },
  Person { name: String, path: String },
}

impl Span {
  fn as_text(&self) -> &str {
    match self {
      Span::Text { text } => text,
      Span::Link { link } => &link.label,
      Span::Person { name, .. } => name,
    }
  }
}

// ─── Fragment ────────────────────────────────────────────────────────────────

/// An inline sentence made of text, links and person mentions.
///
/// Spans pushed with the word-level builders are separated by one space;
/// text starting with closing punctuation is glued to what precedes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fragment {
  spans: Vec<Span>,
}

impl Fragment {
  pub fn new() -> Self { Self::default() }

  pub fn spans(&self) -> &[Span] { &self.spans }

  pub fn is_empty(&self) -> bool { self.spans.is_empty() }

  pub fn links(&self) -> impl Iterator<Item = &Link> {
    self.spans.iter().filter_map(|s| match s {
      Span::Link { link } => Some(link),
      _ => None,
    })
  }

  pub fn text(self, text: impl Into<String>) -> Self {
    self.push(Span::Text { text: text.into() })
  }

  pub fn link(self, link: Link) -> Self { self.push(Span::Link { link }) }

  pub fn span(self, span: Span) -> Self { self.push(span) }

  pub fn person(self, name: impl Into<String>, path: impl Into<String>) -> Self {
    self.push(Span::Person {
      name: name.into(),
      path: path.into(),
    })
  }

  /// Append another fragment as the next word group.
  pub fn append(mut self, other: Fragment) -> Self {
    let mut spans = other.spans.into_iter();
    if let Some(first) = spans.next() {
      self = self.push(first);
      self.spans.extend(spans);
    }
    self
  }

  /// Append a span without a separating space.
  pub fn glued(mut self, span: Span) -> Self {
    self.spans.push(span);
    self
  }

  fn push(mut self, span: Span) -> Self {
    let needs_space = !self.spans.is_empty()
      && !span
        .as_text()
        .starts_with([',', '.', ':', ';', ')', '!', '?']);
    if needs_space {
      self.spans.push(Span::Text { text: " ".into() });
    }
    self.spans.push(span);
    self
  }
}

impl fmt::Display for Fragment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for span in &self.spans {
      f.write_str(span.as_text())?;
    }
    Ok(())
  }
}

// ─── Feed content ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
  Success,
  Warning,
  Danger,
  Neutral,
}

/// A small status indicator, e.g. "achieved" or "on track".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
  pub label: String,
  pub tone:  Tone,
}

/// Supplementary detail shown under a feed item title or on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedContent {
  Text { text: String },
  /// A rich-text document to be previewed by the rich-content renderer.
  Summary { content: RichText, limit: usize },
  /// A before → after pair. Either side may be absent ("no due date").
  Change {
    label: Option<String>,
    from:  Option<String>,
    to:    Option<String>,
  },
  Status { badge: Badge },
  Stack { items: Vec<FeedContent> },
}

impl FeedContent {
  pub fn text(text: impl Into<String>) -> Self { Self::Text { text: text.into() } }

  pub fn summary(content: &RichText) -> Self {
    Self::Summary {
      content: content.clone(),
      limit:   SUMMARY_LIMIT,
    }
  }

  pub fn change(from: Option<String>, to: Option<String>) -> Self {
    Self::Change {
      label: None,
      from,
      to,
    }
  }

  pub fn labeled_change(
    label: impl Into<String>,
    from: Option<String>,
    to: Option<String>,
  ) -> Self {
    Self::Change {
      label: Some(label.into()),
      from,
      to,
    }
  }

  pub fn status(label: impl Into<String>, tone: Tone) -> Self {
    Self::Status {
      badge: Badge {
        label: label.into(),
        tone,
      },
    }
  }

  /// Collapse a list of parts: nothing → `None`, one → itself.
  pub fn stack(mut items: Vec<FeedContent>) -> Option<Self> {
    match items.len() {
      0 => None,
      1 => items.pop(),
      _ => Some(Self::Stack { items }),
    }
  }

  /// Every badge in this content, depth first.
  pub fn badges(&self) -> Vec<&Badge> {
    match self {
      Self::Status { badge } => vec![badge],
      Self::Stack { items } => items.iter().flat_map(Self::badges).collect(),
      _ => Vec::new(),
    }
  }
}

/// Layout hint for the feed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
  /// Content-bearing items: comments, long text.
  #[serde(rename = "items-start")]
  ItemsStart,
  /// Simple state changes.
  #[serde(rename = "items-center")]
  ItemsCenter,
}

impl Alignment {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::ItemsStart => "items-start",
      Self::ItemsCenter => "items-center",
    }
  }
}

// ─── Pages ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageContent {
  pub blocks: Vec<FeedContent>,
}

/// A page-level action, e.g. "Edit".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOption {
  pub label: String,
  pub path:  String,
}

// ─── Bundled views ───────────────────────────────────────────────────────────

/// The comment affordance on a feed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentBadge {
  pub count:        u32,
  pub has_comments: bool,
}

/// Everything a feed row needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItemView {
  pub action:      &'static str,
  pub title:       Fragment,
  pub content:     Option<FeedContent>,
  pub alignment:   Alignment,
  pub comments:    Option<CommentBadge>,
  pub inserted_at: DateTime<Utc>,
}

/// Everything a notification row needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationView {
  pub action:   &'static str,
  pub author:   String,
  pub title:    String,
  pub location: Option<String>,
}

/// A standalone activity page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
  pub path:       String,
  pub html_title: String,
  pub title:      Fragment,
  pub content:    PageContent,
  pub options:    Vec<PageOption>,
  pub comments:   Option<CommentBadge>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fragments_join_words_with_single_spaces() {
    let f = Fragment::new()
      .person("Ada", "/people/1")
      .text("renamed the project")
      .link(Link {
        path:  "/projects/1".into(),
        label: "Apollo".into(),
      });
    assert_eq!(f.to_string(), "Ada renamed the project Apollo");
    assert_eq!(f.links().count(), 1);
  }

  #[test]
  fn punctuation_is_glued() {
    let f = Fragment::new().text("Bob").text(", Carol").text(".");
    assert_eq!(f.to_string(), "Bob, Carol.");
  }

  #[test]
  fn stack_collapses_trivial_lists() {
    assert_eq!(FeedContent::stack(vec![]), None);
    assert_eq!(
      FeedContent::stack(vec![FeedContent::text("x")]),
      Some(FeedContent::text("x"))
    );
  }

  #[test]
  fn badges_are_found_inside_stacks() {
    let content = FeedContent::Stack {
      items: vec![
        FeedContent::text("x"),
        FeedContent::status("achieved", Tone::Success),
      ],
    };
    let labels: Vec<_> = content.badges().iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["achieved"]);
  }
}
