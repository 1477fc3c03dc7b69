//! Terminal formatting of render descriptions.

use huddle_activities::view::{
  CommentBadge, FeedContent, FeedItemView, NotificationView, PageView,
};

use crate::preview;

const INDENT: &str = "    ";

pub fn feed_item(view: &FeedItemView) -> String {
  let mut lines = vec![format!(
    "{}  {}",
    view.inserted_at.format("%b %-d %H:%M"),
    view.title
  )];
  if let Some(content) = &view.content {
    lines.extend(content_lines(content).into_iter().map(|l| format!("{INDENT}{l}")));
  }
  if let Some(badge) = view.comments.filter(|b| b.has_comments) {
    lines.push(format!("{INDENT}{}", comments(badge)));
  }
  lines.join("\n")
}

pub fn notification(view: &NotificationView, read: bool) -> String {
  let marker = if read { " " } else { "*" };
  match &view.location {
    Some(location) => format!("{marker} {}: {} · {location}", view.author, view.title),
    None => format!("{marker} {}: {}", view.author, view.title),
  }
}

pub fn page(view: &PageView) -> String {
  let mut lines = vec![view.html_title.clone(), view.path.clone(), String::new()];
  lines.push(view.title.to_string());
  for block in &view.content.blocks {
    lines.extend(content_lines(block).into_iter().map(|l| format!("{INDENT}{l}")));
  }
  if let Some(badge) = view.comments {
    lines.push(String::new());
    lines.push(comments(badge));
  }
  if !view.options.is_empty() {
    lines.push(String::new());
    for option in &view.options {
      lines.push(format!("[{}] {}", option.label, option.path));
    }
  }
  lines.join("\n")
}

fn comments(badge: CommentBadge) -> String {
  match badge.count {
    1 => "1 comment".to_string(),
    n => format!("{n} comments"),
  }
}

fn content_lines(content: &FeedContent) -> Vec<String> {
  match content {
    FeedContent::Text { text } => vec![text.clone()],
    FeedContent::Summary { content, limit } => {
      let text = preview::plain_text(content, *limit);
      if text.is_empty() { Vec::new() } else { vec![text] }
    }
    FeedContent::Change { label, from, to } => {
      let from = from.as_deref().unwrap_or("(none)");
      let to = to.as_deref().unwrap_or("(none)");
      match label {
        Some(label) => vec![format!("{label}: {from} → {to}")],
        None => vec![format!("{from} → {to}")],
      }
    }
    FeedContent::Status { badge } => vec![format!("[{}]", badge.label)],
    FeedContent::Stack { items } => items.iter().flat_map(content_lines).collect(),
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use huddle_activities::view::{Alignment, Fragment, PageContent, PageOption, Tone};

  use super::*;

  #[test]
  fn feed_item_with_stacked_content() {
    let view = FeedItemView {
      action:      "goal_closing",
      title:       Fragment::new()
        .person("Grace", "/acme/people/p1")
        .text("closed the goal"),
      content:     FeedContent::stack(vec![
        FeedContent::status("achieved", Tone::Success),
        FeedContent::labeled_change("Due date", None, Some("Jun 30, 2025".into())),
      ]),
      alignment:   Alignment::ItemsStart,
      comments:    Some(CommentBadge {
        count:        2,
        has_comments: true,
      }),
      inserted_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
    };
    assert_eq!(
      feed_item(&view),
      "Mar 1 12:00  Grace closed the goal\n    [achieved]\n    Due date: (none) → Jun 30, \
       2025\n    2 comments"
    );
  }

  #[test]
  fn notification_marks_unread() {
    let view = NotificationView {
      action:   "comment_added",
      author:   "Grace Hopper".into(),
      title:    "Re: Weekly update".into(),
      location: Some("Apollo".into()),
    };
    assert_eq!(
      notification(&view, false),
      "* Grace Hopper: Re: Weekly update · Apollo"
    );
    assert!(notification(&view, true).starts_with("  Grace"));
  }

  #[test]
  fn page_lists_options() {
    let view = PageView {
      path:       "/acme/feed/a1".into(),
      html_title: "Goal closed: Q3 Revenue".into(),
      title:      Fragment::new().text("Grace closed the goal"),
      content:    PageContent {
        blocks: vec![FeedContent::text("Done.")],
      },
      options:    vec![PageOption {
        label: "Edit".into(),
        path:  "/acme/feed/a1/edit".into(),
      }],
      comments:   Some(CommentBadge {
        count:        1,
        has_comments: true,
      }),
    };
    let out = page(&view);
    assert!(out.starts_with("Goal closed: Q3 Revenue\n/acme/feed/a1\n\nGrace closed the goal"));
    assert!(out.contains("    Done."));
    assert!(out.contains("1 comment\n"));
    assert!(out.ends_with("[Edit] /acme/feed/a1/edit"));
  }
}
