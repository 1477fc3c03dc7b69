//! Phrase building shared by the handlers.

use chrono::NaiveDate;
use huddle_core::refs::{
  Comment, Goal, MemberAccess, Person, Project, ProjectHealth, RichText, Space, SuccessStatus,
  Timeframe,
};

use crate::{
  contract::RenderCx,
  links,
  paths::Page,
  view::{FeedContent, Fragment, Span, Tone},
};

// ─── Lists and counts ────────────────────────────────────────────────────────

/// `A`, `A and B`, `A, B, and C`. Empty input gives an empty string.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
  match items {
    [] => String::new(),
    [one] => one.as_ref().to_string(),
    [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
    [init @ .., last] => {
      let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
      format!("{}, and {}", head.join(", "), last.as_ref())
    }
  }
}

pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
  if count == 1 {
    format!("1 {singular}")
  } else {
    format!("{count} {plural}")
  }
}

/// People as linked mentions, joined like [`join_list`].
pub(crate) fn people(cx: &RenderCx<'_>, people: &[Person]) -> Fragment {
  let mut f = Fragment::new();
  let last = people.len().saturating_sub(1);
  for (i, person) in people.iter().enumerate() {
    if i > 0 {
      let sep = match (people.len(), i == last) {
        (2, _) => "and",
        (_, true) => ", and",
        _ => ",",
      };
      f = f.text(sep);
    }
    f = f.link(links::person(cx.paths, person));
  }
  f
}

pub(crate) fn person(cx: &RenderCx<'_>, person: &Person) -> Span {
  Span::Link {
    link: links::person(cx.paths, person),
  }
}

/// `assigned <new> as the <role> of`, `removed <old> as the <role> of`, or
/// `cleared the <role> of` when there was nobody before or after.
pub(crate) fn role_change(
  cx: &RenderCx<'_>,
  role: &str,
  old: Option<&Person>,
  new: Option<&Person>,
) -> Fragment {
  match (old, new) {
    (_, Some(new)) => Fragment::new()
      .text("assigned")
      .span(person(cx, new))
      .text(format!("as the {role} of")),
    (Some(old), None) => Fragment::new()
      .text("removed")
      .span(person(cx, old))
      .text(format!("as the {role} of")),
    (None, None) => Fragment::new().text(format!("cleared the {role} of")),
  }
}

/// Notification form of [`role_change`].
pub(crate) fn role_change_text(role: &str, old: Option<&Person>, new: Option<&Person>) -> String {
  match (old, new) {
    (_, Some(new)) => format!("Assigned {} as {role}", new.full_name),
    (Some(old), None) => format!("Removed {} as {role}", old.full_name),
    (None, None) => format!("Cleared the {role}"),
  }
}

// ─── Dates ───────────────────────────────────────────────────────────────────

/// `Mar 4, 2025`.
pub(crate) fn date(d: NaiveDate) -> String { d.format("%b %-d, %Y").to_string() }

pub(crate) fn opt_date(d: Option<NaiveDate>) -> Option<String> { d.map(date) }

pub(crate) fn timeframe(t: &Timeframe) -> String {
  format!("{} – {}", date(t.start_date), date(t.end_date))
}

// ─── Resource phrases ────────────────────────────────────────────────────────

/// `the goal <link>`, or just `the goal` on that goal's page.
pub(crate) fn the_goal(cx: &RenderCx<'_>, goal: &Goal) -> Fragment {
  let f = Fragment::new().text("the goal");
  if cx.on(Page::Goal) { f } else { f.link(links::goal(cx.paths, goal)) }
}

/// `the project <link>`, or just `the project` on that project's page.
pub(crate) fn the_project(cx: &RenderCx<'_>, project: &Project) -> Fragment {
  let f = Fragment::new().text("the project");
  if cx.on(Page::Project) {
    f
  } else {
    f.link(links::project(cx.paths, project))
  }
}

/// `the <link> space`, or just `the space` on that space's page.
pub(crate) fn the_space(cx: &RenderCx<'_>, space: &Space) -> Fragment {
  if cx.on(Page::Space) {
    Fragment::new().text("the space")
  } else {
    Fragment::new()
      .text("the")
      .link(links::space(cx.paths, space))
      .text("space")
  }
}

// ─── Context clauses ─────────────────────────────────────────────────────────

/// Append `in the <space> space` unless already on a space page.
pub(crate) fn in_space(f: Fragment, cx: &RenderCx<'_>, space: Option<&Space>) -> Fragment {
  match space {
    Some(space) if !cx.on(Page::Space) => f
      .text("in the")
      .link(links::space(cx.paths, space))
      .text("space"),
    _ => f,
  }
}

/// Append `in the <project> project` unless already on a project page.
pub(crate) fn in_project(f: Fragment, cx: &RenderCx<'_>, project: Option<&Project>) -> Fragment {
  match project {
    Some(project) if !cx.on(Page::Project) => f
      .text("in the")
      .link(links::project(cx.paths, project))
      .text("project"),
    _ => f,
  }
}

/// Append `in the <goal> goal` unless already on a goal page.
pub(crate) fn in_goal(f: Fragment, cx: &RenderCx<'_>, goal: Option<&Goal>) -> Fragment {
  match goal {
    Some(goal) if !cx.on(Page::Goal) => f
      .text("in the")
      .link(links::goal(cx.paths, goal))
      .text("goal"),
    _ => f,
  }
}

// ─── Bodies ──────────────────────────────────────────────────────────────────

/// Stack whichever parts are present.
pub(crate) fn parts(items: impl IntoIterator<Item = Option<FeedContent>>) -> Option<FeedContent> {
  FeedContent::stack(items.into_iter().flatten().collect())
}

/// A truncated preview of rich text, or nothing if the document is empty.
pub(crate) fn summary(text: &RichText) -> Option<FeedContent> {
  (!text.is_empty()).then(|| FeedContent::summary(text))
}

pub(crate) fn comment(comment: Option<&Comment>) -> Option<FeedContent> {
  comment.and_then(|c| summary(&c.content))
}

pub(crate) fn access_changes(members: &[MemberAccess]) -> Option<FeedContent> {
  FeedContent::stack(
    members
      .iter()
      .map(|m| {
        FeedContent::labeled_change(
          m.person.full_name.clone(),
          Some(m.previous_access_level.label().to_string()),
          Some(m.updated_access_level.label().to_string()),
        )
      })
      .collect(),
  )
}

// ─── Badges ──────────────────────────────────────────────────────────────────

pub(crate) fn success(status: SuccessStatus) -> FeedContent {
  let tone = match status {
    SuccessStatus::Achieved => Tone::Success,
    SuccessStatus::Missed => Tone::Danger,
  };
  FeedContent::status(status.label(), tone)
}

pub(crate) fn health(status: ProjectHealth) -> FeedContent {
  let tone = match status {
    ProjectHealth::OnTrack => Tone::Success,
    ProjectHealth::Caution => Tone::Warning,
    ProjectHealth::Issue => Tone::Danger,
  };
  FeedContent::status(status.label(), tone)
}

/// A before/after pair of people, by full name.
pub(crate) fn person_change(old: Option<&Person>, new: Option<&Person>) -> FeedContent {
  FeedContent::change(
    old.map(|p| p.full_name.clone()),
    new.map(|p| p.full_name.clone()),
  )
}

pub(crate) fn quoted(s: &str) -> String { format!("\"{s}\"") }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_list_uses_an_oxford_comma() {
    assert_eq!(join_list::<&str>(&[]), "");
    assert_eq!(join_list(&["A"]), "A");
    assert_eq!(join_list(&["A", "B"]), "A and B");
    assert_eq!(join_list(&["A", "B", "C"]), "A, B, and C");
    assert_eq!(join_list(&["A", "B", "C", "D"]), "A, B, C, and D");
  }

  #[test]
  fn dates_are_short_and_unpadded() {
    let d = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    assert_eq!(date(d), "Mar 4, 2025");
  }

  #[test]
  fn plural_counts() {
    assert_eq!(plural(1, "file", "files"), "1 file");
    assert_eq!(plural(3, "file", "files"), "3 files");
  }
}
