use huddle_core::{ActionKind, FeedEntry};
use serde_json::json;
use strum::IntoEnumIterator;

use crate::{
  Error, Page, Renderer, registry,
  test_support::{TestPaths, activity, aggregate, full_payload, with_comments},
  view::{Alignment, CommentBadge, FeedContent, Tone},
};

fn renderer() -> Renderer<'static> { Renderer::new(&TestPaths) }

// ─── Dispatch ────────────────────────────────────────────────────────────────

#[test]
fn every_supported_action_renders_feed_and_notification() {
  let r = renderer();
  let mut with_pages = 0;

  for kind in ActionKind::iter() {
    assert_eq!(registry::resolve(kind.as_str()).unwrap(), kind);

    let a = activity(kind, full_payload());
    let item = r
      .feed_item(&a, None)
      .unwrap_or_else(|e| panic!("{kind}: feed item failed: {e}"));
    assert!(item.title.to_string().starts_with("Grace "), "{kind}: {}", item.title);
    assert_eq!(item.action, kind.as_str());

    let notification = r
      .notification(&a)
      .unwrap_or_else(|e| panic!("{kind}: notification failed: {e}"));
    assert!(!notification.title.is_empty(), "{kind}");
    assert_eq!(notification.author, "Grace Hopper");

    if registry::capabilities(&a.content).page {
      with_pages += 1;
      r.page(&a).unwrap_or_else(|e| panic!("{kind}: page failed: {e}"));
    } else {
      assert!(matches!(r.page_path(&a), Err(Error::NotImplemented { .. })), "{kind}");
    }
  }

  assert_eq!(with_pages, 7);
}

#[test]
fn unknown_action_fails_with_its_name() {
  let err = registry::resolve("not_a_real_action").unwrap_err();
  assert_eq!(err.to_string(), "Unknown activity action: not_a_real_action");
}

#[test]
fn capabilities_follow_the_handler() {
  let closing = activity(ActionKind::GoalClosing, full_payload());
  let renamed = activity(ActionKind::ProjectRenamed, full_payload());

  let caps = registry::capabilities(&closing.content);
  assert!(caps.page && caps.comments);
  let caps = registry::capabilities(&renamed.content);
  assert!(!caps.page && !caps.comments);
}

// ─── Context suppression ─────────────────────────────────────────────────────

fn project_renamed() -> huddle_core::Activity {
  activity(
    ActionKind::ProjectRenamed,
    json!({
      "project": { "id": "pr1", "name": "Apollo" },
      "oldName": "Gemini",
      "newName": "Apollo",
    }),
  )
}

#[test]
fn project_rename_omits_the_project_on_its_own_page() {
  let title = renderer()
    .feed_item_title(&project_renamed(), Some(Page::Project))
    .unwrap();
  assert_eq!(title.to_string(), "Grace renamed the project");
  assert_eq!(title.links().count(), 0);
}

#[test]
fn project_rename_links_the_project_elsewhere() {
  let r = renderer();
  for page in [Some(Page::Space), None] {
    let title = r.feed_item_title(&project_renamed(), page).unwrap();
    assert_eq!(title.to_string(), "Grace renamed the project Apollo");
    let paths: Vec<_> = title.links().map(|l| l.path.as_str()).collect();
    assert_eq!(paths, ["/projects/pr1"]);
  }
}

#[test]
fn space_clause_is_dropped_on_a_space_page() {
  let a = activity(
    ActionKind::ResourceHubDocumentEdited,
    json!({
      "space": { "id": "s1", "name": "Ops" },
      "document": { "id": "d1", "name": "Plan" },
      "name": "Plan",
    }),
  );
  let r = renderer();
  assert_eq!(
    r.feed_item_title(&a, None).unwrap().to_string(),
    "Grace edited the document Plan in the Ops space"
  );
  assert_eq!(
    r.feed_item_title(&a, Some(Page::Space)).unwrap().to_string(),
    "Grace edited the document Plan"
  );
}

// ─── Goal closing, end to end ────────────────────────────────────────────────

fn goal_closing() -> huddle_core::Activity {
  activity(
    ActionKind::GoalClosing,
    json!({
      "goal": { "id": "g1", "name": "Q3 Revenue" },
      "successStatus": "achieved",
    }),
  )
}

#[test]
fn goal_closing_on_the_goal_page() {
  let r = renderer();
  let a = goal_closing();

  let item = r.feed_item(&a, Some(Page::Goal)).unwrap();
  assert_eq!(item.title.to_string(), "Grace closed the goal");
  assert_eq!(item.title.links().count(), 0);
  assert_eq!(item.alignment, Alignment::ItemsStart);

  let content = item.content.expect("closing has a body");
  let badges = content.badges();
  assert_eq!(badges.len(), 1);
  assert_eq!(badges[0].label, "achieved");
  assert_eq!(badges[0].tone, Tone::Success);
}

#[test]
fn goal_closing_elsewhere_links_the_goal() {
  let title = renderer().feed_item_title(&goal_closing(), None).unwrap();
  assert_eq!(title.to_string(), "Grace closed the goal Q3 Revenue");
}

#[test]
fn missed_goal_is_a_danger_badge() {
  let a = activity(
    ActionKind::GoalClosing,
    json!({
      "goal": { "id": "g1", "name": "Q3 Revenue" },
      "successStatus": "missed",
      "message": {
        "type": "doc",
        "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Slipped." }] }],
      },
    }),
  );
  let content = renderer().feed_item_content(&a, None).unwrap().unwrap();
  let FeedContent::Stack { items } = &content else {
    panic!("expected a badge and a summary, got {content:?}");
  };
  assert_eq!(items.len(), 2);
  assert_eq!(content.badges()[0].tone, Tone::Danger);
}

#[test]
fn empty_closing_message_adds_no_summary() {
  let a = activity(
    ActionKind::GoalClosing,
    json!({
      "goal": { "id": "g1", "name": "Q3 Revenue" },
      "successStatus": "missed",
      "message": { "type": "doc", "content": [] },
    }),
  );
  let content = renderer().feed_item_content(&a, None).unwrap().unwrap();
  assert!(matches!(content, FeedContent::Status { .. }), "{content:?}");
}

#[test]
fn empty_comment_has_no_feed_content() {
  let a = activity(
    ActionKind::CommentAdded,
    json!({
      "comment": { "id": "co1", "content": { "type": "doc", "content": [] } },
    }),
  );
  assert_eq!(renderer().feed_item_content(&a, None).unwrap(), None);
}

#[test]
fn project_check_in_with_issue_status() {
  let a = activity(
    ActionKind::ProjectCheckInSubmitted,
    json!({
      "project": { "id": "pr1", "name": "Apollo" },
      "checkIn": { "id": "ci1", "status": "issue" },
    }),
  );
  let r = renderer();

  let content = r.feed_item_content(&a, None).unwrap().unwrap();
  let badges = content.badges();
  assert_eq!(badges.len(), 1);
  assert_eq!(badges[0].label, "issue");
  assert_eq!(badges[0].tone, Tone::Danger);

  assert_eq!(r.notification_title(&a).unwrap(), "Submitted a check-in: issue");
  assert_eq!(r.page_path(&a).unwrap(), "/project-check-ins/ci1");
}

#[test]
fn feed_with_issue_check_in_decodes() {
  let entries: Vec<FeedEntry> = serde_json::from_value(json!([{
    "id": "a2",
    "action": "project_check_in_submitted",
    "author": { "id": "p1", "fullName": "Grace Hopper" },
    "content": {
      "project": { "id": "pr1", "name": "Apollo" },
      "checkIn": { "id": "ci1", "status": "issue" },
    },
    "insertedAt": "2025-03-01T12:00:00Z",
  }]))
  .unwrap();
  let item = renderer().feed_item(&entries[0], Some(Page::Project)).unwrap();
  assert_eq!(item.action, "project_check_in_submitted");
}

#[test]
fn goal_closing_page_and_notification() {
  let r = renderer();
  let a = with_comments(goal_closing(), 3);

  let page = r.page(&a).unwrap();
  assert_eq!(page.path, "/activities/a1");
  assert_eq!(page.html_title, "Goal closed: Q3 Revenue");
  assert_eq!(page.title.to_string(), "Grace closed the goal Q3 Revenue");
  assert_eq!(
    page.comments,
    Some(CommentBadge {
      count:        3,
      has_comments: true,
    })
  );

  let n = r.notification(&a).unwrap();
  assert_eq!(n.title, "Closed the goal as achieved");
  assert_eq!(n.location.as_deref(), Some("Q3 Revenue"));
}

#[test]
fn absent_thread_means_no_comments() {
  let r = renderer();
  let a = goal_closing();
  assert_eq!(r.comment_count(&a).unwrap(), 0);
  assert!(!r.has_comments(&a).unwrap());
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[test]
fn page_operations_on_a_feed_only_action_are_not_implemented() {
  let err = renderer().page_title(&project_renamed()).unwrap_err();
  assert_eq!(err.to_string(), "page_title is not implemented for project_renamed");

  let err = renderer().comment_count(&project_renamed()).unwrap_err();
  assert!(matches!(
    err,
    Error::NotImplemented {
      action:    "project_renamed",
      operation: "comment_count",
    }
  ));
}

#[test]
fn missing_required_reference_names_the_field() {
  let a = activity(ActionKind::GoalClosing, json!({ "successStatus": "achieved" }));
  let err = renderer().feed_item_title(&a, None).unwrap_err();
  assert!(matches!(
    err,
    Error::MissingField {
      action: "goal_closing",
      field:  "goal",
    }
  ));
  assert_eq!(err.to_string(), "goal_closing: missing required field `goal`");
}

#[test]
fn deleted_entity_falls_back_to_its_last_known_name() {
  let a = activity(
    ActionKind::ProjectArchived,
    json!({ "project": null, "projectName": "Apollo" }),
  );
  let title = renderer().feed_item_title(&a, None).unwrap();
  assert_eq!(title.to_string(), "Grace archived the project Apollo");
  assert_eq!(title.links().count(), 0);
}

// ─── Optional counterparts ───────────────────────────────────────────────────

#[test]
fn task_assignee_assigned_and_removed() {
  let r = renderer();
  let task = json!({ "id": "t1", "name": "Ship it" });
  let ada = json!({ "id": "p2", "fullName": "Ada Lovelace" });

  let assigned = activity(
    ActionKind::TaskAssigneeUpdating,
    json!({ "task": task.clone(), "newAssignee": ada.clone() }),
  );
  assert_eq!(
    r.feed_item_title(&assigned, None).unwrap().to_string(),
    "Grace assigned Ada Lovelace to the task Ship it"
  );

  let removed = activity(
    ActionKind::TaskAssigneeUpdating,
    json!({ "task": task, "oldAssignee": ada }),
  );
  assert_eq!(
    r.feed_item_title(&removed, None).unwrap().to_string(),
    "Grace removed the assignee from the task Ship it"
  );
  assert_eq!(
    r.notification_title(&removed).unwrap(),
    "Removed the assignee from Ship it"
  );
}

#[test]
fn champion_cleared_without_a_previous_champion() {
  let a = activity(
    ActionKind::GoalChampionUpdating,
    json!({ "goal": { "id": "g1", "name": "Q3 Revenue" } }),
  );
  assert_eq!(
    renderer().feed_item_title(&a, Some(Page::Goal)).unwrap().to_string(),
    "Grace cleared the champion of the goal"
  );
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

fn document_edit(name: &str) -> huddle_core::Activity {
  activity(
    ActionKind::ResourceHubDocumentEdited,
    json!({
      "space": { "id": "s1", "name": "Ops" },
      "document": { "id": name, "name": name },
      "name": name,
    }),
  )
}

#[test]
fn aggregate_deduplicates_names() {
  let agg = aggregate(vec![
    document_edit("Doc A"),
    document_edit("Doc B"),
    document_edit("Doc A"),
  ]);
  let r = renderer();

  let item = r.feed_item(&agg, None).unwrap();
  assert_eq!(item.action, "aggregated");
  assert_eq!(item.title.to_string(), "Grace edited Doc A and Doc B in the Ops space");
  assert_eq!(item.content, Some(FeedContent::text("3 related changes")));
  assert_eq!(item.comments, None);

  let on_space = r.feed_item_title(&agg, Some(Page::Space)).unwrap();
  assert_eq!(on_space.to_string(), "Grace edited Doc A and Doc B");

  let n = r.notification(&agg).unwrap();
  assert_eq!(n.title, "Edited Doc A and Doc B");
  assert_eq!(n.location.as_deref(), Some("Ops"));
}

#[test]
fn aggregate_of_the_same_goal_lists_it_once() {
  let change = || {
    activity(
      ActionKind::GoalDescriptionChanged,
      json!({ "goal": { "id": "g1", "name": "Q3 Revenue" } }),
    )
  };
  let agg = aggregate(vec![change(), change()]);
  let title = renderer().feed_item_title(&agg, Some(Page::Goal)).unwrap();
  assert_eq!(title.to_string(), "Grace updated Q3 Revenue");
}

#[test]
fn aggregate_without_names_falls_back_to_items() {
  let pause = || activity(ActionKind::ProjectPausing, json!({}));
  let agg = aggregate(vec![pause(), pause()]);
  let title = renderer().feed_item_title(&agg, None).unwrap();
  assert_eq!(title.to_string(), "Grace modified items");
}

#[test]
fn aggregates_have_no_pages_or_comments() {
  let agg = aggregate(vec![document_edit("Doc A")]);
  let r = renderer();

  assert!(matches!(
    r.page_path(&agg),
    Err(Error::NotImplemented {
      action:    "aggregated",
      operation: "page_path",
    })
  ));
  assert!(r.page(&agg).is_err());
  assert!(r.has_comments(&agg).is_err());
}

#[test]
fn feed_entries_decode_and_render() {
  let entry: FeedEntry = serde_json::from_value(json!({
    "action": "aggregated",
    "author": { "id": "p1", "fullName": "Grace Hopper" },
    "insertedAt": "2025-03-01T12:00:00Z",
    "activities": [{
      "id": "a1",
      "action": "project_renamed",
      "author": { "id": "p1", "fullName": "Grace Hopper" },
      "content": {
        "project": { "id": "pr1", "name": "Apollo" },
        "oldName": "Gemini",
        "newName": "Apollo",
      },
      "insertedAt": "2025-03-01T12:00:00Z",
    }],
  }))
  .unwrap();

  let title = renderer().feed_item_title(&entry, Some(Page::Project)).unwrap();
  assert_eq!(title.to_string(), "Grace renamed Apollo");
}
