use huddle_core::content::{
  SpaceAdded, SpaceEditing, SpaceJoining, SpaceMemberRemoved, SpaceMembersAdded,
  SpaceMembersPermissionsEditing,
};
use huddle_core::refs::Space;

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  links,
  paths::Page,
  phrase,
  view::{Alignment, FeedContent, Fragment},
};

fn space_name(space: Option<&Space>) -> Option<String> {
  space.map(|s| s.name.clone())
}

impl FeedItem for SpaceAdded {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    Ok(
      cx.by_author()
        .text("created the")
        .link(links::space(cx.paths, space))
        .text("space"),
    )
  }
}

impl NotificationItem for SpaceAdded {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let space = cx.require(self.space.as_ref(), "space")?;
    Ok(format!("Created the {} space", space.name))
  }
}

impl FeedItem for SpaceEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    let verb = match (self.old_name != self.new_name, self.mission_changed) {
      (true, true) => "renamed and updated the mission of",
      (false, true) => "updated the mission of",
      _ => "renamed",
    };
    Ok(cx.by_author().text(verb).append(phrase::the_space(cx, space)))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    if self.old_name == self.new_name {
      return Ok(None);
    }
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for SpaceEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Edited the {} space", self.new_name))
  }
}

impl FeedItem for SpaceJoining {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    Ok(cx.by_author().text("joined").append(phrase::the_space(cx, space)))
  }
}

impl NotificationItem for SpaceJoining {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Joined the space".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

// ─── Membership ──────────────────────────────────────────────────────────────

impl FeedItem for SpaceMembersAdded {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    let f = cx.by_author().text("added").append(phrase::people(cx, &self.members));
    let f = if cx.on(Page::Space) {
      f.text("to the space")
    } else {
      f.text("to the").link(links::space(cx.paths, space)).text("space")
    };
    Ok(f)
  }
}

impl NotificationItem for SpaceMembersAdded {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    let count = phrase::plural(self.members.len(), "member", "members");
    Ok(format!("Added {count} to the space"))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

impl FeedItem for SpaceMemberRemoved {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    let member = links::person_or_name(cx.paths, self.member.as_ref(), &self.member_name);
    Ok(
      cx.by_author()
        .text("removed")
        .span(member)
        .text("from")
        .append(phrase::the_space(cx, space)),
    )
  }
}

impl NotificationItem for SpaceMemberRemoved {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Removed {} from the space", self.member_name))
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

impl FeedItem for SpaceMembersPermissionsEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let space = cx.require(self.space.as_ref(), "space")?;
    Ok(
      cx.by_author()
        .text("edited access levels in")
        .append(phrase::the_space(cx, space)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::access_changes(&self.members))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for SpaceMembersPermissionsEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited space access levels".to_string())
  }

  fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
    Ok(space_name(self.space.as_ref()))
  }
}

feed_only!(
  SpaceAdded,
  SpaceEditing,
  SpaceJoining,
  SpaceMembersAdded,
  SpaceMemberRemoved,
  SpaceMembersPermissionsEditing,
);
