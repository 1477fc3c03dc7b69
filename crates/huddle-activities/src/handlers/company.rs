//! Company-level administration: creation, renames, membership, owners.

use huddle_core::content::{
  CompanyAdding, CompanyEditing, CompanyMemberAdded, CompanyMemberRemoved,
  CompanyMembersPermissionsEditing, CompanyOwnerRemoving, CompanyOwnersAdding,
  GuestInvited,
};

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  links, phrase,
  view::{Alignment, FeedContent, Fragment, Link},
};

fn company_link(cx: &RenderCx<'_>, name: &str) -> Link {
  Link {
    path:  cx.paths.company_admin(),
    label: name.to_string(),
  }
}

// ─── Creation and renames ────────────────────────────────────────────────────

impl FeedItem for CompanyAdding {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let name = self.company.as_ref().map_or(self.name.as_str(), |c| c.name.as_str());
    Ok(
      cx.by_author()
        .text("created the company")
        .link(company_link(cx, name)),
    )
  }
}

impl NotificationItem for CompanyAdding {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Created the company {}", self.name))
  }
}

impl FeedItem for CompanyEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(
      cx.by_author()
        .text("renamed the company to")
        .link(company_link(cx, &self.new_name)),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for CompanyEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the company to {}", self.new_name))
  }
}

// ─── Membership ──────────────────────────────────────────────────────────────

impl FeedItem for CompanyMemberAdded {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(
      cx.by_author()
        .text("added")
        .span(links::person_or_name(cx.paths, self.person.as_ref(), &self.name))
        .text("to the company"),
    )
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.title.as_ref().map(|t| FeedContent::text(t.clone())))
  }
}

impl NotificationItem for CompanyMemberAdded {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added {} to the company", self.name))
  }
}

impl FeedItem for CompanyMemberRemoved {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(
      cx.by_author()
        .text("removed")
        .span(links::person_or_name(cx.paths, self.person.as_ref(), &self.name))
        .text("from the company"),
    )
  }
}

impl NotificationItem for CompanyMemberRemoved {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Removed {} from the company", self.name))
  }
}

impl FeedItem for CompanyMembersPermissionsEditing {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let count = phrase::plural(self.members.len(), "company member", "company members");
    Ok(cx.by_author().text(format!("edited access levels for {count}")))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::access_changes(&self.members))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for CompanyMembersPermissionsEditing {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok("Edited company access levels".to_string())
  }
}

impl FeedItem for GuestInvited {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    Ok(
      cx.by_author()
        .text("invited")
        .span(links::person_or_name(cx.paths, self.person.as_ref(), &self.name))
        .text("as a guest"),
    )
  }
}

impl NotificationItem for GuestInvited {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Invited {} as a guest", self.name))
  }
}

// ─── Owners ──────────────────────────────────────────────────────────────────

impl FeedItem for CompanyOwnersAdding {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let role = if self.people.len() == 1 { "as an account owner" } else { "as account owners" };
    Ok(
      cx.by_author()
        .text("added")
        .append(phrase::people(cx, &self.people))
        .text(role),
    )
  }
}

impl NotificationItem for CompanyOwnersAdding {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    let names: Vec<&str> = self.people.iter().map(|p| p.full_name.as_str()).collect();
    Ok(format!("Added {} as account owners", phrase::join_list(&names)))
  }
}

impl FeedItem for CompanyOwnerRemoving {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(
      cx.by_author()
        .text("removed")
        .span(phrase::person(cx, person))
        .text("as an account owner"),
    )
  }
}

impl NotificationItem for CompanyOwnerRemoving {
  fn notification_title(&self, cx: &RenderCx<'_>) -> Result<String> {
    let person = cx.require(self.person.as_ref(), "person")?;
    Ok(format!("Removed {} as an account owner", person.full_name))
  }
}

feed_only!(
  CompanyAdding,
  CompanyEditing,
  CompanyMemberAdded,
  CompanyMemberRemoved,
  CompanyMembersPermissionsEditing,
  CompanyOwnersAdding,
  CompanyOwnerRemoving,
  GuestInvited,
);
