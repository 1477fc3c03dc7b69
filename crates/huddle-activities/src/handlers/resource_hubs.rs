//! Documents, files, folders and links inside a space's resource hub.

use huddle_core::{
  content::{
    ResourceHubDocumentCommented, ResourceHubDocumentCreated, ResourceHubDocumentDeleted,
    ResourceHubDocumentEdited, ResourceHubFileCommented, ResourceHubFileCreated,
    ResourceHubFileDeleted, ResourceHubFolderCreated, ResourceHubFolderDeleted,
    ResourceHubFolderRenamed, ResourceHubLinkCreated, ResourceHubLinkDeleted,
    ResourceHubLinkEdited,
  },
  refs::{ResourceHub, Space},
};

use crate::{
  Result,
  contract::{FeedItem, NotificationItem, RenderCx, feed_only},
  links, phrase,
  view::{Alignment, FeedContent, Fragment},
};

/// Where a hub entry lives, for notification rows: the hub, else the space.
fn location(hub: Option<&ResourceHub>, space: Option<&Space>) -> Option<String> {
  hub
    .map(|h| h.name.clone())
    .or_else(|| space.map(|s| s.name.clone()))
}

/// Implements `notification_location` from the payload's hub and space.
macro_rules! hub_location {
  () => {
    fn notification_location(&self, _cx: &RenderCx<'_>) -> Result<Option<String>> {
      Ok(location(self.resource_hub.as_ref(), self.space.as_ref()))
    }
  };
}

// ─── Documents ───────────────────────────────────────────────────────────────

impl FeedItem for ResourceHubDocumentCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let document = links::document_or_name(cx.paths, self.document.as_ref(), &self.name);
    let f = match &self.copied_from {
      Some(original) => cx
        .by_author()
        .text("created a copy of")
        .link(links::document(cx.paths, original))
        .text("named")
        .span(document),
      None => cx.by_author().text("added the document").span(document),
    };
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubDocumentCreated {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added the document {}", self.name))
  }

  hub_location!();
}

impl FeedItem for ResourceHubDocumentEdited {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("edited the document")
      .span(links::document_or_name(cx.paths, self.document.as_ref(), &self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubDocumentEdited {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Edited the document {}", self.name))
  }

  hub_location!();
}

impl FeedItem for ResourceHubDocumentDeleted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("deleted the document").text(phrase::quoted(&self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubDocumentDeleted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the document {}", phrase::quoted(&self.name)))
  }

  hub_location!();
}

impl FeedItem for ResourceHubDocumentCommented {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx
      .by_author()
      .text("commented on the document")
      .span(links::document_or_name(cx.paths, self.document.as_ref(), &self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ResourceHubDocumentCommented {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Re: {}", self.name))
  }

  hub_location!();
}

// ─── Files ───────────────────────────────────────────────────────────────────

impl FeedItem for ResourceHubFileCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = match self.files.as_slice() {
      [file] => cx.by_author().text("added the file").link(links::file(cx.paths, file)),
      files => {
        let count = phrase::plural(files.len(), "file", "files");
        cx.by_author().text(format!("added {count}"))
      }
    };
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    if self.files.len() < 2 {
      return Ok(None);
    }
    let names: Vec<&str> = self.files.iter().map(|f| f.name.as_str()).collect();
    Ok(Some(FeedContent::text(phrase::join_list(&names))))
  }
}

impl NotificationItem for ResourceHubFileCreated {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(match self.files.as_slice() {
      [file] => format!("Added the file {}", file.name),
      files => format!("Added {}", phrase::plural(files.len(), "file", "files")),
    })
  }

  hub_location!();
}

impl FeedItem for ResourceHubFileDeleted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("deleted the file").text(phrase::quoted(&self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubFileDeleted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the file {}", phrase::quoted(&self.name)))
  }

  hub_location!();
}

impl FeedItem for ResourceHubFileCommented {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let file = links::or_name(self.file.as_ref(), &self.name, |f| links::file(cx.paths, f));
    let f = cx.by_author().text("commented on the file").span(file);
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(phrase::comment(self.comment.as_ref()))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ResourceHubFileCommented {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Re: {}", self.name))
  }

  hub_location!();
}

// ─── Folders ─────────────────────────────────────────────────────────────────

impl FeedItem for ResourceHubFolderCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let folder = links::or_name(self.folder.as_ref(), &self.name, |f| {
      links::folder(cx.paths, f)
    });
    let f = cx.by_author().text("created the folder").span(folder);
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubFolderCreated {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Created the folder {}", self.name))
  }

  hub_location!();
}

impl FeedItem for ResourceHubFolderRenamed {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let folder = links::or_name(self.folder.as_ref(), &self.new_name, |f| {
      links::folder(cx.paths, f)
    });
    let f = cx.by_author().text("renamed the folder").span(folder);
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(Some(FeedContent::change(
      Some(self.old_name.clone()),
      Some(self.new_name.clone()),
    )))
  }
}

impl NotificationItem for ResourceHubFolderRenamed {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Renamed the folder to {}", self.new_name))
  }

  hub_location!();
}

impl FeedItem for ResourceHubFolderDeleted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("deleted the folder").text(phrase::quoted(&self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubFolderDeleted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the folder {}", phrase::quoted(&self.name)))
  }

  hub_location!();
}

// ─── Links ───────────────────────────────────────────────────────────────────

impl FeedItem for ResourceHubLinkCreated {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let link = links::or_name(self.link.as_ref(), &self.name, |l| {
      links::resource_link(cx.paths, l)
    });
    let f = cx.by_author().text("added the link").span(link);
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    Ok(self.link.as_ref().map(|l| FeedContent::text(l.url.clone())))
  }
}

impl NotificationItem for ResourceHubLinkCreated {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Added the link {}", self.name))
  }

  hub_location!();
}

impl FeedItem for ResourceHubLinkEdited {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let link = links::or_name(self.link.as_ref(), &self.previous_name, |l| {
      links::resource_link(cx.paths, l)
    });
    let f = cx.by_author().text("edited the link").span(link);
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }

  fn feed_item_content(&self, _cx: &RenderCx<'_>) -> Result<Option<FeedContent>> {
    let Some(link) = &self.link else {
      return Ok(None);
    };
    let mut changes = Vec::new();
    if link.name != self.previous_name {
      changes.push(FeedContent::labeled_change(
        "Name",
        Some(self.previous_name.clone()),
        Some(link.name.clone()),
      ));
    }
    if let Some(previous_url) = self.previous_url.as_ref().filter(|u| **u != link.url) {
      changes.push(FeedContent::labeled_change(
        "URL",
        Some(previous_url.clone()),
        Some(link.url.clone()),
      ));
    }
    Ok(FeedContent::stack(changes))
  }

  fn feed_item_alignment(&self) -> Alignment { Alignment::ItemsStart }
}

impl NotificationItem for ResourceHubLinkEdited {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    let name = self.link.as_ref().map_or(self.previous_name.as_str(), |l| l.name.as_str());
    Ok(format!("Edited the link {name}"))
  }

  hub_location!();
}

impl FeedItem for ResourceHubLinkDeleted {
  fn feed_item_title(&self, cx: &RenderCx<'_>) -> Result<Fragment> {
    let f = cx.by_author().text("deleted the link").text(phrase::quoted(&self.name));
    Ok(phrase::in_space(f, cx, self.space.as_ref()))
  }
}

impl NotificationItem for ResourceHubLinkDeleted {
  fn notification_title(&self, _cx: &RenderCx<'_>) -> Result<String> {
    Ok(format!("Deleted the link {}", phrase::quoted(&self.name)))
  }

  hub_location!();
}

feed_only!(
  ResourceHubDocumentCreated,
  ResourceHubDocumentEdited,
  ResourceHubDocumentDeleted,
  ResourceHubDocumentCommented,
  ResourceHubFileCreated,
  ResourceHubFileDeleted,
  ResourceHubFileCommented,
  ResourceHubFolderCreated,
  ResourceHubFolderRenamed,
  ResourceHubFolderDeleted,
  ResourceHubLinkCreated,
  ResourceHubLinkEdited,
  ResourceHubLinkDeleted,
);
