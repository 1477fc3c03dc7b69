//! Activity rendering for Huddle.
//!
//! Turns resolved [`huddle_core::Activity`] records (and aggregates of them)
//! into render descriptions for three presentations: inline feed items,
//! notification rows, and standalone activity pages. Pure and synchronous;
//! paths come from an injected [`PathResolver`].
//!
//! # Quick start
//!
//! ```no_run
//! use huddle_activities::{Page, PathResolver, Renderer};
//! # fn demo(paths: &dyn PathResolver, activity: &huddle_core::Activity) {
//! let renderer = Renderer::new(paths);
//! let item = renderer.feed_item(activity, Some(Page::Goal)).unwrap();
//! println!("{}", item.title);
//! # }
//! ```

pub mod aggregation;
pub mod contract;
pub mod error;
mod handlers;
pub mod links;
pub mod paths;
pub mod phrase;
pub mod registry;
pub mod render;
pub mod view;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use paths::{Page, PathResolver};
pub use render::{EntryRef, Renderer};
