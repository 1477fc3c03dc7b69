//! Core types for huddle activity records.
//!
//! This crate is deliberately free of HTTP and rendering dependencies. It
//! describes what an activity *is*; `huddle-activities` decides how it looks
//! and `huddle-client` decides where it comes from.

pub mod activity;
pub mod aggregate;
pub mod content;
pub mod error;
pub mod refs;

pub use activity::{Activity, ActivityRecord};
pub use aggregate::{AggregatedActivity, FeedEntry};
pub use content::{ActionKind, ActivityContent};
pub use error::{Error, Result};
