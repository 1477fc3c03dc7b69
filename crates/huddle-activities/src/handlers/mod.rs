//! One handler per action, grouped by the domain the action belongs to.
//!
//! Handlers are trait impls on the payload types from
//! [`huddle_core::content`]; the registry picks the right one by matching on
//! [`huddle_core::ActivityContent`].

mod comments;
mod company;
mod discussions;
mod goals;
mod milestones;
mod projects;
mod resource_hubs;
mod spaces;
mod tasks;
