// SPDX-License-Identifier: MPL-2.0
//! `storyline` orchestrates a two-view timeline: a zoomable time axis and a
//! one-item-at-a-time content view, kept in sync under a single current
//! selection.
//!
//! The crate owns selection, index addressing, responsive layout, zoom
//! bridging, deep-link bookmarks and the load lifecycle. Rendering is left to
//! the host through the traits in [`application::port`]; an in-memory host
//! lives in [`infrastructure::memory`].
//!
//! Localization uses Fluent, with `en-US` always available as fallback.

#![doc(html_root_url = "https://docs.rs/storyline/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;

#[cfg(test)]
mod test_utils;

pub use application::{Message, Timeline, TimelineEvent};
pub use config::Options;
pub use domain::{Dataset, Item, ItemData, ItemId};
pub use error::{Error, Result};
