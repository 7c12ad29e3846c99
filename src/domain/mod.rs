// SPDX-License-Identifier: MPL-2.0
//! Domain layer - timeline data and value objects.
//!
//! Pure types with no knowledge of views, hosts or localisation.
//!
//! # Modules
//!
//! - [`item`]: [`Item`](item::Item), [`ItemId`](item::ItemId) and item value objects
//! - [`dataset`]: the title + ordered events collection ([`Dataset`](dataset::Dataset))
//! - [`addressing`]: slide vs event indices and boundary detection
//! - [`zoom`]: the axis zoom ladder
//! - [`layout`]: orientation, size classes and display classification
//! - [`easing`]: animation timing curves

pub mod addressing;
pub mod dataset;
pub mod easing;
pub mod item;
pub mod layout;
pub mod zoom;

pub use addressing::{EventIndex, Neighbors, SlideIndex};
pub use dataset::Dataset;
pub use item::{Item, ItemData, ItemId};
