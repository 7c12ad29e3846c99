// SPDX-License-Identifier: MPL-2.0
//! Inputs to [`Timeline::update`](super::controller::Timeline::update).
//!
//! Views and the host never call into the controller; they produce one of
//! these and the host loop feeds it back.

use super::peek::PeekDirection;
use crate::domain::item::ItemId;
use crate::domain::zoom::ZoomToggle;

#[derive(Debug, Clone, PartialEq)]
pub enum AxisEvent {
    Loaded,
    /// The user picked a marker.
    Change(ItemId),
    /// A zoom boundary was reached or left.
    ZoomToggle(ZoomToggle),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentEvent {
    Loaded,
    /// The user moved to another slide.
    Change(ItemId),
    ColorChange,
    NavNext,
    NavPrevious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ZoomIn,
    ZoomOut,
    BackToStart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Axis(AxisEvent),
    Content(ContentEvent),
    Menu(MenuEvent),
    /// A headless peek affordance was activated.
    Peek(PeekDirection),
    Key(NavKey),
    /// The container was resized.
    Resize,
    /// The container entered or left the viewport.
    Visibility(bool),
    /// The location fragment changed from outside.
    LocationChanged(String),
}
