// SPDX-License-Identifier: MPL-2.0
//! Host environment ports: the container the timeline is mounted in and the
//! addressable location used for deep links.

use crate::domain::layout::{Device, DisplayClass};

/// Sub-panels of the container the controller sizes and positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Axis,
    Content,
    MenuBar,
}

/// The surface the timeline is mounted in.
pub trait Container {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (f32, f32);
    fn device(&self) -> Device;
    /// Whether any part of the container is on screen.
    fn is_visible(&self) -> bool;
    fn set_display_class(&mut self, class: &DisplayClass);
    fn set_panel_height(&mut self, panel: Panel, height: f32);
    fn set_panel_top(&mut self, panel: Panel, top: f32);
    fn show_message(&mut self, text: &str);
    fn hide_message(&mut self);
}

/// Addressable location (a URL fragment in a browser).
pub trait Location {
    /// Fragment without the leading `#`, `None` when empty.
    fn fragment(&self) -> Option<String>;
    /// Replaces the fragment without adding a history entry.
    fn replace_fragment(&mut self, fragment: &str);
}
