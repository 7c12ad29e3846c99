// SPDX-License-Identifier: MPL-2.0
//! View collaborator ports.
//!
//! The axis view, content view, menu bar and headless peek affordances are
//! rendered by the host. The controller drives them through these narrow
//! interfaces and never reads state back from them beyond what is listed
//! here. Everything a view wants to report (loaded, user changed the
//! selection, zoom boundary reached) comes back as a
//! [`Message`](crate::application::message::Message).

use crate::application::peek::{PeekDirection, PeekPreview};
use crate::config::Options;
use crate::domain::addressing::{EventIndex, SlideIndex};
use crate::domain::dataset::Dataset;
use crate::domain::item::{Item, ItemId};
use crate::domain::layout::Orientation;
use crate::domain::zoom::ZoomToggle;
use crate::error::Result;
use crate::i18n::Language;

/// Zoomable time axis of markers.
pub trait AxisView {
    /// Starts the view's own load; it reports `Loaded` once done.
    fn init(&mut self);
    fn go_to_id(&mut self, id: &ItemId);
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    fn set_zoom(&mut self, level: usize);
    /// Scale factor currently applied.
    fn scale_factor(&self) -> f64;
    fn create_marker(&mut self, item: &Item, index: EventIndex);
    fn destroy_marker(&mut self, index: EventIndex);
    /// Height the markers need (e.g. when stacked on several rows), once
    /// the axis has laid them out.
    fn minimum_height(&self) -> Option<f32>;
    fn update_display(&mut self, width: f32, height: f32, animate: bool);
    /// Partial redraw after markers were added or removed.
    fn redraw(&mut self, animate: bool);
}

/// One-item-at-a-time slide presentation.
pub trait ContentView {
    fn init(&mut self);
    fn go_to_id(&mut self, id: &ItemId, animate: bool, suppress_event: bool);
    fn create_slide(&mut self, item: &Item, index: SlideIndex);
    fn destroy_slide(&mut self, index: SlideIndex);
    fn slide_count(&self) -> usize;
    fn update_display(&mut self, width: f32, height: f32, animate: bool, layout: Orientation);
    /// Partial redraw after slides were added or removed.
    fn redraw(&mut self);
}

/// Zoom and back-to-start controls.
pub trait MenuBar {
    fn toggle_zoom(&mut self, toggle: ZoomToggle);
    /// Measured height of the bar.
    fn height(&self) -> f32;
}

/// Minimal previous/next affordance used in headless mode.
pub trait PeekNav {
    fn show(&mut self);
    fn hide(&mut self);
    fn update(&mut self, preview: &PeekPreview);
    fn set_position(&mut self, top: f32, left: Option<f32>);
    fn icon_height(&self) -> f32;
}

/// What a view is constructed against.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub dataset: &'a Dataset,
    pub options: &'a Options,
    pub language: &'a Language,
    /// Axis height computed before the first display pass.
    pub axis_height: f32,
}

/// Builds the views once the dataset has been accepted.
pub trait ViewFactory {
    /// # Errors
    ///
    /// Returns an error if the view cannot be constructed.
    fn axis(&mut self, ctx: &ViewContext<'_>) -> Result<Box<dyn AxisView>>;

    /// # Errors
    ///
    /// Returns an error if the view cannot be constructed.
    fn content(&mut self, ctx: &ViewContext<'_>) -> Result<Box<dyn ContentView>>;

    /// # Errors
    ///
    /// Returns an error if the view cannot be constructed.
    fn menu_bar(&mut self, ctx: &ViewContext<'_>) -> Result<Box<dyn MenuBar>>;

    /// # Errors
    ///
    /// Returns an error if the affordance cannot be constructed.
    fn peek(
        &mut self,
        direction: PeekDirection,
        ctx: &ViewContext<'_>,
    ) -> Result<Box<dyn PeekNav>>;
}
