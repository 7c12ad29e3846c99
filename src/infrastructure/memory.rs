// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters implementing every port in [`crate::application::port`].
//!
//! [`MemoryBackend`] stands in for a rendering host. Its views keep just
//! enough state to behave like the real ones (slide count, zoom ladder,
//! loaded flag), record every call they receive as a [`Call`], and queue
//! the [`Message`]s a real view would emit. The host loop is
//! [`MemoryBackend::run_until_idle`].
//!
//! # Example
//!
//! ```ignore
//! let backend = MemoryBackend::new(1000.0, 700.0);
//! let mut timeline = Timeline::new(Options::default(), backend.host());
//! timeline.set_language(Language::fallback());
//! timeline.set_config(dataset);
//! backend.run_until_idle(&mut timeline);
//! assert!(timeline.is_ready());
//! ```

use crate::application::message::{AxisEvent, ContentEvent, Message};
use crate::application::peek::{PeekDirection, PeekPreview};
use crate::application::port::{
    AnimationHandle, Animator, AxisView, Container, ContentView, Location, MenuBar, Panel,
    PeekNav, Transition, ViewContext, ViewFactory,
};
use crate::application::{Host, Timeline};
use crate::domain::addressing::{EventIndex, SlideIndex};
use crate::domain::item::{Item, ItemId};
use crate::domain::layout::{Device, DisplayClass, Orientation};
use crate::domain::zoom::{ZoomLadder, ZoomOutcome, ZoomToggle, DEFAULT_SCALE_FACTOR};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Upper bound on messages processed by one [`MemoryBackend::run_until_idle`].
const MAX_MESSAGES_PER_RUN: usize = 10_000;

/// One call received by a memory adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AxisInit,
    AxisGoTo(ItemId),
    AxisZoomIn,
    AxisZoomOut,
    AxisSetZoom(usize),
    CreateMarker { id: ItemId, index: EventIndex },
    DestroyMarker(EventIndex),
    AxisRedraw { animate: bool },
    AxisDisplay { width: f32, height: f32, animate: bool },

    ContentInit,
    ContentGoTo { id: ItemId, animate: bool, suppress_event: bool },
    CreateSlide { id: ItemId, index: SlideIndex },
    DestroySlide(SlideIndex),
    ContentRedraw,
    ContentDisplay { width: f32, height: f32, animate: bool, layout: Orientation },

    ToggleZoom(ZoomToggle),

    PeekShow(PeekDirection),
    PeekHide(PeekDirection),
    PeekUpdate(PeekPreview),
    PeekPosition { direction: PeekDirection, top: f32, left: Option<f32> },

    DisplayClass(String),
    PanelHeight(Panel, f32),
    PanelTop(Panel, f32),
    ShowMessage(String),
    HideMessage,

    AnimationStart(Transition),
    AnimationStop(Panel),

    FragmentReplaced(String),
}

#[derive(Debug)]
struct Journal {
    calls: Vec<Call>,
    outbox: VecDeque<Message>,
    width: f32,
    height: f32,
    device: Device,
    visible: bool,
    fragment: Option<String>,
    message: Option<String>,
    display_class: Option<String>,
    menubar_height: f32,
    icon_height: f32,
    axis_minimum: Option<f32>,
    auto_load: bool,
    fail_content: bool,
}

impl Journal {
    fn record(&mut self, call: Call) {
        self.calls.push(call);
    }
}

/// Shared state behind all memory adapters of one host.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    journal: Rc<RefCell<Journal>>,
}

impl MemoryBackend {
    /// A visible, desktop-class container of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            journal: Rc::new(RefCell::new(Journal {
                calls: Vec::new(),
                outbox: VecDeque::new(),
                width,
                height,
                device: Device::default(),
                visible: true,
                fragment: None,
                message: None,
                display_class: None,
                menubar_height: 0.0,
                icon_height: 0.0,
                axis_minimum: None,
                auto_load: true,
                fail_content: false,
            })),
        }
    }

    #[must_use]
    pub fn with_device(self, device: Device) -> Self {
        self.journal.borrow_mut().device = device;
        self
    }

    /// Starts with a location fragment, as when opening a deep link.
    #[must_use]
    pub fn with_fragment(self, fragment: &str) -> Self {
        self.journal.borrow_mut().fragment = Some(fragment.to_string());
        self
    }

    #[must_use]
    pub fn with_menubar_height(self, height: f32) -> Self {
        self.journal.borrow_mut().menubar_height = height;
        self
    }

    #[must_use]
    pub fn with_icon_height(self, height: f32) -> Self {
        self.journal.borrow_mut().icon_height = height;
        self
    }

    /// Container starts off screen.
    #[must_use]
    pub fn hidden(self) -> Self {
        self.journal.borrow_mut().visible = false;
        self
    }

    /// Views do not report `Loaded` by themselves; use [`Self::push`].
    #[must_use]
    pub fn with_manual_loading(self) -> Self {
        self.journal.borrow_mut().auto_load = false;
        self
    }

    /// The factory fails to build the content view.
    #[must_use]
    pub fn failing_content(self) -> Self {
        self.journal.borrow_mut().fail_content = true;
        self
    }

    /// Boxed adapters sharing this backend's state.
    #[must_use]
    pub fn host(&self) -> Host {
        Host {
            container: Box::new(MemoryContainer {
                journal: Rc::clone(&self.journal),
            }),
            animator: Box::new(MemoryAnimator {
                journal: Rc::clone(&self.journal),
            }),
            factory: Box::new(MemoryViewFactory {
                journal: Rc::clone(&self.journal),
            }),
            location: Some(Box::new(MemoryLocation {
                journal: Rc::clone(&self.journal),
            })),
        }
    }

    // =========================================================================
    // Host loop
    // =========================================================================

    /// Queues a message as if a view or the host had emitted it.
    pub fn push(&self, message: Message) {
        self.journal.borrow_mut().outbox.push_back(message);
    }

    #[must_use]
    pub fn drain_messages(&self) -> Vec<Message> {
        self.journal.borrow_mut().outbox.drain(..).collect()
    }

    /// Feeds queued messages to `timeline` until none are left. Returns the
    /// number processed.
    pub fn run_until_idle(&self, timeline: &mut Timeline) -> usize {
        let mut processed = 0;
        loop {
            let next = self.journal.borrow_mut().outbox.pop_front();
            let Some(message) = next else {
                return processed;
            };
            timeline.update(message);
            processed += 1;
            if processed >= MAX_MESSAGES_PER_RUN {
                tracing::warn!(processed, "message loop did not settle");
                return processed;
            }
        }
    }

    // =========================================================================
    // Host state
    // =========================================================================

    /// Changes the container size and queues a resize.
    pub fn resize(&self, width: f32, height: f32) {
        let mut journal = self.journal.borrow_mut();
        journal.width = width;
        journal.height = height;
        journal.outbox.push_back(Message::Resize);
    }

    /// Changes visibility and queues the notification.
    pub fn set_visible(&self, visible: bool) {
        let mut journal = self.journal.borrow_mut();
        journal.visible = visible;
        journal.outbox.push_back(Message::Visibility(visible));
    }

    /// Height the axis reports needing once loaded.
    pub fn set_axis_minimum(&self, minimum: Option<f32>) {
        self.journal.borrow_mut().axis_minimum = minimum;
    }

    /// Changes the location fragment from outside and queues the
    /// notification.
    pub fn navigate_fragment(&self, fragment: &str) {
        let mut journal = self.journal.borrow_mut();
        journal.fragment = Some(fragment.to_string());
        journal
            .outbox
            .push_back(Message::LocationChanged(fragment.to_string()));
    }

    #[must_use]
    pub fn fragment(&self) -> Option<String> {
        self.journal.borrow().fragment.clone()
    }

    /// Message currently shown in the container.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.journal.borrow().message.clone()
    }

    #[must_use]
    pub fn display_class(&self) -> Option<String> {
        self.journal.borrow().display_class.clone()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.journal.borrow_mut().calls.clear();
    }
}

// =============================================================================
// Host adapters
// =============================================================================

struct MemoryContainer {
    journal: Rc<RefCell<Journal>>,
}

impl Container for MemoryContainer {
    fn size(&self) -> (f32, f32) {
        let journal = self.journal.borrow();
        (journal.width, journal.height)
    }

    fn device(&self) -> Device {
        self.journal.borrow().device
    }

    fn is_visible(&self) -> bool {
        self.journal.borrow().visible
    }

    fn set_display_class(&mut self, class: &DisplayClass) {
        let mut journal = self.journal.borrow_mut();
        let class = class.to_string();
        journal.display_class = Some(class.clone());
        journal.record(Call::DisplayClass(class));
    }

    fn set_panel_height(&mut self, panel: Panel, height: f32) {
        self.journal
            .borrow_mut()
            .record(Call::PanelHeight(panel, height));
    }

    fn set_panel_top(&mut self, panel: Panel, top: f32) {
        self.journal.borrow_mut().record(Call::PanelTop(panel, top));
    }

    fn show_message(&mut self, text: &str) {
        let mut journal = self.journal.borrow_mut();
        journal.message = Some(text.to_string());
        journal.record(Call::ShowMessage(text.to_string()));
    }

    fn hide_message(&mut self) {
        let mut journal = self.journal.borrow_mut();
        journal.message = None;
        journal.record(Call::HideMessage);
    }
}

struct MemoryLocation {
    journal: Rc<RefCell<Journal>>,
}

impl Location for MemoryLocation {
    fn fragment(&self) -> Option<String> {
        self.journal
            .borrow()
            .fragment
            .as_deref()
            .map(|f| f.trim_start_matches('#'))
            .filter(|f| !f.is_empty())
            .map(str::to_string)
    }

    fn replace_fragment(&mut self, fragment: &str) {
        let mut journal = self.journal.borrow_mut();
        journal.fragment = Some(fragment.to_string());
        journal.record(Call::FragmentReplaced(fragment.to_string()));
    }
}

struct MemoryAnimator {
    journal: Rc<RefCell<Journal>>,
}

struct MemoryAnimation {
    target: Panel,
    journal: Rc<RefCell<Journal>>,
}

impl Animator for MemoryAnimator {
    fn start(&mut self, transition: Transition) -> Box<dyn AnimationHandle> {
        self.journal
            .borrow_mut()
            .record(Call::AnimationStart(transition));
        Box::new(MemoryAnimation {
            target: transition.target,
            journal: Rc::clone(&self.journal),
        })
    }
}

impl AnimationHandle for MemoryAnimation {
    fn stop(&mut self) {
        self.journal
            .borrow_mut()
            .record(Call::AnimationStop(self.target));
    }
}

// =============================================================================
// Views
// =============================================================================

struct MemoryViewFactory {
    journal: Rc<RefCell<Journal>>,
}

impl ViewFactory for MemoryViewFactory {
    fn axis(&mut self, ctx: &ViewContext<'_>) -> Result<Box<dyn AxisView>> {
        Ok(Box::new(MemoryAxis {
            journal: Rc::clone(&self.journal),
            ladder: ZoomLadder::new(ctx.options.zoom_sequence.clone(), DEFAULT_SCALE_FACTOR),
            loaded: false,
        }))
    }

    fn content(&mut self, ctx: &ViewContext<'_>) -> Result<Box<dyn ContentView>> {
        if self.journal.borrow().fail_content {
            return Err(Error::View("content view unavailable".to_string()));
        }
        Ok(Box::new(MemoryContent {
            journal: Rc::clone(&self.journal),
            slide_count: ctx.dataset.slide_count(),
        }))
    }

    fn menu_bar(&mut self, _ctx: &ViewContext<'_>) -> Result<Box<dyn MenuBar>> {
        Ok(Box::new(MemoryMenuBar {
            journal: Rc::clone(&self.journal),
        }))
    }

    fn peek(
        &mut self,
        direction: PeekDirection,
        _ctx: &ViewContext<'_>,
    ) -> Result<Box<dyn PeekNav>> {
        Ok(Box::new(MemoryPeek {
            direction,
            journal: Rc::clone(&self.journal),
        }))
    }
}

struct MemoryAxis {
    journal: Rc<RefCell<Journal>>,
    ladder: ZoomLadder,
    loaded: bool,
}

impl MemoryAxis {
    fn report(&self, call: Call, outcome: &ZoomOutcome) {
        let mut journal = self.journal.borrow_mut();
        journal.record(call);
        for toggle in outcome.toggles {
            journal
                .outbox
                .push_back(Message::Axis(AxisEvent::ZoomToggle(toggle)));
        }
    }
}

impl AxisView for MemoryAxis {
    fn init(&mut self) {
        self.loaded = true;
        let mut journal = self.journal.borrow_mut();
        journal.record(Call::AxisInit);
        if journal.auto_load {
            journal.outbox.push_back(Message::Axis(AxisEvent::Loaded));
        }
    }

    fn go_to_id(&mut self, id: &ItemId) {
        self.journal.borrow_mut().record(Call::AxisGoTo(id.clone()));
    }

    fn zoom_in(&mut self) {
        let outcome = self.ladder.zoom_in();
        self.report(Call::AxisZoomIn, &outcome);
    }

    fn zoom_out(&mut self) {
        let outcome = self.ladder.zoom_out();
        self.report(Call::AxisZoomOut, &outcome);
    }

    fn set_zoom(&mut self, level: usize) {
        let outcome = self.ladder.set_level(level);
        self.report(Call::AxisSetZoom(level), &outcome);
    }

    fn scale_factor(&self) -> f64 {
        self.ladder.scale_factor()
    }

    fn create_marker(&mut self, item: &Item, index: EventIndex) {
        self.journal.borrow_mut().record(Call::CreateMarker {
            id: item.id().clone(),
            index,
        });
    }

    fn destroy_marker(&mut self, index: EventIndex) {
        self.journal
            .borrow_mut()
            .record(Call::DestroyMarker(index));
    }

    fn minimum_height(&self) -> Option<f32> {
        if !self.loaded {
            return None;
        }
        self.journal.borrow().axis_minimum
    }

    fn update_display(&mut self, width: f32, height: f32, animate: bool) {
        self.journal.borrow_mut().record(Call::AxisDisplay {
            width,
            height,
            animate,
        });
    }

    fn redraw(&mut self, animate: bool) {
        self.journal
            .borrow_mut()
            .record(Call::AxisRedraw { animate });
    }
}

struct MemoryContent {
    journal: Rc<RefCell<Journal>>,
    slide_count: usize,
}

impl ContentView for MemoryContent {
    fn init(&mut self) {
        let mut journal = self.journal.borrow_mut();
        journal.record(Call::ContentInit);
        if journal.auto_load {
            journal
                .outbox
                .push_back(Message::Content(ContentEvent::Loaded));
        }
    }

    fn go_to_id(&mut self, id: &ItemId, animate: bool, suppress_event: bool) {
        let mut journal = self.journal.borrow_mut();
        journal.record(Call::ContentGoTo {
            id: id.clone(),
            animate,
            suppress_event,
        });
        if !suppress_event {
            journal
                .outbox
                .push_back(Message::Content(ContentEvent::Change(id.clone())));
        }
    }

    fn create_slide(&mut self, item: &Item, index: SlideIndex) {
        self.slide_count += 1;
        self.journal.borrow_mut().record(Call::CreateSlide {
            id: item.id().clone(),
            index,
        });
    }

    fn destroy_slide(&mut self, index: SlideIndex) {
        self.slide_count = self.slide_count.saturating_sub(1);
        self.journal
            .borrow_mut()
            .record(Call::DestroySlide(index));
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn update_display(&mut self, width: f32, height: f32, animate: bool, layout: Orientation) {
        self.journal.borrow_mut().record(Call::ContentDisplay {
            width,
            height,
            animate,
            layout,
        });
    }

    fn redraw(&mut self) {
        self.journal.borrow_mut().record(Call::ContentRedraw);
    }
}

struct MemoryMenuBar {
    journal: Rc<RefCell<Journal>>,
}

impl MenuBar for MemoryMenuBar {
    fn toggle_zoom(&mut self, toggle: ZoomToggle) {
        self.journal.borrow_mut().record(Call::ToggleZoom(toggle));
    }

    fn height(&self) -> f32 {
        self.journal.borrow().menubar_height
    }
}

struct MemoryPeek {
    direction: PeekDirection,
    journal: Rc<RefCell<Journal>>,
}

impl PeekNav for MemoryPeek {
    fn show(&mut self) {
        self.journal
            .borrow_mut()
            .record(Call::PeekShow(self.direction));
    }

    fn hide(&mut self) {
        self.journal
            .borrow_mut()
            .record(Call::PeekHide(self.direction));
    }

    fn update(&mut self, preview: &PeekPreview) {
        self.journal
            .borrow_mut()
            .record(Call::PeekUpdate(preview.clone()));
    }

    fn set_position(&mut self, top: f32, left: Option<f32>) {
        self.journal.borrow_mut().record(Call::PeekPosition {
            direction: self.direction,
            top,
            left,
        });
    }

    fn icon_height(&self) -> f32 {
        self.journal.borrow().icon_height
    }
}
