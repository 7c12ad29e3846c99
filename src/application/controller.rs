// SPDX-License-Identifier: MPL-2.0
//! Timeline orchestration controller.
//!
//! [`Timeline`] owns the dataset, the single current selection, the load
//! lifecycle and the derived layout. The axis view, content view, menu bar
//! and peek affordances are strictly downstream: they are told what to show
//! and report user intent back as [`Message`]s.
//!
//! # Start-up
//!
//! 1. [`Timeline::new`] shows the loading message.
//! 2. [`Timeline::load_language`] resolves the UI language, falling back to
//!    `en-US` on failure.
//! 3. [`Timeline::set_config`] validates the dataset, builds the views and
//!    enters [`Phase::PartiallyReady`]. A dataset supplied before the
//!    language resolved is parked until then.
//! 4. Once every active view reported `Loaded`, `ready` fires, the initial
//!    item is selected and the deep link (if any) is resolved.
//!
//! # Selection
//!
//! A change request, whatever its origin, is dropped when it names the item
//! that is already current. That comparison is what keeps the two views
//! from echoing changes back and forth.

use super::bookmark;
use super::events::{EventBus, EventKind, SubscriptionId, TimelineEvent};
use super::layout::{self, DisplayState, LayoutInput, ObservedMinimum};
use super::lifecycle::{Lifecycle, LoadOutcome, Phase, ViewKind};
use super::message::{AxisEvent, ContentEvent, MenuEvent, Message, NavKey};
use super::peek::{self, PeekDirection};
use super::port::{
    AnimatedProperty, Animator, AxisView, Container, ContentView, Location, MenuBar, Panel,
    PeekNav, Transition, ViewContext, ViewFactory,
};
use super::transitions::TransitionSlots;
use crate::config::{Options, OptionsFile, INITIAL_LAYOUT_DURATION_MS, PEEK_PREVIOUS_LEFT_PX};
use crate::domain::addressing::{EventIndex, Neighbors, SlideIndex};
use crate::domain::dataset::Dataset;
use crate::domain::easing::Easing;
use crate::domain::item::{Item, ItemData, ItemId};
use crate::error::{DatasetError, Error, Result};
use crate::i18n::{self, Language, LanguageSource};
use std::time::Duration;

/// Host-side collaborators a timeline is mounted on.
pub struct Host {
    pub container: Box<dyn Container>,
    pub animator: Box<dyn Animator>,
    pub factory: Box<dyn ViewFactory>,
    /// Deep-link location; bookmarking is inert without one.
    pub location: Option<Box<dyn Location>>,
}

/// A slide: its position and the item it presents.
#[derive(Debug, Clone, Copy)]
pub struct Slide<'a> {
    pub index: SlideIndex,
    pub item: &'a Item,
}

struct PeekPair {
    previous: Box<dyn PeekNav>,
    next: Box<dyn PeekNav>,
}

struct Views {
    axis: Box<dyn AxisView>,
    /// `None` in headless mode.
    content: Option<Box<dyn ContentView>>,
    menu_bar: Box<dyn MenuBar>,
    /// Headless mode only.
    peek: Option<PeekPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Axis,
    Content,
    Api,
}

pub struct Timeline {
    options: Options,
    option_problems: Vec<DatasetError>,
    language: Language,
    language_resolved: bool,
    /// Dataset received before the language resolved.
    pending: Option<Dataset>,
    dataset: Option<Dataset>,
    /// Problems of the last rejected dataset.
    errors: Vec<DatasetError>,
    host: Host,
    views: Option<Views>,
    lifecycle: Lifecycle,
    current: Option<ItemId>,
    minimum: ObservedMinimum,
    display: Option<DisplayState>,
    transitions: TransitionSlots,
    events: EventBus,
    initial_display_pending: bool,
    bookmark_armed: bool,
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("phase", &self.lifecycle.phase())
            .field("current", &self.current)
            .field("language", &self.language)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl Timeline {
    /// Creates a timeline on `host` and shows the loading message.
    #[must_use]
    pub fn new(options: Options, mut host: Host) -> Self {
        let language = Language::fallback();
        host.container.show_message(&language.tr("loading-timeline"));
        Self {
            options,
            option_problems: Vec::new(),
            language,
            language_resolved: false,
            pending: None,
            dataset: None,
            errors: Vec::new(),
            host,
            views: None,
            lifecycle: Lifecycle::default(),
            current: None,
            minimum: ObservedMinimum::default(),
            display: None,
            transitions: TransitionSlots::default(),
            events: EventBus::default(),
            initial_display_pending: false,
            bookmark_armed: false,
        }
    }

    /// Creates a timeline from an options document. Invalid values are
    /// reported alongside dataset problems by [`Self::set_config`].
    #[must_use]
    pub fn from_file(file: OptionsFile, host: Host) -> Self {
        let (options, problems) = file.resolve();
        let mut timeline = Self::new(options, host);
        timeline.option_problems = problems;
        timeline
    }

    // =========================================================================
    // Start-up
    // =========================================================================

    /// Loads the configured language from `source`.
    ///
    /// Failure is not fatal: the fallback language is kept and a message
    /// naming the requested language is shown.
    pub async fn load_language<S: LanguageSource>(&mut self, source: &S) {
        let code = self.options.language.clone();
        match i18n::load_language(source, &code).await {
            Ok(language) => {
                tracing::info!(locale = %language.locale(), "language loaded");
                self.host
                    .container
                    .show_message(&language.tr("loading-timeline"));
                self.set_language(language);
            }
            Err(err) => {
                tracing::warn!(language = %code, error = %err, "language load failed, using fallback");
                let language = Language::fallback();
                self.host.container.show_message(
                    &language.tr_with_args("error-language-load", &[("language", &code)]),
                );
                self.set_language(language);
            }
        }
    }

    /// Installs an already loaded language and releases a parked dataset.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.language_resolved = true;
        if let Some(dataset) = self.pending.take() {
            self.set_config(dataset);
        }
    }

    /// Accepts a dataset and builds the views.
    ///
    /// Invalid datasets (and invalid options) are reported through the
    /// container message and leave the timeline in
    /// [`Phase::Initializing`].
    pub fn set_config(&mut self, mut dataset: Dataset) {
        if !self.language_resolved {
            tracing::debug!("language not resolved yet, parking dataset");
            self.pending = Some(dataset);
            return;
        }
        if self.lifecycle.phase() != Phase::Initializing {
            tracing::warn!("timeline already configured, ignoring dataset");
            return;
        }

        for problem in &self.option_problems {
            dataset.log_error(problem.clone());
        }
        if !dataset.is_valid() {
            let details: Vec<String> = dataset
                .errors()
                .iter()
                .map(|err| self.language.translate_error(err))
                .collect();
            tracing::error!(errors = ?dataset.errors(), "timeline configuration rejected");
            self.host.container.show_message(&format!(
                "{}: {}",
                self.language.tr("error"),
                details.join("; ")
            ));
            self.errors = dataset.errors().to_vec();
            return;
        }

        self.errors.clear();
        self.dataset = Some(dataset);
        self.events.fire(&TimelineEvent::DataLoaded);

        match self.init_layout() {
            Ok(()) => {
                self.host.container.hide_message();
                let with_content = !self.options.headless;
                if self.lifecycle.views_constructed(with_content) == LoadOutcome::BecameReady {
                    self.on_ready();
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "could not build timeline views");
                self.views = None;
                self.host.container.show_message(&format!(
                    "{} ({err})",
                    self.language.tr("error-view-construction")
                ));
            }
        }
    }

    fn init_layout(&mut self) -> Result<()> {
        let dataset = self.dataset.as_ref().ok_or(Error::NotReady)?;
        let (_, height) = self.host.container.size();
        let axis_height = layout::axis_height(height, &self.options, false, self.minimum);
        let ctx = ViewContext {
            dataset,
            options: &self.options,
            language: &self.language,
            axis_height,
        };

        let factory = &mut self.host.factory;
        let mut axis = factory.axis(&ctx)?;
        let mut content = if self.options.headless {
            None
        } else {
            Some(factory.content(&ctx)?)
        };
        let menu_bar = factory.menu_bar(&ctx)?;
        let mut peek = if self.options.headless {
            Some(PeekPair {
                previous: factory.peek(PeekDirection::Previous, &ctx)?,
                next: factory.peek(PeekDirection::Next, &ctx)?,
            })
        } else {
            None
        };

        axis.init();
        if let Some(level) = self.options.initial_zoom {
            axis.set_zoom(level);
        }
        if let Some(content) = content.as_mut() {
            content.init();
        }
        if let Some(pair) = peek.as_mut() {
            let center = axis_height.ceil() / 2.0;
            let next_top = center - pair.next.icon_height();
            let previous_top = center - pair.previous.icon_height();
            pair.next.set_position(next_top, None);
            pair.previous
                .set_position(previous_top, Some(PEEK_PREVIOUS_LEFT_PX));
        }

        tracing::info!(
            events = dataset.events().len(),
            title = dataset.has_title(),
            headless = self.options.headless,
            "timeline views constructed"
        );
        self.views = Some(Views {
            axis,
            content,
            menu_bar,
            peek,
        });

        if self.host.container.is_visible() {
            self.refresh_display(true, Duration::from_millis(INITIAL_LAYOUT_DURATION_MS));
        } else {
            tracing::debug!("container hidden, deferring first display");
            self.initial_display_pending = true;
        }
        Ok(())
    }

    fn on_view_loaded(&mut self, view: ViewKind) {
        tracing::debug!(?view, "view loaded");
        if self.lifecycle.mark_loaded(view) == LoadOutcome::BecameReady {
            self.on_ready();
        }
    }

    fn on_ready(&mut self) {
        tracing::info!("timeline ready");
        self.events.fire(&TimelineEvent::Ready);

        let fragment = if self.options.hash_bookmark {
            self.host
                .location
                .as_ref()
                .and_then(|location| location.fragment())
        } else {
            None
        };

        let event_count = self.dataset.as_ref().map_or(0, |d| d.events().len());
        if self.options.start_at_end || self.options.start_at_slide > event_count {
            self.go_to_end();
        } else {
            self.go_to(self.options.start_at_slide);
        }

        if !self.options.hash_bookmark {
            return;
        }
        let mut followed = false;
        if let Some(fragment) = fragment {
            match bookmark::decode(&fragment) {
                Some(id) if self.contains(&id) => {
                    self.go_to_id(&id);
                    followed = true;
                }
                Some(id) => tracing::warn!(%id, "deep link names an unknown item, ignoring"),
                None => tracing::debug!(%fragment, "location fragment is not a bookmark"),
            }
        }
        self.bookmark_armed = true;
        if !followed {
            self.write_bookmark();
        }
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Processes one message from a view or the host.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Axis(AxisEvent::Loaded) => self.on_view_loaded(ViewKind::Axis),
            Message::Axis(AxisEvent::Change(id)) => self.on_view_change(id, Origin::Axis),
            Message::Axis(AxisEvent::ZoomToggle(toggle)) => {
                if let Some(views) = self.views.as_mut() {
                    views.menu_bar.toggle_zoom(toggle);
                }
            }
            Message::Content(ContentEvent::Loaded) => self.on_view_loaded(ViewKind::Content),
            Message::Content(ContentEvent::Change(id)) => self.on_view_change(id, Origin::Content),
            Message::Content(ContentEvent::ColorChange) => {
                let unique_id = self.current.clone();
                self.events.fire(&TimelineEvent::ColorChange { unique_id });
            }
            Message::Content(ContentEvent::NavNext) => {
                let unique_id = self.current.clone();
                self.events.fire(&TimelineEvent::NavNext { unique_id });
            }
            Message::Content(ContentEvent::NavPrevious) => {
                let unique_id = self.current.clone();
                self.events.fire(&TimelineEvent::NavPrevious { unique_id });
            }
            Message::Menu(MenuEvent::ZoomIn) => self.zoom_in(),
            Message::Menu(MenuEvent::ZoomOut) => self.zoom_out(),
            Message::Menu(MenuEvent::BackToStart) => self.back_to_start(),
            Message::Peek(direction) => self.on_peek(direction),
            Message::Key(NavKey::Left) => self.go_to_prev(),
            Message::Key(NavKey::Right) => self.go_to_next(),
            Message::Resize => self.update_display(),
            Message::Visibility(visible) => self.on_visibility(visible),
            Message::LocationChanged(fragment) => self.on_location_changed(&fragment),
        }
    }

    fn on_view_change(&mut self, id: ItemId, origin: Origin) {
        if !self.lifecycle.is_ready() {
            tracing::debug!(%id, ?origin, "change before ready, ignoring");
            return;
        }
        self.select(id, origin);
    }

    fn on_visibility(&mut self, visible: bool) {
        if !visible {
            return;
        }
        if self.initial_display_pending {
            self.initial_display_pending = false;
            self.refresh_display(true, Duration::from_millis(INITIAL_LAYOUT_DURATION_MS));
        } else {
            self.update_display();
        }
    }

    fn on_location_changed(&mut self, fragment: &str) {
        if !self.options.hash_bookmark || !self.bookmark_armed {
            return;
        }
        match bookmark::decode(fragment) {
            Some(id) if self.contains(&id) => self.go_to_id(&id),
            Some(id) => tracing::warn!(%id, "deep link names an unknown item, ignoring"),
            None => tracing::trace!(%fragment, "fragment is not a bookmark"),
        }
    }

    /// Peek click: navigate, refresh the previews, then report the click
    /// even when it hit a boundary.
    fn on_peek(&mut self, direction: PeekDirection) {
        match direction {
            PeekDirection::Previous => self.go_to_prev(),
            PeekDirection::Next => self.go_to_next(),
        }
        self.refresh_peeks();
        let unique_id = self.current.clone();
        self.events.fire(&match direction {
            PeekDirection::Previous => TimelineEvent::NavPrevious { unique_id },
            PeekDirection::Next => TimelineEvent::NavNext { unique_id },
        });
    }

    fn back_to_start(&mut self) {
        if self.current_slide_index() == Some(SlideIndex::FIRST) {
            return;
        }
        self.go_to_start();
        let unique_id = self.current.clone();
        self.events.fire(&TimelineEvent::BackToStart { unique_id });
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Makes `id` current and brings the other views in line. Returns
    /// `false` when nothing changed.
    fn select(&mut self, id: ItemId, origin: Origin) -> bool {
        if self.current.as_ref() == Some(&id) {
            tracing::trace!(%id, "already current");
            return false;
        }
        if !self.contains(&id) {
            tracing::warn!(%id, "unknown item id, ignoring");
            return false;
        }
        let Some(views) = self.views.as_mut() else {
            tracing::debug!(%id, "no views yet, ignoring selection");
            return false;
        };

        self.current = Some(id.clone());
        match origin {
            Origin::Axis => {
                if let Some(content) = views.content.as_mut() {
                    content.go_to_id(&id, true, false);
                }
            }
            Origin::Content => views.axis.go_to_id(&id),
            Origin::Api => {
                views.axis.go_to_id(&id);
                if let Some(content) = views.content.as_mut() {
                    content.go_to_id(&id, true, true);
                }
            }
        }

        tracing::debug!(%id, ?origin, "current item changed");
        self.events.fire(&TimelineEvent::Change {
            unique_id: id.clone(),
        });
        if self.bookmark_armed {
            self.write_bookmark();
        }
        self.refresh_peeks();
        true
    }

    fn write_bookmark(&mut self) {
        if !self.options.hash_bookmark {
            return;
        }
        let (Some(location), Some(id)) = (self.host.location.as_mut(), self.current.as_ref()) else {
            return;
        };
        let fragment = bookmark::encode(id);
        location.replace_fragment(&fragment);
        self.events.fire(&TimelineEvent::HashUpdated {
            unique_id: id.clone(),
            hashbookmark: format!("#{fragment}"),
        });
    }

    fn refresh_peeks(&mut self) {
        let (Some(views), Some(dataset)) = (self.views.as_mut(), self.dataset.as_ref()) else {
            return;
        };
        let Some(pair) = views.peek.as_mut() else {
            return;
        };
        let Some(current) = self
            .current
            .as_ref()
            .and_then(|id| dataset.slide_index_of(id))
        else {
            pair.previous.hide();
            pair.next.hide();
            return;
        };
        let (previous, next) = peek::previews(dataset, current);
        for (nav, preview) in [(&mut pair.previous, previous), (&mut pair.next, next)] {
            match preview {
                Some(preview) => {
                    nav.update(&preview);
                    nav.show();
                }
                None => nav.hide(),
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Goes to slide `n`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, n: usize) {
        let target = self
            .dataset
            .as_ref()
            .and_then(|dataset| dataset.item_at(SlideIndex(n)))
            .map(|item| item.id().clone());
        match target {
            Some(id) => self.go_to_id(&id),
            None => tracing::trace!(slide = n, "slide out of range, ignoring"),
        }
    }

    /// Goes to the item `id`. Unknown ids and the current id are ignored.
    pub fn go_to_id(&mut self, id: &ItemId) {
        self.select(id.clone(), Origin::Api);
    }

    pub fn go_to_start(&mut self) {
        self.go_to(SlideIndex::FIRST.value());
    }

    pub fn go_to_end(&mut self) {
        if let Some(last) = self.dataset.as_ref().and_then(Dataset::last_slide) {
            self.go_to(last.value());
        }
    }

    /// Goes to the previous slide; nothing happens on the first one.
    pub fn go_to_prev(&mut self) {
        if let Some(previous) = self.neighbors().and_then(|n| n.previous) {
            self.go_to(previous.value());
        }
    }

    /// Goes to the next slide; nothing happens on the last one.
    pub fn go_to_next(&mut self) {
        if let Some(next) = self.neighbors().and_then(|n| n.next) {
            self.go_to(next.value());
        }
    }

    /// Boundary information around the current slide.
    #[must_use]
    pub fn neighbors(&self) -> Option<Neighbors> {
        let dataset = self.dataset.as_ref()?;
        Some(dataset.neighbors(self.current_slide_index()?))
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    pub fn zoom_in(&mut self) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        views.axis.zoom_in();
        let zoom_level = views.axis.scale_factor();
        self.events.fire(&TimelineEvent::ZoomIn { zoom_level });
        self.after_zoom();
    }

    pub fn zoom_out(&mut self) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        views.axis.zoom_out();
        let zoom_level = views.axis.scale_factor();
        self.events.fire(&TimelineEvent::ZoomOut { zoom_level });
        self.after_zoom();
    }

    /// Jumps to a zoom level. Out-of-range levels are left to the axis view
    /// to ignore.
    pub fn set_zoom(&mut self, level: usize) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        views.axis.set_zoom(level);
        self.after_zoom();
    }

    /// Re-lays out when the new zoom made the axis need more height.
    fn after_zoom(&mut self) {
        let needs_room = self
            .views
            .as_ref()
            .and_then(|views| views.axis.minimum_height())
            .is_some_and(|reported| reported > self.minimum.value());
        if needs_room && !self.initial_display_pending {
            self.refresh_display(true, self.base_duration());
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds an event and creates its slide and marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotReady`] before the views exist and
    /// [`Error::Dataset`] when the dataset refuses the event.
    pub fn add(&mut self, data: ItemData) -> Result<ItemId> {
        let (Some(dataset), Some(views)) = (self.dataset.as_mut(), self.views.as_mut()) else {
            return Err(Error::NotReady);
        };
        let id = dataset.add_event(data)?;
        let index = dataset
            .event_index_of(&id)
            .ok_or_else(|| Error::View(format!("added event {id} is missing")))?;
        let slide = index.to_slide(dataset.has_title());
        if let Some(item) = dataset.event(index) {
            if let Some(content) = views.content.as_mut() {
                content.create_slide(item, slide);
                content.redraw();
            }
            views.axis.create_marker(item, index);
            views.axis.redraw(false);
        }

        tracing::info!(%id, index = index.value(), "event added");
        self.events.fire(&TimelineEvent::Added {
            unique_id: id.clone(),
        });
        self.refresh_peeks();
        Ok(id)
    }

    /// Removes the event at event index `n`. Out-of-range indices are
    /// ignored.
    ///
    /// When the event is current, the selection first moves to the next
    /// event, else the previous one, else the title. With nothing left the
    /// selection is cleared without a `change` event.
    pub fn remove(&mut self, n: usize) -> Option<Item> {
        self.views.as_ref()?;
        let dataset = self.dataset.as_ref()?;
        let index = EventIndex(n);
        let removed_id = dataset.event(index)?.id().clone();

        if self.current.as_ref() == Some(&removed_id) {
            let fallback = dataset
                .event(EventIndex(n + 1))
                .or_else(|| {
                    n.checked_sub(1)
                        .and_then(|previous| dataset.event(EventIndex(previous)))
                })
                .or_else(|| dataset.title())
                .map(|item| item.id().clone());
            if let Some(target) = fallback {
                self.go_to_id(&target);
            }
        }

        let dataset = self.dataset.as_mut()?;
        let has_title = dataset.has_title();
        let item = dataset.remove_event(index)?;
        if let Some(views) = self.views.as_mut() {
            if let Some(content) = views.content.as_mut() {
                content.destroy_slide(index.to_slide(has_title));
                content.redraw();
            }
            views.axis.destroy_marker(index);
            views.axis.redraw(false);
        }
        if self.current.as_ref() == Some(&removed_id) {
            self.current = None;
        }

        tracing::info!(id = %removed_id, index = n, "event removed");
        self.events.fire(&TimelineEvent::Removed {
            unique_id: removed_id,
        });
        self.refresh_peeks();
        Some(item)
    }

    /// Removes the event `id`. Unknown ids and the title are ignored.
    pub fn remove_id(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.dataset.as_ref()?.event_index_of(id)?;
        self.remove(index.value())
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Recomputes the layout without animation. Does nothing until the
    /// views exist or while the first display waits for visibility.
    pub fn update_display(&mut self) {
        if self.lifecycle.phase() == Phase::Initializing || self.views.is_none() {
            tracing::debug!("timeline not initialized, skipping display update");
            return;
        }
        if self.initial_display_pending {
            tracing::debug!("container hidden, skipping display update");
            return;
        }
        self.refresh_display(false, self.base_duration());
    }

    fn base_duration(&self) -> Duration {
        Duration::from_millis(self.options.duration_ms)
    }

    fn refresh_display(&mut self, animate: bool, base: Duration) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        if let Some(reported) = views.axis.minimum_height() {
            if self.minimum.observe(reported) {
                tracing::debug!(minimum = reported, "axis minimum height raised");
            }
        }

        let container = &mut self.host.container;
        let (width, height) = container.size();
        let state = layout::compute(&LayoutInput {
            width,
            height,
            device: container.device(),
            options: &self.options,
            minimum: self.minimum,
            direction: self.language.direction(),
            menubar_height: views.menu_bar.height(),
        });
        tracing::debug!(?state, animate, "display updated");

        container.set_panel_height(Panel::Axis, state.axis_height.ceil());
        if animate {
            let duration = base / 2;
            let animator = self.host.animator.as_mut();
            if let Some(content_height) = state.content_height {
                self.transitions.start(
                    animator,
                    Transition {
                        target: Panel::Content,
                        property: AnimatedProperty::Height,
                        value: content_height,
                        duration,
                        easing: Easing::EaseOutStrong,
                    },
                );
            }
            self.transitions.start(
                animator,
                Transition {
                    target: Panel::MenuBar,
                    property: AnimatedProperty::Top,
                    value: state.menubar_top,
                    duration,
                    easing: Easing::EaseOutStrong,
                },
            );
        } else {
            self.transitions.stop_all();
            if let Some(content_height) = state.content_height {
                container.set_panel_height(Panel::Content, content_height);
            }
            container.set_panel_top(Panel::MenuBar, state.menubar_top);
        }

        views.axis.update_display(width, state.axis_height, animate);
        if let (Some(content), Some(content_height)) =
            (views.content.as_mut(), state.content_height)
        {
            content.update_display(width, content_height, animate, state.layout);
        }
        self.host.container.set_display_class(&state.class);
        self.display = Some(state);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Item at slide index `n`.
    #[must_use]
    pub fn data(&self, n: usize) -> Option<&Item> {
        self.dataset.as_ref()?.item_at(SlideIndex(n))
    }

    #[must_use]
    pub fn data_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.dataset.as_ref()?.item_by_id(id)
    }

    /// Slide `n` of the content view. `None` when out of range or headless.
    #[must_use]
    pub fn slide(&self, n: usize) -> Option<Slide<'_>> {
        let content = self.views.as_ref()?.content.as_ref()?;
        if n >= content.slide_count() {
            return None;
        }
        let index = SlideIndex(n);
        let item = self.dataset.as_ref()?.item_at(index)?;
        Some(Slide { index, item })
    }

    #[must_use]
    pub fn slide_by_id(&self, id: &ItemId) -> Option<Slide<'_>> {
        let index = self.dataset.as_ref()?.slide_index_of(id)?;
        self.slide(index.value())
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<Slide<'_>> {
        self.slide_by_id(self.current.as_ref()?)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&ItemId> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    /// Layout computed by the last display update.
    #[must_use]
    pub fn display_state(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    #[must_use]
    pub fn observed_minimum(&self) -> ObservedMinimum {
        self.minimum
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Problems that caused the last dataset to be rejected.
    #[must_use]
    pub fn errors(&self) -> &[DatasetError] {
        &self.errors
    }

    fn contains(&self, id: &ItemId) -> bool {
        self.dataset.as_ref().is_some_and(|d| d.contains(id))
    }

    fn current_slide_index(&self) -> Option<SlideIndex> {
        self.dataset.as_ref()?.slide_index_of(self.current.as_ref()?)
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&TimelineEvent) + 'static,
    ) -> SubscriptionId {
        self.events.on(kind, listener)
    }

    pub fn on_any(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) -> SubscriptionId {
        self.events.on_any(listener)
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.events.off(id)
    }
}
