// SPDX-License-Identifier: MPL-2.0
//! Public timeline events and the listener registry.
//!
//! Listeners run synchronously, in subscription order, while the controller
//! processes the message or call that caused the event.

use crate::domain::item::ItemId;

/// Something observable happened to the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    /// The dataset was accepted, before the views are built.
    DataLoaded,
    /// Every active view finished loading. Fired once per timeline.
    Ready,
    /// The current item changed.
    Change { unique_id: ItemId },
    /// The content view's background changed.
    ColorChange { unique_id: Option<ItemId> },
    ZoomIn { zoom_level: f64 },
    ZoomOut { zoom_level: f64 },
    BackToStart { unique_id: Option<ItemId> },
    NavNext { unique_id: Option<ItemId> },
    NavPrevious { unique_id: Option<ItemId> },
    Added { unique_id: ItemId },
    Removed { unique_id: ItemId },
    /// The location fragment was rewritten for the current item.
    HashUpdated { unique_id: ItemId, hashbookmark: String },
}

/// Event discriminant used to subscribe to a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataLoaded,
    Ready,
    Change,
    ColorChange,
    ZoomIn,
    ZoomOut,
    BackToStart,
    NavNext,
    NavPrevious,
    Added,
    Removed,
    HashUpdated,
}

impl TimelineEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            TimelineEvent::DataLoaded => EventKind::DataLoaded,
            TimelineEvent::Ready => EventKind::Ready,
            TimelineEvent::Change { .. } => EventKind::Change,
            TimelineEvent::ColorChange { .. } => EventKind::ColorChange,
            TimelineEvent::ZoomIn { .. } => EventKind::ZoomIn,
            TimelineEvent::ZoomOut { .. } => EventKind::ZoomOut,
            TimelineEvent::BackToStart { .. } => EventKind::BackToStart,
            TimelineEvent::NavNext { .. } => EventKind::NavNext,
            TimelineEvent::NavPrevious { .. } => EventKind::NavPrevious,
            TimelineEvent::Added { .. } => EventKind::Added,
            TimelineEvent::Removed { .. } => EventKind::Removed,
            TimelineEvent::HashUpdated { .. } => EventKind::HashUpdated,
        }
    }
}

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TimelineEvent)>;

struct Subscription {
    id: SubscriptionId,
    kind: Option<EventKind>,
    listener: Listener,
}

/// Ordered listener registry.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl EventBus {
    /// Subscribes to one kind of event.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&TimelineEvent) + 'static,
    ) -> SubscriptionId {
        self.subscribe(Some(kind), Box::new(listener))
    }

    /// Subscribes to every event.
    pub fn on_any(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) -> SubscriptionId {
        self.subscribe(None, Box::new(listener))
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    pub fn fire(&mut self, event: &TimelineEvent) {
        tracing::trace!(?event, "firing timeline event");
        let kind = event.kind();
        for sub in &mut self.subscriptions {
            if sub.kind.is_none_or(|k| k == kind) {
                (sub.listener)(event);
            }
        }
    }

    fn subscribe(&mut self, kind: Option<EventKind>, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::default();
        let first = Rc::clone(&log);
        let _ = bus.on_any(move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&log);
        let _ = bus.on_any(move |_| second.borrow_mut().push(2));

        bus.fire(&TimelineEvent::Ready);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn kind_filter_skips_other_events() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::default();
        let seen = Rc::clone(&count);
        let _ = bus.on(EventKind::Ready, move |_| *seen.borrow_mut() += 1);

        bus.fire(&TimelineEvent::DataLoaded);
        bus.fire(&TimelineEvent::Ready);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn off_removes_listener_once() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::default();
        let seen = Rc::clone(&count);
        let id = bus.on_any(move |_| *seen.borrow_mut() += 1);

        assert!(bus.off(id));
        assert!(!bus.off(id));
        bus.fire(&TimelineEvent::Ready);
        assert_eq!(*count.borrow(), 0);
    }
}
