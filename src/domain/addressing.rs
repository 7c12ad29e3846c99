// SPDX-License-Identifier: MPL-2.0
//! The two addressing schemes over a dataset.
//!
//! An [`EventIndex`] addresses `events[i]` directly. A [`SlideIndex`]
//! reserves position `0` for the title when one exists, shifting every
//! event by one. Without a title the two schemes coincide.

use std::fmt;

/// Position in the title-inclusive slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlideIndex(pub usize);

/// Position in the event list, ignoring the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventIndex(pub usize);

impl SlideIndex {
    pub const FIRST: SlideIndex = SlideIndex(0);

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Converts to an event index. Returns `None` for the title slot.
    #[must_use]
    pub fn to_event(self, has_title: bool) -> Option<EventIndex> {
        if has_title {
            self.0.checked_sub(1).map(EventIndex)
        } else {
            Some(EventIndex(self.0))
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<SlideIndex> {
        self.0.checked_sub(1).map(SlideIndex)
    }

    #[must_use]
    pub fn next(self) -> SlideIndex {
        SlideIndex(self.0 + 1)
    }
}

impl EventIndex {
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn to_slide(self, has_title: bool) -> SlideIndex {
        if has_title {
            SlideIndex(self.0 + 1)
        } else {
            SlideIndex(self.0)
        }
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide {}", self.0)
    }
}

impl fmt::Display for EventIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {}", self.0)
    }
}

/// Adjacent slides of a position, `None` where the position is a boundary.
///
/// This is the single place boundary detection happens; previous/next
/// navigation, keyboard handling and the headless peek affordances all read
/// it instead of re-deriving the first/last checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub previous: Option<SlideIndex>,
    pub next: Option<SlideIndex>,
}

impl Neighbors {
    /// Computes neighbors of `current` in a sequence of `slide_count` slides.
    #[must_use]
    pub fn around(current: SlideIndex, slide_count: usize) -> Self {
        if current.0 >= slide_count {
            return Self::default();
        }
        let next = current.next();
        Self {
            previous: current.previous(),
            next: (next.0 < slide_count).then_some(next),
        }
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.previous.is_none()
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.next.is_none()
    }
}
