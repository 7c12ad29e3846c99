// SPDX-License-Identifier: MPL-2.0
//! Load tracking: the timeline is ready once every active view has loaded.

/// Overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No accepted dataset, or the views could not be built.
    #[default]
    Initializing,
    /// Views exist; at least one has not reported loaded.
    PartiallyReady,
    Ready,
}

/// Which view reported loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Axis,
    Content,
}

/// Result of recording a load report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// This report completed the set; fire `ready` now.
    BecameReady,
    Unchanged,
}

/// Per-view loaded flags plus the derived phase.
///
/// A flag is set at most once and never cleared, so the transition to
/// [`Phase::Ready`] happens exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifecycle {
    phase: Phase,
    axis_loaded: bool,
    /// `None` when there is no content view (headless).
    content_loaded: Option<bool>,
}

impl Lifecycle {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Views were built; `with_content` is false in headless mode.
    pub fn views_constructed(&mut self, with_content: bool) -> LoadOutcome {
        if self.phase != Phase::Initializing {
            return LoadOutcome::Unchanged;
        }
        self.content_loaded = with_content.then_some(self.content_loaded.unwrap_or(false));
        self.phase = Phase::PartiallyReady;
        // A load report may have arrived while construction was running.
        if self.all_loaded() {
            self.phase = Phase::Ready;
            return LoadOutcome::BecameReady;
        }
        LoadOutcome::Unchanged
    }

    pub fn mark_loaded(&mut self, view: ViewKind) -> LoadOutcome {
        match view {
            ViewKind::Axis => self.axis_loaded = true,
            ViewKind::Content => match &mut self.content_loaded {
                Some(loaded) => *loaded = true,
                None if self.phase == Phase::Initializing => self.content_loaded = Some(true),
                None => {
                    tracing::debug!("content loaded reported without a content view");
                    return LoadOutcome::Unchanged;
                }
            },
        }
        if self.phase == Phase::PartiallyReady && self.all_loaded() {
            self.phase = Phase::Ready;
            return LoadOutcome::BecameReady;
        }
        LoadOutcome::Unchanged
    }

    fn all_loaded(&self) -> bool {
        self.axis_loaded && self.content_loaded.unwrap_or(true)
    }
}
