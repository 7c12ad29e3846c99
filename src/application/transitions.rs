// SPDX-License-Identifier: MPL-2.0
//! One running transition per panel, last writer wins.

use super::port::{AnimationHandle, Animator, Panel, Transition};
use std::collections::HashMap;

/// Tracks the transition currently running on each panel.
#[derive(Default)]
pub struct TransitionSlots {
    running: HashMap<Panel, Box<dyn AnimationHandle>>,
}

impl std::fmt::Debug for TransitionSlots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionSlots")
            .field("running", &self.running.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TransitionSlots {
    /// Stops whatever runs on the transition's panel, then starts it.
    pub fn start(&mut self, animator: &mut dyn Animator, transition: Transition) {
        if let Some(mut previous) = self.running.remove(&transition.target) {
            previous.stop();
        }
        let handle = animator.start(transition);
        self.running.insert(transition.target, handle);
    }

    /// Stops everything, e.g. before a non-animated update.
    pub fn stop_all(&mut self) {
        for (_, mut handle) in self.running.drain() {
            handle.stop();
        }
    }

    #[must_use]
    pub fn is_running(&self, panel: Panel) -> bool {
        self.running.contains_key(&panel)
    }
}
