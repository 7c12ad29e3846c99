// SPDX-License-Identifier: MPL-2.0
//! Animator port: cancellable property transitions.

use super::host::Panel;
use crate::domain::easing::Easing;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatedProperty {
    Height,
    Top,
}

/// A single property transition on a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub target: Panel,
    pub property: AnimatedProperty,
    pub value: f32,
    pub duration: Duration,
    pub easing: Easing,
}

/// Runs transitions; fire-and-forget with explicit cancellation.
pub trait Animator {
    fn start(&mut self, transition: Transition) -> Box<dyn AnimationHandle>;
}

pub trait AnimationHandle {
    /// Stops the transition where it is.
    fn stop(&mut self);
}
