// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The controller owns selection, addressing and layout; everything that
//! renders or touches the outside world sits behind one of these traits.
//!
//! # Available Ports
//!
//! - [`view`]: axis view, content view, menu bar, peek affordances and the
//!   factory that builds them
//! - [`host`]: the mounting container and the deep-link location
//! - [`animator`]: cancellable property transitions
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Calls are synchronous and happen on the event-processing thread
//! - Views report back through [`Message`](crate::application::message::Message)
//!   values fed to [`Timeline::update`](crate::application::controller::Timeline::update),
//!   never by calling into the controller

pub mod animator;
pub mod host;
pub mod view;

pub use animator::{AnimatedProperty, AnimationHandle, Animator, Transition};
pub use host::{Container, Location, Panel};
pub use view::{AxisView, ContentView, MenuBar, PeekNav, ViewContext, ViewFactory};
