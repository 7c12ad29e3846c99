// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the timeline controller and everything it is built
//! from:
//!
//! - [`port`]: Trait definitions (interfaces) for the views and the host
//! - [`controller`]: The [`Timeline`] orchestration controller
//! - [`layout`]: Responsive layout engine (pure)
//! - [`lifecycle`]: Loaded flags and the ready transition
//! - [`events`]: Public events and the listener registry
//! - [`message`]: Inputs views and the host feed into the controller
//! - [`bookmark`], [`peek`], [`transitions`]: Deep links, headless previews
//!   and per-panel animation slots
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Hosts drive the controller through [`Message`] values
//!
//! # Example
//!
//! ```ignore
//! use storyline::application::{Message, Timeline};
//! use storyline::infrastructure::memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new(1000.0, 700.0);
//! let mut timeline = Timeline::new(options, backend.host());
//! timeline.set_language(Language::fallback());
//! timeline.set_config(dataset);
//! for message in backend.drain_messages() {
//!     timeline.update(message);
//! }
//! ```

pub mod bookmark;
pub mod controller;
pub mod events;
pub mod layout;
pub mod lifecycle;
pub mod message;
pub mod peek;
pub mod port;
pub mod transitions;

pub use controller::{Host, Slide, Timeline};
pub use events::{EventBus, EventKind, SubscriptionId, TimelineEvent};
pub use layout::{DisplayState, ObservedMinimum};
pub use lifecycle::Phase;
pub use message::{AxisEvent, ContentEvent, MenuEvent, Message, NavKey};
pub use peek::{PeekDirection, PeekPreview};
