// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`memory`]: Recording in-memory host and views, used by the command-line
//!   driver and the test-suite
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Views emit [`Message`] values into a queue the host loop drains
//!
//! [`Message`]: crate::application::Message

pub mod memory;

pub use memory::{Call, MemoryBackend};
