// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization using the Fluent localization system.
//!
//! # Features
//!
//! - Embedded `.ftl` translation files, with `en-US` always available as fallback
//! - Asynchronous loading from the embedded assets or over HTTP
//! - Locale detection from the OS when the configured code is `auto`
//! - Text direction derived from the locale (right-to-left scripts)

pub mod fluent;
pub mod source;

pub use fluent::{Language, FALLBACK_LOCALE};
pub use source::{load_language, resolve_locale, EmbeddedSource, HttpSource, LanguageSource};
