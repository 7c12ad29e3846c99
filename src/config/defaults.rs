// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Animation**: base durations
//! - **Breakpoints**: container width thresholds
//! - **Axis**: time axis height and marker geometry
//! - **Navigation**: initial selection and deep links

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Base animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 1000;

/// Base duration used for the very first layout pass.
pub const INITIAL_LAYOUT_DURATION_MS: u64 = 2000;

// ==========================================================================
// Breakpoint Defaults
// ==========================================================================

/// At or below this width the container is skinny and forced to portrait.
pub const DEFAULT_SKINNY_SIZE: f32 = 650.0;

/// At or below this width the container is medium sized.
pub const DEFAULT_MEDIUM_SIZE: f32 = 800.0;

// ==========================================================================
// Axis Defaults
// ==========================================================================

/// Minimum axis height in pixels.
pub const DEFAULT_TIMENAV_HEIGHT_MIN: i64 = 175;

/// Axis height as a percentage of the container height.
pub const DEFAULT_TIMENAV_HEIGHT_PERCENTAGE: f32 = 25.0;

/// Axis height percentage on mobile devices.
pub const DEFAULT_TIMENAV_MOBILE_HEIGHT_PERCENTAGE: f32 = 40.0;

/// Top and bottom marker padding; twice this is removed from the axis height.
pub const DEFAULT_MARKER_PADDING: i64 = 5;

/// Minimum marker height.
pub const DEFAULT_MARKER_HEIGHT_MIN: i64 = 30;

/// Minimum marker width.
pub const DEFAULT_MARKER_WIDTH_MIN: i64 = 100;

/// Horizontal slide padding.
pub const DEFAULT_SLIDE_PADDING_LR: i64 = 100;

/// Accepted range for pixel-sized integer options.
pub const PIXEL_OPTION_RANGE: std::ops::RangeInclusive<i64> = 0..=100_000;

/// Seam between the content view and the axis view.
pub const PANEL_SEAM_PX: f32 = 1.0;

/// Menu bar offset correction when the axis is docked on top.
pub const MENUBAR_TOP_CORRECTION_PX: f32 = 39.0;

/// Menu bar offset correction when the axis is docked at the bottom.
pub const MENUBAR_BOTTOM_CORRECTION_PX: f32 = 35.0;

/// Left offset of the headless "previous" affordance.
pub const PEEK_PREVIOUS_LEFT_PX: f32 = 50.0;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default UI language code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Prefix of bookmark fragments (`event-<id>`).
pub const HASH_PREFIX: &str = "event-";
