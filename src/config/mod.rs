// SPDX-License-Identifier: MPL-2.0
//! Timeline presentation options and their TOML representation.
//!
//! Options are read as an [`OptionsFile`], a permissive mirror of the
//! on-disk document, and resolved once into an immutable [`Options`]. Integer
//! options accept numbers or numeric strings; anything else is reported as a
//! [`DatasetError::InvalidIntegerOption`] and replaced by the default, so a
//! single bad value can be shown to the user alongside dataset problems.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `STORYLINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use storyline::config;
//!
//! let (options, problems) = config::from_toml_str("headless = true\nskinny_size = 500")
//!     .expect("valid toml")
//!     .resolve();
//! assert!(options.headless);
//! assert!(problems.is_empty());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::easing::Easing;
use crate::domain::item::Rgb;
use crate::domain::layout::AxisPosition;
use crate::domain::zoom::DEFAULT_ZOOM_SEQUENCE;
use crate::error::{DatasetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "timeline.toml";
const APP_NAME: &str = "storyline";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STORYLINE_CONFIG_DIR";

// =============================================================================
// IntegerValue
// =============================================================================

/// Raw value of an integer-typed option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntegerValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntegerValue {
    /// Integer value, if this is an integer or a string of the form
    /// `^\s*-?\d+\s*$`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            IntegerValue::Int(v) => Some(*v),
            #[allow(clippy::cast_possible_truncation)]
            IntegerValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            IntegerValue::Float(_) => None,
            IntegerValue::Text(text) => {
                let trimmed = text.trim();
                let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                trimmed.parse().ok()
            }
        }
    }
}

impl From<i64> for IntegerValue {
    fn from(value: i64) -> Self {
        IntegerValue::Int(value)
    }
}

// =============================================================================
// OptionsFile
// =============================================================================

/// On-disk options document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_bookmark: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_zoom: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_full_embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_height_min: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_padding: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_width_min: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skinny_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_padding_lr: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_end: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at_slide: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timenav_height: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timenav_height_min: Option<IntegerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timenav_height_percentage: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timenav_mobile_height_percentage: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timenav_position: Option<AxisPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_sequence: Option<Vec<f64>>,
}

impl OptionsFile {
    /// Resolves the document into [`Options`], collecting every invalid value.
    #[must_use]
    pub fn resolve(self) -> (Options, Vec<DatasetError>) {
        let mut problems = Vec::new();
        let defaults = Options::default();

        // Pixel sizes outside `PIXEL_OPTION_RANGE` are reported like
        // non-integers so layout arithmetic never sees them.
        let mut integer = |name: &str, value: Option<IntegerValue>, fallback: i64| -> i64 {
            let Some(raw) = value else {
                return fallback;
            };
            let range = if name == "start_at_slide" {
                i64::MIN..=i64::MAX
            } else {
                PIXEL_OPTION_RANGE
            };
            match raw.as_integer() {
                Some(v) if range.contains(&v) => v,
                _ => {
                    problems.push(DatasetError::InvalidIntegerOption(name.to_string()));
                    fallback
                }
            }
        };

        let marker_height_min =
            integer("marker_height_min", self.marker_height_min, defaults.marker_height_min);
        let marker_padding = integer("marker_padding", self.marker_padding, defaults.marker_padding);
        let marker_width_min =
            integer("marker_width_min", self.marker_width_min, defaults.marker_width_min);
        let slide_padding_lr =
            integer("slide_padding_lr", self.slide_padding_lr, defaults.slide_padding_lr);
        let start_at_slide = integer("start_at_slide", self.start_at_slide, 0);
        let timenav_height_min = integer(
            "timenav_height_min",
            self.timenav_height_min,
            defaults.timenav_height_min,
        );
        let timenav_height = self.timenav_height.map(|raw| integer("timenav_height", Some(raw), 0));

        let default_bg_color = match self.default_bg_color.as_deref() {
            None => defaults.default_bg_color,
            Some(hex) => Rgb::from_hex(hex).unwrap_or_else(|| {
                tracing::warn!(color = hex, "invalid default background color, ignoring");
                defaults.default_bg_color
            }),
        };

        let options = Options {
            debug: self.debug.unwrap_or(defaults.debug),
            default_bg_color,
            duration_ms: self.duration_ms.unwrap_or(defaults.duration_ms),
            easing: self.easing.unwrap_or(defaults.easing),
            hash_bookmark: self.hash_bookmark.unwrap_or(defaults.hash_bookmark),
            headless: self.headless.unwrap_or(defaults.headless),
            initial_zoom: self.initial_zoom,
            is_embed: self.is_embed.unwrap_or(defaults.is_embed),
            is_full_embed: self.is_full_embed.unwrap_or(defaults.is_full_embed),
            language: self.language.unwrap_or(defaults.language),
            marker_height_min,
            marker_padding,
            marker_width_min,
            medium_size: self.medium_size.unwrap_or(defaults.medium_size),
            script_path: self.script_path,
            skinny_size: self.skinny_size.unwrap_or(defaults.skinny_size),
            slide_padding_lr,
            start_at_end: self.start_at_end.unwrap_or(defaults.start_at_end),
            start_at_slide: usize::try_from(start_at_slide).unwrap_or(0),
            timenav_height: timenav_height.filter(|h| *h > 0),
            timenav_height_min,
            timenav_height_percentage: self
                .timenav_height_percentage
                .unwrap_or(defaults.timenav_height_percentage),
            timenav_mobile_height_percentage: self
                .timenav_mobile_height_percentage
                .unwrap_or(defaults.timenav_mobile_height_percentage),
            timenav_position: self.timenav_position.unwrap_or(defaults.timenav_position),
            zoom_sequence: self
                .zoom_sequence
                .filter(|seq| !seq.is_empty())
                .unwrap_or(defaults.zoom_sequence),
        };
        (options, problems)
    }
}

// =============================================================================
// Options
// =============================================================================

/// Resolved, immutable presentation options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Lowers the default log filter to `debug`.
    pub debug: bool,
    pub default_bg_color: Rgb,
    /// Base animation duration in milliseconds.
    pub duration_ms: u64,
    pub easing: Easing,
    /// Mirrors the current item into the host location fragment.
    pub hash_bookmark: bool,
    /// Disables the content view and enables peek navigation.
    pub headless: bool,
    /// Zoom level applied to the axis right after it is created.
    pub initial_zoom: Option<usize>,
    pub is_embed: bool,
    pub is_full_embed: bool,
    pub language: String,
    pub marker_height_min: i64,
    pub marker_padding: i64,
    pub marker_width_min: i64,
    pub medium_size: f32,
    /// Base URL remote translations are fetched from.
    pub script_path: Option<String>,
    pub skinny_size: f32,
    pub slide_padding_lr: i64,
    pub start_at_end: bool,
    pub start_at_slide: usize,
    /// Explicit axis height in pixels; wins over the percentages.
    pub timenav_height: Option<i64>,
    pub timenav_height_min: i64,
    pub timenav_height_percentage: f32,
    pub timenav_mobile_height_percentage: f32,
    pub timenav_position: AxisPosition,
    pub zoom_sequence: Vec<f64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug: false,
            default_bg_color: Rgb::WHITE,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseInOutQuint,
            hash_bookmark: false,
            headless: false,
            initial_zoom: None,
            is_embed: false,
            is_full_embed: false,
            language: DEFAULT_LANGUAGE.to_string(),
            marker_height_min: DEFAULT_MARKER_HEIGHT_MIN,
            marker_padding: DEFAULT_MARKER_PADDING,
            marker_width_min: DEFAULT_MARKER_WIDTH_MIN,
            medium_size: DEFAULT_MEDIUM_SIZE,
            script_path: None,
            skinny_size: DEFAULT_SKINNY_SIZE,
            slide_padding_lr: DEFAULT_SLIDE_PADDING_LR,
            start_at_end: false,
            start_at_slide: 0,
            timenav_height: None,
            timenav_height_min: DEFAULT_TIMENAV_HEIGHT_MIN,
            timenav_height_percentage: DEFAULT_TIMENAV_HEIGHT_PERCENTAGE,
            timenav_mobile_height_percentage: DEFAULT_TIMENAV_MOBILE_HEIGHT_PERCENTAGE,
            timenav_position: AxisPosition::Bottom,
            zoom_sequence: DEFAULT_ZOOM_SEQUENCE.to_vec(),
        }
    }
}

impl From<&Options> for OptionsFile {
    fn from(options: &Options) -> Self {
        let rgb = options.default_bg_color;
        Self {
            debug: Some(options.debug),
            default_bg_color: Some(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)),
            duration_ms: Some(options.duration_ms),
            easing: Some(options.easing),
            hash_bookmark: Some(options.hash_bookmark),
            headless: Some(options.headless),
            initial_zoom: options.initial_zoom,
            is_embed: Some(options.is_embed),
            is_full_embed: Some(options.is_full_embed),
            language: Some(options.language.clone()),
            marker_height_min: Some(options.marker_height_min.into()),
            marker_padding: Some(options.marker_padding.into()),
            marker_width_min: Some(options.marker_width_min.into()),
            medium_size: Some(options.medium_size),
            script_path: options.script_path.clone(),
            skinny_size: Some(options.skinny_size),
            slide_padding_lr: Some(options.slide_padding_lr.into()),
            start_at_end: Some(options.start_at_end),
            start_at_slide: i64::try_from(options.start_at_slide).ok().map(Into::into),
            timenav_height: options.timenav_height.map(Into::into),
            timenav_height_min: Some(options.timenav_height_min.into()),
            timenav_height_percentage: Some(options.timenav_height_percentage),
            timenav_mobile_height_percentage: Some(options.timenav_mobile_height_percentage),
            timenav_position: Some(options.timenav_position),
            zoom_sequence: Some(options.zoom_sequence.clone()),
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the options file path, honoring `STORYLINE_CONFIG_DIR`.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    let dir = std::env::var_os(ENV_CONFIG_DIR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Parses an options document.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for [`OptionsFile`].
pub fn from_toml_str(text: &str) -> Result<OptionsFile> {
    Ok(toml::from_str(text)?)
}

/// Loads the options document from the default path, or an empty document
/// when there is none.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<OptionsFile> {
    match default_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(OptionsFile::default()),
    }
}

/// Loads an options document from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<OptionsFile> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Writes options to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directories or file cannot be written.
pub fn save_to_path(options: &Options, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(&OptionsFile::from(options))?;
    fs::write(path, content)?;
    Ok(())
}
