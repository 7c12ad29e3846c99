// SPDX-License-Identifier: MPL-2.0
//! Timeline items and their value objects.
//!
//! An [`Item`] is a single timeline entry: either the pinned title or one of
//! the ordered events. Items are owned by the [`Dataset`](super::dataset::Dataset);
//! everything else refers to them through their [`ItemId`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// =============================================================================
// ItemId
// =============================================================================

/// Unique, immutable identifier of an item across title and events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Rgb
// =============================================================================

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parses `#rrggbb` or `#rgb` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                Self::from_hex(&expanded)
            }
            _ => None,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

// =============================================================================
// Media & Background
// =============================================================================

/// Reference to a piece of media shown with an item. Loading and playback
/// belong to the content view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

/// Display background of an item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// =============================================================================
// ItemData
// =============================================================================

/// Item as supplied by the caller, before the dataset assigns an identifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    /// Overrides the formatted start date when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl ItemData {
    /// Convenience constructor for an event with a headline and start date.
    #[must_use]
    pub fn event(headline: impl Into<String>, start_date: NaiveDateTime) -> Self {
        Self {
            headline: headline.into(),
            start_date: Some(start_date),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.unique_id = Some(id.into());
        self
    }
}

// =============================================================================
// Item
// =============================================================================

/// A timeline entry owned by the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    display_date: Option<String>,
    headline: String,
    text: String,
    media: Option<MediaRef>,
    background: Option<Background>,
}

impl Item {
    pub(crate) fn from_data(id: ItemId, data: ItemData) -> Self {
        Self {
            id,
            start: data.start_date,
            end: data.end_date,
            display_date: data.display_date,
            headline: data.headline,
            text: data.text,
            media: data.media,
            background: data.background,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    #[must_use]
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Date line shown in previews: the explicit display date if any,
    /// otherwise the start date (with time when it is not midnight).
    #[must_use]
    pub fn formatted_date(&self) -> String {
        if let Some(display) = &self.display_date {
            return display.clone();
        }
        match self.start {
            Some(start) if start.time() == chrono::NaiveTime::MIN => {
                start.format("%B %-d, %Y").to_string()
            }
            Some(start) => start.format("%B %-d, %Y %H:%M").to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn rgb_parses_long_and_short_hex() {
        assert_eq!(
            Rgb::from_hex("#ff8000"),
            Some(Rgb {
                r: 255,
                g: 128,
                b: 0
            })
        );
        assert_eq!(Rgb::from_hex("fff"), Some(Rgb::WHITE));
    }

    #[test]
    fn rgb_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn formatted_date_prefers_display_date() {
        let mut data = ItemData::event("Moon landing", date(1969, 7, 20));
        data.display_date = Some("Summer '69".into());
        let item = Item::from_data(ItemId::from("moon"), data);
        assert_eq!(item.formatted_date(), "Summer '69");
    }

    #[test]
    fn formatted_date_omits_midnight_time() {
        let item = Item::from_data(
            ItemId::from("moon"),
            ItemData::event("Moon landing", date(1969, 7, 20)),
        );
        assert_eq!(item.formatted_date(), "July 20, 1969");
    }

    #[test]
    fn item_id_borrows_as_str() {
        let id = ItemId::from("ev-1");
        let as_str: &str = id.borrow();
        assert_eq!(as_str, "ev-1");
        assert_eq!(id.to_string(), "ev-1");
    }
}
