// SPDX-License-Identifier: MPL-2.0
//! The timeline dataset: an optional pinned title plus ordered events.
//!
//! The dataset keeps identifiers unique across title and events, keeps the
//! events ordered by start date, and accumulates validation problems in an
//! error log instead of failing on the first one.

use super::addressing::{EventIndex, Neighbors, SlideIndex};
use super::item::{Item, ItemData, ItemId};
use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where an identifier lives inside the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Title,
    Event,
}

/// On-disk shape of a dataset (TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ItemData>,
    #[serde(default)]
    pub events: Vec<ItemData>,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    title: Option<Item>,
    events: Vec<Item>,
    /// Identifier lookup kept in sync with `title` and `events`.
    event_dict: HashMap<ItemId, Slot>,
    errors: Vec<DatasetError>,
}

impl Dataset {
    /// Builds a dataset, recording (not raising) every problem found.
    #[must_use]
    pub fn new(title: Option<ItemData>, events: Vec<ItemData>) -> Self {
        let mut dataset = Self::default();

        if let Some(data) = title {
            let id = dataset.assign_id(&data);
            match id {
                Ok(id) => {
                    dataset.event_dict.insert(id.clone(), Slot::Title);
                    dataset.title = Some(Item::from_data(id, data));
                }
                Err(err) => dataset.log_error(err),
            }
        }

        for data in events {
            if let Err(err) = dataset.insert_event(data) {
                dataset.log_error(err);
            }
        }

        if dataset.title.is_none() && dataset.events.is_empty() && dataset.errors.is_empty() {
            dataset.log_error(DatasetError::EmptyTimeline);
        }
        dataset
    }

    /// Parses a dataset from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a valid dataset document.
    pub fn from_toml_str(text: &str) -> crate::error::Result<Self> {
        let file: DatasetFile = toml::from_str(text)?;
        Ok(Self::new(file.title, file.events))
    }

    // ---------------------------------------------------------------------
    // Error log
    // ---------------------------------------------------------------------

    pub fn log_error(&mut self, error: DatasetError) {
        tracing::debug!(%error, "dataset error logged");
        self.errors.push(error);
    }

    #[must_use]
    pub fn errors(&self) -> &[DatasetError] {
        &self.errors
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn title(&self) -> Option<&Item> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    #[must_use]
    pub fn events(&self) -> &[Item] {
        &self.events
    }

    #[must_use]
    pub fn event(&self, index: EventIndex) -> Option<&Item> {
        self.events.get(index.0)
    }

    /// Number of slides: events plus the title slot when present.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.events.len() + usize::from(self.has_title())
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.event_dict.contains_key(id)
    }

    #[must_use]
    pub fn slot_of(&self, id: &ItemId) -> Option<Slot> {
        self.event_dict.get(id).copied()
    }

    /// Item at a slide position, title included.
    #[must_use]
    pub fn item_at(&self, slide: SlideIndex) -> Option<&Item> {
        match slide.to_event(self.has_title()) {
            None => self.title.as_ref(),
            Some(event) => self.events.get(event.0),
        }
    }

    /// Looks an item up by identifier.
    #[must_use]
    pub fn item_by_id(&self, id: &ItemId) -> Option<&Item> {
        match self.slot_of(id)? {
            Slot::Title => self.title.as_ref(),
            Slot::Event => self.events.iter().find(|item| item.id() == id),
        }
    }

    /// Event position of an identifier.
    ///
    /// This is a linear scan, O(n) per lookup. Collections are small enough
    /// that this has not needed an index.
    #[must_use]
    pub fn event_index_of(&self, id: &ItemId) -> Option<EventIndex> {
        self.events
            .iter()
            .position(|item| item.id() == id)
            .map(EventIndex)
    }

    /// Slide position of an identifier, title included. O(n), see
    /// [`Self::event_index_of`].
    #[must_use]
    pub fn slide_index_of(&self, id: &ItemId) -> Option<SlideIndex> {
        if self.title.as_ref().is_some_and(|title| title.id() == id) {
            return Some(SlideIndex::FIRST);
        }
        self.event_index_of(id)
            .map(|event| event.to_slide(self.has_title()))
    }

    #[must_use]
    pub fn last_slide(&self) -> Option<SlideIndex> {
        self.slide_count().checked_sub(1).map(SlideIndex)
    }

    #[must_use]
    pub fn neighbors(&self, slide: SlideIndex) -> Neighbors {
        Neighbors::around(slide, self.slide_count())
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Inserts a new event and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the event has no start date or its explicit
    /// identifier is already taken. The dataset is left untouched.
    pub fn add_event(&mut self, data: ItemData) -> Result<ItemId, DatasetError> {
        self.insert_event(data)
    }

    /// Splices the event at `index` out of the dataset.
    pub fn remove_event(&mut self, index: EventIndex) -> Option<Item> {
        if index.0 >= self.events.len() {
            return None;
        }
        let item = self.events.remove(index.0);
        self.event_dict.remove(item.id());
        Some(item)
    }

    fn insert_event(&mut self, data: ItemData) -> Result<ItemId, DatasetError> {
        let Some(start) = data.start_date else {
            let label = data
                .unique_id
                .clone()
                .unwrap_or_else(|| data.headline.clone());
            return Err(DatasetError::MissingStartDate(label));
        };
        let id = self.assign_id(&data)?;
        let item = Item::from_data(id.clone(), data);

        // Stable: an event sharing a start date lands after the existing ones.
        let position = self
            .events
            .partition_point(|existing| existing.start().is_some_and(|s| s <= start));
        self.events.insert(position, item);
        self.event_dict.insert(id.clone(), Slot::Event);
        Ok(id)
    }

    fn assign_id(&self, data: &ItemData) -> Result<ItemId, DatasetError> {
        match &data.unique_id {
            Some(explicit) => {
                let id = ItemId::new(explicit.clone());
                if self.event_dict.contains_key(&id) {
                    Err(DatasetError::DuplicateId(explicit.clone()))
                } else {
                    Ok(id)
                }
            }
            None => Ok(self.unique_slug(&data.headline)),
        }
    }

    /// Derives an unused identifier from a headline.
    fn unique_slug(&self, headline: &str) -> ItemId {
        let base = slugify(headline);
        let base = if base.is_empty() {
            "event".to_string()
        } else {
            base
        };
        let mut candidate = ItemId::new(base.clone());
        let mut suffix = 2;
        while self.event_dict.contains_key(&candidate) {
            candidate = ItemId::new(format!("{base}-{suffix}"));
            suffix += 1;
        }
        candidate
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
