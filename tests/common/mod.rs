// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::rc::Rc;
use storyline::application::{EventKind, Timeline, TimelineEvent};
use storyline::config::Options;
use storyline::domain::{Dataset, ItemData, ItemId};
use storyline::i18n::Language;
use storyline::infrastructure::MemoryBackend;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

/// `count` events `ev-0..` one year apart from 1900, optionally with a
/// title `title`.
pub fn dataset(with_title: bool, count: usize) -> Dataset {
    let title = with_title.then(|| {
        ItemData {
            headline: "Title".into(),
            ..ItemData::default()
        }
        .with_id("title")
    });
    let events = (0..count)
        .map(|i| {
            let year = 1900 + i32::try_from(i).expect("small count");
            ItemData::event(format!("Event {i}"), ymd(year, 1, 1)).with_id(format!("ev-{i}"))
        })
        .collect();
    Dataset::new(title, events)
}

pub fn id(value: &str) -> ItemId {
    ItemId::from(value)
}

/// Every public event fired, in order.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<TimelineEvent>>>);

impl Recorder {
    pub fn attach(timeline: &mut Timeline) -> Self {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.0);
        let _ = timeline.on_any(move |event| sink.borrow_mut().push(event.clone()));
        recorder
    }

    pub fn events(&self) -> Vec<TimelineEvent> {
        self.0.borrow().clone()
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.0.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    pub fn changes(&self) -> Vec<ItemId> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                TimelineEvent::Change { unique_id } => Some(unique_id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Timeline on `backend` with the fallback language, not yet configured.
pub fn timeline(options: Options, backend: &MemoryBackend) -> (Timeline, Recorder) {
    let mut timeline = Timeline::new(options, backend.host());
    let recorder = Recorder::attach(&mut timeline);
    timeline.set_language(Language::fallback());
    (timeline, recorder)
}

/// Configured timeline with all queued view messages processed.
pub fn mount(
    options: Options,
    backend: &MemoryBackend,
    dataset: Dataset,
) -> (Timeline, Recorder) {
    let (mut timeline, recorder) = timeline(options, backend);
    timeline.set_config(dataset);
    backend.run_until_idle(&mut timeline);
    (timeline, recorder)
}
