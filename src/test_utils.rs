// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests: float assertions and dataset builders.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::{Dataset, ItemData};
use chrono::{NaiveDate, NaiveDateTime};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-4;

/// Midnight on the given day.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid test date")
}

/// Dataset of `count` events with ids `ev-0..ev-{count-1}` in date order,
/// optionally preceded by a title with id `title`.
pub fn sample_dataset(with_title: bool, count: usize) -> Dataset {
    let title = with_title.then(|| {
        ItemData {
            headline: "Title".into(),
            ..ItemData::default()
        }
        .with_id("title")
    });
    let events = (0..count)
        .map(|i| {
            let year = 1900 + i32::try_from(i).expect("small test count");
            ItemData::event(format!("Event {i}"), ymd(year, 1, 1)).with_id(format!("ev-{i}"))
        })
        .collect();
    Dataset::new(title, events)
}
