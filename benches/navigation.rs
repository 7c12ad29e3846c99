// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for timeline addressing and navigation.
//!
//! Measures the performance of:
//! - Id to slide index lookup on a large dataset
//! - Neighbor (boundary) detection
//! - Full navigation through the controller on the in-memory host

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use storyline::application::{Message, NavKey};
use storyline::domain::{Dataset, ItemData, ItemId, SlideIndex};
use storyline::i18n::Language;
use storyline::infrastructure::MemoryBackend;
use storyline::{Options, Timeline};

const EVENT_COUNT: usize = 5_000;

fn large_dataset() -> Dataset {
    let origin = NaiveDate::from_ymd_opt(1800, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let events = (0..EVENT_COUNT)
        .map(|i| {
            let start = origin + Duration::days(i64::try_from(i).unwrap() * 7);
            ItemData::event(format!("Event {i}"), start).with_id(format!("ev-{i}"))
        })
        .collect();
    let title = ItemData {
        headline: "Title".into(),
        ..ItemData::default()
    };
    Dataset::new(Some(title), events)
}

/// Benchmark id lookups.
fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("addressing");
    let dataset = large_dataset();
    let last = ItemId::from(format!("ev-{}", EVENT_COUNT - 1));

    group.bench_function("slide_index_of", |b| {
        b.iter(|| black_box(dataset.slide_index_of(black_box(&last))));
    });

    group.bench_function("neighbors", |b| {
        b.iter(|| black_box(dataset.neighbors(black_box(SlideIndex(EVENT_COUNT / 2)))));
    });

    group.finish();
}

/// Benchmark stepping through the timeline via keyboard messages.
///
/// Includes selection, view synchronization and event dispatch.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let backend = MemoryBackend::new(1000.0, 700.0);
    let mut timeline = Timeline::new(Options::default(), backend.host());
    timeline.set_language(Language::fallback());
    timeline.set_config(large_dataset());
    backend.run_until_idle(&mut timeline);

    group.bench_function("next_then_previous", |b| {
        b.iter(|| {
            timeline.update(Message::Key(NavKey::Right));
            timeline.update(Message::Key(NavKey::Left));
            backend.run_until_idle(&mut timeline);
            backend.clear_calls();
        });
    });

    group.bench_function("go_to_end_and_back", |b| {
        b.iter(|| {
            timeline.go_to_end();
            timeline.go_to_start();
            backend.clear_calls();
            black_box(timeline.current_id());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_addressing, bench_navigate);
criterion_main!(benches);
