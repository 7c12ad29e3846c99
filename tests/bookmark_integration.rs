// SPDX-License-Identifier: MPL-2.0
//! Deep links through the location fragment.

mod common;

use common::{dataset, id, mount};
use storyline::application::{EventKind, TimelineEvent};
use storyline::config::Options;
use storyline::infrastructure::{Call, MemoryBackend};

fn bookmarked() -> Options {
    Options {
        hash_bookmark: true,
        ..Options::default()
    }
}

fn fragment_writes(backend: &MemoryBackend) -> Vec<String> {
    backend
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::FragmentReplaced(fragment) => Some(fragment),
            _ => None,
        })
        .collect()
}

#[test]
fn selection_is_written_to_fragment() {
    let backend = MemoryBackend::new(1000.0, 700.0);
    let (mut timeline, events) = mount(bookmarked(), &backend, dataset(false, 6));
    assert_eq!(backend.fragment().as_deref(), Some("event-ev-0"));

    events.clear();
    timeline.go_to(5);
    assert_eq!(backend.fragment().as_deref(), Some("event-ev-5"));
    assert_eq!(
        events.events(),
        vec![
            TimelineEvent::Change {
                unique_id: id("ev-5")
            },
            TimelineEvent::HashUpdated {
                unique_id: id("ev-5"),
                hashbookmark: "#event-ev-5".into(),
            },
        ]
    );
}

#[test]
fn fragment_change_navigates() {
    let backend = MemoryBackend::new(1000.0, 700.0);
    let (mut timeline, _) = mount(bookmarked(), &backend, dataset(false, 6));

    backend.navigate_fragment("#event-ev-2");
    backend.run_until_idle(&mut timeline);
    assert_eq!(timeline.current_id(), Some(&id("ev-2")));
    assert_eq!(backend.fragment().as_deref(), Some("event-ev-2"));
}

#[test]
fn fragment_naming_unknown_item_is_ignored() {
    let backend = MemoryBackend::new(1000.0, 700.0);
    let (mut timeline, events) = mount(bookmarked(), &backend, dataset(false, 3));
    events.clear();

    backend.navigate_fragment("event-missing");
    backend.navigate_fragment("somewhere-else");
    backend.run_until_idle(&mut timeline);
    assert!(events.events().is_empty());
    assert_eq!(timeline.current_id(), Some(&id("ev-0")));
}

#[test]
fn deep_link_is_followed_without_rewriting_fragment() {
    let backend = MemoryBackend::new(1000.0, 700.0).with_fragment("#event-ev-3");
    let (timeline, events) = mount(bookmarked(), &backend, dataset(false, 6));

    assert_eq!(timeline.current_id(), Some(&id("ev-3")));
    assert_eq!(events.changes().last(), Some(&id("ev-3")));
    assert!(fragment_writes(&backend).is_empty());
    assert_eq!(events.count(EventKind::HashUpdated), 0);
}

#[test]
fn unknown_deep_link_falls_back_to_start() {
    let backend = MemoryBackend::new(1000.0, 700.0).with_fragment("event-nope");
    let (timeline, _) = mount(bookmarked(), &backend, dataset(false, 3));

    assert_eq!(timeline.current_id(), Some(&id("ev-0")));
    assert_eq!(fragment_writes(&backend), vec!["event-ev-0".to_string()]);
}

#[test]
fn bookmarking_disabled_leaves_location_alone() {
    let backend = MemoryBackend::new(1000.0, 700.0).with_fragment("event-ev-2");
    let (mut timeline, _) = mount(Options::default(), &backend, dataset(false, 3));
    assert_eq!(timeline.current_id(), Some(&id("ev-0")));

    timeline.go_to(1);
    backend.navigate_fragment("event-ev-2");
    backend.run_until_idle(&mut timeline);
    assert_eq!(timeline.current_id(), Some(&id("ev-1")));
    assert!(fragment_writes(&backend).is_empty());
}
