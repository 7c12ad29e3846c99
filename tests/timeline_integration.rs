// SPDX-License-Identifier: MPL-2.0
//! Selection, synchronization, lifecycle and mutation through the public
//! controller surface, on the in-memory host.

mod common;

use common::{dataset, id, mount, timeline, ymd};
use storyline::application::{
    AxisEvent, ContentEvent, EventKind, MenuEvent, Message, NavKey, Phase, TimelineEvent,
};
use storyline::config::{IntegerValue, Options, OptionsFile};
use storyline::domain::zoom::{ZoomDirection, ZoomToggle};
use storyline::domain::{EventIndex, ItemData, SlideIndex};
use storyline::error::DatasetError;
use storyline::i18n::Language;
use storyline::infrastructure::{Call, MemoryBackend};
use storyline::Timeline;

fn backend() -> MemoryBackend {
    MemoryBackend::new(1000.0, 700.0)
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn ready_fires_once_after_both_views_load() {
    let backend = backend().with_manual_loading();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    assert_eq!(timeline.phase(), Phase::PartiallyReady);

    timeline.update(Message::Axis(AxisEvent::Loaded));
    assert_eq!(events.count(EventKind::Ready), 0);

    timeline.update(Message::Content(ContentEvent::Loaded));
    assert_eq!(events.count(EventKind::Ready), 1);
    assert!(timeline.is_ready());

    timeline.update(Message::Content(ContentEvent::Loaded));
    timeline.update(Message::Axis(AxisEvent::Loaded));
    assert_eq!(events.count(EventKind::Ready), 1);
}

#[test]
fn dataloaded_precedes_ready_and_initial_selection() {
    let (timeline, events) = mount(Options::default(), &backend(), dataset(false, 3));
    let kinds: Vec<EventKind> = events.events().iter().map(TimelineEvent::kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::DataLoaded, EventKind::Ready, EventKind::Change]
    );
    assert_eq!(timeline.current_id(), Some(&id("ev-0")));
}

#[test]
fn loading_message_is_hidden_once_views_exist() {
    let backend = backend();
    let (_timeline, _events) = mount(Options::default(), &backend, dataset(false, 2));
    assert_eq!(backend.message(), None);
    assert_eq!(
        backend.calls().first(),
        Some(&Call::ShowMessage("Loading Timeline...".to_string()))
    );
}

#[test]
fn dataset_set_before_language_is_parked() {
    let backend = backend();
    let mut timeline = Timeline::new(Options::default(), backend.host());
    timeline.set_config(dataset(false, 2));
    assert!(timeline.dataset().is_none());

    timeline.set_language(Language::fallback());
    backend.run_until_idle(&mut timeline);
    assert!(timeline.is_ready());
}

#[test]
fn invalid_option_blocks_progression() {
    let backend = backend();
    let file = OptionsFile {
        start_at_slide: Some(IntegerValue::Text("three".into())),
        ..OptionsFile::default()
    };
    let mut timeline = Timeline::from_file(file, backend.host());
    let events = common::Recorder::attach(&mut timeline);
    timeline.set_language(Language::fallback());
    timeline.set_config(dataset(false, 3));
    backend.run_until_idle(&mut timeline);

    assert_eq!(timeline.phase(), Phase::Initializing);
    assert_eq!(
        timeline.errors(),
        &[DatasetError::InvalidIntegerOption("start_at_slide".into())]
    );
    assert!(backend.message().is_some_and(|m| m.starts_with("Error:")));
    assert!(events.events().is_empty());
}

#[test]
fn option_and_dataset_problems_are_reported_together() {
    let backend = backend();
    let file = OptionsFile {
        start_at_slide: Some(IntegerValue::Text("three".into())),
        ..OptionsFile::default()
    };
    let mut timeline = Timeline::from_file(file, backend.host());
    timeline.set_language(Language::fallback());
    let events = vec![
        ItemData::event("A", ymd(2000, 1, 1)).with_id("same"),
        ItemData::event("B", ymd(2001, 1, 1)).with_id("same"),
    ];
    timeline.set_config(storyline::Dataset::new(None, events));

    assert_eq!(
        timeline.errors(),
        &[
            DatasetError::DuplicateId("same".into()),
            DatasetError::InvalidIntegerOption("start_at_slide".into()),
        ]
    );
    let message = backend.message().unwrap_or_default();
    assert!(message.contains("[same]"), "{message}");
    assert!(message.contains("[start_at_slide]"), "{message}");
}

#[test]
fn oversized_pixel_option_is_rejected_without_panicking() {
    let backend = backend();
    let file = storyline::config::from_toml_str("marker_padding = 9223372036854775807")
        .expect("valid toml");
    let mut timeline = Timeline::from_file(file, backend.host());
    timeline.set_language(Language::fallback());
    timeline.set_config(dataset(false, 2));
    backend.run_until_idle(&mut timeline);

    assert_eq!(timeline.phase(), Phase::Initializing);
    assert_eq!(
        timeline.errors(),
        &[DatasetError::InvalidIntegerOption("marker_padding".into())]
    );
}

#[test]
fn duplicate_ids_block_progression() {
    let backend = backend();
    let events = vec![
        ItemData::event("A", ymd(2000, 1, 1)).with_id("same"),
        ItemData::event("B", ymd(2001, 1, 1)).with_id("same"),
    ];
    let (timeline, recorder) = mount(
        Options::default(),
        &backend,
        storyline::Dataset::new(None, events),
    );
    assert_eq!(timeline.phase(), Phase::Initializing);
    assert!(matches!(timeline.errors(), [DatasetError::DuplicateId(_)]));
    assert_eq!(recorder.count(EventKind::DataLoaded), 0);
}

#[test]
fn view_construction_failure_leaves_timeline_not_ready() {
    let backend = backend().failing_content();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));

    assert_eq!(events.count(EventKind::DataLoaded), 1);
    assert_eq!(timeline.phase(), Phase::Initializing);
    assert!(backend
        .message()
        .is_some_and(|m| m.contains("content view unavailable")));

    backend.clear_calls();
    timeline.update_display();
    backend.resize(500.0, 500.0);
    backend.run_until_idle(&mut timeline);
    assert!(backend.calls().is_empty());
}

// =============================================================================
// Addressing and navigation
// =============================================================================

#[test]
fn go_to_then_current_slide_round_trips() {
    for with_title in [false, true] {
        let (mut timeline, _) = mount(Options::default(), &backend(), dataset(with_title, 4));
        let slides = if with_title { 5 } else { 4 };
        for n in 0..slides {
            timeline.go_to(n);
            let slide = timeline.current_slide().expect("current slide");
            assert_eq!(slide.index, SlideIndex(n));
        }
    }
}

#[test]
fn title_shifts_event_addressing() {
    let (timeline, _) = mount(Options::default(), &backend(), dataset(true, 3));
    assert_eq!(timeline.data(0).map(|i| i.id().as_str()), Some("title"));
    assert_eq!(timeline.data(1).map(|i| i.id().as_str()), Some("ev-0"));
    let dataset = timeline.dataset().unwrap();
    for (i, item) in dataset.events().iter().enumerate() {
        assert_eq!(dataset.slide_index_of(item.id()), Some(SlideIndex(i + 1)));
    }
}

#[test]
fn go_to_id_twice_fires_change_once() {
    let (mut timeline, events) = mount(Options::default(), &backend(), dataset(false, 3));
    events.clear();
    timeline.go_to_id(&id("ev-2"));
    timeline.go_to_id(&id("ev-2"));
    assert_eq!(events.changes(), vec![id("ev-2")]);
}

#[test]
fn out_of_range_navigation_is_ignored() {
    let (mut timeline, events) = mount(Options::default(), &backend(), dataset(false, 3));
    events.clear();
    timeline.go_to(3);
    timeline.go_to(usize::MAX);
    timeline.go_to_id(&id("missing"));
    assert!(events.events().is_empty());
    assert_eq!(timeline.current_id(), Some(&id("ev-0")));
}

#[test]
fn prev_and_next_stop_at_boundaries() {
    let (mut timeline, events) = mount(Options::default(), &backend(), dataset(true, 2));
    timeline.go_to_prev();
    assert_eq!(timeline.current_id(), Some(&id("title")));

    timeline.go_to_next();
    timeline.go_to_next();
    assert_eq!(timeline.current_id(), Some(&id("ev-1")));
    events.clear();
    timeline.go_to_next();
    assert!(events.events().is_empty());

    timeline.go_to_start();
    assert_eq!(timeline.current_id(), Some(&id("title")));
    timeline.go_to_end();
    assert_eq!(timeline.current_id(), Some(&id("ev-1")));
}

#[test]
fn arrow_keys_navigate_within_bounds() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 2));
    events.clear();
    backend.push(Message::Key(NavKey::Left));
    backend.push(Message::Key(NavKey::Right));
    backend.push(Message::Key(NavKey::Right));
    backend.run_until_idle(&mut timeline);
    assert_eq!(events.changes(), vec![id("ev-1")]);
}

#[test]
fn start_at_end_and_overlong_start_select_last_event() {
    let options = Options {
        start_at_end: true,
        ..Options::default()
    };
    let (timeline, _) = mount(options, &backend(), dataset(true, 3));
    assert_eq!(timeline.current_id(), Some(&id("ev-2")));

    let options = Options {
        start_at_slide: 10,
        ..Options::default()
    };
    let (timeline, _) = mount(options, &backend(), dataset(false, 3));
    assert_eq!(timeline.current_id(), Some(&id("ev-2")));
}

#[test]
fn start_at_slide_counts_the_title() {
    let options = Options {
        start_at_slide: 2,
        ..Options::default()
    };
    let (timeline, _) = mount(options, &backend(), dataset(true, 3));
    assert_eq!(timeline.current_id(), Some(&id("ev-1")));
}

#[test]
fn back_to_start_returns_to_first_slide() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(true, 3));
    timeline.go_to(3);
    events.clear();

    backend.push(Message::Menu(MenuEvent::BackToStart));
    backend.run_until_idle(&mut timeline);
    assert_eq!(timeline.current_id(), Some(&id("title")));
    assert!(events.events().contains(&TimelineEvent::BackToStart {
        unique_id: Some(id("title"))
    }));

    events.clear();
    backend.push(Message::Menu(MenuEvent::BackToStart));
    backend.run_until_idle(&mut timeline);
    assert!(events.events().is_empty());
}

// =============================================================================
// Synchronization
// =============================================================================

#[test]
fn axis_change_is_forwarded_to_content_only() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    events.clear();
    backend.clear_calls();

    backend.push(Message::Axis(AxisEvent::Change(id("ev-2"))));
    backend.run_until_idle(&mut timeline);

    assert_eq!(events.changes(), vec![id("ev-2")]);
    let calls = backend.calls();
    assert!(calls.contains(&Call::ContentGoTo {
        id: id("ev-2"),
        animate: true,
        suppress_event: false,
    }));
    assert!(!calls.contains(&Call::AxisGoTo(id("ev-2"))));
}

#[test]
fn content_change_is_forwarded_to_axis_only() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    events.clear();
    backend.clear_calls();

    backend.push(Message::Content(ContentEvent::Change(id("ev-1"))));
    backend.run_until_idle(&mut timeline);

    assert_eq!(events.changes(), vec![id("ev-1")]);
    let calls = backend.calls();
    assert_eq!(calls, vec![Call::AxisGoTo(id("ev-1"))]);
}

#[test]
fn view_changes_before_ready_are_ignored() {
    let backend = backend().with_manual_loading();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    timeline.update(Message::Axis(AxisEvent::Change(id("ev-1"))));
    assert!(events.changes().is_empty());
    assert_eq!(timeline.current_id(), None);
}

#[test]
fn content_passthrough_events_carry_current_id() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    events.clear();
    backend.push(Message::Content(ContentEvent::NavNext));
    backend.push(Message::Content(ContentEvent::NavPrevious));
    backend.push(Message::Content(ContentEvent::ColorChange));
    backend.run_until_idle(&mut timeline);

    let current = Some(id("ev-0"));
    assert_eq!(
        events.events(),
        vec![
            TimelineEvent::NavNext {
                unique_id: current.clone()
            },
            TimelineEvent::NavPrevious {
                unique_id: current.clone()
            },
            TimelineEvent::ColorChange { unique_id: current },
        ]
    );
    assert_eq!(timeline.current_id(), Some(&id("ev-0")));
}

// =============================================================================
// Zoom
// =============================================================================

#[test]
fn zoom_out_at_smallest_level_only_toggles() {
    let backend = backend();
    let options = Options {
        zoom_sequence: vec![0.5, 1.0, 2.0],
        ..Options::default()
    };
    let (mut timeline, events) = mount(options, &backend, dataset(false, 3));

    timeline.zoom_out();
    timeline.zoom_out();
    backend.run_until_idle(&mut timeline);
    backend.clear_calls();
    events.clear();

    timeline.zoom_out();
    backend.run_until_idle(&mut timeline);

    assert_eq!(
        events.events(),
        vec![TimelineEvent::ZoomOut { zoom_level: 0.5 }]
    );
    assert!(backend.calls().contains(&Call::ToggleZoom(ZoomToggle {
        direction: ZoomDirection::Out,
        enabled: false,
    })));
}

#[test]
fn menu_zoom_in_reports_scale_factor() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    events.clear();
    backend.push(Message::Menu(MenuEvent::ZoomIn));
    backend.run_until_idle(&mut timeline);
    assert_eq!(
        events.events(),
        vec![TimelineEvent::ZoomIn { zoom_level: 3.0 }]
    );
}

#[test]
fn initial_zoom_is_applied_after_axis_init() {
    let backend = backend();
    let options = Options {
        initial_zoom: Some(0),
        ..Options::default()
    };
    let _ = mount(options, &backend, dataset(false, 3));
    let calls = backend.calls();
    let init = calls.iter().position(|c| *c == Call::AxisInit);
    let zoom = calls.iter().position(|c| *c == Call::AxisSetZoom(0));
    assert!(init.is_some() && zoom.is_some() && init < zoom);
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn removing_current_event_moves_to_next_first() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(false, 3));
    timeline.go_to(1);
    events.clear();

    let removed = timeline.remove(1).expect("removed item");
    assert_eq!(removed.id(), &id("ev-1"));
    assert_eq!(timeline.dataset().unwrap().events().len(), 2);
    assert_eq!(timeline.current_id(), Some(&id("ev-2")));
    assert_eq!(
        events.events(),
        vec![
            TimelineEvent::Change {
                unique_id: id("ev-2")
            },
            TimelineEvent::Removed {
                unique_id: id("ev-1")
            },
        ]
    );
    let calls = backend.calls();
    assert!(calls.contains(&Call::DestroySlide(SlideIndex(1))));
    assert!(calls.contains(&Call::DestroyMarker(EventIndex(1))));
}

#[test]
fn removing_last_current_event_falls_back_to_previous() {
    let (mut timeline, _) = mount(Options::default(), &backend(), dataset(true, 3));
    timeline.go_to_end();
    let _ = timeline.remove_id(&id("ev-2"));
    assert_eq!(timeline.current_id(), Some(&id("ev-1")));
}

#[test]
fn removing_only_event_clears_selection_without_change() {
    let (mut timeline, events) = mount(Options::default(), &backend(), dataset(false, 1));
    events.clear();
    assert!(timeline.remove(0).is_some());
    assert_eq!(timeline.current_id(), None);
    assert_eq!(events.changes(), vec![]);
    assert_eq!(events.count(EventKind::Removed), 1);
}

#[test]
fn removing_out_of_range_is_ignored() {
    let (mut timeline, events) = mount(Options::default(), &backend(), dataset(false, 3));
    events.clear();
    assert!(timeline.remove(3).is_none());
    assert!(timeline.remove_id(&id("title")).is_none());
    assert!(events.events().is_empty());
    assert_eq!(timeline.dataset().unwrap().events().len(), 3);
}

#[test]
fn add_creates_slide_and_marker_at_title_adjusted_position() {
    let backend = backend();
    let (mut timeline, events) = mount(Options::default(), &backend, dataset(true, 3));
    backend.clear_calls();
    events.clear();

    let new_id = timeline
        .add(ItemData::event("Between", ymd(1900, 6, 1)).with_id("mid"))
        .expect("added");
    assert_eq!(new_id, id("mid"));

    let calls = backend.calls();
    assert!(calls.contains(&Call::CreateSlide {
        id: id("mid"),
        index: SlideIndex(2),
    }));
    assert!(calls.contains(&Call::CreateMarker {
        id: id("mid"),
        index: EventIndex(1),
    }));
    assert!(calls.contains(&Call::ContentRedraw));
    assert!(calls.contains(&Call::AxisRedraw { animate: false }));
    assert_eq!(
        events.events(),
        vec![TimelineEvent::Added {
            unique_id: id("mid")
        }]
    );
    assert_eq!(timeline.slide(4).map(|s| s.item.id().clone()), Some(id("ev-2")));
}

#[test]
fn add_rejects_event_without_date() {
    let (mut timeline, _) = mount(Options::default(), &backend(), dataset(false, 1));
    let result = timeline.add(ItemData {
        headline: "Undated".into(),
        ..ItemData::default()
    });
    assert!(result.is_err());
    assert_eq!(timeline.dataset().unwrap().events().len(), 1);
}

#[test]
fn add_before_configuration_is_not_ready() {
    let (mut timeline, _) = timeline(Options::default(), &backend());
    let result = timeline.add(ItemData::event("Early", ymd(2000, 1, 1)));
    assert!(matches!(result, Err(storyline::Error::NotReady)));
}
