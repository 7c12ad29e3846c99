// SPDX-License-Identifier: MPL-2.0
//! Headless peek navigation: previews of the neighbouring items.

use crate::domain::addressing::SlideIndex;
use crate::domain::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeekDirection {
    Previous,
    Next,
}

/// What a peek affordance shows about the item it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeekPreview {
    pub direction: PeekDirection,
    pub date: String,
    pub headline: String,
}

/// Previews for the previous and next neighbouring events of `current`,
/// `None` at the corresponding boundary. The title is never previewed.
#[must_use]
pub fn previews(
    dataset: &Dataset,
    current: SlideIndex,
) -> (Option<PeekPreview>, Option<PeekPreview>) {
    let neighbors = dataset.neighbors(current);
    let has_title = dataset.has_title();
    let preview = |direction, slide: Option<SlideIndex>| {
        slide
            .and_then(|slide| slide.to_event(has_title))
            .and_then(|index| dataset.event(index))
            .map(|item| PeekPreview {
                direction,
                date: item.formatted_date(),
                headline: item.headline().to_string(),
            })
    };
    (
        preview(PeekDirection::Previous, neighbors.previous),
        preview(PeekDirection::Next, neighbors.next),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_dataset;

    #[test]
    fn middle_item_has_both_previews() {
        let dataset = sample_dataset(false, 3);
        let (previous, next) = previews(&dataset, SlideIndex(1));
        let previous = previous.unwrap();
        let next = next.unwrap();
        assert_eq!(previous.headline, "Event 0");
        assert_eq!(previous.date, "January 1, 1900");
        assert_eq!(next.headline, "Event 2");
        assert_eq!(next.direction, PeekDirection::Next);
    }

    #[test]
    fn boundaries_have_no_preview() {
        let dataset = sample_dataset(false, 3);
        assert!(previews(&dataset, SlideIndex(0)).0.is_none());
        assert!(previews(&dataset, SlideIndex(2)).1.is_none());
    }

    #[test]
    fn title_is_never_previewed() {
        let dataset = sample_dataset(true, 2);
        let (previous, next) = previews(&dataset, SlideIndex(1));
        assert!(previous.is_none());
        assert_eq!(next.unwrap().headline, "Event 1");

        let (previous, next) = previews(&dataset, SlideIndex(0));
        assert!(previous.is_none());
        assert_eq!(next.unwrap().headline, "Event 0");
    }

    #[test]
    fn titled_dataset_previews_events_around_current() {
        let dataset = sample_dataset(true, 3);
        let (previous, next) = previews(&dataset, SlideIndex(2));
        assert_eq!(previous.unwrap().headline, "Event 0");
        assert_eq!(next.unwrap().headline, "Event 2");
    }
}
