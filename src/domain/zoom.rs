// SPDX-License-Identifier: MPL-2.0
//! Zoom ladder for the time axis.
//!
//! Zoom is an index into an ordered sequence of scale factors. Stepping past
//! either end leaves the level unchanged; every step reports whether further
//! zooming in each direction is still possible so the menu bar can enable or
//! disable its buttons.

/// Default scale factors (Fibonacci screen widths).
pub const DEFAULT_ZOOM_SEQUENCE: [f64; 11] =
    [0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0];

/// Default starting scale factor.
pub const DEFAULT_SCALE_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Boundary notification: whether zooming further in `direction` is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomToggle {
    pub direction: ZoomDirection,
    pub enabled: bool,
}

/// Result of a zoom request.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomOutcome {
    pub changed: bool,
    pub scale_factor: f64,
    pub toggles: [ZoomToggle; 2],
}

/// Ordered scale factors plus the current position in them.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomLadder {
    sequence: Vec<f64>,
    level: usize,
}

impl ZoomLadder {
    /// Creates a ladder positioned on `scale_factor`, or on the closest entry
    /// when the factor is not part of the sequence. An empty sequence falls
    /// back to [`DEFAULT_ZOOM_SEQUENCE`].
    #[must_use]
    pub fn new(sequence: Vec<f64>, scale_factor: f64) -> Self {
        let sequence = if sequence.is_empty() {
            DEFAULT_ZOOM_SEQUENCE.to_vec()
        } else {
            sequence
        };
        let level = sequence
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - scale_factor)
                    .abs()
                    .total_cmp(&(*b - scale_factor).abs())
            })
            .map_or(0, |(i, _)| i);
        Self { sequence, level }
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.sequence[self.level]
    }

    #[must_use]
    pub fn sequence(&self) -> &[f64] {
        &self.sequence
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.level + 1 < self.sequence.len()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.level > 0
    }

    pub fn zoom_in(&mut self) -> ZoomOutcome {
        self.set_level(self.level + 1)
    }

    pub fn zoom_out(&mut self) -> ZoomOutcome {
        match self.level.checked_sub(1) {
            Some(level) => self.set_level(level),
            None => self.outcome(false),
        }
    }

    /// Jumps to `level`; out-of-range levels leave the ladder unchanged.
    pub fn set_level(&mut self, level: usize) -> ZoomOutcome {
        if level >= self.sequence.len() || level == self.level {
            return self.outcome(false);
        }
        self.level = level;
        self.outcome(true)
    }

    fn outcome(&self, changed: bool) -> ZoomOutcome {
        ZoomOutcome {
            changed,
            scale_factor: self.scale_factor(),
            toggles: [
                ZoomToggle {
                    direction: ZoomDirection::In,
                    enabled: self.can_zoom_in(),
                },
                ZoomToggle {
                    direction: ZoomDirection::Out,
                    enabled: self.can_zoom_out(),
                },
            ],
        }
    }
}

impl Default for ZoomLadder {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_SEQUENCE.to_vec(), DEFAULT_SCALE_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ladder_starts_on_scale_factor_two() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.level(), 2);
        assert!((ladder.scale_factor() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_out_at_smallest_entry_is_a_noop_with_toggle() {
        let mut ladder = ZoomLadder::new(vec![0.5, 1.0, 2.0], 0.5);
        let outcome = ladder.zoom_out();
        assert!(!outcome.changed);
        assert_eq!(ladder.level(), 0);
        assert!(outcome.toggles.contains(&ZoomToggle {
            direction: ZoomDirection::Out,
            enabled: false,
        }));
    }

    #[test]
    fn zoom_in_to_largest_disables_further_zoom_in() {
        let mut ladder = ZoomLadder::new(vec![0.5, 1.0], 0.5);
        let outcome = ladder.zoom_in();
        assert!(outcome.changed);
        assert!(outcome.toggles.contains(&ZoomToggle {
            direction: ZoomDirection::In,
            enabled: false,
        }));
        assert!(!ladder.zoom_in().changed);
    }

    #[test]
    fn set_level_out_of_range_is_ignored() {
        let mut ladder = ZoomLadder::default();
        assert!(!ladder.set_level(99).changed);
        assert_eq!(ladder.level(), 2);
    }

    #[test]
    fn empty_sequence_falls_back_to_default() {
        let ladder = ZoomLadder::new(Vec::new(), 3.0);
        assert_eq!(ladder.sequence().len(), DEFAULT_ZOOM_SEQUENCE.len());
        assert_eq!(ladder.level(), 3);
    }
}
