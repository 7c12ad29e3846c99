// SPDX-License-Identifier: MPL-2.0
//! Timing curves shared by animator implementations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuint,
    EaseOutStrong,
    EaseInSpline,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `0.0..=1.0`) onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 + 16.0 * (t - 1.0).powi(5)
                }
            }
            Easing::EaseOutStrong => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInSpline => t * t * (3.0 - 2.0 * t),
        }
    }
}
