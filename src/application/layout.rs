// SPDX-License-Identifier: MPL-2.0
//! Responsive layout engine.
//!
//! [`compute`] is a pure function of the container measurements, the
//! resolved [`Options`], the device capabilities and the axis minimum
//! observed so far. It produces a [`DisplayState`]; the controller applies
//! it to the container and the views.

use crate::config::{
    Options, MENUBAR_BOTTOM_CORRECTION_PX, MENUBAR_TOP_CORRECTION_PX, PANEL_SEAM_PX,
};
use crate::domain::layout::{
    AxisPosition, Device, DisplayClass, Orientation, SizeClass, TextDirection,
};

/// Axis minimum height, raised whenever the axis view reports needing more
/// room and never lowered again.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObservedMinimum(f32);

impl ObservedMinimum {
    #[must_use]
    pub fn new(initial: f32) -> Self {
        Self(initial)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Folds in a reported minimum. Returns `true` if the minimum grew.
    pub fn observe(&mut self, reported: f32) -> bool {
        if reported > self.0 {
            self.0 = reported;
            true
        } else {
            false
        }
    }
}

/// Everything [`compute`] reads.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub width: f32,
    pub height: f32,
    pub device: Device,
    pub options: &'a Options,
    pub minimum: ObservedMinimum,
    pub direction: TextDirection,
    /// Measured height of the menu bar.
    pub menubar_height: f32,
}

/// Derived layout, recomputed on every display update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayState {
    pub width: f32,
    pub height: f32,
    pub layout: Orientation,
    pub axis_height: f32,
    /// `None` in headless mode.
    pub content_height: Option<f32>,
    pub menubar_top: f32,
    pub class: DisplayClass,
}

/// Width classification against the two breakpoints, inclusive.
#[must_use]
pub fn classify(width: f32, options: &Options) -> (Option<SizeClass>, Orientation) {
    if width <= options.skinny_size {
        (Some(SizeClass::Skinny), Orientation::Portrait)
    } else if width <= options.medium_size {
        (Some(SizeClass::Medium), Orientation::Landscape)
    } else {
        (None, Orientation::Landscape)
    }
}

/// Axis height for a container of `height` pixels.
///
/// An explicit `timenav_height` wins over the percentage. The result is
/// floored at the larger of `timenav_height_min` and the observed minimum,
/// then reduced by twice the marker padding.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_height(height: f32, options: &Options, mobile: bool, minimum: ObservedMinimum) -> f32 {
    let percentage = if mobile {
        options.timenav_mobile_height_percentage
    } else {
        options.timenav_height_percentage
    };
    let mut axis = match options.timenav_height {
        Some(px) => px as f32,
        None => (height / 100.0 * percentage).round(),
    };
    let floor = minimum.value().max(options.timenav_height_min as f32);
    if axis < floor {
        axis = floor;
    }
    axis - options.marker_padding as f32 * 2.0
}

/// Vertical offset of the menu bar.
#[must_use]
pub fn menubar_top(
    position: AxisPosition,
    axis_height: f32,
    content_height: Option<f32>,
    menubar_height: f32,
) -> f32 {
    let axis_center = axis_height.ceil() / 2.0;
    match position {
        AxisPosition::Top => axis_center - menubar_height / 2.0 - MENUBAR_TOP_CORRECTION_PX / 2.0,
        AxisPosition::Bottom => (content_height.unwrap_or(0.0) + PANEL_SEAM_PX + axis_center
            - menubar_height / 2.0
            - MENUBAR_BOTTOM_CORRECTION_PX / 2.0)
            .round(),
    }
}

#[must_use]
pub fn compute(input: &LayoutInput<'_>) -> DisplayState {
    let options = input.options;
    let (size, mut layout) = classify(input.width, options);
    if input.device.touch {
        layout = input.device.orientation;
    }
    let axis = axis_height(input.height, options, input.device.mobile, input.minimum);

    let content_height = (!options.headless).then(|| match layout {
        Orientation::Portrait => input.height - axis - PANEL_SEAM_PX,
        Orientation::Landscape => input.height - PANEL_SEAM_PX,
    });

    DisplayState {
        width: input.width,
        height: input.height,
        layout,
        axis_height: axis,
        content_height,
        menubar_top: menubar_top(
            options.timenav_position,
            axis,
            content_height,
            input.menubar_height,
        ),
        class: DisplayClass {
            embed: options.is_embed,
            full_embed: options.is_full_embed,
            size,
            mobile: input.device.mobile,
            layout,
            direction: input.direction,
        },
    }
}
