// SPDX-License-Identifier: MPL-2.0
//! Layout value objects: orientation, size classes, device capabilities and
//! the container's display classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base display class applied to every timeline container.
pub const BASE_CLASS: &str = "tl-timeline";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Width-derived size class. Wide containers have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Skinny,
    Medium,
}

/// Whether the axis view is docked above or below the content view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Capabilities the runtime reports about the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Device {
    pub touch: bool,
    pub mobile: bool,
    /// Physical orientation, consulted on touch devices only.
    pub orientation: Orientation,
}

/// Container classification; renders as a space separated class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayClass {
    pub embed: bool,
    pub full_embed: bool,
    pub size: Option<SizeClass>,
    pub mobile: bool,
    pub layout: Orientation,
    pub direction: TextDirection,
}

impl fmt::Display for DisplayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BASE_CLASS)?;
        if self.embed {
            f.write_str(" tl-timeline-embed")?;
        }
        if self.full_embed {
            f.write_str(" tl-timeline-full-embed")?;
        }
        match self.size {
            Some(SizeClass::Skinny) => f.write_str(" tl-skinny")?,
            Some(SizeClass::Medium) => f.write_str(" tl-medium")?,
            None => {}
        }
        if self.mobile {
            f.write_str(" tl-mobile")?;
        }
        match self.layout {
            Orientation::Portrait => f.write_str(" tl-layout-portrait")?,
            Orientation::Landscape => f.write_str(" tl-layout-landscape")?,
        }
        if self.direction == TextDirection::Rtl {
            f.write_str(" tl-rtl")?;
        }
        Ok(())
    }
}
