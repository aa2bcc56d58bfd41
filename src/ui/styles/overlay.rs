// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the scrollbar indicators.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::Color;

/// Background color of a scrollbar track.
#[must_use]
pub fn track_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..BLACK
    }
}

/// Fill color of a scrollbar thumb.
#[must_use]
pub fn thumb_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..WHITE
    }
}
