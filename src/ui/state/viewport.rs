// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the viewer pane's bounds and translates pointer positions into
//! normalized anchor fractions.

use crate::ui::state::zoom::{Anchor, ZoomFactor};
use iced::{Point, Rectangle, Size};

/// Manages viewport bounds for the zoomable pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportState {
    /// Current viewport bounds, unknown until the first layout event.
    pub bounds: Option<Rectangle>,
}

impl ViewportState {
    /// Updates the viewport state with new bounds.
    pub fn update(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
    }

    /// Returns the viewport size, if known.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.bounds.map(|bounds| bounds.size())
    }

    /// Returns the content size at the given factor.
    ///
    /// The content box grows by the factor while the container stays fixed,
    /// so overflow is a direct function of the current zoom.
    #[must_use]
    pub fn content_size(&self, factor: ZoomFactor) -> Option<Size> {
        self.size()
            .map(|size| Size::new(size.width * factor.value(), size.height * factor.value()))
    }

    /// Indicates whether the given window-space position lies inside the viewport.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.bounds
            .is_some_and(|bounds| bounds.contains(position))
    }

    /// Translates a window-space pointer position into an anchor fraction.
    ///
    /// Positions outside the bounds saturate at the edges. Returns `None`
    /// until the viewport bounds are known or while they are degenerate.
    #[must_use]
    pub fn anchor_for(&self, position: Point) -> Option<Anchor> {
        let bounds = self.bounds?;
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }

        Some(Anchor::new(
            (position.x - bounds.x) / bounds.width,
            (position.y - bounds.y) / bounds.height,
        ))
    }
}
