// SPDX-License-Identifier: MPL-2.0
//! Derived scrollbar metrics
//!
//! Visibility and thumb size are pure functions of the container/content
//! overflow and the current zoom factor. They are never set directly:
//! the viewer recomputes them after every factor change and viewport resize.

use crate::ui::state::zoom::ZoomFactor;
use iced::Size;

// Re-export scrollbar constants from centralized config for backward compatibility
pub use crate::config::{FULL_THUMB_PERCENT, MIN_THUMB_PERCENT};

/// Thumb length as a percentage of the track, guaranteed to be within 20–100.
///
/// The thumb shrinks inversely with the zoom factor (more zoom means less of
/// the content is visible), floored so it stays perceptible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPercent(f32);

impl ThumbPercent {
    /// Thumb spanning the whole track (axis does not overflow).
    pub const FULL: Self = Self(FULL_THUMB_PERCENT);

    /// Creates a new thumb percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_THUMB_PERCENT, FULL_THUMB_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the thumb length as a fraction of the track length.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for ThumbPercent {
    fn default() -> Self {
        Self::FULL
    }
}

/// Scrollbar visibility and thumb sizes for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollbarState {
    pub visible_x: bool,
    pub visible_y: bool,
    pub thumb_x: ThumbPercent,
    pub thumb_y: ThumbPercent,
}

impl ScrollbarState {
    /// Recomputes visibility and thumb sizes from the rendered geometry.
    ///
    /// An axis shows its bar when the content overflows the container on that
    /// axis; the thumb is then `100 / factor` percent of the track, floored
    /// at 20. Axes without overflow report a hidden bar with a full thumb.
    pub fn recompute(&mut self, container: Size, content: Size, factor: ZoomFactor) {
        self.visible_x = content.width > container.width;
        self.visible_y = content.height > container.height;

        let overflowing_thumb = ThumbPercent::new(FULL_THUMB_PERCENT / factor.value());
        self.thumb_x = if self.visible_x {
            overflowing_thumb
        } else {
            ThumbPercent::FULL
        };
        self.thumb_y = if self.visible_y {
            overflowing_thumb
        } else {
            ThumbPercent::FULL
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_state_hides_both_bars() {
        let state = ScrollbarState::default();
        assert!(!state.visible_x);
        assert!(!state.visible_y);
        assert_abs_diff_eq!(state.thumb_x.value(), 100.0);
        assert_abs_diff_eq!(state.thumb_y.value(), 100.0);
    }

    #[test]
    fn matching_sizes_yield_no_bars() {
        let mut state = ScrollbarState::default();
        state.recompute(
            Size::new(500.0, 500.0),
            Size::new(500.0, 500.0),
            ZoomFactor::new(1.0),
        );

        assert!(!state.visible_x);
        assert!(!state.visible_y);
        assert_abs_diff_eq!(state.thumb_x.value(), 100.0);
        assert_abs_diff_eq!(state.thumb_y.value(), 100.0);
    }

    #[test]
    fn double_zoom_halves_the_thumb() {
        let mut state = ScrollbarState::default();
        state.recompute(
            Size::new(500.0, 500.0),
            Size::new(1000.0, 1000.0),
            ZoomFactor::new(2.0),
        );

        assert!(state.visible_x);
        assert!(state.visible_y);
        assert_abs_diff_eq!(state.thumb_x.value(), 50.0);
        assert_abs_diff_eq!(state.thumb_y.value(), 50.0);
    }

    #[test]
    fn thumb_is_floored_at_minimum() {
        let mut state = ScrollbarState::default();
        state.recompute(
            Size::new(500.0, 500.0),
            Size::new(2500.0, 2500.0),
            ZoomFactor::new(5.0),
        );

        // 100 / 5 = 20, exactly the floor
        assert_abs_diff_eq!(state.thumb_x.value(), MIN_THUMB_PERCENT);
        assert_abs_diff_eq!(state.thumb_y.value(), MIN_THUMB_PERCENT);
        assert_abs_diff_eq!(ThumbPercent::new(10.0).value(), MIN_THUMB_PERCENT);
    }

    #[test]
    fn axes_are_independent() {
        let mut state = ScrollbarState::default();
        state.recompute(
            Size::new(500.0, 500.0),
            Size::new(550.0, 400.0),
            ZoomFactor::new(1.1),
        );

        assert!(state.visible_x);
        assert!(!state.visible_y);
        assert_abs_diff_eq!(state.thumb_x.value(), 100.0 / 1.1, epsilon = 1e-4);
        assert_abs_diff_eq!(state.thumb_y.value(), 100.0);
    }

    #[test]
    fn slight_overflow_scenario_matches_expected_thumb() {
        // factor 1.1 over a 500x500 container: content 550x550
        let mut state = ScrollbarState::default();
        state.recompute(
            Size::new(500.0, 500.0),
            Size::new(550.0, 550.0),
            ZoomFactor::new(1.1),
        );

        assert!(state.visible_x);
        assert!(state.visible_y);
        assert_abs_diff_eq!(state.thumb_x.value(), 90.909, epsilon = 1e-2);
        assert_abs_diff_eq!(state.thumb_y.value(), 90.909, epsilon = 1e-2);
    }
}
