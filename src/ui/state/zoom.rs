// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - The clamped scale factor
//! - The normalized transform anchor
//! - Wheel- and button-driven zoom steps

// Re-export zoom constants from centralized config for backward compatibility
pub use crate::config::{
    DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

/// Scale factor, guaranteed to be within valid range (1.0–5.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }

    /// Returns the raw factor value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the factor is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_FACTOR
    }

    /// Returns whether the factor is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_FACTOR
    }

    /// Returns this factor multiplied by `multiplier`, clamped back into range.
    #[must_use]
    pub fn scaled_by(self, multiplier: f32) -> Self {
        Self::new(self.0 * multiplier)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Normalized focal point within the content box, each axis in 0.0–1.0.
///
/// Used as the scale transform's origin so the chosen point stays visually
/// stationary while the factor changes. Out-of-range coordinates (e.g. a
/// pointer outside the viewport) saturate at the edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    x: f32,
    y: f32,
}

impl Anchor {
    /// The content center, used until a pointer chooses another origin.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Creates a new anchor, clamping both coordinates to `[0, 1]`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    /// Returns the horizontal fraction.
    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the vertical fraction.
    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Manages the interactive zoom state for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    /// Current scale factor (always within `[1, 5]`).
    pub factor: ZoomFactor,

    /// Current transform origin (always within the unit square).
    pub anchor: Anchor,
}

impl ZoomState {
    /// Applies a zoom step.
    ///
    /// The factor is multiplied by `multiplier` and clamped; when an anchor
    /// is supplied (pointer-driven zoom) it becomes the new transform origin,
    /// otherwise the previous origin is kept (button-driven zoom).
    ///
    /// Callers must pass a positive multiplier; zero or negative values are
    /// undefined input.
    pub fn apply_zoom(&mut self, multiplier: f32, anchor: Option<Anchor>) {
        self.factor = self.factor.scaled_by(multiplier);
        if let Some(anchor) = anchor {
            self.anchor = anchor;
        }
    }

    /// Applies one zoom-in step without moving the anchor.
    pub fn zoom_in(&mut self) {
        self.apply_zoom(ZOOM_IN_FACTOR, None);
    }

    /// Applies one zoom-out step without moving the anchor.
    pub fn zoom_out(&mut self) {
        self.apply_zoom(ZOOM_OUT_FACTOR, None);
    }

    /// Resets to the initial state (factor 1, centered anchor).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Formats a factor for display as a percentage, trimming trailing zeros.
#[must_use]
pub fn format_factor(factor: ZoomFactor) -> String {
    let percent = factor.value() * 100.0;
    if percent.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = percent as i32;
        format!("{int_value}%")
    } else {
        let trimmed = format!("{percent:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
        format!("{trimmed}%")
    }
}
