// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Zoomable image pane with controls and overlay scrollbars
//! - [`state`] - Reusable state management (zoom, viewport, scrollbars)
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod viewer;
