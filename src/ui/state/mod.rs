// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the zoom engine's state logic separated from the
//! viewer component, following the principle of separation of concerns.

pub mod scrollbars;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use scrollbars::ScrollbarState;
pub use viewport::ViewportState;
pub use zoom::{Anchor, ZoomFactor, ZoomState};
