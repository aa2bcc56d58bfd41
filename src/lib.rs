// SPDX-License-Identifier: MPL-2.0
//! `zoomview` is a small image viewer built with the Iced GUI framework.
//!
//! It loads an image and lets the user zoom it inside a bounded viewport,
//! with the mouse wheel anchored at the cursor, and overlay scrollbar
//! indicators reflecting the visible region.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
