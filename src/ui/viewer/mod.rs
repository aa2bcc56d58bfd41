// SPDX-License-Identifier: MPL-2.0
//! Main viewer: the zoomable pane, its controls, and the component state
//! orchestrating them.

pub mod component;
pub mod controls;
pub mod empty_state;
pub mod pane;

pub use component::{Effect, Message, State};
