// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (mouse, window) to the viewer component. Wheel
//! scroll is forwarded unconditionally so zooming works even when a widget
//! has captured the event; everything else only flows through when no
//! widget consumed it.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Creates the event subscription feeding the viewer.
///
/// File drops become load requests; wheel and remaining uncaptured events
/// reach the viewer as raw events for cursor tracking, zoom, and viewport
/// updates.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if matches!(
            event,
            event::Event::Mouse(iced::mouse::Event::WheelScrolled { .. })
        ) {
            return Some(Message::Viewer(component::Message::RawEvent(event)));
        }

        match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent(event))),
            event::Status::Captured => None,
        }
    })
}
