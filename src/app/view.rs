// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use iced::widget::Container;
use iced::{Element, Length};

/// Renders the application view: the viewer fills the window.
pub fn view(app: &App) -> Element<'_, Message> {
    let viewer = app.viewer.view(&app.i18n).map(Message::Viewer);

    Container::new(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
