// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: open button and the zoom in/out pair.

use super::component::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::state::zoom::{format_factor, ZoomState};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>, zoom: &ZoomState) -> Element<'a, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("viewer-open-button")))
        .on_press(Message::OpenFileRequested)
        .style(styles::button::toolbar)
        .padding([6, 12]);

    let zoom_out_button = button(Text::new(ctx.i18n.tr("viewer-zoom-out-button")))
        .on_press(Message::ZoomOutPressed)
        .style(styles::button::toolbar)
        .padding([6, 12]);

    let factor_label = Text::new(format_factor(zoom.factor)).width(Length::Fixed(56.0));

    let zoom_in_button = button(Text::new(ctx.i18n.tr("viewer-zoom-in-button")))
        .on_press(Message::ZoomInPressed)
        .style(styles::button::toolbar)
        .padding([6, 12]);

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(open_button)
        .push(Space::new().width(Length::Fixed(spacing::MD)).height(Length::Shrink))
        .push(zoom_out_button)
        .push(factor_label)
        .push(zoom_in_button)
        .into()
}
