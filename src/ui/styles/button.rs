// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the primary action button (open file).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the toolbar buttons (zoom in/out, open).
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => extended.background.strong.color,
        _ => extended.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.palette().text,
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
