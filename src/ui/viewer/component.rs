// SPDX-License-Identifier: MPL-2.0
//! Viewer component state and orchestration.
//!
//! Owns the zoom engine state (factor, anchor, viewport, scrollbar metrics)
//! plus the loaded image and load-error bookkeeping. All mutation goes
//! through [`State::update`], and the scrollbar metrics are rederived
//! immediately after every mutation so the indicators can never go stale.

use crate::error::Error;
use crate::i18n::I18n;
use crate::media::ImageData;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::state::zoom::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::ui::state::{ScrollbarState, ViewportState, ZoomState};
use crate::ui::styles;
use crate::ui::viewer::{controls, empty_state, pane::ZoomPane};
use iced::widget::canvas::Canvas;
use iced::widget::{container, Column, Container, Stack};
use iced::{alignment, mouse, window, Element, Length, Point, Rectangle, Size};
use tracing::{debug, info, warn};

/// Height reserved below the pane for the controls strip. The viewport
/// estimate derived from window resize events subtracts this.
pub const CONTROLS_AREA_HEIGHT: f32 = 64.0;

/// Messages consumed by the viewer component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user asked to open a file (empty state, toolbar, or error action).
    OpenFileRequested,
    /// Zoom in one step, keeping the current anchor.
    ZoomInPressed,
    /// Zoom out one step, keeping the current anchor.
    ZoomOutPressed,
    /// Toggle visibility of the load error's technical details.
    ToggleErrorDetails,
    /// Native event routed through the application subscription.
    RawEvent(iced::Event),
}

/// Effects the application orchestrator must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the system file picker.
    OpenFilePicker,
}

/// Viewer component state.
///
/// Two logical states: *empty* (no image, zoom input ignored) and *loaded*.
/// A successful load transitions empty → loaded and resets the zoom; there
/// is no transition back.
#[derive(Debug, Default)]
pub struct State {
    media: Option<ImageData>,
    zoom: ZoomState,
    viewport: ViewportState,
    scrollbars: ScrollbarState,
    cursor_position: Option<Point>,
    load_error: Option<Error>,
    show_error_details: bool,
    load_generation: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image is currently loaded.
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    /// Current zoom state (factor and anchor).
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// Current derived scrollbar metrics.
    #[must_use]
    pub fn scrollbars(&self) -> ScrollbarState {
        self.scrollbars
    }

    /// Last load error, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    /// Single update entry point for the component.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenFileRequested => Effect::OpenFilePicker,
            Message::ZoomInPressed => {
                self.apply_button_zoom(ZOOM_IN_FACTOR);
                Effect::None
            }
            Message::ZoomOutPressed => {
                self.apply_button_zoom(ZOOM_OUT_FACTOR);
                Effect::None
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
            Message::RawEvent(event) => {
                self.handle_raw_event(event);
                Effect::None
            }
        }
    }

    fn handle_raw_event(&mut self, event: iced::Event) {
        match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                let pane_height = (size.height - CONTROLS_AREA_HEIGHT).max(0.0);
                self.viewport.update(Rectangle::new(
                    Point::ORIGIN,
                    Size::new(size.width, pane_height),
                ));
                self.refresh_scrollbars();
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(position);
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor_position = None;
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                self.handle_wheel_zoom(delta);
            }
            _ => {}
        }
    }

    /// Applies wheel-based zoom anchored at the tracked cursor position.
    ///
    /// Only the sign of the delta is used; a notch up zooms in, a notch down
    /// zooms out. Wheel events outside the viewport (or before any image is
    /// loaded) are ignored.
    fn handle_wheel_zoom(&mut self, delta: mouse::ScrollDelta) {
        if self.media.is_none() {
            return;
        }

        let Some(position) = self.cursor_position else {
            return;
        };

        if !self.viewport.contains(position) {
            return;
        }

        let steps = scroll_steps(&delta);
        if steps.abs() < f32::EPSILON {
            return;
        }

        let multiplier = if steps > 0.0 {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };

        // anchor_for returns None only while bounds are degenerate; the zoom
        // then degrades to an unanchored step.
        let anchor = self.viewport.anchor_for(position);
        self.zoom.apply_zoom(multiplier, anchor);
        self.refresh_scrollbars();
    }

    fn apply_button_zoom(&mut self, multiplier: f32) {
        if self.media.is_none() {
            return;
        }

        self.zoom.apply_zoom(multiplier, None);
        self.refresh_scrollbars();
    }

    /// Rederives the scrollbar metrics from the viewport and factor.
    ///
    /// Content size is computed as `viewport × factor` rather than read back
    /// from rendered geometry, so the metrics always describe the state the
    /// next frame will draw.
    fn refresh_scrollbars(&mut self) {
        let (Some(container), Some(content)) = (
            self.viewport.size(),
            self.viewport.content_size(self.zoom.factor),
        ) else {
            self.scrollbars = ScrollbarState::default();
            return;
        };

        if self.media.is_some() {
            self.scrollbars.recompute(container, content, self.zoom.factor);
        } else {
            self.scrollbars = ScrollbarState::default();
        }
    }

    /// Registers a new load request and returns its generation.
    ///
    /// Only the completion carrying the most recent generation is applied;
    /// anything older is a stale in-flight decode and gets discarded.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Applies a finished load. Returns whether the result was current.
    ///
    /// On success the image is replaced and the zoom resets to factor 1 with
    /// a centered anchor. On failure the previous image and zoom state stay
    /// untouched and the error is kept for display.
    pub fn finish_load(&mut self, generation: u64, result: Result<ImageData, Error>) -> bool {
        if generation != self.load_generation {
            debug!(generation, current = self.load_generation, "discarding stale load result");
            return false;
        }

        match result {
            Ok(data) => {
                info!(width = data.width, height = data.height, "image loaded");
                self.media = Some(data);
                self.zoom.reset();
                self.load_error = None;
                self.show_error_details = false;
                self.refresh_scrollbars();
            }
            Err(error) => {
                warn!(%error, "image load failed");
                self.load_error = Some(error);
                self.show_error_details = false;
            }
        }

        true
    }

    /// Renders the component.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match (&self.media, &self.load_error) {
            (Some(media), error) => {
                let pane = Canvas::new(ZoomPane::new(media, self.zoom, self.scrollbars))
                    .width(Length::Fill)
                    .height(Length::Fill);

                let surface: Element<'a, Message> = if let Some(error) = error {
                    Stack::new()
                        .push(pane)
                        .push(
                            Container::new(self.error_banner(error, i18n).view())
                                .width(Length::Fill)
                                .align_x(alignment::Horizontal::Center)
                                .padding(spacing::MD),
                        )
                        .into()
                } else {
                    pane.into()
                };

                let controls_strip = Container::new(controls::view(
                    controls::ViewContext { i18n },
                    &self.zoom,
                ))
                .width(Length::Fill)
                .height(Length::Fixed(CONTROLS_AREA_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::panel);

                Column::new()
                    .push(
                        container(surface)
                            .width(Length::Fill)
                            .height(Length::Fill)
                            .style(styles::container::viewer_surface),
                    )
                    .push(controls_strip)
                    .into()
            }
            (None, Some(error)) => centered_error_view(self.error_banner(error, i18n)),
            (None, None) => empty_state::view(i18n),
        }
    }

    fn error_banner(&self, error: &Error, i18n: &I18n) -> ErrorDisplay<Message> {
        ErrorDisplay::new(ErrorSeverity::Error)
            .title(i18n.tr("error-load-title"))
            .message(i18n.tr(error.i18n_key()))
            .details(error.details())
            .details_visible(self.show_error_details)
            .on_toggle_details(Message::ToggleErrorDetails)
            .details_labels(
                i18n.tr("error-details-show"),
                i18n.tr("error-details-hide"),
                i18n.tr("error-details-heading"),
            )
            .action(
                i18n.tr("error-action-choose-file"),
                Message::OpenFileRequested,
            )
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into our abstract step
/// values so zooming feels consistent across platforms.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}
