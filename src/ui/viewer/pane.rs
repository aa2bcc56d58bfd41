// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the zoomable pane.
//!
//! Draws the loaded image inside the content box (the viewport scaled by the
//! current factor about the anchor) and overlays the scrollbar indicators.

use crate::media::ImageData;
use crate::ui::state::{ScrollbarState, ZoomState};
use crate::ui::styles::overlay;
use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Thickness of an overlay scrollbar.
const BAR_THICKNESS: f32 = 6.0;

/// Inset between a scrollbar and the pane edge.
const BAR_MARGIN: f32 = 4.0;

/// Canvas program that renders the scaled image and the overlay bars.
pub struct ZoomPane<'a> {
    image: &'a ImageData,
    zoom: ZoomState,
    scrollbars: ScrollbarState,
}

impl<'a> ZoomPane<'a> {
    #[must_use]
    pub fn new(image: &'a ImageData, zoom: ZoomState, scrollbars: ScrollbarState) -> Self {
        Self {
            image,
            zoom,
            scrollbars,
        }
    }

    /// Content box in pane-local coordinates.
    ///
    /// The content box is the viewport scaled by the factor, positioned so
    /// the anchored point keeps its on-screen position:
    /// `origin = -anchor × (content − viewport)`.
    fn content_box(&self, viewport: Size) -> Rectangle {
        let factor = self.zoom.factor.value();
        let content = Size::new(viewport.width * factor, viewport.height * factor);

        Rectangle::new(
            Point::new(
                -self.zoom.anchor.x() * (content.width - viewport.width),
                -self.zoom.anchor.y() * (content.height - viewport.height),
            ),
            content,
        )
    }

    /// Largest image rectangle that fits inside the content box while
    /// preserving the image aspect ratio, centered on both axes.
    #[allow(clippy::cast_precision_loss)] // u32 to f32 for dimensions: f32 is exact up to 16M
    fn fitted_image_bounds(&self, content: Rectangle) -> Rectangle {
        let image_width = self.image.width.max(1) as f32;
        let image_height = self.image.height.max(1) as f32;

        let scale = (content.width / image_width).min(content.height / image_height);
        let display_width = image_width * scale;
        let display_height = image_height * scale;

        Rectangle::new(
            Point::new(
                content.x + (content.width - display_width) / 2.0,
                content.y + (content.height - display_height) / 2.0,
            ),
            Size::new(display_width, display_height),
        )
    }

    fn draw_scrollbars(&self, frame: &mut canvas::Frame, viewport: Size) {
        let radius = BAR_THICKNESS / 2.0;

        if self.scrollbars.visible_x {
            let track_length = viewport.width - 2.0 * BAR_MARGIN;
            let thumb_length = track_length * self.scrollbars.thumb_x.as_fraction();
            let thumb_offset = self.zoom.anchor.x() * (track_length - thumb_length);
            let y = viewport.height - BAR_MARGIN - BAR_THICKNESS;

            let track = canvas::Path::rounded_rectangle(
                Point::new(BAR_MARGIN, y),
                Size::new(track_length, BAR_THICKNESS),
                radius.into(),
            );
            frame.fill(&track, overlay::track_color());

            let thumb = canvas::Path::rounded_rectangle(
                Point::new(BAR_MARGIN + thumb_offset, y),
                Size::new(thumb_length, BAR_THICKNESS),
                radius.into(),
            );
            frame.fill(&thumb, overlay::thumb_color());
        }

        if self.scrollbars.visible_y {
            let track_length = viewport.height - 2.0 * BAR_MARGIN;
            let thumb_length = track_length * self.scrollbars.thumb_y.as_fraction();
            let thumb_offset = self.zoom.anchor.y() * (track_length - thumb_length);
            let x = viewport.width - BAR_MARGIN - BAR_THICKNESS;

            let track = canvas::Path::rounded_rectangle(
                Point::new(x, BAR_MARGIN),
                Size::new(BAR_THICKNESS, track_length),
                radius.into(),
            );
            frame.fill(&track, overlay::track_color());

            let thumb = canvas::Path::rounded_rectangle(
                Point::new(x, BAR_MARGIN + thumb_offset),
                Size::new(BAR_THICKNESS, thumb_length),
                radius.into(),
            );
            frame.fill(&thumb, overlay::thumb_color());
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ZoomPane<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            theme.extended_palette().background.weak.color,
        );

        let content = self.content_box(bounds.size());
        let image_bounds = self.fitted_image_bounds(content);
        frame.draw_image(image_bounds, canvas::Image::new(self.image.handle.clone()));

        self.draw_scrollbars(&mut frame, bounds.size());

        vec![frame.into_geometry()]
    }
}
