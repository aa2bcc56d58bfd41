// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Routes viewer messages, drives the file dialog, and dispatches image
//! loading onto the async executor with generation tagging so a stale
//! in-flight decode can never overwrite a newer upload.

use super::{App, Message};
use crate::media;
use crate::ui::viewer::component::Effect;
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(msg) => match app.viewer.update(msg) {
            Effect::OpenFilePicker => open_file_dialog(),
            Effect::None => Task::none(),
        },
        Message::OpenFileDialogResult(Some(path)) => start_load(app, path),
        Message::OpenFileDialogResult(None) => Task::none(),
        Message::FileDropped(path) => {
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(media::is_supported_extension);

            if supported {
                start_load(app, path)
            } else {
                debug!(path = %path.display(), "ignoring dropped non-image file");
                Task::none()
            }
        }
        Message::ImageLoaded { generation, result } => {
            app.viewer.finish_load(generation, result);
            Task::none()
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Registers a load request with the viewer and spawns the decode task.
pub(super) fn start_load(app: &mut App, path: PathBuf) -> Task<Message> {
    let generation = app.viewer.begin_load();
    info!(path = %path.display(), generation, "loading image");

    Task::perform(async move { media::load_image(&path).await }, move |result| {
        Message::ImageLoaded { generation, result }
    })
}
