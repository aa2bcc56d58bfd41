// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::viewer::component;
use std::path::PathBuf;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Image to load on startup.
    pub file_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A load task finished; `generation` ties it to the request that
    /// started it so stale completions can be discarded.
    ImageLoaded {
        generation: u64,
        result: Result<ImageData, Error>,
    },
}
