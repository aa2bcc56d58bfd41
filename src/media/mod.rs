// SPDX-License-Identifier: MPL-2.0
//! Image loading for the viewer.

pub mod image;

pub use image::{load_image, ImageData};

/// File extensions offered by the open dialog and accepted on drop.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "tif", "tiff", "webp", "svg",
];

/// Returns whether the given extension looks like a supported image format.
#[must_use]
pub fn is_supported_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_extensions_are_supported() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("svg"));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        assert!(!is_supported_extension("mp4"));
        assert!(!is_supported_extension("txt"));
    }
}
