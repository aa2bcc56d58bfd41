// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Svg(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Image(_) => "error-load-image",
            Error::Svg(_) => "error-load-svg",
            Error::Config(_) => "error-config",
        }
    }

    /// Returns the raw technical detail carried by this error.
    pub fn details(&self) -> &str {
        match self {
            Error::Io(msg) | Error::Image(msg) | Error::Svg(msg) | Error::Config(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_error_conversion_produces_image_variant() {
        let io_err = std::io::Error::other("decode failed");
        let image_error = image_rs::ImageError::IoError(io_err);
        let err: Error = image_error.into();
        match err {
            Error::Image(message) => assert!(message.contains("decode failed")),
            _ => panic!("expected Image variant"),
        }
    }

    #[test]
    fn i18n_keys_are_per_variant() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-io");
        assert_eq!(Error::Image(String::new()).i18n_key(), "error-load-image");
        assert_eq!(Error::Svg(String::new()).i18n_key(), "error-load-svg");
        assert_eq!(Error::Config(String::new()).i18n_key(), "error-config");
    }

    #[test]
    fn details_expose_raw_message() {
        let err = Error::Svg("bad path data".into());
        assert_eq!(err.details(), "bad path data");
    }
}
