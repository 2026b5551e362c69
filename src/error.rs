// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(ImageError),
    Rpc(String),
    Dialog(String),
}

/// Specific error types for image attachment issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ImageError {
    /// File extension is not in the supported set
    UnsupportedFormat(String),

    /// File exceeds the configured size limit (actual size in bytes)
    TooLarge(u64),

    /// Pixel dimensions exceed the configured maximum
    Dimensions(u32, u32),

    /// The data could not be decoded as an image
    Decode(String),

    /// The clipboard holds no image data
    ClipboardEmpty,

    /// File does not exist or cannot be read
    NotFound(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::UnsupportedFormat(_) => "error-image-unsupported-format",
            ImageError::TooLarge(_) => "error-image-too-large",
            ImageError::Dimensions(_, _) => "error-image-dimensions",
            ImageError::Decode(_) => "error-image-decode",
            ImageError::ClipboardEmpty => "error-clipboard-empty",
            ImageError::NotFound(_) => "error-image-not-found",
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::UnsupportedFormat(ext) => {
                write!(f, "Unsupported image format: {}", ext)
            }
            ImageError::TooLarge(bytes) => {
                write!(f, "Image file too large: {:.1} MB", *bytes as f64 / 1_048_576.0)
            }
            ImageError::Dimensions(w, h) => {
                write!(f, "Image dimensions too large: {}x{}", w, h)
            }
            ImageError::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            ImageError::ClipboardEmpty => write!(f, "No image data in clipboard"),
            ImageError::NotFound(path) => write!(f, "File not found: {}", path),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Rpc(e) => write!(f, "RPC Error: {}", e),
            Error::Dialog(e) => write!(f, "Dialog Error: {}", e),
        }
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(ImageError::Decode(err.to_string()))
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Rpc(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
