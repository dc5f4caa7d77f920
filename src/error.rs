use std::io;
use std::path::PathBuf;

/// An error raised while generating icons.
///
/// Each variant carries the path it concerns, so callers can match on the
/// failure kind instead of string-matching a printed message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source logo file does not exist.
    #[error("source logo not found: {}", .path.display())]
    SourceNotFound {
        /// The path that could not be opened.
        path: PathBuf,
    },

    /// The source logo could not be decoded as an image.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        /// The path of the image that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },

    /// An output icon could not be encoded or written.
    #[error("failed to write {}: {source}", .path.display())]
    Encode {
        /// The path of the icon that failed to save.
        path: PathBuf,
        /// The underlying encoder error.
        source: image::ImageError,
    },

    /// Some other I/O operation failed (opening the source, creating the
    /// output directory).
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The path the operation concerned.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
