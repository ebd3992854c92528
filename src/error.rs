//! Error type shared by every fallible operation in this crate.

use thiserror::Error;

/// Errors returned by fills, annotations, sessions and page I/O.
///
/// A fill whose seed lies on an edge is not an error: it is reported
/// through [`FillOutcome::Rejected`](crate::fill::FillOutcome::Rejected).
#[derive(Debug, Error)]
pub enum Error {
    /// The bitmap has zero width or zero height.
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// The seed coordinate lies outside the bitmap.
    #[error("seed ({x}, {y}) is outside the {width}x{height} image")]
    SeedOutOfBounds {
        /// Seed x-coordinate.
        x: u32,
        /// Seed y-coordinate.
        y: u32,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// Tolerance must be a percentage in `0..=100`.
    #[error("tolerance {0} is outside 0..=100")]
    InvalidTolerance(u8),

    /// Raw pixel data must have three or four channels.
    #[error("unsupported channel count: expected 3 or 4, got {0}")]
    UnsupportedChannelCount(u8),

    /// Raw pixel data does not match the stated dimensions.
    #[error("malformed pixel buffer: expected {expected} bytes, got {actual}")]
    MalformedBuffer {
        /// Length implied by width, height and channel count.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },

    /// A text annotation with nothing to draw.
    #[error("text annotation is empty")]
    EmptyText,

    /// A session needs at least one page.
    #[error("document has no pages")]
    NoPages,

    /// Page index past the end of the document.
    #[error("page {index} out of range: document has {count} pages")]
    PageOutOfRange {
        /// Requested zero-based page index.
        index: usize,
        /// Number of pages in the session.
        count: usize,
    },

    /// Decoding or encoding a page failed.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error while reading or writing pages.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
