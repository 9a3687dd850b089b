use thiserror::Error;

/// Error type for background removal
///
/// Covers every way a call into the crate can fail. Degenerate but
/// well-formed inputs (all background, no background, 1x1) are not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes could not be decoded as an image
    ///
    /// Propagated from the `image` crate without retrying, since decoding
    /// the same bytes again would fail the same way.
    #[error("Failed to decode input image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// The output image could not be encoded as PNG
    #[error("Failed to encode output image: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// A numeric parameter is outside its valid range
    ///
    /// Returned by the checked `Strategy` constructors before any pixel
    /// is touched.
    #[error("Invalid parameter `{name}`: {value} is outside {min}..={max}")]
    InvalidParameter {
        /// Parameter name as it appears in the strategy
        name: &'static str,
        /// Value supplied by the caller
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// Image and mask dimensions do not match
    ///
    /// This error occurs when a removal mask built for one image is
    /// applied to an image of a different size.
    #[error("Image and mask dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// The image has a zero width or height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
