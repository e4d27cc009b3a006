use crate::format::PixelFormat;
use thiserror::Error;

/// Validation errors for the safe conversion functions.
///
/// These are only ever raised before any pixel is written; on error the output buffer is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input buffer is too small to hold `width * height` source pixels.
    #[error("Invalid input buffer size: needed {needed} bytes, got {actual}")]
    InputBufferTooSmall {
        /// The required buffer size in bytes.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// Output buffer is too small to hold `width * height` destination pixels.
    #[error("Invalid output buffer size: needed {needed} bytes, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size in bytes.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// `width * height * bytes_per_pixel` does not fit in a [`usize`].
    #[error("Image dimensions {width}x{height} overflow the addressable buffer size")]
    DimensionsTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// There is no converter between the requested formats.
    #[error("No converter from {from:?} to {to:?}")]
    UnsupportedConversion {
        /// The source format.
        from: PixelFormat,
        /// The destination format.
        to: PixelFormat,
    },
}
