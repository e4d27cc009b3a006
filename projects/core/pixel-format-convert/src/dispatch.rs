//! Conversion selected at runtime from a [`Conversion`] or a pair of [`PixelFormat`]s.

use crate::error::ConvertError;
use crate::format::{Conversion, PixelFormat};
use crate::safe::convert_checked;

/// Converts `input` to `output` using the kernel for `conversion`.
///
/// Equivalent to calling the matching `convert_*` function directly, but also emits a
/// `debug` level [`tracing`] event: the caller has left the zero-copy path and is paying for
/// a software conversion before upload.
///
/// # Errors
///
/// - [`ConvertError::InputBufferTooSmall`] / [`ConvertError::OutputBufferTooSmall`] if a
///   buffer cannot hold the image
/// - [`ConvertError::DimensionsTooLarge`] if the image size overflows [`usize`]
pub fn convert(
    conversion: Conversion,
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    tracing::debug!(
        from = ?conversion.source(),
        to = ?conversion.destination(),
        width,
        height,
        num_pixels = width.saturating_mul(height),
        "Falling off fast path, converting pixel data"
    );
    convert_checked(conversion, input, output, width, height)
}

/// Converts `input` from `from` to `to`.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedConversion`] if `from` -> `to` is not one of the
///   [supported conversions](Conversion)
/// - Anything [`convert`] returns
///
/// # Examples
///
/// ```
/// use pixel_format_convert::{convert_formats, ConvertError, PixelFormat};
///
/// let rgba = [0xF0, 0x0F, 0xF0, 0x0F];
/// let mut rgba4 = [0u8; 2];
/// convert_formats(PixelFormat::Rgba8, PixelFormat::Rgba4, &rgba, &mut rgba4, 1, 1).unwrap();
/// assert_eq!(u16::from_le_bytes(rgba4), 0xF0F0);
///
/// let mut out = [0u8; 4];
/// assert_eq!(
///     convert_formats(PixelFormat::Rgb8, PixelFormat::Rgba8, &[0; 3], &mut out, 1, 1),
///     Err(ConvertError::UnsupportedConversion {
///         from: PixelFormat::Rgb8,
///         to: PixelFormat::Rgba8
///     })
/// );
/// ```
pub fn convert_formats(
    from: PixelFormat,
    to: PixelFormat,
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let conversion = Conversion::from_formats(from, to).ok_or_else(|| {
        tracing::debug!(?from, ?to, "No converter for pixel format pair");
        ConvertError::UnsupportedConversion { from, to }
    })?;
    convert(conversion, input, output, width, height)
}
