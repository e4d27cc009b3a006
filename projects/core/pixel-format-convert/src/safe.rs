//! Safe slice-based conversion wrappers
//!
//! These functions validate that the input and output slices are large enough for a
//! `width` x `height` image in the respective formats, then call the matching kernel in
//! [`crate::raw`]. Validation happens once, up front; the conversion itself cannot fail.
//!
//! Output slices larger than required are allowed. Only the first
//! `width * height * destination_bytes_per_pixel` bytes are written; the rest is untouched.

use crate::error::ConvertError;
use crate::format::Conversion;
use crate::raw::{kernel_for, rgb565_to_rgba5551_in_place};

/// Checks buffer sizes for `conversion` and returns the number of pixels to convert.
pub(crate) fn validate_buffers(
    conversion: Conversion,
    input_len: usize,
    output_len: usize,
    width: usize,
    height: usize,
) -> Result<usize, ConvertError> {
    let too_large = || ConvertError::DimensionsTooLarge { width, height };
    let num_pixels = width.checked_mul(height).ok_or_else(too_large)?;
    let needed_input = conversion
        .source()
        .buffer_len(width, height)
        .ok_or_else(too_large)?;
    let needed_output = conversion
        .destination()
        .buffer_len(width, height)
        .ok_or_else(too_large)?;

    if input_len < needed_input {
        return Err(ConvertError::InputBufferTooSmall {
            needed: needed_input,
            actual: input_len,
        });
    }

    if output_len < needed_output {
        return Err(ConvertError::OutputBufferTooSmall {
            needed: needed_output,
            actual: output_len,
        });
    }

    Ok(num_pixels)
}

/// Validates the buffers and runs the kernel for `conversion`.
#[inline]
pub(crate) fn convert_checked(
    conversion: Conversion,
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let num_pixels = validate_buffers(conversion, input.len(), output.len(), width, height)?;

    // Safety: Both buffers were validated above, and `&[u8]`/`&mut [u8]` cannot overlap.
    unsafe { kernel_for(conversion)(input.as_ptr(), output.as_mut_ptr(), num_pixels) };
    Ok(())
}

/// Converts a RGBA8888 image to RGB888, dropping alpha.
///
/// # Parameters
///
/// - `input`: `width * height * 4` bytes of RGBA8888 pixels
/// - `output`: At least `width * height * 3` bytes to receive RGB888 pixels
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// - [`ConvertError::InputBufferTooSmall`] / [`ConvertError::OutputBufferTooSmall`] if a
///   buffer cannot hold the image
/// - [`ConvertError::DimensionsTooLarge`] if the image size overflows [`usize`]
///
/// # Examples
///
/// ```
/// use pixel_format_convert::convert_rgba8_to_rgb8;
/// # use pixel_format_convert::ConvertError;
///
/// # fn main() -> Result<(), ConvertError> {
/// let rgba = [10, 20, 30, 255];
/// let mut rgb = [0u8; 3];
/// convert_rgba8_to_rgb8(&rgba, &mut rgb, 1, 1)?;
/// assert_eq!(rgb, [10, 20, 30]);
/// # Ok(())
/// # }
/// ```
pub fn convert_rgba8_to_rgb8(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert_checked(Conversion::Rgba8ToRgb8, input, output, width, height)
}

/// Converts a RGBA8888 image to little-endian RGB565, truncating each channel.
///
/// # Parameters
///
/// - `input`: `width * height * 4` bytes of RGBA8888 pixels
/// - `output`: At least `width * height * 2` bytes to receive RGB565 words
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// See [`convert_rgba8_to_rgb8`].
pub fn convert_rgba8_to_rgb565(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert_checked(Conversion::Rgba8ToRgb565, input, output, width, height)
}

/// Converts a RGBA8888 image to little-endian RGBA4444, truncating each channel.
///
/// # Parameters
///
/// - `input`: `width * height * 4` bytes of RGBA8888 pixels
/// - `output`: At least `width * height * 2` bytes to receive RGBA4444 words
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// See [`convert_rgba8_to_rgb8`].
pub fn convert_rgba8_to_rgba4(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert_checked(Conversion::Rgba8ToRgba4, input, output, width, height)
}

/// Converts a RGBA8888 image to LA88 (BT.709 luma, then alpha).
///
/// # Parameters
///
/// - `input`: `width * height * 4` bytes of RGBA8888 pixels
/// - `output`: At least `width * height * 2` bytes to receive LA88 pixels
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// See [`convert_rgba8_to_rgb8`].
///
/// # Examples
///
/// ```
/// use pixel_format_convert::convert_rgba8_to_la88;
///
/// let rgba = [255, 255, 255, 1, 0, 0, 0, 200];
/// let mut la = [0u8; 4];
/// convert_rgba8_to_la88(&rgba, &mut la, 2, 1).unwrap();
/// assert_eq!(la, [255, 1, 0, 200]);
/// ```
pub fn convert_rgba8_to_la88(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert_checked(Conversion::Rgba8ToLa88, input, output, width, height)
}

/// Converts a little-endian RGB565 image to little-endian RGBA5551 (`(word << 1) | 1`).
///
/// # Parameters
///
/// - `input`: `width * height * 2` bytes of RGB565 words
/// - `output`: At least `width * height * 2` bytes to receive RGBA5551 words
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// See [`convert_rgba8_to_rgb8`].
pub fn convert_rgb565_to_rgba5551(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert_checked(Conversion::Rgb565ToRgba5551, input, output, width, height)
}

/// Converts a little-endian RGB565 image to RGBA5551 in place.
///
/// # Parameters
///
/// - `buffer`: `width * height * 2` bytes of RGB565 words, overwritten with RGBA5551
/// - `width`, `height`: Image dimensions in pixels
///
/// # Errors
///
/// - [`ConvertError::InputBufferTooSmall`] if `buffer` cannot hold the image
/// - [`ConvertError::DimensionsTooLarge`] if the image size overflows [`usize`]
///
/// # Examples
///
/// ```
/// use pixel_format_convert::convert_rgb565_to_rgba5551_in_place;
///
/// let mut pixels = 0xF800u16.to_le_bytes();
/// convert_rgb565_to_rgba5551_in_place(&mut pixels, 1, 1).unwrap();
/// assert_eq!(u16::from_le_bytes(pixels), 0xF001);
/// ```
pub fn convert_rgb565_to_rgba5551_in_place(
    buffer: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    let num_pixels = validate_buffers(
        Conversion::Rgb565ToRgba5551,
        buffer.len(),
        buffer.len(),
        width,
        height,
    )?;

    tracing::debug!(
        from = ?Conversion::Rgb565ToRgba5551.source(),
        to = ?Conversion::Rgb565ToRgba5551.destination(),
        width,
        height,
        num_pixels,
        "Falling off fast path, converting pixel data in place"
    );

    // Safety: Buffer size validated above.
    unsafe { rgb565_to_rgba5551_in_place(buffer.as_mut_ptr(), num_pixels) };
    Ok(())
}
