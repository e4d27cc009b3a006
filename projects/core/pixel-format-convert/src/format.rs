//! Pixel formats and the conversions between them.

use derive_enum_all_values::AllValues;

/// An uncompressed pixel format, as used when uploading textures.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum PixelFormat {
    /// 8 bits each of red, green, blue and alpha. Bytes `R, G, B, A`.
    Rgba8 = 0,
    /// 8 bits each of red, green and blue. Bytes `R, G, B`.
    Rgb8 = 1,
    /// 4 bits per channel, packed into a little-endian [`u16`] as `RRRR GGGG BBBB AAAA`.
    Rgba4 = 2,
    /// 5 bits per colour channel and a 1-bit alpha, packed into a little-endian [`u16`].
    Rgba5551 = 3,
    /// 5 bits red, 6 bits green, 5 bits blue, packed into a little-endian [`u16`].
    Rgb565 = 4,
    /// 8-bit luminance.
    L8 = 5,
    /// 8-bit alpha mask.
    A8 = 6,
    /// 8-bit luminance followed by 8-bit alpha.
    La88 = 7,
}

impl PixelFormat {
    /// Number of bytes a single pixel occupies in a tightly packed buffer.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba4
            | PixelFormat::Rgba5551
            | PixelFormat::Rgb565
            | PixelFormat::La88 => 2,
            PixelFormat::L8 | PixelFormat::A8 => 1,
        }
    }

    /// Number of bytes a tightly packed `width` x `height` buffer of this format occupies,
    /// or [`None`] if that does not fit in a [`usize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::Rgb8.buffer_len(640, 480), Some(921_600));
    /// assert_eq!(PixelFormat::Rgba8.buffer_len(usize::MAX, 2), None);
    /// ```
    #[inline]
    pub const fn buffer_len(self, width: usize, height: usize) -> Option<usize> {
        match width.checked_mul(height) {
            Some(num_pixels) => num_pixels.checked_mul(self.bytes_per_pixel()),
            None => None,
        }
    }

    /// Whether the format stores an alpha channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            PixelFormat::Rgba8
                | PixelFormat::Rgba4
                | PixelFormat::Rgba5551
                | PixelFormat::A8
                | PixelFormat::La88
        )
    }

    /// Picks the upload format for an image, given its colour model, whether it carries alpha
    /// and how many bits each of its pixels uses.
    ///
    /// - Monochrome images map to [`PixelFormat::La88`] (alpha) or [`PixelFormat::L8`].
    /// - 16-bit RGB images map to [`PixelFormat::Rgba5551`] (alpha) or [`PixelFormat::Rgb565`].
    /// - Other RGB images map to [`PixelFormat::Rgba8`] (alpha) or [`PixelFormat::Rgb8`].
    /// - Masks (no colour space) map to [`PixelFormat::A8`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::{ColorModel, PixelFormat};
    ///
    /// assert_eq!(PixelFormat::infer(ColorModel::Rgb, true, 16), PixelFormat::Rgba5551);
    /// assert_eq!(PixelFormat::infer(ColorModel::Monochrome, true, 16), PixelFormat::La88);
    /// ```
    pub fn infer(model: ColorModel, has_alpha: bool, bits_per_pixel: u32) -> Self {
        match model {
            ColorModel::Monochrome if has_alpha => PixelFormat::La88,
            ColorModel::Monochrome => PixelFormat::L8,
            ColorModel::Rgb if bits_per_pixel == 16 => {
                if has_alpha {
                    PixelFormat::Rgba5551
                } else {
                    PixelFormat::Rgb565
                }
            }
            ColorModel::Rgb if has_alpha => PixelFormat::Rgba8,
            ColorModel::Rgb => PixelFormat::Rgb8,
            ColorModel::Mask => PixelFormat::A8,
        }
    }

    /// The format an image is rasterised into before being converted to `self`.
    ///
    /// Colour formats other than RGBA5551 are drawn as [`PixelFormat::Rgba8`]; RGBA5551 is
    /// drawn as 16-bit [`PixelFormat::Rgb565`]-shaped data. Single channel formats are drawn
    /// directly.
    #[inline]
    pub const fn staging_format(self) -> Self {
        match self {
            PixelFormat::Rgba8
            | PixelFormat::Rgb8
            | PixelFormat::Rgba4
            | PixelFormat::Rgb565
            | PixelFormat::La88 => PixelFormat::Rgba8,
            PixelFormat::Rgba5551 => PixelFormat::Rgb565,
            PixelFormat::L8 => PixelFormat::L8,
            PixelFormat::A8 => PixelFormat::A8,
        }
    }
}

/// The colour model of a source image, used by [`PixelFormat::infer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// A single grey channel.
    Monochrome,
    /// Red, green and blue channels.
    Rgb,
    /// No colour space; the image is an alpha mask.
    Mask,
}

/// One of the supported format-to-format conversions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Conversion {
    /// [`PixelFormat::Rgba8`] to [`PixelFormat::Rgb8`]. Drops alpha.
    Rgba8ToRgb8 = 0,
    /// [`PixelFormat::Rgba8`] to [`PixelFormat::Rgb565`]. Truncates, drops alpha.
    Rgba8ToRgb565 = 1,
    /// [`PixelFormat::Rgba8`] to [`PixelFormat::Rgba4`]. Truncates.
    Rgba8ToRgba4 = 2,
    /// [`PixelFormat::Rgba8`] to [`PixelFormat::La88`]. BT.709 luma, alpha copied.
    Rgba8ToLa88 = 3,
    /// [`PixelFormat::Rgb565`] to [`PixelFormat::Rgba5551`]. Shift by one, set alpha.
    Rgb565ToRgba5551 = 4,
}

impl Conversion {
    /// The format read by this conversion.
    #[inline]
    pub const fn source(self) -> PixelFormat {
        match self {
            Conversion::Rgba8ToRgb8
            | Conversion::Rgba8ToRgb565
            | Conversion::Rgba8ToRgba4
            | Conversion::Rgba8ToLa88 => PixelFormat::Rgba8,
            Conversion::Rgb565ToRgba5551 => PixelFormat::Rgb565,
        }
    }

    /// The format written by this conversion.
    #[inline]
    pub const fn destination(self) -> PixelFormat {
        match self {
            Conversion::Rgba8ToRgb8 => PixelFormat::Rgb8,
            Conversion::Rgba8ToRgb565 => PixelFormat::Rgb565,
            Conversion::Rgba8ToRgba4 => PixelFormat::Rgba4,
            Conversion::Rgba8ToLa88 => PixelFormat::La88,
            Conversion::Rgb565ToRgba5551 => PixelFormat::Rgba5551,
        }
    }

    /// Looks up the conversion from `source` to `destination`, if one exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::{Conversion, PixelFormat};
    ///
    /// assert_eq!(
    ///     Conversion::from_formats(PixelFormat::Rgba8, PixelFormat::La88),
    ///     Some(Conversion::Rgba8ToLa88)
    /// );
    /// assert_eq!(Conversion::from_formats(PixelFormat::Rgb8, PixelFormat::Rgba8), None);
    /// ```
    pub fn from_formats(source: PixelFormat, destination: PixelFormat) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|c| c.source() == source && c.destination() == destination)
    }

    /// The conversion that turns the [staging buffer](PixelFormat::staging_format) of
    /// `target` into `target` itself, or [`None`] when the staging buffer is already in the
    /// target format.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::{Conversion, PixelFormat};
    ///
    /// assert_eq!(
    ///     Conversion::for_target(PixelFormat::Rgba5551),
    ///     Some(Conversion::Rgb565ToRgba5551)
    /// );
    /// assert_eq!(Conversion::for_target(PixelFormat::Rgba8), None);
    /// ```
    #[inline]
    pub fn for_target(target: PixelFormat) -> Option<Self> {
        Self::from_formats(target.staging_format(), target)
    }
}
