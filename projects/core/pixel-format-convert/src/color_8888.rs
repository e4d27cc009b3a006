//! RGBA8888 source pixels.

use crate::color_565::Color565;
use crate::layout::*;

/// Represents a single RGBA8888 pixel, as laid out in the source buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a pixel from its little-endian packed [`u32`] form.
    ///
    /// The value is expected to be the bytes `R, G, B, A` read with [`u32::from_le_bytes`]
    /// (or equivalently, a native [`u32`] that has been passed through [`u32::from_le`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_8888::Color8888;
    ///
    /// let pixel = Color8888::from_le_u32(u32::from_le_bytes([10, 20, 30, 255]));
    /// assert_eq!(pixel, Color8888::new(10, 20, 30, 255));
    /// ```
    #[inline(always)]
    pub fn from_le_u32(value: u32) -> Self {
        Self {
            r: (value >> RGBA8_RED_SHIFT) as u8,
            g: (value >> RGBA8_GREEN_SHIFT) as u8,
            b: (value >> RGBA8_BLUE_SHIFT) as u8,
            a: (value >> RGBA8_ALPHA_SHIFT) as u8,
        }
    }

    /// Converts this pixel to [`Color565`] by dropping the low bits of each channel.
    ///
    /// Alpha is discarded. This truncates, it does not round.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_8888::Color8888;
    ///
    /// assert_eq!(Color8888::new(0xFF, 0xFF, 0xFF, 0).to_color_565().raw_value(), 0xFFFF);
    /// assert_eq!(Color8888::new(0x07, 0x03, 0x07, 0).to_color_565().raw_value(), 0x0000);
    /// ```
    #[inline(always)]
    pub fn to_color_565(&self) -> Color565 {
        Color565::from_rgb(self.r, self.g, self.b)
    }

    /// Packs this pixel as RGBA4444, keeping the top nibble of each channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_8888::Color8888;
    ///
    /// assert_eq!(Color8888::new(0xF0, 0x0F, 0xF0, 0x0F).to_rgba4444(), 0xF0F0);
    /// ```
    #[inline(always)]
    pub fn to_rgba4444(&self) -> u16 {
        (((self.r >> 4) as u16) << RGBA4_RED_SHIFT)
            | (((self.g >> 4) as u16) << RGBA4_GREEN_SHIFT)
            | (((self.b >> 4) as u16) << RGBA4_BLUE_SHIFT)
            | (((self.a >> 4) as u16) << RGBA4_ALPHA_SHIFT)
    }

    /// Computes the BT.709 luma of this pixel, truncated toward zero.
    ///
    /// The weighted sum is evaluated in [`f32`], left to right, and then cast. The cast
    /// truncates: a grey of `13` sums to `12.999999` and yields `12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_8888::Color8888;
    ///
    /// assert_eq!(Color8888::new(255, 255, 255, 0).luma_bt709(), 255);
    /// assert_eq!(Color8888::new(13, 13, 13, 0).luma_bt709(), 12);
    /// ```
    #[inline(always)]
    pub fn luma_bt709(&self) -> u8 {
        let luma = BT709_RED_WEIGHT * self.r as f32
            + BT709_GREEN_WEIGHT * self.g as f32
            + BT709_BLUE_WEIGHT * self.b as f32;
        luma as u8
    }
}
