//! # RGB565 Color Format Support
//!
//! RGB565 packs red, green and blue into a single 16-bit value:
//!
//! - **Red**: 5 bits (bits 15-11)
//! - **Green**: 6 bits (bits 10-5)
//! - **Blue**: 5 bits (bits 4-0)
//!
//! This crate produces RGB565 from RGBA8888 by truncation, and consumes it when building
//! RGBA5551 (see [`Color565::to_rgba5551`]).

use crate::layout::*;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline(always)]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate 8-bit RGB components.
    ///
    /// Each component keeps only its most significant bits (5 for red and blue, 6 for green);
    /// the remaining bits are dropped, not rounded.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: (((r >> 3) as u16) << RGB565_RED_SHIFT)
                | (((g >> 2) as u16) << RGB565_GREEN_SHIFT)
                | (((b >> 3) as u16) << RGB565_BLUE_SHIFT),
        }
    }

    /// Returns the raw 16-bit value
    #[inline(always)]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    /// Returns the 5-bit red field (0-31), without expansion.
    #[inline]
    pub fn red_bits(&self) -> u8 {
        ((self.value >> RGB565_RED_SHIFT) & 0b11111) as u8
    }

    /// Returns the 6-bit green field (0-63), without expansion.
    #[inline]
    pub fn green_bits(&self) -> u8 {
        ((self.value >> RGB565_GREEN_SHIFT) & 0b111111) as u8
    }

    /// Returns the 5-bit blue field (0-31), without expansion.
    #[inline]
    pub fn blue_bits(&self) -> u8 {
        ((self.value >> RGB565_BLUE_SHIFT) & 0b11111) as u8
    }

    /// Reinterprets this color as an opaque RGBA5551 word.
    ///
    /// Computed as `(value << 1) | 1` in 16-bit arithmetic. This is a bit pattern shift, not a
    /// per-channel conversion: the most significant input bit is discarded and the RGB565 field
    /// boundaries no longer line up with the RGBA5551 ones, so the 6-bit green field is never
    /// narrowed on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_format_convert::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_raw(0x0000).to_rgba5551(), 0x0001);
    /// assert_eq!(Color565::from_raw(0xFFFF).to_rgba5551(), 0xFFFF);
    /// ```
    #[inline(always)]
    pub fn to_rgba5551(&self) -> u16 {
        (self.value << 1) | RGBA5551_ALPHA_OPAQUE
    }
}
