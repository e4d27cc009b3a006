//! # Bit Layouts
//!
//! Named bit positions for every packed format handled by this crate.
//!
//! ## RGBA8888 (source)
//!
//! Stored in memory as the bytes `R, G, B, A`. Read as a little-endian [`u32`]:
//!
//! ```text
//! 31      24 23      16 15       8 7        0
//! +---------+----------+----------+---------+
//! |    A    |    B     |    G     |    R    |
//! +---------+----------+----------+---------+
//! ```
//!
//! ## 16-bit destinations
//!
//! ```text
//! RGB565:    RRRRR GGGGGG BBBBB        (R @ 11, G @ 5, B @ 0)
//! RGBA4444:  RRRR GGGG BBBB AAAA       (R @ 12, G @ 8, B @ 4, A @ 0)
//! RGBA5551:  RRRRR GGGGG BBBBB A       (R @ 11, G @ 6, B @ 1, A @ 0)
//! ```
//!
//! Every 16-bit word (including the RGB565 source of the RGBA5551 conversion) is stored
//! little-endian in the byte buffers.

/// Bit offset of the red channel within a little-endian RGBA8888 [`u32`].
pub const RGBA8_RED_SHIFT: u32 = 0;
/// Bit offset of the green channel within a little-endian RGBA8888 [`u32`].
pub const RGBA8_GREEN_SHIFT: u32 = 8;
/// Bit offset of the blue channel within a little-endian RGBA8888 [`u32`].
pub const RGBA8_BLUE_SHIFT: u32 = 16;
/// Bit offset of the alpha channel within a little-endian RGBA8888 [`u32`].
pub const RGBA8_ALPHA_SHIFT: u32 = 24;

/// Bit offset of the 5-bit red field in RGB565.
pub const RGB565_RED_SHIFT: u32 = 11;
/// Bit offset of the 6-bit green field in RGB565.
pub const RGB565_GREEN_SHIFT: u32 = 5;
/// Bit offset of the 5-bit blue field in RGB565.
pub const RGB565_BLUE_SHIFT: u32 = 0;

/// Bit offset of the red nibble in RGBA4444.
pub const RGBA4_RED_SHIFT: u32 = 12;
/// Bit offset of the green nibble in RGBA4444.
pub const RGBA4_GREEN_SHIFT: u32 = 8;
/// Bit offset of the blue nibble in RGBA4444.
pub const RGBA4_BLUE_SHIFT: u32 = 4;
/// Bit offset of the alpha nibble in RGBA4444.
pub const RGBA4_ALPHA_SHIFT: u32 = 0;

/// Opaque alpha bit of RGBA5551, always set when converting from RGB565.
pub const RGBA5551_ALPHA_OPAQUE: u16 = 0x0001;

/// ITU-R BT.709 weight of the red channel.
pub const BT709_RED_WEIGHT: f32 = 0.2126;
/// ITU-R BT.709 weight of the green channel.
pub const BT709_GREEN_WEIGHT: f32 = 0.7152;
/// ITU-R BT.709 weight of the blue channel.
pub const BT709_BLUE_WEIGHT: f32 = 0.0722;
