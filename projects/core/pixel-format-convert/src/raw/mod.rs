//! # Raw Conversion Kernels
//!
//! Pointer based conversion loops with no validation. These are the hot path; the safe
//! wrappers in the crate root validate buffer sizes once and then call straight into here.
//!
//! Every kernel takes the same arguments:
//!
//! * `input_ptr` - Pointer to the first source pixel
//! * `output_ptr` - Pointer to the first destination pixel
//! * `num_pixels` - Number of pixels to convert (`width * height`)
//!
//! Buffers are tightly packed and need no particular alignment. Each kernel reads exactly
//! `num_pixels * source_bytes_per_pixel` bytes and writes exactly
//! `num_pixels * destination_bytes_per_pixel` bytes.
//!
//! The loops are compiled for several x86-64 feature levels via [`multiversion`] and the best
//! one is picked at runtime (with the `std` feature) so the compiler can vectorize them.

mod rgb565_to_rgba5551;
mod rgba8_to_la88;
mod rgba8_to_rgb565;
mod rgba8_to_rgb8;
mod rgba8_to_rgba4;

pub use rgb565_to_rgba5551::{rgb565_to_rgba5551, rgb565_to_rgba5551_in_place};
pub use rgba8_to_la88::rgba8_to_la88;
pub use rgba8_to_rgb565::rgba8_to_rgb565;
pub use rgba8_to_rgb8::rgba8_to_rgb8;
pub use rgba8_to_rgba4::rgba8_to_rgba4;

use crate::format::Conversion;

/// Signature shared by all out-of-place conversion kernels.
pub type ConvertFn = unsafe fn(*const u8, *mut u8, usize);

/// Returns the raw kernel implementing `conversion`.
#[inline]
pub fn kernel_for(conversion: Conversion) -> ConvertFn {
    match conversion {
        Conversion::Rgba8ToRgb8 => rgba8_to_rgb8,
        Conversion::Rgba8ToRgb565 => rgba8_to_rgb565,
        Conversion::Rgba8ToRgba4 => rgba8_to_rgba4,
        Conversion::Rgba8ToLa88 => rgba8_to_la88,
        Conversion::Rgb565ToRgba5551 => rgb565_to_rgba5551,
    }
}
