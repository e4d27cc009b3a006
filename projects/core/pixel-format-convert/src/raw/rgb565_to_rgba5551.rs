use crate::color_565::Color565;
use crate::unaligned_rw::{ReadLittleEndian, WriteLittleEndian};
use multiversion::multiversion;

/// Converts RGB565 words to RGBA5551 by shifting each word left by one and setting alpha.
///
/// See [`Color565::to_rgba5551`] for the exact bit pattern.
///
/// # Arguments
///
/// * `input_ptr` - Pointer to the little-endian RGB565 pixels
/// * `output_ptr` - Pointer to the little-endian RGBA5551 output
/// * `num_pixels` - Number of pixels to convert
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `num_pixels * 2` bytes
/// - `output_ptr` must be valid for writes of `num_pixels * 2` bytes
/// - The input and output regions must either not overlap, or be exactly the same region
///   (see [`rgb565_to_rgba5551_in_place`])
#[inline]
pub unsafe fn rgb565_to_rgba5551(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
    #[multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))]
    unsafe fn convert(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
        for x in 0..num_pixels {
            unsafe {
                // Read before write, so input_ptr == output_ptr is fine.
                let color = Color565::from_raw(input_ptr.read_u16_le_at(x * 2));
                output_ptr.write_u16_le_at(x * 2, color.to_rgba5551());
            }
        }
    }

    debug_assert!(num_pixels == 0 || !(input_ptr.is_null() || output_ptr.is_null()));
    convert(input_ptr, output_ptr, num_pixels);
}

/// Converts a buffer of RGB565 words to RGBA5551 in place.
///
/// Both formats are 16 bits per pixel, so each word is simply replaced by its converted value.
///
/// # Arguments
///
/// * `buffer_ptr` - Pointer to the little-endian RGB565 pixels, overwritten with RGBA5551
/// * `num_pixels` - Number of pixels to convert
///
/// # Safety
///
/// - `buffer_ptr` must be valid for reads and writes of `num_pixels * 2` bytes
#[inline]
pub unsafe fn rgb565_to_rgba5551_in_place(buffer_ptr: *mut u8, num_pixels: usize) {
    rgb565_to_rgba5551(buffer_ptr as *const u8, buffer_ptr, num_pixels);
}
