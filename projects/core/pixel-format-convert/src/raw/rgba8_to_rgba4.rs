use crate::color_8888::Color8888;
use crate::unaligned_rw::{ReadLittleEndian, WriteLittleEndian};
use multiversion::multiversion;

/// Converts RGBA8888 pixels to RGBA4444, keeping the top nibble of every channel.
///
/// # Arguments
///
/// * `input_ptr` - Pointer to the RGBA8888 pixels
/// * `output_ptr` - Pointer to the little-endian RGBA4444 output
/// * `num_pixels` - Number of pixels to convert
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `num_pixels * 4` bytes
/// - `output_ptr` must be valid for writes of `num_pixels * 2` bytes
/// - The input and output regions must not overlap
#[inline]
pub unsafe fn rgba8_to_rgba4(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
    #[multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))]
    unsafe fn convert(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
        for x in 0..num_pixels {
            unsafe {
                let pixel = Color8888::from_le_u32(input_ptr.read_u32_le_at(x * 4));
                output_ptr.write_u16_le_at(x * 2, pixel.to_rgba4444());
            }
        }
    }

    debug_assert!(num_pixels == 0 || !(input_ptr.is_null() || output_ptr.is_null()));
    convert(input_ptr, output_ptr, num_pixels);
}
