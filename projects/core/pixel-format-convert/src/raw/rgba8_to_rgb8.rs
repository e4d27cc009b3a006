use core::ptr::copy_nonoverlapping;
use multiversion::multiversion;

/// Converts RGBA8888 pixels to RGB888 by copying the colour bytes and skipping alpha.
///
/// # Arguments
///
/// * `input_ptr` - Pointer to the RGBA8888 pixels
/// * `output_ptr` - Pointer to the RGB888 output
/// * `num_pixels` - Number of pixels to convert
///
/// # Safety
///
/// - `input_ptr` must be valid for reads of `num_pixels * 4` bytes
/// - `output_ptr` must be valid for writes of `num_pixels * 3` bytes
/// - The input and output regions must not overlap
#[inline]
pub unsafe fn rgba8_to_rgb8(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
    #[multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))]
    unsafe fn convert(input_ptr: *const u8, output_ptr: *mut u8, num_pixels: usize) {
        unsafe {
            let max_input_ptr = input_ptr.add(num_pixels * 4);
            let mut input_ptr = input_ptr;
            let mut output_ptr = output_ptr;

            while input_ptr < max_input_ptr {
                // R, G, B; alpha is skipped by the 4 byte advance.
                copy_nonoverlapping(input_ptr, output_ptr, 3);
                input_ptr = input_ptr.add(4);
                output_ptr = output_ptr.add(3);
            }
        }
    }

    debug_assert!(num_pixels == 0 || !(input_ptr.is_null() || output_ptr.is_null()));
    convert(input_ptr, output_ptr, num_pixels);
}
