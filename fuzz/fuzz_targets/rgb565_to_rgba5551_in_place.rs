#![no_main]

// Validates that converting RGB565 to RGBA5551 in place gives the same bytes as the
// out-of-place conversion.

use libfuzzer_sys::fuzz_target;
use pixel_format_convert::{convert_rgb565_to_rgba5551, convert_rgb565_to_rgba5551_in_place};

fuzz_target!(|data: &[u8]| {
    let num_pixels = data.len() / 2;
    let input = &data[..num_pixels * 2];

    let mut expected = vec![0u8; input.len()];
    convert_rgb565_to_rgba5551(input, &mut expected, num_pixels, 1).unwrap();

    let mut buffer = input.to_vec();
    convert_rgb565_to_rgba5551_in_place(&mut buffer, num_pixels, 1).unwrap();

    assert_eq!(buffer, expected);
});
