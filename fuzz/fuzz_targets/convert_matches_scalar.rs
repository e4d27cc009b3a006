#![no_main]

// Checks every conversion kernel against the per-pixel colour types, which model each
// destination format one pixel at a time.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_format_convert::{
    color_565::Color565, color_8888::Color8888, convert, Conversion, PixelFormat,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Image {
    pub conversion_index: u8,
    pub width: u8,
    pub pixels: Vec<u8>,
}

fn expected_pixel(conversion: Conversion, pixel: &[u8], out: &mut Vec<u8>) {
    match conversion {
        Conversion::Rgb565ToRgba5551 => {
            let color = Color565::from_raw(u16::from_le_bytes([pixel[0], pixel[1]]));
            out.extend_from_slice(&color.to_rgba5551().to_le_bytes());
        }
        _ => {
            let color = Color8888::new(pixel[0], pixel[1], pixel[2], pixel[3]);
            match conversion {
                Conversion::Rgba8ToRgb8 => out.extend_from_slice(&[color.r, color.g, color.b]),
                Conversion::Rgba8ToRgb565 => {
                    out.extend_from_slice(&color.to_color_565().raw_value().to_le_bytes())
                }
                Conversion::Rgba8ToRgba4 => {
                    out.extend_from_slice(&color.to_rgba4444().to_le_bytes())
                }
                Conversion::Rgba8ToLa88 => out.extend_from_slice(&[color.luma_bt709(), color.a]),
                Conversion::Rgb565ToRgba5551 => unreachable!(),
            }
        }
    }
}

fuzz_target!(|image: Image| {
    let conversions = Conversion::all_values();
    let conversion = conversions[image.conversion_index as usize % conversions.len()];
    let source: PixelFormat = conversion.source();

    let width = (image.width as usize).max(1);
    let height = image.pixels.len() / source.bytes_per_pixel() / width;
    let input = &image.pixels[..source.buffer_len(width, height).unwrap()];

    let mut expected = Vec::new();
    for pixel in input.chunks_exact(source.bytes_per_pixel()) {
        expected_pixel(conversion, pixel, &mut expected);
    }

    let mut output = vec![0u8; conversion.destination().buffer_len(width, height).unwrap()];
    convert(conversion, input, &mut output, width, height).unwrap();

    assert_eq!(
        output, expected,
        "{conversion:?} disagrees with the per-pixel model for a {width}x{height} image"
    );
});
