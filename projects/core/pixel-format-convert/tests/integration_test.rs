//! Integration tests for the public conversion API

use pixel_format_convert::{
    convert, convert_rgb565_to_rgba5551, convert_rgba8_to_la88, convert_rgba8_to_rgb565,
    convert_rgba8_to_rgb8, convert_rgba8_to_rgba4, Conversion, ConvertError, PixelFormat,
};
use rstest::rstest;

type SafeConvertFn = fn(&[u8], &mut [u8], usize, usize) -> Result<(), ConvertError>;

fn converter(conversion: Conversion) -> SafeConvertFn {
    match conversion {
        Conversion::Rgba8ToRgb8 => convert_rgba8_to_rgb8,
        Conversion::Rgba8ToRgb565 => convert_rgba8_to_rgb565,
        Conversion::Rgba8ToRgba4 => convert_rgba8_to_rgba4,
        Conversion::Rgba8ToLa88 => convert_rgba8_to_la88,
        Conversion::Rgb565ToRgba5551 => convert_rgb565_to_rgba5551,
    }
}

/// A source pixel that sets bits in every channel.
fn sample_pixel(format: PixelFormat) -> Vec<u8> {
    match format {
        PixelFormat::Rgba8 => vec![0xC3, 0x5A, 0x96, 0x71],
        PixelFormat::Rgb565 => 0xA5C3u16.to_le_bytes().to_vec(),
        other => panic!("{other:?} is not a source format"),
    }
}

fn gradient(format: PixelFormat, width: usize, height: usize) -> Vec<u8> {
    (0..width * height * format.bytes_per_pixel())
        .map(|i| (i * 7 + i / 3) as u8)
        .collect()
}

#[test]
fn documented_examples() {
    let mut rgb = [0u8; 3];
    convert_rgba8_to_rgb8(&[10, 20, 30, 255], &mut rgb, 1, 1).unwrap();
    assert_eq!(rgb, [10, 20, 30]);

    let mut word = [0u8; 2];
    convert_rgba8_to_rgb565(&[0xFF, 0xFF, 0xFF, 0x00], &mut word, 1, 1).unwrap();
    assert_eq!(u16::from_le_bytes(word), 0xFFFF);
    convert_rgba8_to_rgb565(&[0x07, 0x03, 0x07, 0xFF], &mut word, 1, 1).unwrap();
    assert_eq!(u16::from_le_bytes(word), 0x0000);

    convert_rgba8_to_rgba4(&[0xF0, 0x0F, 0xF0, 0x0F], &mut word, 1, 1).unwrap();
    assert_eq!(u16::from_le_bytes(word), 0xF0F0);

    let mut la = [0u8; 2];
    convert_rgba8_to_la88(&[0, 0, 0, 200], &mut la, 1, 1).unwrap();
    assert_eq!(la, [0, 200]);
    convert_rgba8_to_la88(&[255, 255, 255, 1], &mut la, 1, 1).unwrap();
    assert_eq!(la, [255, 1]);

    convert_rgb565_to_rgba5551(&0x0000u16.to_le_bytes(), &mut word, 1, 1).unwrap();
    assert_eq!(u16::from_le_bytes(word), 0x0001);
    convert_rgb565_to_rgba5551(&0xFFFFu16.to_le_bytes(), &mut word, 1, 1).unwrap();
    assert_eq!(u16::from_le_bytes(word), 0xFFFF);
}

#[rstest]
fn writes_exactly_the_destination_size(
    #[values(
        Conversion::Rgba8ToRgb8,
        Conversion::Rgba8ToRgb565,
        Conversion::Rgba8ToRgba4,
        Conversion::Rgba8ToLa88,
        Conversion::Rgb565ToRgba5551
    )]
    conversion: Conversion,
    #[values((1, 1), (3, 5), (16, 16), (7, 1))] size: (usize, usize),
) {
    const SENTINEL: u8 = 0x5E;
    let (width, height) = size;
    let input = gradient(conversion.source(), width, height);
    let needed = conversion.destination().buffer_len(width, height).unwrap();

    // Pre-fill with the sentinel and its complement, so any write shows up in one of the two.
    for fill in [SENTINEL, !SENTINEL] {
        let mut output = vec![fill; needed + 32];
        converter(conversion)(&input, &mut output, width, height).unwrap();
        assert!(
            output[needed..].iter().all(|&b| b == fill),
            "{conversion:?} wrote past {needed} bytes"
        );

        let mut exact = vec![0u8; needed];
        converter(conversion)(&input, &mut exact, width, height).unwrap();
        assert_eq!(&output[..needed], exact.as_slice());
    }
}

#[rstest]
fn converting_twice_is_identical(
    #[values(
        Conversion::Rgba8ToRgb8,
        Conversion::Rgba8ToRgb565,
        Conversion::Rgba8ToRgba4,
        Conversion::Rgba8ToLa88,
        Conversion::Rgb565ToRgba5551
    )]
    conversion: Conversion,
) {
    let (width, height) = (13, 11);
    let input = gradient(conversion.source(), width, height);
    let original_input = input.clone();
    let needed = conversion.destination().buffer_len(width, height).unwrap();

    let mut first = vec![0u8; needed];
    let mut second = vec![0xFFu8; needed];
    converter(conversion)(&input, &mut first, width, height).unwrap();
    converter(conversion)(&input, &mut second, width, height).unwrap();

    assert_eq!(first, second);
    assert_eq!(input, original_input, "input must never be modified");
}

#[rstest]
fn tiled_pixel_gives_tiled_output(
    #[values(
        Conversion::Rgba8ToRgb8,
        Conversion::Rgba8ToRgb565,
        Conversion::Rgba8ToRgba4,
        Conversion::Rgba8ToLa88,
        Conversion::Rgb565ToRgba5551
    )]
    conversion: Conversion,
    #[values((2, 1), (2, 2), (8, 4), (33, 3))] size: (usize, usize),
) {
    let pixel = sample_pixel(conversion.source());
    let mut single = vec![0u8; conversion.destination().bytes_per_pixel()];
    converter(conversion)(&pixel, &mut single, 1, 1).unwrap();

    let (width, height) = size;
    let input = pixel.repeat(width * height);
    let mut output = vec![0u8; conversion.destination().buffer_len(width, height).unwrap()];
    converter(conversion)(&input, &mut output, width, height).unwrap();

    assert_eq!(output, single.repeat(width * height));
}

#[test]
fn dispatch_agrees_with_direct_calls() {
    let (width, height) = (9, 7);
    for &conversion in Conversion::all_values() {
        let input = gradient(conversion.source(), width, height);
        let needed = conversion.destination().buffer_len(width, height).unwrap();

        let mut direct = vec![0u8; needed];
        let mut dispatched = vec![0u8; needed];
        converter(conversion)(&input, &mut direct, width, height).unwrap();
        convert(conversion, &input, &mut dispatched, width, height).unwrap();

        assert_eq!(direct, dispatched, "{conversion:?}");
    }
}

#[test]
fn width_and_height_only_matter_through_their_product() {
    let input = gradient(PixelFormat::Rgba8, 24, 1);
    let mut wide = vec![0u8; 24 * 2];
    let mut tall = vec![0u8; 24 * 2];
    convert_rgba8_to_la88(&input, &mut wide, 24, 1).unwrap();
    convert_rgba8_to_la88(&input, &mut tall, 4, 6).unwrap();
    assert_eq!(wide, tall);
}

#[test]
fn independent_buffers_convert_concurrently() {
    let (width, height) = (64, 64);
    let input = gradient(PixelFormat::Rgba8, width, height);
    let mut expected = vec![0u8; width * height * 2];
    convert_rgba8_to_rgb565(&input, &mut expected, width, height).unwrap();

    let mut outputs = vec![vec![0u8; expected.len()]; 4];
    std::thread::scope(|scope| {
        for output in outputs.iter_mut() {
            let input = &input;
            scope.spawn(move || convert_rgba8_to_rgb565(input, output, width, height).unwrap());
        }
    });

    for output in &outputs {
        assert_eq!(output, &expected);
    }
}
