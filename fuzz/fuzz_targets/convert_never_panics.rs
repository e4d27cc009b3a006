#![no_main]

// Feeds arbitrary format pairs, dimensions and buffer sizes through the safe API. Every call
// must either succeed or return an error; it must never panic or touch bytes past the
// destination image.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_format_convert::{convert_formats, PixelFormat};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Request {
    pub from_index: u8,
    pub to_index: u8,
    pub width: u16,
    pub height: u16,
    pub output_len: u16,
    pub input: Vec<u8>,
}

const SENTINEL: u8 = 0xCD;

fuzz_target!(|request: Request| {
    let formats = PixelFormat::all_values();
    let from = formats[request.from_index as usize % formats.len()];
    let to = formats[request.to_index as usize % formats.len()];
    let width = request.width as usize;
    let height = request.height as usize;

    let mut output = vec![SENTINEL; request.output_len as usize];
    let result = convert_formats(from, to, &request.input, &mut output, width, height);

    let written = match result {
        Ok(()) => to.buffer_len(width, height).unwrap(),
        Err(_) => 0,
    };
    assert!(
        output[written..].iter().all(|&b| b == SENTINEL),
        "{from:?} -> {to:?} ({width}x{height}) wrote past {written} bytes, result {result:?}"
    );
});
