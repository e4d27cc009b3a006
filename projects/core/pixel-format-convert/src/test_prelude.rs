//! Common test imports and utilities
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::format::{Conversion, PixelFormat};
pub use crate::raw::ConvertFn;

// Standard library imports commonly used in tests
pub use std::{string::String, vec, vec::Vec};

use std::io;
use std::sync::{Arc, Mutex};

/// Generates `num_pixels` pixels of `format` with predictable, non-repeating byte values.
///
/// Byte `i` of the buffer is `i * 37 + 11` (wrapping), which exercises every bit position
/// of every channel within a few dozen pixels.
pub(crate) fn generate_test_pixels(format: PixelFormat, num_pixels: usize) -> Vec<u8> {
    (0..num_pixels * format.bytes_per_pixel())
        .map(|i| (i as u8).wrapping_mul(37).wrapping_add(11))
        .collect()
}

/// Straightforward per-pixel model of each conversion, written directly from the format
/// definitions and sharing no code with the kernels.
pub(crate) fn reference_convert(conversion: Conversion, input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    match conversion {
        Conversion::Rgba8ToRgb8 => {
            for px in input.chunks_exact(4) {
                output.extend_from_slice(&px[..3]);
            }
        }
        Conversion::Rgba8ToRgb565 => {
            for px in input.chunks_exact(4) {
                let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
                let word = ((((v & 0xFF) >> 3) << 11)
                    | ((((v >> 8) & 0xFF) >> 2) << 5)
                    | (((v >> 16) & 0xFF) >> 3)) as u16;
                output.extend_from_slice(&word.to_le_bytes());
            }
        }
        Conversion::Rgba8ToRgba4 => {
            for px in input.chunks_exact(4) {
                let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
                let word = ((((v & 0xFF) >> 4) << 12)
                    | ((((v >> 8) & 0xFF) >> 4) << 8)
                    | ((((v >> 16) & 0xFF) >> 4) << 4)
                    | (((v >> 24) & 0xFF) >> 4)) as u16;
                output.extend_from_slice(&word.to_le_bytes());
            }
        }
        Conversion::Rgba8ToLa88 => {
            for px in input.chunks_exact(4) {
                let l = 0.2126f32 * px[0] as f32
                    + 0.7152f32 * px[1] as f32
                    + 0.0722f32 * px[2] as f32;
                output.push(l as u8);
                output.push(px[3]);
            }
        }
        Conversion::Rgb565ToRgba5551 => {
            for px in input.chunks_exact(2) {
                let word = u16::from_le_bytes([px[0], px[1]]);
                output.extend_from_slice(&((word << 1) | 1).to_le_bytes());
            }
        }
    }
    output
}

/// Runs `kernel` for every pixel count in `0..=max_pixels`, with input and output placed at
/// an odd (unaligned) offset, and asserts it produces the same bytes as [`reference_convert`].
///
/// The output buffer carries a sentinel tail which must survive, proving the kernel writes
/// exactly `num_pixels * destination_bytes_per_pixel` bytes.
pub(crate) fn assert_kernel_matches_reference(
    kernel: ConvertFn,
    conversion: Conversion,
    max_pixels: usize,
) {
    const SENTINEL: u8 = 0xCD;
    let dst_bpp = conversion.destination().bytes_per_pixel();

    for num_pixels in 0..=max_pixels {
        let pixels = generate_test_pixels(conversion.source(), num_pixels);
        let expected = reference_convert(conversion, &pixels);

        // Offset by 1 byte to test unaligned access.
        let mut input = vec![0u8; pixels.len() + 1];
        input[1..].copy_from_slice(&pixels);
        let mut output = vec![SENTINEL; expected.len() + 1 + 8];

        unsafe {
            kernel(
                input.as_ptr().add(1),
                output.as_mut_ptr().add(1),
                num_pixels,
            )
        };

        let written = &output[1..1 + num_pixels * dst_bpp];
        assert_eq!(
            written,
            expected.as_slice(),
            "{conversion:?} kernel disagrees with reference for {num_pixels} pixels"
        );
        assert_eq!(output[0], SENTINEL, "{conversion:?} wrote before the output");
        assert!(
            output[1 + num_pixels * dst_bpp..].iter().all(|&b| b == SENTINEL),
            "{conversion:?} wrote past the end of the output for {num_pixels} pixels"
        );
    }
}

/// Runs `f` with a `DEBUG` level subscriber installed on this thread and returns everything
/// it logged, formatted as plain text.
pub(crate) fn capture_debug_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
