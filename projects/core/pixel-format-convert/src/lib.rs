#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod color_565;
pub mod color_8888;
pub mod layout;

/// Pointer based conversion kernels without validation.
pub mod raw;

mod dispatch;
mod error;
mod format;
mod safe;
mod unaligned_rw;

#[cfg(test)]
pub mod test_prelude;

pub use dispatch::{convert, convert_formats};
pub use error::ConvertError;
pub use format::{ColorModel, Conversion, PixelFormat};
pub use safe::{
    convert_rgb565_to_rgba5551, convert_rgb565_to_rgba5551_in_place, convert_rgba8_to_la88,
    convert_rgba8_to_rgb565, convert_rgba8_to_rgb8, convert_rgba8_to_rgba4,
};
