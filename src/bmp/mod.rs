//! Uncompressed 24-bit BMP codec.
//!
//! Reads and writes the classic Windows layout: 14-byte file header,
//! 40-byte BITMAPINFOHEADER, then bottom-up rows of B,G,R triples with
//! each row padded to a 4-byte boundary. Palettes, compression, and other
//! bit depths are out of scope and rejected on decode.

mod decode;
mod encode;

pub use decode::{decode, decode_with_limits};
pub use encode::encode;

use std::path::Path;

use crate::error::ConvertError;
use crate::pixel::Image;

pub(crate) const FILE_HEADER_SIZE: usize = 14;
pub(crate) const INFO_HEADER_SIZE: usize = 40;

/// Byte offset of the pixel array in every file this codec touches.
pub(crate) const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Bytes per row on disk: 3 bytes per pixel, rounded up to a multiple of 4.
///
/// `None` when the computation overflows `usize`.
pub(crate) fn row_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

/// Read and decode a BMP file.
pub fn load(path: impl AsRef<Path>) -> Result<Image, ConvertError> {
    let data = std::fs::read(path)?;
    decode(&data)
}

/// Encode `image` and write it to `path`.
pub fn save(path: impl AsRef<Path>, image: &Image) -> Result<(), ConvertError> {
    let data = encode(image)?;
    std::fs::write(path, data)?;
    Ok(())
}
