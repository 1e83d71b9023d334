//! Encoder producing 24-bit uncompressed BMP.

use std::iter::repeat_n;

use super::{INFO_HEADER_SIZE, PIXEL_DATA_OFFSET, row_stride};
use crate::error::ConvertError;
use crate::pixel::Image;

/// 300 DPI expressed in pixels per meter.
const PIXELS_PER_METER: i32 = 11811;

/// Encode `image` as a 24-bit BMP file in memory.
///
/// An empty image encodes to a bare 54-byte header with zero dimensions.
pub fn encode(image: &Image) -> Result<Vec<u8>, ConvertError> {
    let width = image.width();
    let height = image.height();
    let too_large = || ConvertError::DimensionsTooLarge { width, height };

    // Dimensions and sizes are written as 32-bit header fields.
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(too_large());
    }
    let stride = row_stride(width).ok_or_else(too_large)?;
    let pixel_data_size = stride.checked_mul(height as usize).ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(PIXEL_DATA_OFFSET)
        .ok_or_else(too_large)?;
    if file_size > u32::MAX as usize {
        return Err(too_large());
    }

    let mut out = Vec::with_capacity(file_size);
    write_header(
        &mut out,
        file_size as u32,
        pixel_data_size as u32,
        width,
        height,
    );

    let pad = stride - width as usize * 3;
    // Bottom row first.
    for y in (0..height).rev() {
        for px in image.row(y) {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(repeat_n(0u8, pad));
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, file_size: u32, pixel_data_size: u32, width: u32, height: u32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes()); // horizontal, 300 DPI
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes()); // vertical
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0x1000000u32.to_le_bytes()); // important colors: all 2^24
}
