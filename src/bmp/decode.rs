//! Decoder for the 24-bit uncompressed BMP subset.

use super::{PIXEL_DATA_OFFSET, row_stride};
use crate::error::ConvertError;
use crate::limits::Limits;
use crate::pixel::{BLACK, Image};

/// Decode a BMP image from memory.
pub fn decode(data: &[u8]) -> Result<Image, ConvertError> {
    decode_with_limits(data, &Limits::default())
}

/// Decode a BMP image from memory, checking `limits` before the pixel
/// buffer is allocated.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, ConvertError> {
    let (width, height) = parse_header(data)?;
    limits.check_dimensions(width, height)?;
    limits.check_memory(
        u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(4),
    )?;

    let stride = row_stride(width).ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let pixel_bytes = stride
        .checked_mul(height as usize)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let end = PIXEL_DATA_OFFSET
        .checked_add(pixel_bytes)
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    // Require the whole pixel array up front so the allocation below is
    // bounded by the input size.
    if data.len() < end {
        return Err(ConvertError::UnexpectedEof);
    }

    let mut image = Image::new(width, height, BLACK);
    // Rows are stored bottom-up: the first row on disk is the last row of
    // the image.
    for (i, disk_row) in data[PIXEL_DATA_OFFSET..end].chunks_exact(stride).enumerate() {
        let row = image.row_mut(height - 1 - i as u32);
        for (px, src) in row.iter_mut().zip(disk_row.chunks_exact(3)) {
            px.b = src[0];
            px.g = src[1];
            px.r = src[2];
        }
    }
    Ok(image)
}

/// Validate the two headers and pull out the dimensions.
///
/// Only the fields that decide whether the pixel data is decodable are
/// checked: magic, bit depth, compression, and dimensions. File size,
/// data offset, planes, resolution, and color counts vary between
/// encoders and are ignored.
fn parse_header(data: &[u8]) -> Result<(u32, u32), ConvertError> {
    if data.len() < 2 {
        return Err(ConvertError::UnexpectedEof);
    }
    if &data[..2] != b"BM" {
        return Err(ConvertError::UnrecognizedFormat);
    }
    if data.len() < PIXEL_DATA_OFFSET {
        return Err(ConvertError::UnexpectedEof);
    }

    let bpp = u16_at(data, 28);
    if bpp != 24 {
        return Err(ConvertError::UnsupportedVariant(format!(
            "bit depth {bpp}, only 24-bit BMP is supported"
        )));
    }
    let compression = u32_at(data, 30);
    if compression != 0 {
        return Err(ConvertError::UnsupportedVariant(format!(
            "compression scheme {compression}, only uncompressed BMP is supported"
        )));
    }

    let width = i32_at(data, 18);
    let height = i32_at(data, 22);
    if width <= 0 || height <= 0 {
        return Err(ConvertError::InvalidHeader(format!(
            "dimensions {width}x{height} out of range"
        )));
    }

    Ok((width as u32, height as u32))
}

fn u16_at(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn u32_at(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn i32_at(data: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}
