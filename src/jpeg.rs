//! JPEG codec, delegated to the `image` crate.
//!
//! Decoding accepts whatever baseline/progressive JPEG the backend
//! handles and normalizes the result to RGB (grayscale is replicated
//! across the channels). Encoding always writes 8-bit RGB at the
//! encoder's default quality.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
use image::{ColorType, ExtendedColorType, ImageDecoder as _};

use crate::error::ConvertError;
use crate::limits::Limits;
use crate::pixel::{BLACK, Image};

/// Decode a JPEG image from memory.
pub fn decode(data: &[u8]) -> Result<Image, ConvertError> {
    decode_with_limits(data, &Limits::default())
}

/// Decode a JPEG image from memory, checking `limits` against the header
/// dimensions before pixel data is read.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, ConvertError> {
    read_jpeg(JpegDecoder::new(Cursor::new(data))?, limits)
}

/// Read and decode a JPEG file.
pub fn load(path: impl AsRef<Path>) -> Result<Image, ConvertError> {
    let reader = BufReader::new(File::open(path)?);
    read_jpeg(JpegDecoder::new(reader)?, &Limits::default())
}

/// Encode `image` and write it to `path`.
pub fn save(path: impl AsRef<Path>, image: &Image) -> Result<(), ConvertError> {
    let data = encode(image)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Encode `image` as JPEG in memory.
///
/// Unlike the BMP and PPM encoders this rejects an empty image: JPEG has
/// no representation for zero dimensions.
pub fn encode(image: &Image) -> Result<Vec<u8>, ConvertError> {
    if image.is_empty() {
        return Err(ConvertError::EmptyImage);
    }

    let mut rgb = Vec::with_capacity(image.pixels().len() * 3);
    for px in image.pixels() {
        rgb.push(px.r);
        rgb.push(px.g);
        rgb.push(px.b);
    }

    let mut out = Vec::new();
    JpegEncoder::new(&mut out).encode(
        &rgb,
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

fn read_jpeg<R>(decoder: JpegDecoder<R>, limits: &Limits) -> Result<Image, ConvertError>
where
    R: BufRead + Seek,
{
    let (width, height) = decoder.dimensions();
    limits.check_dimensions(width, height)?;
    limits.check_memory(
        u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(4),
    )?;

    let color = decoder.color_type();
    let len = usize::try_from(decoder.total_bytes())
        .map_err(|_| ConvertError::DimensionsTooLarge { width, height })?;
    let mut buf = vec![0u8; len];
    decoder.read_image(&mut buf)?;

    let mut image = Image::new(width, height, BLACK);
    match color {
        ColorType::Rgb8 => {
            let row_bytes = width as usize * 3;
            for y in 0..height {
                let src = &buf[y as usize * row_bytes..][..row_bytes];
                for (px, rgb) in image.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
                    px.r = rgb[0];
                    px.g = rgb[1];
                    px.b = rgb[2];
                }
            }
        }
        ColorType::L8 => {
            let row_bytes = width as usize;
            for y in 0..height {
                let src = &buf[y as usize * row_bytes..][..row_bytes];
                for (px, &v) in image.row_mut(y).iter_mut().zip(src) {
                    px.r = v;
                    px.g = v;
                    px.b = v;
                }
            }
        }
        other => {
            return Err(ConvertError::UnsupportedVariant(format!(
                "JPEG decoded to {other:?}, expected 8-bit RGB or grayscale"
            )));
        }
    }
    Ok(image)
}
