//! P6 decoder.

use crate::error::ConvertError;
use crate::limits::Limits;
use crate::pixel::{BLACK, Image};

/// Decode a binary PPM image from memory.
pub fn decode(data: &[u8]) -> Result<Image, ConvertError> {
    decode_with_limits(data, &Limits::default())
}

/// Decode a binary PPM image from memory, checking `limits` before the
/// pixel buffer is allocated.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Image, ConvertError> {
    let mut parser = Parser::new(data);
    parser.expect_magic()?;
    let width = parser.next_number()?;
    let height = parser.next_number()?;
    let maxval = parser.next_number()?;
    // Exactly one whitespace byte separates the maxval from the pixel
    // bytes; anything else would make the first sample ambiguous.
    parser.expect_single_whitespace()?;

    if maxval != 255 {
        return Err(ConvertError::UnsupportedVariant(format!(
            "maxval {maxval}, only 8-bit (255) PPM is supported"
        )));
    }
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidHeader(format!(
            "dimensions {width}x{height} out of range"
        )));
    }
    limits.check_dimensions(width, height)?;
    limits.check_memory(
        u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(4),
    )?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;
    let pixel_data = parser.rest();
    // Trailing bytes beyond width*height*3 are ignored.
    if pixel_data.len() < expected {
        return Err(ConvertError::UnexpectedEof);
    }

    let mut image = Image::new(width, height, BLACK);
    let row_bytes = width as usize * 3;
    for y in 0..height {
        let src = &pixel_data[y as usize * row_bytes..][..row_bytes];
        for (px, rgb) in image.row_mut(y).iter_mut().zip(src.chunks_exact(3)) {
            px.r = rgb[0];
            px.g = rgb[1];
            px.b = rgb[2];
        }
    }
    Ok(image)
}

struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn expect_magic(&mut self) -> Result<(), ConvertError> {
        if self.data.len() < 2 {
            return Err(ConvertError::UnexpectedEof);
        }
        let magic = &self.data[..2];
        if magic == b"P6" {
            self.pos = 2;
            return Ok(());
        }
        if magic[0] == b'P' && matches!(magic[1], b'1'..=b'5' | b'7' | b'f' | b'F') {
            return Err(ConvertError::UnsupportedVariant(format!(
                "PNM variant {}, only binary PPM (P6) is supported",
                String::from_utf8_lossy(magic)
            )));
        }
        Err(ConvertError::UnrecognizedFormat)
    }

    /// Skip whitespace and `#` comments (which run to end of line).
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn next_number(&mut self) -> Result<u32, ConvertError> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if self.pos == start {
            return if self.pos == self.data.len() {
                Err(ConvertError::UnexpectedEof)
            } else {
                Err(ConvertError::InvalidHeader(
                    "expected a decimal number".into(),
                ))
            };
        }
        let mut value: u32 = 0;
        for &b in &self.data[start..self.pos] {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or_else(|| ConvertError::InvalidHeader("header number too large".into()))?;
        }
        Ok(value)
    }

    fn expect_single_whitespace(&mut self) -> Result<(), ConvertError> {
        match self.data.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(ConvertError::InvalidHeader(
                "expected whitespace after maxval".into(),
            )),
            None => Err(ConvertError::UnexpectedEof),
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}
