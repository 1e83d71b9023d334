//! P6 encoder.

use crate::error::ConvertError;
use crate::pixel::Image;

/// Encode `image` as binary PPM (P6, maxval 255).
///
/// An empty image encodes to a header announcing zero dimensions.
pub fn encode(image: &Image) -> Result<Vec<u8>, ConvertError> {
    let width = image.width();
    let height = image.height();
    let pixel_bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(ConvertError::DimensionsTooLarge { width, height })?;

    let header = format!("P6\n{width} {height}\n255\n");
    let mut out = Vec::with_capacity(header.len() + pixel_bytes);
    out.extend_from_slice(header.as_bytes());
    // Rows run top to bottom, samples R,G,B with no padding.
    for px in image.pixels() {
        out.push(px.r);
        out.push(px.g);
        out.push(px.b);
    }
    Ok(out)
}
