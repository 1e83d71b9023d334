//! Binary PPM (P6) codec.
//!
//! Only 8-bit RGB with a maxval of 255 is read or written. The other PNM
//! magics (P1-P5, P7, Pf/PF) are recognized and rejected with a dedicated
//! error so callers can tell "not a PNM file" from "a PNM variant this
//! codec does not handle".

mod decode;
mod encode;

pub use decode::{decode, decode_with_limits};
pub use encode::encode;

use std::path::Path;

use crate::error::ConvertError;
use crate::pixel::Image;

/// Read and decode a PPM file.
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
