//! # imgconv
//!
//! Convert raster images between JPEG, PPM, and BMP.
//!
//! Every image passes through one in-memory representation ([`Image`]:
//! 8-bit RGBA, row-major, top row first), so any supported input converts
//! to any supported output.
//!
//! ## Supported Formats
//!
//! - **BMP** — uncompressed 24-bit, decoded and encoded by this crate
//! - **PPM** — binary P6 with maxval 255
//! - **JPEG** — delegated to the [`image`] crate
//!
//! ## Non-Goals
//!
//! - BMP palettes, compression, or bit depths other than 24
//! - The wider PNM family (P1-P5, P7, PFM)
//! - Color management and metadata (EXIF, ICC)
//!
//! ## Usage
//!
//! Pick the codec from the file extension:
//!
//! ```no_run
//! let image = imgconv::load("input.jpg")?;
//! imgconv::save("output.bmp", &image)?;
//! # Ok::<(), imgconv::ConvertError>(())
//! ```
//!
//! Or name it explicitly:
//!
//! ```no_run
//! use imgconv::ImageFormat;
//!
//! let image = ImageFormat::Ppm.load("frame.ppm")?;
//! ImageFormat::Jpeg.save("frame.jpg", &image)?;
//! # Ok::<(), imgconv::ConvertError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod format;
mod limits;
mod pixel;

pub mod bmp;
pub mod jpeg;
pub mod ppm;

// Re-exports
pub use error::ConvertError;
pub use format::{ImageFormat, load, save};
pub use limits::Limits;
pub use pixel::{BLACK, Image, Pixel};
