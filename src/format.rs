//! Extension-based format detection and codec dispatch.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::ConvertError;
use crate::pixel::Image;
use crate::{bmp, jpeg, ppm};

/// The file formats this crate converts between.
///
/// A closed enum on purpose: adding a format is a source-level change,
/// and every dispatch `match` in this module stays exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Ppm,
    Bmp,
}

impl ImageFormat {
    /// Detect the format from the file extension.
    ///
    /// Matching is case-sensitive, so `photo.JPG` is not recognized.
    ///
    /// ```
    /// use imgconv::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_path("photo.jpeg"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_path("photo.JPG"), None);
    /// assert_eq!(ImageFormat::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<ImageFormat> {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("jpg" | "jpeg") => Some(ImageFormat::Jpeg),
            Some("ppm") => Some(ImageFormat::Ppm),
            Some("bmp") => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Load an image of this format from `path`.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Image, ConvertError> {
        let path = path.as_ref();
        log::debug!("loading {} as {self:?}", path.display());
        match self {
            ImageFormat::Jpeg => jpeg::load(path),
            ImageFormat::Ppm => ppm::load(path),
            ImageFormat::Bmp => bmp::load(path),
        }
    }

    /// Save `image` to `path` in this format.
    pub fn save(self, path: impl AsRef<Path>, image: &Image) -> Result<(), ConvertError> {
        let path = path.as_ref();
        log::debug!(
            "saving {}x{} image to {} as {self:?}",
            image.width(),
            image.height(),
            path.display()
        );
        match self {
            ImageFormat::Jpeg => jpeg::save(path, image),
            ImageFormat::Ppm => ppm::save(path, image),
            ImageFormat::Bmp => bmp::save(path, image),
        }
    }
}

/// Load an image, picking the codec from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<Image, ConvertError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).ok_or_else(|| unsupported(path))?;
    format.load(path)
}

/// Save an image, picking the codec from the file extension.
pub fn save(path: impl AsRef<Path>, image: &Image) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).ok_or_else(|| unsupported(path))?;
    format.save(path, image)
}

fn unsupported(path: &Path) -> ConvertError {
    ConvertError::UnsupportedFormat(path.display().to_string())
}
