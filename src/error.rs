/// Errors from image decoding, encoding, and format dispatch.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("unrecognized file extension: {0}")]
    UnsupportedFormat(String),

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("cannot encode an empty image")]
    EmptyImage,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("jpeg codec: {0}")]
    Jpeg(#[from] image::ImageError),
}
