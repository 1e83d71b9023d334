use rgb::ComponentBytes as _;

/// A single pixel: 8-bit red, green, blue, and an alpha-like reserved
/// channel that BMP and PPM never persist.
pub type Pixel = rgb::RGBA8;

/// Fill color for freshly allocated images.
pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0, a: 255 };

/// An owned, row-major RGBA pixel grid.
///
/// Row 0 is the top row. On-disk row order (BMP stores rows bottom-up) is
/// a codec concern and never leaks into this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Allocate a `width` x `height` image with every pixel set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize` (only possible on
    /// 32-bit targets).
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        let count = (width as usize)
            .checked_mul(height as usize)
            .expect("pixel count overflows usize");
        Self {
            width,
            height,
            pixels: vec![fill; count],
        }
    }

    /// The zero-by-zero image with no storage.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read-only view of row `y` (exactly `width` pixels).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`. Row access outside the image is a caller
    /// bug, not a recoverable condition.
    pub fn row(&self, y: u32) -> &[Pixel] {
        assert!(y < self.height, "row {y} out of range");
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Mutable view of row `y` (exactly `width` pixels).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Pixel] {
        assert!(y < self.height, "row {y} out of range");
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // width 0 holds no pixels; keep the chunk size nonzero
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The pixel grid as raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    /// Borrow the grid as an [`imgref::ImgRef`].
    ///
    /// # Panics
    ///
    /// Panics if the image is empty; `imgref` views need a nonzero stride.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy the grid into an owned [`imgref::ImgVec`].
    ///
    /// # Panics
    ///
    /// Panics if the image is empty.
    pub fn to_imgvec(&self) -> imgref::ImgVec<Pixel> {
        imgref::ImgVec::new(
            self.pixels.clone(),
            self.width as usize,
            self.height as usize,
        )
    }
}
