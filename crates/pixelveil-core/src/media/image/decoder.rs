use crate::media::image::iterators::ColorIter;
use image::{Rgba, RgbaImage};

/// Readonly carrier source for image files, based on `RgbaImage` by the `image` crate.
///
/// Yields the red, green and blue channel of every pixel in row-major order;
/// the alpha channel carries no data and is skipped.
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use pixelveil_core::media::image::decoder::ImageRgbColor;
///
/// let image = RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
/// let channels: Vec<u8> = ImageRgbColor::new(&image).collect();
///
/// assert_eq!(channels, vec![10, 20, 30, 10, 20, 30]);
/// ```
pub struct ImageRgbColor<'i> {
    pixel: ColorIter<'i, Rgba<u8>>,
}

impl<'i> ImageRgbColor<'i> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'i RgbaImage) -> Self {
        Self {
            pixel: ColorIter::from_pixels(input.pixels(), true),
        }
    }
}

/// iterates over the image and returns the single color channels of each pixel
impl Iterator for ImageRgbColor<'_> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixel.next().copied()
    }
}
