use crate::media::image::iterators::ColorIterMut;
use image::{Rgba, RgbaImage};

/// Mutable carrier source for image files, based on `RgbaImage` by the `image` crate.
///
/// Same traversal as [`super::decoder::ImageRgbColor`]: red, green and blue of
/// every pixel in row-major order, alpha untouched.
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use pixelveil_core::media::image::encoder::ImageRgbColorMut;
///
/// let mut image = RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
/// {
///     let mut carrier = ImageRgbColorMut::new(&mut image);
///     *carrier.next().unwrap() = 11;
/// }
/// assert_eq!(image.get_pixel(0, 0).0, [11, 20, 30, 255]);
/// ```
pub struct ImageRgbColorMut<'a> {
    pixel: ColorIterMut<'a, Rgba<u8>>,
}

impl<'a> ImageRgbColorMut<'a> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'a mut RgbaImage) -> Self {
        Self {
            pixel: ColorIterMut::from_pixels_mut(input.pixels_mut(), true),
        }
    }
}

impl<'i> Iterator for ImageRgbColorMut<'i> {
    type Item = &'i mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.pixel.next()
    }
}
