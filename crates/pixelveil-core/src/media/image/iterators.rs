use image::buffer::{Pixels, PixelsMut};
use image::Pixel;
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// Lazy row-major walk over the color channels of an image.
///
/// Both the encoder and the decoder are built on this one iterator pair, so
/// the two halves of the codec cannot disagree on channel addressing: pixels
/// are visited row 0 left to right, then row 1, and within each pixel the
/// channels come in red, green, blue order. The alpha channel is skipped and
/// stays untouched.
pub(crate) struct ColorIter<'a, P: Pixel + 'a> {
    pixels: Pixels<'a, P>,
    colors: Option<Take<Iter<'a, P::Subpixel>>>,
    take: u8,
}

impl<'a, P: Pixel + 'a> ColorIter<'a, P> {
    pub fn from_pixels(mut pixels: Pixels<'a, P>, skip_alpha: bool) -> Self {
        let take: u8 = if skip_alpha { 3 } else { 4 };
        let colors = pixels
            .next()
            .map(|p| p.channels().iter().take(take as usize));
        Self {
            pixels,
            colors,
            take,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIter<'a, P> {
    type Item = &'a P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        match self.colors.as_mut().and_then(|colors| colors.next()) {
            Some(c) => Some(c),
            None => {
                self.colors = self
                    .pixels
                    .next()
                    .map(|p| p.channels().iter().take(self.take as usize));
                self.colors.as_mut().and_then(|colors| colors.next())
            }
        }
    }
}

/// Mutable counterpart of [`ColorIter`], same traversal order.
pub(crate) struct ColorIterMut<'a, P: Pixel + 'a> {
    pixels: PixelsMut<'a, P>,
    colors: Option<Take<IterMut<'a, P::Subpixel>>>,
    take: u8,
}

impl<'a, P: Pixel + 'a> ColorIterMut<'a, P> {
    pub fn from_pixels_mut(mut pixels: PixelsMut<'a, P>, skip_alpha: bool) -> Self {
        let take: u8 = if skip_alpha { 3 } else { 4 };
        let colors = pixels
            .next()
            .map(|p| p.channels_mut().iter_mut().take(take as usize));
        Self {
            pixels,
            colors,
            take,
        }
    }
}

impl<'a, P: Pixel + 'a> Iterator for ColorIterMut<'a, P> {
    type Item = &'a mut P::Subpixel;

    fn next(&mut self) -> Option<Self::Item> {
        match self.colors.as_mut().and_then(|colors| colors.next()) {
            Some(c) => Some(c),
            None => {
                self.colors = self
                    .pixels
                    .next()
                    .map(|p| p.channels_mut().iter_mut().take(self.take as usize));
                self.colors.as_mut().and_then(|colors| colors.next())
            }
        }
    }
}
