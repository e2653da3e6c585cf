//! # Pixelveil Core API
//!
//! Least-significant-bit steganography for text messages in lossless raster
//! images. A message is spread over the red, green and blue channels of the
//! carrier in row-major pixel order, one bit per channel, most significant
//! bit first, and closed with a single zero byte so the extractor knows
//! where to stop. Flipping the lowest bit moves a channel value by at most
//! one, which is invisible to the eye.
//!
//! The main entry points are
//! - [`embed`] / [`embed_into`] / [`extract`] for in-memory images
//! - [`api::hide`] and [`api::unveil`] for file-to-file operation
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image and read it back
//!
//! ```rust
//! use image::RgbaImage;
//! use pixelveil_core::{embed, extract};
//!
//! let carrier = RgbaImage::from_pixel(16, 16, image::Rgba([120, 130, 140, 255]));
//!
//! let stego = embed(&carrier, "Hello, World!").expect("carrier is large enough");
//! let message = extract(&stego).expect("stego image is well formed");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust,no_run
//! pixelveil_core::api::hide::prepare()
//!     .with_image("carrier.png")
//!     .with_message("Hello, World!")
//!     .with_output("stego.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = pixelveil_core::api::unveil::prepare()
//!     .from_secret_file("stego.png")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

pub mod message;
pub use message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

use std::path::Path;

pub use crate::error::PixelveilError;
pub use crate::media::image::lsb_codec::{capacity, embed, embed_into, extract};
pub use crate::media::image::LsbCodec;
pub use crate::media::Media;
pub use crate::result::Result;

/// persisting a media carrier to disk
pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}


#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, Rgba, RgbaImage};

    /// 4x6 image whose RGB channel values grow by one along the row-major
    /// channel walk: pixel (0,0) carries (0,1,2), pixel (1,0) carries
    /// (3,4,5) and so on. Alpha is pinned to 255.
    pub fn prepare_4x6_linear_growing_colors() -> RgbaImage {
        let mut img = ImageBuffer::new(4, 6);
        let mut i = 0;
        for y in 0..img.height() {
            for x in 0..img.width() {
                let pi = img.get_pixel_mut(x, y);
                *pi = Rgba([i, i + 1, i + 2, 255]);
                i += 3;
            }
        }

        img
    }

    /// Deterministic carrier with varied channel values; all channels are
    /// odd, so every zero message bit changes the image.
    pub fn prepare_carrier(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let v = (31 * x + 97 * y) as u8;
            Rgba([
                v | 1,
                v.wrapping_add(40) | 1,
                v.wrapping_add(80) | 1,
                200,
            ])
        })
    }
}
