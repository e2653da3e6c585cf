use std::fs::File;
use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::PixelveilError;
use crate::media::image::lsb_codec;
use crate::message::Message;
use crate::result::Result;
use crate::Persist;

/// A lossless raster carrier for steganography.
///
/// Lossy formats are refused up front: re-encoding after lossy compression
/// scrambles the least significant bits and with them the hidden data.
#[derive(Debug)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(PixelveilError::UnsupportedMedia);
        };

        match ext.to_lowercase().as_str() {
            "png" | "bmp" | "tif" | "tiff" => Ok(Self {
                image: image::open(f)
                    .map_err(|_e| PixelveilError::InvalidImageMedia)?
                    .to_rgba8(),
            }),
            "jpg" | "jpeg" | "webp" => Err(PixelveilError::LossyMedia),
            _ => Err(PixelveilError::UnsupportedMedia),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn hide_message(&mut self, message: &Message) -> Result<&mut Self> {
        lsb_codec::embed_into(&mut self.image, &message.text)?;

        Ok(self)
    }

    pub fn unveil_message(&self) -> Result<Message> {
        let text = lsb_codec::extract(&self.image)?;

        Ok(Message { text })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelveilError::WriteError { source: e }
        })?;

        self.image
            .write_to(&mut f, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixelveilError::ImageEncodingError
            })
    }
}
