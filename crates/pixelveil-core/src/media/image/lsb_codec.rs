use super::decoder::ImageRgbColor;
use super::encoder::ImageRgbColorMut;
use crate::error::PixelveilError;
use crate::message::Message;
use crate::result::Result;
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

use image::RgbaImage;
use log::error;
use std::io::{Read, Write};

/// carrier channels per pixel, the alpha channel stays untouched
const CHANNELS_PER_PIXEL: usize = 3;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read
    pub fn decoder<'i>(input: &'i RgbaImage) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(ImageRgbColor::new(input), OneBitUnveil))
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(carrier: &'i mut RgbaImage) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(ImageRgbColorMut::new(carrier), OneBitHide))
    }
}

/// Number of message bits the image can carry: one bit per color channel.
pub fn capacity(image: &RgbaImage) -> usize {
    (image.width() as usize) * (image.height() as usize) * CHANNELS_PER_PIXEL
}

/// Hides `message` in a copy of `image` and returns the copy.
///
/// The input image is left untouched; use [`embed_into`] to mutate a carrier
/// in place. Fails with [`PixelveilError::CapacityExceeded`] before any pixel
/// is written when the message plus its terminator does not fit.
pub fn embed(image: &RgbaImage, message: &str) -> Result<RgbaImage> {
    let mut stego = image.clone();
    embed_into(&mut stego, message)?;
    Ok(stego)
}

/// Hides `message` directly in `image`.
///
/// Only the least significant bits of the first `8 * (len + 1)` color
/// channels change; every other bit of the image, alpha included, stays
/// bit-for-bit identical.
pub fn embed_into(image: &mut RgbaImage, message: &str) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PixelveilError::InvalidImage);
    }

    let payload = Message::new(message)?.to_raw_data();
    let required = payload.len() * 8;
    let available = capacity(image);
    if required > available {
        return Err(PixelveilError::CapacityExceeded {
            required,
            available,
        });
    }

    LsbCodec::encoder(image).write_all(&payload).map_err(|e| {
        error!("Error encoding image: {e}, kind {}", e.kind());

        match e.kind() {
            std::io::ErrorKind::WriteZero => PixelveilError::CapacityExceeded {
                required,
                available,
            },
            _ => PixelveilError::ImageEncodingError,
        }
    })
}

/// Recovers the message hidden in `image`.
///
/// Readonly over the image and stops at the first terminator byte, so only
/// the channels actually carrying the message are visited. A well-formed
/// image never fails here; a stream without terminator simply yields all
/// complete bytes up to the end of the image.
pub fn extract(image: &RgbaImage) -> Result<String> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PixelveilError::InvalidImage);
    }

    let mut decoder = LsbCodec::decoder(image);
    let message = Message::from_raw_data(&mut decoder)?;

    Ok(message.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_carrier;

    #[test]
    fn should_encode_and_decode_through_the_codec() {
        let mut carrier = prepare_carrier(16, 16);
        let secret_message = "Hello World!".as_bytes();

        {
            LsbCodec::encoder(&mut carrier)
                .write_all(secret_message)
                .expect("Cannot write to codec");
        }
        let mut buf = vec![0; secret_message.len()];
        LsbCodec::decoder(&carrier)
            .read_exact(&mut buf[..])
            .expect("Cannot read 12 bytes from codec");

        let msg = String::from_utf8(buf).expect("Cannot convert result to string");
        assert_eq!(msg, "Hello World!");
    }

    #[test]
    fn should_expose_one_bit_per_color_channel_as_capacity() {
        let carrier = prepare_carrier(8, 4);

        assert_eq!(capacity(&carrier), 8 * 4 * 3);
    }

    #[test]
    fn should_not_mutate_the_input_image_on_embed() {
        let carrier = prepare_carrier(8, 8);
        let untouched = carrier.clone();

        let stego = embed(&carrier, "secret").expect("Failed to embed");

        assert_eq!(carrier, untouched, "embed must work on a copy");
        assert_ne!(stego, untouched);
    }

    #[test]
    fn should_fail_fast_when_the_message_does_not_fit() {
        let mut carrier = prepare_carrier(2, 2);
        let untouched = carrier.clone();

        // 2x2 offers 12 bits, "ab" plus terminator needs 24
        let result = embed_into(&mut carrier, "ab");

        match result.unwrap_err() {
            PixelveilError::CapacityExceeded {
                required,
                available,
            } => {
                assert_eq!(required, 24);
                assert_eq!(available, 12);
            }
            e => panic!("Expected CapacityExceeded, got {e:?}"),
        }
        assert_eq!(carrier, untouched, "no pixel may change on failure");
    }

    #[test]
    fn should_reject_an_empty_image() {
        let empty = RgbaImage::new(0, 0);

        assert!(matches!(
            embed(&empty, "x").unwrap_err(),
            PixelveilError::InvalidImage
        ));
        assert!(matches!(
            extract(&empty).unwrap_err(),
            PixelveilError::InvalidImage
        ));
    }
}
