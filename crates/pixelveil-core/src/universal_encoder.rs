use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Cursor, Result, Write};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier color channel
    fn encode(&self, carrier: u8, information: &Result<bool>) -> u8;
}

/// Generic encoder that hides a byte stream in a carrier, one bit per
/// carrier channel.
///
/// Message bytes are consumed most significant bit first, so the first
/// channel visited receives bit 7 of the first byte.
pub struct Encoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Encoder { input, algorithm }
    }
}

impl<'c, I, A> Write for Encoder<I, A>
where
    I: Iterator<Item = &'c mut u8>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        // 1 bit per channel
        let items_to_take = buf.len() << 3;
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut bits_written = 0;
        for channel in self.input.by_ref().take(items_to_take) {
            *channel = self.algorithm.encode(*channel, &bit_iter.read_bit());
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// default 1 bit hiding strategy
pub struct OneBitHide;
impl HideAlgorithm for OneBitHide {
    #[inline(always)]
    fn encode(&self, carrier: u8, information: &Result<bool>) -> u8 {
        match information {
            Err(_) => carrier,
            Ok(bit) => (carrier & (u8::MAX - 1)) | if *bit { 1 } else { 0 },
        }
    }
}
