use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{BufWriter, Read, Result};

/// generic unveil algorithm
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: u8) -> bool;
}

/// Generic decoder that reassembles a byte stream from a carrier, one bit
/// per carrier channel, most significant bit first.
///
/// Only complete bytes are reported to the caller; when the carrier runs out
/// in the middle of a byte, the trailing bits are dropped.
pub struct Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per channel
        let items_to_take = buf.len() << 3;
        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, BigEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            let bit = self.algorithm.decode(carrier);
            bit_buffer.write_bit(bit)?;
            bits_read += 1;
        }

        Ok(bits_read >> 3)
    }
}

/// default 1 bit unveil strategy
pub struct OneBitUnveil;
impl UnveilAlgorithm for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 0x1) > 0
    }
}
