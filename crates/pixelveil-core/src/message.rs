use std::io::{ErrorKind, Read};
use std::slice;

use crate::error::PixelveilError;
use crate::result::Result;

/// Zero byte appended after the payload; marks end-of-message for the
/// extractor and is never part of the message itself.
pub const TERMINATOR: u8 = 0;

/// A text payload in the single-byte message serialization format:
/// message bytes followed by exactly one [`TERMINATOR`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    /// Creates a new message with the given text.
    ///
    /// Every character must fit into a single byte (U+0001 up to U+00FF).
    /// NUL is rejected as well, it would collide with the terminator and
    /// truncate the message on extraction.
    pub fn new(text: &str) -> Result<Self> {
        if let Some(ch) = text.chars().find(|&c| c == '\0' || (c as u32) > 0xFF) {
            return Err(PixelveilError::MalformedMessage { ch });
        }

        Ok(Self {
            text: text.to_owned(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Serializes the message: payload bytes plus the trailing terminator.
    pub fn to_raw_data(&self) -> Vec<u8> {
        let mut data: Vec<u8> = self.text.chars().map(|c| c as u8).collect();
        data.push(TERMINATOR);
        data
    }

    /// Reads a message back from its serialized form.
    ///
    /// Pulls one byte at a time and stops at the first terminator byte.
    /// Running out of input before a terminator shows up is not an error:
    /// the message legitimately filled the whole carrier, so everything
    /// accumulated up to that point is the message.
    pub fn from_raw_data(dec: &mut dyn Read) -> Result<Self> {
        let mut text = String::new();
        let mut byte = 0_u8;
        loop {
            match dec.read(slice::from_mut(&mut byte)) {
                Ok(0) => break,
                Ok(..) => {
                    if byte == TERMINATOR {
                        break;
                    }
                    text.push(char::from(byte));
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(PixelveilError::ReadError { source: e }),
            }
        }

        Ok(Self { text })
    }
}
