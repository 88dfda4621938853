//! A variable-width LZW compressor. Codes start at 9 bits, grow up to 20 bits
//! as the dictionary fills, and are packed LSB-first into a raw byte stream
//! with no header.

pub mod bitbuffer;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod utils;

use std::io;
use thiserror::Error;

/// A dictionary code. Values 0..=255 always denote single bytes.
pub type Code = u32;

/// The errors that an encode or decode pass can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the raw input failed while encoding.
    #[error("error encoding: {0}")]
    Encoding(#[source] io::Error),
    /// Reading the packed input failed while decoding.
    #[error("error decoding: {0}")]
    Decoding(#[source] io::Error),
    /// The code stream referenced an entry that does not exist and is not the
    /// entry currently being defined.
    #[error("invalid code stream: code {code} with next code {next_code}")]
    InvalidCode { code: Code, next_code: Code },
    /// Writing the output artifact failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A trait that defines the interface for encoding buffers.
pub trait Encoder<'a> {
    /// Creates a new Encoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self;

    /// Encode the whole input buffer and return the number of bytes that were
    /// written into the output stream.
    fn encode(&mut self) -> Result<usize, Error>;
}

/// A trait that defines the interface for decoding buffers.
pub trait Decoder<'a> {
    /// Creates a new Decoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self;

    /// Try to decode the buffer 'input', and return the number of input bytes
    /// that were consumed followed by the number of bytes written.
    fn decode(&mut self) -> Result<(usize, usize), Error>;
}
