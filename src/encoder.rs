//! The LZW encoder. It extends the current match greedily and, when the match
//! can't be extended, emits the code of the match and defines a new entry.

use std::io::Read;

use crate::bitbuffer::BitBuffer;
use crate::dictionary::Dictionary;
use crate::utils::constants::{
    CHUNK_SIZE, INITIAL_CODE_SIZE, MAX_BITS, MAX_CODE,
};
use crate::{Code, Encoder, Error};

/// The state of a single encoding pass.
pub struct EncoderState {
    /// The code of the longest string that was matched so far.
    prefix: Option<Code>,
    /// The width of the next code that is written.
    code_size: u32,
    /// The dictionary, with the reverse index.
    dict: Dictionary,
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderState {
    pub fn new() -> Self {
        Self {
            prefix: None,
            code_size: INITIAL_CODE_SIZE,
            dict: Dictionary::with_lookup(),
        }
    }

    /// Process one input byte and write any finished code into 'bv'.
    pub fn push_byte(&mut self, c: u8, bv: &mut BitBuffer) {
        if let Some(code) = self.dict.lookup(self.prefix, c) {
            self.prefix = Some(code);
            return;
        }

        if let Some(prefix) = self.prefix {
            bv.write_code(prefix, self.code_size);
        }

        let next_code = self.dict.next_code();
        if next_code < MAX_CODE {
            self.dict.append(self.prefix, c);
            let next_code = next_code + 1;
            if next_code == 1 << self.code_size && self.code_size < MAX_BITS {
                self.code_size += 1;
                log::trace!("Code size grew to {} bits", self.code_size);
            }
            if next_code == MAX_CODE {
                log::debug!("The dictionary is full");
            }
        }
        self.prefix = Some(c as Code);
    }

    /// Process a chunk of input bytes.
    pub fn push_bytes(&mut self, input: &[u8], bv: &mut BitBuffer) {
        for &c in input {
            self.push_byte(c, bv);
        }
    }

    /// Write the code of the last match and flush the trailing bits.
    pub fn finish(&mut self, bv: &mut BitBuffer) {
        if let Some(prefix) = self.prefix.take() {
            bv.write_code(prefix, self.code_size);
        }
        bv.flush();
    }

    /// Returns the width of the next code that will be written.
    pub fn code_size(&self) -> u32 {
        self.code_size
    }

    /// Returns the code that the next new entry will receive.
    pub fn next_code(&self) -> Code {
        self.dict.next_code()
    }
}

/// Encodes a whole buffer into a packed LZW code stream.
pub struct LzwEncoder<'a> {
    /// The uncompressed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> LzwEncoder<'a> {
    fn encode_impl(&mut self) -> usize {
        let mut state = EncoderState::new();
        let mut bv = BitBuffer::new();
        state.push_bytes(self.input, &mut bv);
        state.finish(&mut bv);

        let written = bv.len();
        log::debug!(
            "Encoded {} bytes into {} bytes with {} codes defined",
            self.input.len(),
            written,
            state.next_code()
        );
        self.output.extend(bv.take_output());
        written
    }
}

impl<'a> Encoder<'a> for LzwEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn encode(&mut self) -> Result<usize, Error> {
        Ok(self.encode_impl())
    }
}

/// Encode everything that 'reader' produces, reading it in fixed size chunks.
pub fn encode_stream<R: Read>(mut reader: R) -> Result<Vec<u8>, Error> {
    let mut state = EncoderState::new();
    let mut bv = BitBuffer::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut read = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Encoding(e)),
        };
        state.push_bytes(&buf[..n], &mut bv);
        read += n;
    }

    state.finish(&mut bv);
    log::debug!("Encoded {} bytes into {} bytes", read, bv.len());
    Ok(bv.take_output())
}
