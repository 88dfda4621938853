//! The LZW decoder. It rebuilds the encoder's dictionary in lockstep, one
//! entry behind, and expands each code back into the bytes it stands for.

use std::io::Read;

use crate::bitbuffer::BitBuffer;
use crate::dictionary::Dictionary;
use crate::utils::constants::{
    CHUNK_SIZE, INITIAL_CODE_SIZE, MAX_BITS, MAX_CODE,
};
use crate::{Code, Decoder, Error};

/// The state of a single decoding pass.
pub struct DecoderState {
    /// The previous code, or None before the first code was read.
    old_code: Option<Code>,
    /// The bytes of the previous code.
    old_string: Vec<u8>,
    /// The width of the next code to read.
    code_size: u32,
    /// The dictionary. The decoder never needs the reverse index.
    dict: Dictionary,
}

impl Default for DecoderState {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderState {
    pub fn new() -> Self {
        Self {
            old_code: None,
            old_string: Vec::new(),
            code_size: INITIAL_CODE_SIZE,
            dict: Dictionary::new(),
        }
    }

    /// Expand 'new_code' and append its bytes to 'output'.
    pub fn decode_code(
        &mut self,
        new_code: Code,
        output: &mut Vec<u8>,
    ) -> Result<(), Error> {
        let next_code = self.dict.next_code();

        let Some(old_code) = self.old_code else {
            // The first code in the stream is always a single byte, and only
            // single bytes are defined at this point.
            self.old_string.clear();
            self.dict.reconstruct(new_code, &mut self.old_string)?;
            output.extend_from_slice(&self.old_string);
            self.old_code = Some(new_code);
            return Ok(());
        };

        let mut current = Vec::with_capacity(self.old_string.len() + 1);
        if new_code == next_code && next_code < MAX_CODE {
            // The encoder used the entry right after defining it, so the
            // entry is the previous string followed by its own first byte.
            current.extend_from_slice(&self.old_string);
            current.push(self.old_string[0]);
        } else {
            self.dict.reconstruct(new_code, &mut current)?;
        }

        if next_code < MAX_CODE {
            self.dict.append(Some(old_code), current[0]);
            let next_code = next_code + 1;
            // The decoder defines each entry one code later than the encoder,
            // so it grows one entry earlier to read the same widths.
            if next_code + 1 == 1 << self.code_size && self.code_size < MAX_BITS
            {
                self.code_size += 1;
                log::trace!("Code size grew to {} bits", self.code_size);
            }
        }

        output.extend_from_slice(&current);
        self.old_code = Some(new_code);
        self.old_string = current;
        Ok(())
    }

    /// Decode all of the complete codes that are pending in 'bv'.
    pub fn drain(
        &mut self,
        bv: &mut BitBuffer,
        output: &mut Vec<u8>,
    ) -> Result<(), Error> {
        while let Some(code) = bv.read_code(self.code_size) {
            self.decode_code(code, output)?;
        }
        Ok(())
    }

    /// Feed a chunk of packed bytes and decode the codes that it completes.
    pub fn push_bytes(
        &mut self,
        input: &[u8],
        bv: &mut BitBuffer,
        output: &mut Vec<u8>,
    ) -> Result<(), Error> {
        for &byte in input {
            bv.feed_byte(byte);
            self.drain(bv, output)?;
        }
        Ok(())
    }

    /// Returns the width of the next code that will be read.
    pub fn code_size(&self) -> u32 {
        self.code_size
    }

    /// Returns the code that the next new entry will receive.
    pub fn next_code(&self) -> Code {
        self.dict.next_code()
    }
}

/// Decodes a packed LZW code stream.
pub struct LzwDecoder<'a> {
    /// The packed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
}

impl<'a> LzwDecoder<'a> {
    fn decode_impl(&mut self) -> Result<(usize, usize), Error> {
        let mut state = DecoderState::new();
        let mut bv = BitBuffer::new();
        let mut decoded = Vec::new();
        state.push_bytes(self.input, &mut bv, &mut decoded)?;

        // The bits that are left over are the zero padding of the last byte.
        log::debug!(
            "Decoded {} bytes into {} bytes, {} padding bits",
            self.input.len(),
            decoded.len(),
            bv.pending_bits()
        );
        let written = decoded.len();
        self.output.extend(decoded);
        Ok((self.input.len(), written))
    }
}

impl<'a> Decoder<'a> for LzwDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>) -> Self {
        Self { input, output }
    }

    fn decode(&mut self) -> Result<(usize, usize), Error> {
        self.decode_impl()
    }
}

/// Decode everything that 'reader' produces, reading it in fixed size chunks.
pub fn decode_stream<R: Read>(mut reader: R) -> Result<Vec<u8>, Error> {
    let mut state = DecoderState::new();
    let mut bv = BitBuffer::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut output = Vec::new();

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::Decoding(e)),
        };
        state.push_bytes(&buf[..n], &mut bv, &mut output)?;
    }

    log::debug!("Decoded {} bytes", output.len());
    Ok(output)
}
