//! A bit buffer that packs variable width codes into bytes and unpacks them
//! again. Bits are ordered LSB-first, both within a code and within a byte.

use crate::Code;

/// The widest code that may be written or read in one call.
pub const MAX_WIDTH: u32 = 32;

#[derive(PartialEq, Debug, Default)]
pub struct BitBuffer {
    /// Bits that were not moved into 'bytes' yet, packed to the right
    /// [xxxxx543210]. Bits above 'count' are zero.
    bits: u64,
    /// The number of valid bits in 'bits'.
    count: u32,
    /// The packed output stream.
    bytes: Vec<u8>,
}

impl BitBuffer {
    pub fn new() -> BitBuffer {
        BitBuffer {
            bits: 0,
            count: 0,
            bytes: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.bits = 0;
        self.count = 0;
        self.bytes = Vec::new();
    }

    pub fn verify(&self) {
        // Bits above the pending count must be zero.
        debug_assert!(
            self.bits == Self::clear_upper_bits(self.bits, self.count)
        );
        debug_assert!(self.count <= 64 - 8, "Pending register overflow");
    }

    /// Set all of the bits above 'keep' to zero.
    pub fn clear_upper_bits(bits: u64, keep: u32) -> u64 {
        if keep == 0 {
            return 0;
        }
        let amt = 64 - keep;
        let shl = bits.overflowing_shl(amt).0;
        shl.overflowing_shr(amt).0
    }

    /// Write the lowest 'width' bits of 'code'. Higher bits are dropped.
    /// Complete bytes are moved into the output stream.
    pub fn write_code(&mut self, code: Code, width: u32) {
        debug_assert!(width <= MAX_WIDTH, "Writing too many bits");
        let code = Self::clear_upper_bits(code as u64, width);
        self.bits |= code << self.count;
        self.count += width;

        while self.count >= 8 {
            self.bytes.push(self.bits as u8);
            self.bits >>= 8;
            self.count -= 8;
        }
        self.verify();
    }

    /// Move the pending bits into a final byte, padded with zeros.
    pub fn flush(&mut self) {
        if self.count > 0 {
            self.bytes.push(self.bits as u8);
        }
        self.bits = 0;
        self.count = 0;
    }

    /// Add one byte of packed input above the pending bits.
    pub fn feed_byte(&mut self, byte: u8) {
        debug_assert!(self.count + 8 <= 64, "Feeding too many bits");
        self.bits |= (byte as u64) << self.count;
        self.count += 8;
    }

    /// Read 'width' bits, or return None if not enough bits are pending. This
    /// is the normal end-of-stream condition.
    #[must_use]
    pub fn read_code(&mut self, width: u32) -> Option<Code> {
        debug_assert!(width <= MAX_WIDTH, "Reading too many bits");
        if self.count < width {
            return None;
        }
        let code = Self::clear_upper_bits(self.bits, width);
        self.bits = self.bits.overflowing_shr(width).0;
        self.count -= width;
        Some(code as Code)
    }

    /// Returns the number of bits that are waiting to be written or read.
    #[must_use]
    pub fn pending_bits(&self) -> u32 {
        self.count
    }

    /// Returns the bytes that were completed so far.
    pub fn output(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the completed bytes and leave an empty output stream.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }

    /// Returns the number of completed bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
