//! The adaptive LZW dictionary. Entries are stored in an arena indexed by
//! their code. Each entry points at the code of its prefix, so the strings
//! form a tree with parent links only.

use std::collections::HashMap;

use crate::utils::constants::FIRST_CODE;
use crate::{Code, Error};

/// A single dictionary entry: the string of 'prefix' followed by 'byte'.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Entry {
    /// The code of everything before the last byte, or None for roots.
    pub prefix: Option<Code>,
    /// The last byte of the string.
    pub byte: u8,
}

/// The reverse index from (prefix, byte) to the code of the concatenation.
pub type LookupIndex = HashMap<(Option<Code>, u8), Code>;

#[derive(Debug)]
pub struct Dictionary {
    /// All of the entries that were ever created, indexed by code.
    entries: Vec<Entry>,
    /// Maps (prefix, byte) to a code. Only the encoder needs it.
    lookup: Option<LookupIndex>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create a dictionary with the 256 single-byte entries.
    pub fn new() -> Self {
        let entries = (0..FIRST_CODE)
            .map(|i| Entry {
                prefix: None,
                byte: i as u8,
            })
            .collect();
        Self {
            entries,
            lookup: None,
        }
    }

    /// Create a dictionary together with the reverse lookup index, seeded
    /// with the single-byte entries.
    pub fn with_lookup() -> Self {
        let mut dict = Self::new();
        let lookup: LookupIndex =
            (0..FIRST_CODE).map(|i| ((None, i as u8), i)).collect();
        dict.lookup = Some(lookup);
        dict
    }

    /// Add the string 'prefix' + 'byte' at the next free code and return that
    /// code. The caller is responsible for the size limit.
    pub fn append(&mut self, prefix: Option<Code>, byte: u8) -> Code {
        let code = self.next_code();
        self.entries.push(Entry { prefix, byte });
        if let Some(lookup) = &mut self.lookup {
            lookup.insert((prefix, byte), code);
        }
        code
    }

    /// Find the code of the string 'prefix' + 'byte'.
    pub fn lookup(&self, prefix: Option<Code>, byte: u8) -> Option<Code> {
        self.lookup.as_ref()?.get(&(prefix, byte)).copied()
    }

    /// Append the string that 'code' represents to 'output'.
    pub fn reconstruct(
        &self,
        code: Code,
        output: &mut Vec<u8>,
    ) -> Result<(), Error> {
        let start = output.len();
        let mut cursor = Some(code);
        while let Some(code) = cursor {
            let Some(entry) = self.get(code) else {
                output.truncate(start);
                return Err(Error::InvalidCode {
                    code,
                    next_code: self.next_code(),
                });
            };
            output.push(entry.byte);
            cursor = entry.prefix;
        }
        // The chain was walked from the last byte to the first.
        output[start..].reverse();
        Ok(())
    }

    /// Return the first byte of the string that 'code' represents.
    pub fn first_byte(&self, code: Code) -> Option<u8> {
        let mut entry = self.get(code)?;
        while let Some(prefix) = entry.prefix {
            entry = self.get(prefix)?;
        }
        Some(entry.byte)
    }

    pub fn get(&self, code: Code) -> Option<&Entry> {
        self.entries.get(code as usize)
    }

    /// Returns the code that the next call to 'append' will assign.
    pub fn next_code(&self) -> Code {
        self.entries.len() as Code
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this dictionary maintains the reverse index.
    pub fn has_lookup(&self) -> bool {
        self.lookup.is_some()
    }
}

#[test]
fn test_reconstruct_chain() {
    let mut dict = Dictionary::new();
    let ab = dict.append(Some(b'A' as Code), b'B');
    let abc = dict.append(Some(ab), b'C');
    assert_eq!(ab, 256);
    assert_eq!(abc, 257);

    let mut out = vec![b'>'];
    dict.reconstruct(abc, &mut out).unwrap();
    assert_eq!(out, b">ABC");
    assert_eq!(dict.first_byte(abc), Some(b'A'));
}
