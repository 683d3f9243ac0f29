use crate::utils::DesignError;
use std::fmt;

/// Validated, uppercase DNA over {A,C,G,T}.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(String);

impl Sequence {
    pub fn new(text: &str) -> Result<Self, DesignError> {
        let mut seq = String::with_capacity(text.len());
        for (position, base) in text.chars().enumerate() {
            match base.to_ascii_uppercase() {
                upper @ ('A' | 'C' | 'G' | 'T') => seq.push(upper),
                _ => return Err(DesignError::InvalidBase { position, base }),
            }
        }
        Ok(Sequence(seq))
    }

    /// Builds a sequence from bytes already known to be uppercase ACGT.
    pub(crate) fn from_valid_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(bytes.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
        // ASCII only, so always valid UTF-8
        Sequence(String::from_utf8(bytes).unwrap_or_default())
    }

    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Sequence>) -> Self {
        Sequence(parts.into_iter().map(|part| part.as_str()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reverse_complement(&self) -> Sequence {
        Sequence::from_valid_bytes(reverse_complement(self.as_bytes()))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&base| complement(base)).collect()
}
