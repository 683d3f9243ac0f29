use crate::utils::DesignError;
use std::collections::HashSet;

pub const MAX_KMER_LEN: usize = 32;

#[inline]
fn encode_base(base: u8) -> Option<u64> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' => Some(3),
        _ => None,
    }
}

/// Calls `f(position, code)` for every window of `k` valid bases in `seq`,
/// packing two bits per base. Windows spanning a non-ACGT base are skipped.
pub(crate) fn for_each_kmer(seq: &[u8], k: usize, mut f: impl FnMut(usize, u64)) {
    let mask = if k == MAX_KMER_LEN {
        u64::MAX
    } else {
        (1u64 << (2 * k)) - 1
    };
    let mut code = 0u64;
    let mut valid = 0;
    for (pos, &base) in seq.iter().enumerate() {
        match encode_base(base) {
            Some(bits) => {
                code = ((code << 2) | bits) & mask;
                valid += 1;
            }
            None => {
                valid = 0;
                code = 0;
            }
        }
        if valid >= k {
            f(pos + 1 - k, code);
        }
    }
}

/// Set of every k-mer of a reference genome, case-insensitive.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    k: usize,
    kmers: HashSet<u64>,
}

impl KmerIndex {
    pub fn new(k: usize) -> Result<Self, DesignError> {
        if k == 0 || k > MAX_KMER_LEN {
            return Err(DesignError::Config(format!(
                "k-mer length must be between 1 and {}, got {}",
                MAX_KMER_LEN, k
            )));
        }
        Ok(Self {
            k,
            kmers: HashSet::new(),
        })
    }

    pub fn build(genome: &str, k: usize) -> Result<Self, DesignError> {
        Self::from_sequences(k, std::iter::once(genome.as_bytes()))
    }

    /// Indexes each sequence separately so no k-mer spans two records.
    pub fn from_sequences<'a>(
        k: usize,
        sequences: impl IntoIterator<Item = &'a [u8]>,
    ) -> Result<Self, DesignError> {
        let mut index = Self::new(k)?;
        for seq in sequences {
            for_each_kmer(seq, k, |_, code| {
                index.kmers.insert(code);
            });
        }
        Ok(index)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.kmers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kmers.is_empty()
    }

    pub fn contains(&self, kmer: &str) -> bool {
        if kmer.len() != self.k {
            return false;
        }
        let mut found = false;
        for_each_kmer(kmer.as_bytes(), self.k, |_, code| {
            found = self.kmers.contains(&code);
        });
        found
    }

    pub(crate) fn contains_code(&self, code: u64) -> bool {
        self.kmers.contains(&code)
    }
}
