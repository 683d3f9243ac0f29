//! NCBI translation table 11 (bacterial, archaeal and plant plastid code).

const AMINO_ACIDS: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const BASE_ORDER: [u8; 4] = [b'T', b'C', b'A', b'G'];

pub const STOP: char = '*';

fn base_index(base: u8) -> Option<usize> {
    BASE_ORDER
        .iter()
        .position(|&b| b == base.to_ascii_uppercase())
}

/// Index of a codon in the table, or `None` if it is not a valid triplet.
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [a, b, c] => Some(base_index(*a)? * 16 + base_index(*b)? * 4 + base_index(*c)?),
        _ => None,
    }
}

pub fn codon_at(index: usize) -> [u8; 3] {
    [
        BASE_ORDER[index / 16],
        BASE_ORDER[(index / 4) % 4],
        BASE_ORDER[index % 4],
    ]
}

pub fn amino_acid(index: usize) -> char {
    AMINO_ACIDS[index] as char
}

pub fn is_amino_acid(residue: char) -> bool {
    residue.is_ascii() && AMINO_ACIDS.contains(&(residue as u8))
}
