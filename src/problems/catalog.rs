use crate::sequence::reverse_complement;
use crate::utils::DesignError;

/// Type IIS and rare-cutter sites used by the Golden Gate assembly standard.
/// Only the 5' literal is listed; the scanners also search the reverse strand.
pub const ASSEMBLY_SITES: [(&str, &str); 7] = [
    ("BsaI", "GGTCTC"),
    ("BbsI", "GAAGAC"),
    ("SapI", "GCTCTTC"),
    ("BsmBI", "CGTCTC"),
    ("BtgZI", "GCGATG"),
    ("AarI", "CACCTGC"),
    ("PmeI", "GTTTAAAC"),
];

/// Classic multiple-cloning-site enzymes.
pub const CLONING_SITES: [(&str, &str); 22] = [
    ("HindIII", "AAGCTT"),
    ("PstI", "CTGCAG"),
    ("XbaI", "TCTAGA"),
    ("BamHI", "GGATCC"),
    ("SmaI", "CCCGGG"),
    ("KpnI", "GGTACC"),
    ("SacI", "GAGCTC"),
    ("SalI", "GTCGAC"),
    ("EcoRI", "GAATTC"),
    ("SphI", "GCATGC"),
    ("AvrII", "CCTAGG"),
    ("SwaI", "ATTTAAAT"),
    ("AscI", "GGCGCGCC"),
    ("FseI", "GGCCGGCC"),
    ("PacI", "TTAATTAA"),
    ("SpeI", "ACTAGT"),
    ("NotI", "GCGGCCGC"),
    ("SanDI", "GGGACCC"),
    ("SanDI", "GGGTCCC"),
    ("BglII", "AGATCT"),
    ("XhoI", "CTCGAG"),
    ("ClaI", "ATCGAT"),
];

const MAX_HOMOPOLYMER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pub name: String,
    pub seq: String,
}

impl Motif {
    pub fn new(name: impl Into<String>, seq: &str) -> Self {
        Self {
            name: name.into(),
            seq: seq.to_ascii_uppercase(),
        }
    }
}

/// Insertion-ordered set of forbidden motifs. Catalogs are composed with
/// [`MotifCatalog::union`]; a motif sequence is stored at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifCatalog {
    motifs: Vec<Motif>,
}

impl MotifCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sites(sites: &[(&str, &str)]) -> Self {
        let mut catalog = Self::new();
        for (name, seq) in sites {
            catalog.insert(Motif::new(*name, seq));
        }
        catalog
    }

    pub fn assembly_sites() -> Self {
        Self::from_sites(&ASSEMBLY_SITES)
    }

    /// Assembly sites plus the literal of each site on the opposite strand.
    pub fn assembly_sites_both_orientations() -> Self {
        let mut catalog = Self::new();
        for (name, seq) in ASSEMBLY_SITES {
            catalog.insert(Motif::new(name, seq));
            let rev = String::from_utf8_lossy(&reverse_complement(seq.as_bytes())).into_owned();
            catalog.insert(Motif::new(format!("{} (reverse)", name), &rev));
        }
        catalog
    }

    pub fn cloning_sites() -> Self {
        Self::from_sites(&CLONING_SITES)
    }

    pub fn homopolymers(len: usize) -> Result<Self, DesignError> {
        if !(1..=MAX_HOMOPOLYMER_LEN).contains(&len) {
            return Err(DesignError::Config(format!(
                "homopolymer length must be between 1 and {}, got {}",
                MAX_HOMOPOLYMER_LEN, len
            )));
        }
        Ok(Self::homopolymers_unchecked(len))
    }

    pub(crate) fn homopolymers_unchecked(len: usize) -> Self {
        let mut catalog = Self::new();
        for base in ['A', 'C', 'G', 'T'] {
            let run = base.to_string().repeat(len);
            catalog.insert(Motif::new(format!("poly-{}", base), &run));
        }
        catalog
    }

    /// A/C runs that tend to recombine with the host; their complements are
    /// covered by the reverse-strand search.
    pub fn homology_runs() -> Self {
        Self::from_sites(&[("poly-A", "AAAAAA"), ("poly-C", "CCCCCC")])
    }

    /// Returns false if the motif sequence was already present.
    pub fn insert(&mut self, motif: Motif) -> bool {
        if self.contains(&motif.seq) {
            return false;
        }
        self.motifs.push(motif);
        true
    }

    pub fn union(&self, other: &MotifCatalog) -> MotifCatalog {
        let mut merged = self.clone();
        for motif in &other.motifs {
            merged.insert(motif.clone());
        }
        merged
    }

    pub fn contains(&self, seq: &str) -> bool {
        self.motifs.iter().any(|m| m.seq.eq_ignore_ascii_case(seq))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Motif> {
        self.motifs.iter()
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_order_and_drops_duplicates() {
        let left = MotifCatalog::from_sites(&[("BsaI", "GGTCTC"), ("EcoRI", "GAATTC")]);
        let right = MotifCatalog::from_sites(&[("EcoRI", "gaattc"), ("XhoI", "CTCGAG")]);
        let merged = left.union(&right);
        let seqs: Vec<&str> = merged.iter().map(|m| m.seq.as_str()).collect();
        assert_eq!(seqs, vec!["GGTCTC", "GAATTC", "CTCGAG"]);
    }

    #[test]
    fn homopolymers_cover_all_bases() {
        let catalog = MotifCatalog::homopolymers(5).unwrap();
        for run in ["AAAAA", "CCCCC", "GGGGG", "TTTTT"] {
            assert!(catalog.contains(run));
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn homopolymer_length_is_bounded() {
        assert!(matches!(
            MotifCatalog::homopolymers(0),
            Err(DesignError::Config(_))
        ));
        assert!(MotifCatalog::homopolymers(9).is_err());
    }

    #[test]
    fn both_orientations_adds_reverse_literals() {
        let catalog = MotifCatalog::assembly_sites_both_orientations();
        assert!(catalog.contains("GAGACC"));
        assert!(catalog.contains("GTCTTC"));
        // PmeI is its own reverse complement
        assert_eq!(catalog.len(), 13);
    }
}
