use super::{forward_interval, Match, MotifCatalog, Scanner};
use crate::sequence::Sequence;
use crate::utils::DesignError;
use aho_corasick::AhoCorasick;

/// Reports every occurrence of every catalog motif on both strands, overlapping
/// occurrences included.
pub struct ForbiddenSequenceScanner {
    catalog: MotifCatalog,
    automaton: AhoCorasick,
}

impl ForbiddenSequenceScanner {
    pub fn new(catalog: MotifCatalog) -> Result<Self, DesignError> {
        if catalog.iter().any(|m| m.seq.is_empty()) {
            return Err(DesignError::Config(
                "forbidden motifs must not be empty".to_string(),
            ));
        }
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(catalog.iter().map(|m| m.seq.as_bytes()))
            .map_err(|e| DesignError::Config(format!("cannot compile motif catalog: {}", e)))?;
        Ok(Self { catalog, automaton })
    }

    pub fn catalog(&self) -> &MotifCatalog {
        &self.catalog
    }
}

impl Scanner for ForbiddenSequenceScanner {
    fn name(&self) -> &'static str {
        "forbidden-sequence"
    }

    fn scan(&self, seq: &Sequence) -> Vec<Match> {
        let motifs: Vec<_> = self.catalog.iter().collect();
        let mut matches = Vec::new();

        for hit in self.automaton.find_overlapping_iter(seq.as_bytes()) {
            let motif = motifs[hit.pattern().as_usize()];
            matches.push(Match::new(
                hit.start(),
                hit.end() - 1,
                format!("Forbidden sequence | {} ({})", motif.seq, motif.name),
            ));
        }

        let reverse = seq.reverse_complement();
        for hit in self.automaton.find_overlapping_iter(reverse.as_bytes()) {
            let motif = motifs[hit.pattern().as_usize()];
            let (start, end) = forward_interval(seq.len(), hit.start(), hit.len());
            matches.push(Match::new(
                start,
                end,
                format!(
                    "Forbidden sequence | {} ({}, reverse strand)",
                    motif.seq, motif.name
                ),
            ));
        }

        matches
    }
}
