use super::{for_each_kmer, forward_interval, KmerIndex, Match, Scanner};
use crate::sequence::Sequence;
use std::sync::Arc;

/// Flags k-mers shared with the host genome on either strand; such stretches
/// risk homologous recombination with the chromosome.
pub struct GlobalRepeatScanner {
    index: Arc<KmerIndex>,
}

impl GlobalRepeatScanner {
    pub fn new(index: Arc<KmerIndex>) -> Self {
        Self { index }
    }
}

impl Scanner for GlobalRepeatScanner {
    fn name(&self) -> &'static str {
        "global-repeat"
    }

    fn scan(&self, seq: &Sequence) -> Vec<Match> {
        let k = self.index.k();
        let mut matches = Vec::new();

        for_each_kmer(seq.as_bytes(), k, |pos, code| {
            if self.index.contains_code(code) {
                matches.push(Match::new(
                    pos,
                    pos + k - 1,
                    format!(
                        "Global repeat of {} bp with host genome: {}",
                        k,
                        &seq.as_str()[pos..pos + k]
                    ),
                ));
            }
        });

        let reverse = seq.reverse_complement();
        for_each_kmer(reverse.as_bytes(), k, |pos, code| {
            if self.index.contains_code(code) {
                let (start, end) = forward_interval(seq.len(), pos, k);
                matches.push(Match::new(
                    start,
                    end,
                    format!(
                        "Global repeat of {} bp with host genome (reverse strand): {}",
                        k,
                        &reverse.as_str()[pos..pos + k]
                    ),
                ));
            }
        });

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENOME: &str = "TTGACAGCTAGCTCAGTCCTAGGTATAATGCTAGCACTAGTGAAAGAGGAGAAA";

    fn scanner(k: usize) -> GlobalRepeatScanner {
        GlobalRepeatScanner::new(Arc::new(KmerIndex::build(GENOME, k).unwrap()))
    }

    #[test]
    fn copied_genome_kmer_is_reported() {
        let kmer = &GENOME[10..30];
        let seq = Sequence::new(&format!("TTTTTTTT{}GGGGGGGG", kmer)).unwrap();
        let matches = scanner(20).scan(&seq);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end), (8, 27));
    }

    #[test]
    fn reverse_complement_copy_is_reported_in_forward_coordinates() {
        let kmer = Sequence::new(&GENOME[5..25]).unwrap().reverse_complement();
        let seq = Sequence::new(&format!("GGGG{}", kmer)).unwrap();
        let matches = scanner(20).scan(&seq);
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].start, matches[0].end), (4, 23));
        assert!(matches[0].description.contains("reverse strand"));
    }

    #[test]
    fn unrelated_sequence_is_clean() {
        let seq = Sequence::new(&"CA".repeat(30)).unwrap();
        assert!(scanner(20).scan(&seq).is_empty());
    }

    #[test]
    fn sequence_shorter_than_k_is_clean() {
        let seq = Sequence::new(&GENOME[0..19]).unwrap();
        assert!(scanner(20).scan(&seq).is_empty());
    }
}
