use super::{Match, Scanner};
use crate::sequence::Sequence;
use crate::utils::DesignError;

/// Predicts hairpins by looking for each `stem_len` word in the reverse
/// complement of the `window` bases that follow it. This is a complementarity
/// heuristic, not a folding model.
pub struct HairpinScanner {
    stem_len: usize,
    window: usize,
}

impl HairpinScanner {
    pub fn new(stem_len: usize, window: usize) -> Result<Self, DesignError> {
        if stem_len == 0 {
            return Err(DesignError::Config(
                "hairpin stem length must be at least 1".to_string(),
            ));
        }
        if window <= stem_len {
            return Err(DesignError::Config(format!(
                "hairpin window ({}) must be larger than the stem length ({})",
                window, stem_len
            )));
        }
        Ok(Self { stem_len, window })
    }
}

impl Scanner for HairpinScanner {
    fn name(&self) -> &'static str {
        "hairpin"
    }

    fn scan(&self, seq: &Sequence) -> Vec<Match> {
        let len = seq.len();
        if len < self.window {
            return Vec::new();
        }
        let forward = seq.as_str();
        let reverse = seq.reverse_complement();
        let reverse = reverse.as_str();

        let mut matches = Vec::new();
        // i + window <= len also keeps i below len - stem_len
        for i in 0..=len - self.window {
            let word = &forward[i..i + self.stem_len];
            let rest = &reverse[len - (i + self.window)..len - (i + self.stem_len)];
            if let Some(location) = rest.find(word) {
                matches.push(Match::new(
                    i,
                    i + self.window - location - 1,
                    format!(
                        "Hairpin found in next {}bp in reverse complementary sequence: {}",
                        self.window, word
                    ),
                ));
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEM: &str = "ATGCGTACCTGATCGGATCC";

    #[test]
    fn fold_back_is_found_at_the_start() {
        let stem = Sequence::new(STEM).unwrap();
        let seq = Sequence::new(&format!(
            "{}{}{}",
            STEM,
            stem.reverse_complement(),
            "CA".repeat(80)
        ))
        .unwrap();
        let matches = HairpinScanner::new(20, 200).unwrap().scan(&seq);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].start, 0);
        // the paired stem ends right before the filler
        assert_eq!(matches[0].end, 39);
    }

    #[test]
    fn loop_between_stems_is_tolerated() {
        let stem = Sequence::new(STEM).unwrap();
        let seq = Sequence::new(&format!(
            "{}{}{}{}",
            STEM,
            "CA".repeat(20),
            stem.reverse_complement(),
            "CA".repeat(60)
        ))
        .unwrap();
        let matches = HairpinScanner::new(20, 200).unwrap().scan(&seq);
        assert_eq!((matches[0].start, matches[0].end), (0, 79));
    }

    #[test]
    fn sequence_shorter_than_window_is_skipped() {
        let stem = Sequence::new(STEM).unwrap();
        let seq = Sequence::new(&format!("{}{}", STEM, stem.reverse_complement())).unwrap();
        assert!(HairpinScanner::new(20, 200).unwrap().scan(&seq).is_empty());
    }

    #[test]
    fn window_must_exceed_stem() {
        assert!(matches!(
            HairpinScanner::new(20, 20),
            Err(DesignError::Config(_))
        ));
        assert!(HairpinScanner::new(0, 10).is_err());
    }
}
