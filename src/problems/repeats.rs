use super::{Match, Scanner};
use crate::sequence::Sequence;
use crate::utils::DesignError;
use std::collections::HashMap;

/// Flags every window of `repeat_len` bases that already occurred earlier in
/// the same sequence.
pub struct LocalRepeatScanner {
    repeat_len: usize,
}

impl LocalRepeatScanner {
    pub fn new(repeat_len: usize) -> Result<Self, DesignError> {
        if repeat_len == 0 {
            return Err(DesignError::Config(
                "repeat length must be at least 1".to_string(),
            ));
        }
        Ok(Self { repeat_len })
    }
}

impl Scanner for LocalRepeatScanner {
    fn name(&self) -> &'static str {
        "local-repeat"
    }

    fn scan(&self, seq: &Sequence) -> Vec<Match> {
        let mut first_seen: HashMap<&[u8], usize> = HashMap::new();
        let mut matches = Vec::new();
        for (pos, window) in seq.as_bytes().windows(self.repeat_len).enumerate() {
            match first_seen.get(window) {
                Some(&first) => matches.push(Match::new(
                    pos,
                    pos + self.repeat_len - 1,
                    format!(
                        "Repeat of {} bp also found at position {}: {}",
                        self.repeat_len,
                        first,
                        &seq.as_str()[pos..pos + self.repeat_len]
                    ),
                )),
                None => {
                    first_seen.insert(window, pos);
                }
            }
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_sequence_reports_second_copy() {
        let half = "ATGCCGTTAGCA";
        let seq = Sequence::new(&format!("{}{}", half, half)).unwrap();
        let matches = LocalRepeatScanner::new(10).unwrap().scan(&seq);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].start, half.len());
        assert_eq!(matches[0].end, half.len() + 9);
        assert!(matches[0].description.contains("position 0"));
    }

    #[test]
    fn unique_windows_are_clean() {
        let seq = Sequence::new("ACGTTGCAAGGCTTACCGAT").unwrap();
        assert!(LocalRepeatScanner::new(10).unwrap().scan(&seq).is_empty());
    }

    #[test]
    fn short_sequence_has_no_windows() {
        let seq = Sequence::new("ACGT").unwrap();
        assert!(LocalRepeatScanner::new(10).unwrap().scan(&seq).is_empty());
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(LocalRepeatScanner::new(0).is_err());
    }
}
