use super::Match;
use crate::sequence::Sequence;

/// A single problem detector. Scanners never fail: a sequence shorter than a
/// scanner's window simply yields no matches.
pub trait Scanner: Send + Sync {
    fn name(&self) -> &'static str;
    fn scan(&self, seq: &Sequence) -> Vec<Match>;
}

/// Runs scanners in registration order and concatenates their matches without
/// merging or de-duplication.
#[derive(Default)]
pub struct ProblemFinder {
    scanners: Vec<Box<dyn Scanner>>,
}

impl ProblemFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, scanner: impl Scanner + 'static) -> Self {
        self.push(scanner);
        self
    }

    pub fn push(&mut self, scanner: impl Scanner + 'static) {
        self.scanners.push(Box::new(scanner));
    }

    pub fn find(&self, seq: &Sequence) -> Vec<Match> {
        find(seq, &self.scanners)
    }

    pub fn count(&self, seq: &Sequence) -> usize {
        self.scanners.iter().map(|s| s.scan(seq).len()).sum()
    }

    pub fn scanner_names(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|s| s.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }
}

pub fn find(seq: &Sequence, scanners: &[Box<dyn Scanner>]) -> Vec<Match> {
    let mut problems = Vec::new();
    for scanner in scanners {
        let found = scanner.scan(seq);
        log::trace!("{}: {} matches", scanner.name(), found.len());
        problems.extend(found);
    }
    problems
}
