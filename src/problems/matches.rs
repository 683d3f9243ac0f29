use std::fmt;

/// A located problem on the forward strand. `start` and `end` are 0-based and
/// `end` is the last position of the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub description: String,
}

impl Match {
    pub fn new(start: usize, end: usize, description: impl Into<String>) -> Self {
        Self {
            start,
            end,
            description: description.into(),
        }
    }

    pub fn covers(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.start, self.end, self.description)
    }
}

/// Maps a window found at `pos` on the reverse complement of a sequence of
/// length `seq_len` back onto forward-strand coordinates.
pub fn forward_interval(seq_len: usize, pos: usize, window: usize) -> (usize, usize) {
    let end = seq_len - 1 - pos;
    (end + 1 - window, end)
}
