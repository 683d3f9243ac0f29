use super::DEFAULT_FILLER_ATTEMPTS;
use crate::problems::ProblemFinder;
use crate::sequence::Sequence;
use crate::utils::DesignError;
use rand::Rng;

const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

pub fn random_sequence<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Sequence {
    let bases = (0..len)
        .map(|_| BASES[rng.random_range(0..BASES.len())])
        .collect();
    Sequence::from_valid_bytes(bases)
}

/// Draws uniform random DNA until a draw has no problems under `finder`.
pub struct RandomFiller {
    finder: ProblemFinder,
    max_attempts: usize,
}

impl RandomFiller {
    pub fn new(finder: ProblemFinder, max_attempts: usize) -> Result<Self, DesignError> {
        if max_attempts == 0 {
            return Err(DesignError::Config(
                "filler attempt budget must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            finder,
            max_attempts,
        })
    }

    pub fn with_default_budget(finder: ProblemFinder) -> Self {
        Self {
            finder,
            max_attempts: DEFAULT_FILLER_ATTEMPTS,
        }
    }

    pub fn fill<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Result<Sequence, DesignError> {
        if len == 0 {
            return Ok(Sequence::default());
        }
        for attempt in 1..=self.max_attempts {
            let candidate = random_sequence(len, rng);
            if self.finder.count(&candidate) == 0 {
                log::trace!("Filler of {} bp accepted after {} draws", len, attempt);
                return Ok(candidate);
            }
        }
        Err(DesignError::Exhausted {
            task: "filler",
            attempts: self.max_attempts,
        })
    }
}
