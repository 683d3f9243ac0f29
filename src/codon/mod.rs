mod genetic_code;
mod recode;
mod usage;

pub use genetic_code::{amino_acid, codon_at, codon_index, STOP};
pub use recode::{recode, RecodeParams, Recoded, DEFAULT_DRAWS, DEFAULT_REPAIRS};
pub use usage::CodonUsage;

use crate::sequence::Sequence;
use crate::utils::DesignError;
use rand::RngCore;

/// Translation and codon choice, kept behind a trait so the design core does
/// not depend on how codon preferences are obtained.
pub trait CodonOptimizer: Send + Sync {
    fn translate(&self, dna: &Sequence) -> Result<String, DesignError>;
    fn optimize(&self, protein: &str, rng: &mut dyn RngCore) -> Result<Sequence, DesignError>;
}
