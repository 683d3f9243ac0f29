use super::CodonOptimizer;
use crate::problems::{Match, ProblemFinder};
use crate::sequence::Sequence;
use crate::utils::DesignError;
use rand::{Rng, RngCore};

pub const DEFAULT_DRAWS: usize = 100;
pub const DEFAULT_REPAIRS: usize = 2_000;

/// Longest stretch of codons redrawn for a single problem.
const MAX_REPAIR_CODONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecodeParams {
    /// Whole-gene candidates drawn before repairing.
    pub draws: usize,
    /// Local codon redraws tried on the best candidate.
    pub repairs: usize,
}

impl Default for RecodeParams {
    fn default() -> Self {
        Self {
            draws: DEFAULT_DRAWS,
            repairs: DEFAULT_REPAIRS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Recoded {
    pub sequence: Sequence,
    pub problems: Vec<Match>,
    /// Whole-gene draw the repairs started from.
    pub attempts: usize,
    /// Local redraws that were kept.
    pub repairs: usize,
}

/// Re-codes a gene with `optimizer`. Up to `params.draws` whole-gene
/// candidates are drawn and the first problem-free one, or else the one with
/// fewest problems, is kept. Remaining problems are then repaired by
/// redrawing the synonymous codons under each problem, keeping a redraw only
/// when the total problem count drops. Every candidate must translate back to
/// the original protein.
pub fn recode(
    gene: &Sequence,
    optimizer: &dyn CodonOptimizer,
    finder: &ProblemFinder,
    params: RecodeParams,
    rng: &mut dyn RngCore,
) -> Result<Recoded, DesignError> {
    if params.draws == 0 {
        return Err(DesignError::Config(
            "recoding attempt budget must be at least 1".to_string(),
        ));
    }
    let protein = optimizer.translate(gene)?;

    let mut best: Option<Recoded> = None;
    for attempt in 1..=params.draws {
        let candidate = optimizer.optimize(&protein, rng)?;
        if optimizer.translate(&candidate)? != protein {
            return Err(DesignError::Translation(
                "optimized sequence encodes a different protein".to_string(),
            ));
        }
        let problems = finder.find(&candidate);
        let improved = match &best {
            Some(current) => problems.len() < current.problems.len(),
            None => true,
        };
        if improved {
            best = Some(Recoded {
                sequence: candidate,
                problems,
                attempts: attempt,
                repairs: 0,
            });
        }
        if matches!(&best, Some(b) if b.problems.is_empty()) {
            break;
        }
    }

    let mut best = best.ok_or(DesignError::Exhausted {
        task: "recoding",
        attempts: params.draws,
    })?;
    if !best.problems.is_empty() {
        log::trace!(
            "Best of {} draws has {} problems, repairing",
            best.attempts,
            best.problems.len()
        );
        repair(&protein, &mut best, optimizer, finder, params.repairs, rng)?;
    }
    Ok(best)
}

fn repair(
    protein: &str,
    best: &mut Recoded,
    optimizer: &dyn CodonOptimizer,
    finder: &ProblemFinder,
    budget: usize,
    rng: &mut dyn RngCore,
) -> Result<(), DesignError> {
    let mut tries = 0;
    while !best.problems.is_empty() && tries < budget {
        let targets = best.problems.clone();
        for problem in &targets {
            if tries == budget || best.problems.is_empty() {
                break;
            }
            tries += 1;

            let (first, last) = codon_span(problem, protein.len(), rng);
            let residues = &protein[first..=last];
            let patch = optimizer.optimize(residues, rng)?;
            if optimizer.translate(&patch)? != residues {
                return Err(DesignError::Translation(
                    "optimized codons encode different residues".to_string(),
                ));
            }

            let mut bases = best.sequence.as_bytes().to_vec();
            bases[first * 3..(last + 1) * 3].copy_from_slice(patch.as_bytes());
            let candidate = Sequence::from_valid_bytes(bases);
            let problems = finder.find(&candidate);
            if problems.len() < best.problems.len() {
                best.sequence = candidate;
                best.problems = problems;
                best.repairs += 1;
            }
        }
    }
    log::trace!(
        "{} of {} repairs kept, {} problems left",
        best.repairs,
        tries,
        best.problems.len()
    );
    Ok(())
}

/// Codons overlapping `problem`. Long problems such as hairpins are narrowed
/// to a window anchored at either end.
fn codon_span(problem: &Match, residues: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    let last_codon = residues - 1;
    let first = (problem.start / 3).min(last_codon);
    let last = (problem.end / 3).min(last_codon);
    if last + 1 - first <= MAX_REPAIR_CODONS {
        (first, last)
    } else if rng.random_bool(0.5) {
        (first, first + MAX_REPAIR_CODONS - 1)
    } else {
        (last + 1 - MAX_REPAIR_CODONS, last)
    }
}
