use super::genetic_code::{amino_acid, codon_at, codon_index, is_amino_acid};
use super::CodonOptimizer;
use crate::sequence::Sequence;
use crate::utils::DesignError;
use itertools::Itertools;
use rand::distr::{weighted::WeightedIndex, Distribution};
use rand::RngCore;
use std::collections::HashMap;

/// Relative codon preference of an organism, keyed by table-11 codon index.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonUsage {
    weights: [f64; 64],
}

impl CodonUsage {
    pub fn from_weights(weights: [f64; 64]) -> Self {
        Self { weights }
    }

    /// Counts codons of every coding sequence, each read in its own frame.
    /// Trailing bases that do not form a full codon are ignored.
    pub fn from_coding_sequences<'a>(cdss: impl IntoIterator<Item = &'a Sequence>) -> Self {
        let mut weights = [0.0; 64];
        for cds in cdss {
            for codon in cds.as_bytes().chunks_exact(3) {
                if let Some(index) = codon_index(codon) {
                    weights[index] += 1.0;
                }
            }
        }
        Self { weights }
    }

    pub fn weight(&self, codon: &str) -> f64 {
        codon_index(codon.as_bytes()).map_or(0.0, |index| self.weights[index])
    }

    /// `(codon, residue, weight, fraction)` for all 64 codons in table order,
    /// where `fraction` is the codon's share among its synonymous codons.
    pub fn rows(&self) -> impl Iterator<Item = (String, char, f64, f64)> + '_ {
        let freqs = self.frequencies();
        (0..64usize).map(move |index| {
            let codon = String::from_utf8_lossy(&codon_at(index)).into_owned();
            (codon, amino_acid(index), self.weights[index], freqs[index])
        })
    }

    /// Frequency of each codon among the synonymous codons of its amino acid.
    fn frequencies(&self) -> [f64; 64] {
        let mut totals: HashMap<char, f64> = HashMap::new();
        for (index, weight) in self.weights.iter().enumerate() {
            *totals.entry(amino_acid(index)).or_default() += weight;
        }
        let mut freqs = [0.0; 64];
        for (index, freq) in freqs.iter_mut().enumerate() {
            let total = totals[&amino_acid(index)];
            if total > 0.0 {
                *freq = self.weights[index] / total;
            }
        }
        freqs
    }

    /// Combines two organisms' preferences. Codons rarer than `cutoff` in either
    /// organism are dropped unless that leaves an amino acid without codons.
    pub fn compromise(
        first: &CodonUsage,
        second: &CodonUsage,
        cutoff: f64,
    ) -> Result<CodonUsage, DesignError> {
        if !(0.0..1.0).contains(&cutoff) {
            return Err(DesignError::Config(format!(
                "compromise cutoff must be in [0, 1), got {}",
                cutoff
            )));
        }
        let (freq_a, freq_b) = (first.frequencies(), second.frequencies());
        let averaged: Vec<f64> = (0..64usize).map(|i| (freq_a[i] + freq_b[i]) / 2.0).collect();

        let mut weights = [0.0; 64];
        let by_residue = (0..64usize).into_group_map_by(|&index| amino_acid(index));
        for codons in by_residue.values() {
            let kept = codons
                .iter()
                .filter(|&&i| freq_a[i] >= cutoff && freq_b[i] >= cutoff)
                .collect_vec();
            if kept.is_empty() {
                for &i in codons {
                    weights[i] = averaged[i];
                }
            } else {
                for &&i in &kept {
                    weights[i] = averaged[i];
                }
            }
        }
        Ok(CodonUsage { weights })
    }

    fn samplers(&self) -> HashMap<char, (Vec<usize>, Option<WeightedIndex<f64>>)> {
        let by_residue = (0..64usize).into_group_map_by(|&index| amino_acid(index));
        by_residue
            .into_iter()
            .map(|(residue, codons)| {
                let sampler = WeightedIndex::new(codons.iter().map(|&i| self.weights[i])).ok();
                (residue, (codons, sampler))
            })
            .collect()
    }
}

impl CodonOptimizer for CodonUsage {
    fn translate(&self, dna: &Sequence) -> Result<String, DesignError> {
        if dna.len() % 3 != 0 {
            return Err(DesignError::Translation(format!(
                "coding sequence length {} is not a multiple of 3",
                dna.len()
            )));
        }
        Ok(dna
            .as_bytes()
            .chunks_exact(3)
            .filter_map(codon_index)
            .map(amino_acid)
            .collect())
    }

    fn optimize(&self, protein: &str, rng: &mut dyn RngCore) -> Result<Sequence, DesignError> {
        let samplers = self.samplers();
        let mut dna = Vec::with_capacity(protein.len() * 3);
        for (position, residue) in protein.chars().enumerate() {
            let residue = residue.to_ascii_uppercase();
            if !is_amino_acid(residue) {
                return Err(DesignError::Translation(format!(
                    "unknown residue '{}' at position {}",
                    residue, position
                )));
            }
            let (codons, sampler) = &samplers[&residue];
            let sampler = sampler.as_ref().ok_or_else(|| {
                DesignError::Translation(format!("no codon observed for residue '{}'", residue))
            })?;
            dna.extend_from_slice(&codon_at(codons[sampler.sample(&mut *rng)]));
        }
        Ok(Sequence::from_valid_bytes(dna))
    }
}
