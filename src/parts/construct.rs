use super::{build_scaffold, AdapterLayout, AssemblyScaffold, RandomFiller, Slot};
use crate::problems::{catalog_finder, Match, MotifCatalog, ProblemFinder};
use crate::sequence::Sequence;
use crate::utils::DesignError;
use rand::Rng;

pub const DEFAULT_TOLERANCE: usize = 8;
pub const DEFAULT_PART_ATTEMPTS: usize = 1_000;
pub const DEFAULT_FILLER_ATTEMPTS: usize = 10_000;

/// Headroom left above the fixed-site hits for motifs created where the
/// payload and fillers meet the fixed segments.
const JUNCTION_SLACK: usize = 4;

/// Catalog hits of the layout's fixed segments. Adjacent fixed slots are
/// scanned together since they always sit next to each other in a part.
pub fn fixed_site_hits(finder: &ProblemFinder, layout: &AdapterLayout) -> usize {
    layout
        .slots()
        .split(|slot| slot.fixed_seq().is_none())
        .filter(|run| !run.is_empty())
        .map(|run| {
            let bases = run.iter().filter_map(Slot::fixed_seq).collect::<String>();
            finder.count(&Sequence::from_valid_bytes(bases.into_bytes()))
        })
        .sum()
}

/// Tolerance used when none is given: the usual 8, raised for catalogs that
/// match the adapter's own sites more often.
pub fn default_tolerance(
    catalog: &MotifCatalog,
    layout: &AdapterLayout,
) -> Result<usize, DesignError> {
    let finder = catalog_finder(catalog.clone())?;
    Ok(DEFAULT_TOLERANCE.max(fixed_site_hits(&finder, layout) + JUNCTION_SLACK))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartParams {
    /// Extra problems allowed on top of the payload's own; covers the
    /// adapter's recognition sites, which are catalog motifs themselves.
    pub tolerance: usize,
    pub max_attempts: usize,
    pub filler_attempts: usize,
}

impl Default for PartParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_attempts: DEFAULT_PART_ATTEMPTS,
            filler_attempts: DEFAULT_FILLER_ATTEMPTS,
        }
    }
}

/// An accepted part together with the evaluation that accepted it.
#[derive(Debug, Clone)]
pub struct Part {
    pub scaffold: AssemblyScaffold,
    pub sequence: Sequence,
    pub problems: Vec<Match>,
    pub baseline: usize,
    pub attempts: usize,
}

pub struct PartBuilder {
    layout: AdapterLayout,
    finder: ProblemFinder,
    filler: RandomFiller,
    params: PartParams,
}

impl PartBuilder {
    pub fn new(
        catalog: MotifCatalog,
        layout: AdapterLayout,
        params: PartParams,
    ) -> Result<Self, DesignError> {
        if params.max_attempts == 0 {
            return Err(DesignError::Config(
                "part attempt budget must be at least 1".to_string(),
            ));
        }
        let finder = catalog_finder(catalog.clone())?;
        let site_hits = fixed_site_hits(&finder, &layout);
        if params.tolerance <= site_hits {
            return Err(DesignError::Config(format!(
                "tolerance {} cannot absorb the {} catalog hits of the adapter sites; use at least {}",
                params.tolerance,
                site_hits,
                site_hits + 1
            )));
        }
        let filler = RandomFiller::new(catalog_finder(catalog)?, params.filler_attempts)?;
        Ok(Self {
            layout,
            finder,
            filler,
            params,
        })
    }

    pub fn finder(&self) -> &ProblemFinder {
        &self.finder
    }

    /// Wraps `payload` in freshly drawn adapters until a candidate has fewer
    /// than `baseline + tolerance` problems. The returned part is the candidate
    /// that passed, with the problems it was judged on.
    pub fn build_part<R: Rng + ?Sized>(
        &self,
        payload: &Sequence,
        rng: &mut R,
    ) -> Result<Part, DesignError> {
        let baseline = self.finder.count(payload);
        let limit = baseline + self.params.tolerance;
        log::debug!("Payload has {} problems, accepting below {}", baseline, limit);

        for attempt in 1..=self.params.max_attempts {
            let scaffold = build_scaffold(payload, &self.layout, &self.filler, rng)?;
            let sequence = scaffold.to_sequence();
            let problems = self.finder.find(&sequence);
            if problems.len() < limit {
                return Ok(Part {
                    scaffold,
                    sequence,
                    problems,
                    baseline,
                    attempts: attempt,
                });
            }
            log::trace!(
                "Rejected candidate {} with {} problems",
                attempt,
                problems.len()
            );
        }

        Err(DesignError::Exhausted {
            task: "part",
            attempts: self.params.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{strip_adapters, GOLDEN_GATE};
    use crate::utils::CatalogPreset;
    use rand::{rngs::StdRng, SeedableRng};

    fn builder() -> PartBuilder {
        PartBuilder::new(
            CatalogPreset::Overhangs.catalog(),
            GOLDEN_GATE,
            PartParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn small_orf_gets_full_adapters() {
        let builder = builder();
        let payload = Sequence::new("ATGAAACGTATTTAA").unwrap();
        assert_eq!(builder.finder().count(&payload), 0);

        let mut rng = StdRng::seed_from_u64(2024);
        let part = builder.build_part(&payload, &mut rng).unwrap();
        let text = part.sequence.as_str();

        assert_eq!(part.baseline, 0);
        assert!(part.problems.len() < 8);
        assert_eq!(text.len(), 43 + payload.len() + 46);
        assert_eq!(&text[15..21], "GAAGAC");
        assert_eq!(&text[text.len() - 21..text.len() - 15], "GTCTTC");
        assert!(text.contains(payload.as_str()));
        assert_eq!(strip_adapters(&part.sequence, &GOLDEN_GATE).unwrap(), payload);
    }

    #[test]
    fn returned_problems_belong_to_returned_sequence() {
        let builder = builder();
        let payload = Sequence::new("ATGGGTCTCAAAGAATTCTAA").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let part = builder.build_part(&payload, &mut rng).unwrap();
        assert_eq!(part.problems, builder.finder().find(&part.sequence));
        assert!(part.problems.len() < part.baseline + DEFAULT_TOLERANCE);
        assert!(part.baseline > 0);
    }

    #[test]
    fn same_seed_builds_same_part() {
        let builder = builder();
        let payload = Sequence::new("ATGCCGCTGTAA").unwrap();
        let a = builder
            .build_part(&payload, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = builder
            .build_part(&payload, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(a.sequence, b.sequence);
        assert_eq!(a.attempts, b.attempts);
    }

    #[test]
    fn fixed_sites_are_counted_per_catalog() {
        let hits = |preset: CatalogPreset| {
            fixed_site_hits(&catalog_finder(preset.catalog()).unwrap(), &GOLDEN_GATE)
        };
        assert_eq!(hits(CatalogPreset::Overhangs), 4);
        assert_eq!(hits(CatalogPreset::Annotation), 4);
        // both literals of every site are listed, so each site hits twice
        assert_eq!(hits(CatalogPreset::Synthesis), 8);
    }

    #[test]
    fn tolerance_below_site_hits_is_rejected() {
        let params = PartParams {
            tolerance: 4,
            ..PartParams::default()
        };
        assert!(matches!(
            PartBuilder::new(CatalogPreset::Overhangs.catalog(), GOLDEN_GATE, params),
            Err(DesignError::Config(_))
        ));
        assert!(matches!(
            PartBuilder::new(
                CatalogPreset::Synthesis.catalog(),
                GOLDEN_GATE,
                PartParams::default()
            ),
            Err(DesignError::Config(_))
        ));
    }

    #[test]
    fn synthesis_catalog_builds_with_its_default_tolerance() {
        let catalog = CatalogPreset::Synthesis.catalog();
        let tolerance = default_tolerance(&catalog, &GOLDEN_GATE).unwrap();
        assert_eq!(tolerance, 12);
        assert_eq!(
            default_tolerance(&CatalogPreset::Overhangs.catalog(), &GOLDEN_GATE).unwrap(),
            DEFAULT_TOLERANCE
        );

        let params = PartParams {
            tolerance,
            ..PartParams::default()
        };
        let builder = PartBuilder::new(catalog, GOLDEN_GATE, params).unwrap();
        let payload = Sequence::new("ATGAAACGTATTTAA").unwrap();
        let part = builder
            .build_part(&payload, &mut StdRng::seed_from_u64(2024))
            .unwrap();
        assert!(part.problems.len() >= 8);
        assert!(part.problems.len() < tolerance);
        assert_eq!(strip_adapters(&part.sequence, &GOLDEN_GATE).unwrap(), payload);
    }

    #[test]
    fn payload_junction_sites_exhaust_a_tight_tolerance() {
        // the TAA stop next to the GCTT overhang forms a HindIII site that is
        // reported on both strands, on top of the four adapter sites
        let params = PartParams {
            tolerance: 5,
            max_attempts: 5,
            ..PartParams::default()
        };
        let builder =
            PartBuilder::new(CatalogPreset::Overhangs.catalog(), GOLDEN_GATE, params).unwrap();
        let payload = Sequence::new("ATGCCGCTGTAA").unwrap();
        let err = builder
            .build_part(&payload, &mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(
            err,
            DesignError::Exhausted {
                task: "part",
                attempts: 5
            }
        );
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let params = PartParams {
            max_attempts: 0,
            ..PartParams::default()
        };
        assert!(PartBuilder::new(MotifCatalog::assembly_sites(), GOLDEN_GATE, params).is_err());
    }
}
