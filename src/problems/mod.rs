mod catalog;
mod finder;
mod forbidden;
mod global;
mod hairpin;
mod kmer_index;
mod matches;
mod repeats;

pub use catalog::{Motif, MotifCatalog, ASSEMBLY_SITES, CLONING_SITES};
pub use finder::{find, ProblemFinder, Scanner};
pub use forbidden::ForbiddenSequenceScanner;
pub use global::GlobalRepeatScanner;
pub use hairpin::HairpinScanner;
pub use kmer_index::{KmerIndex, MAX_KMER_LEN};
pub use matches::{forward_interval, Match};
pub use repeats::LocalRepeatScanner;

pub(crate) use kmer_index::for_each_kmer;

use crate::utils::DesignError;

/// Finder that only checks a motif catalog, as used while building parts.
pub fn catalog_finder(catalog: MotifCatalog) -> Result<ProblemFinder, DesignError> {
    Ok(ProblemFinder::new().with(ForbiddenSequenceScanner::new(catalog)?))
}

/// Parameters of the repeat and hairpin scanners used for full evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanParams {
    pub repeat_len: usize,
    pub stem_len: usize,
    pub hairpin_window: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            repeat_len: 10,
            stem_len: 20,
            hairpin_window: 200,
        }
    }
}

/// Forbidden motifs, internal repeats, host repeats (when a genome index is
/// given) and hairpins, in that order.
pub fn synthesis_finder(
    catalog: MotifCatalog,
    params: &ScanParams,
    host_index: Option<std::sync::Arc<KmerIndex>>,
) -> Result<ProblemFinder, DesignError> {
    let mut finder = ProblemFinder::new()
        .with(ForbiddenSequenceScanner::new(catalog)?)
        .with(LocalRepeatScanner::new(params.repeat_len)?);
    if let Some(index) = host_index {
        finder.push(GlobalRepeatScanner::new(index));
    }
    finder.push(HairpinScanner::new(params.stem_len, params.hairpin_window)?);
    Ok(finder)
}
