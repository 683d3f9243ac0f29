pub mod build;
pub mod optimize;
pub mod scan;

use crate::problems::KmerIndex;
use crate::utils::{read_sequences, Result};
use std::{path::Path, sync::Arc};

/// Indexes every record of the host genome.
pub(crate) fn load_host_index(path: &Path, k: usize) -> Result<Arc<KmerIndex>> {
    let records = read_sequences(path)?;
    log::info!("Creating {}-mer table from host genome {}...", k, path.display());
    let index = KmerIndex::from_sequences(k, records.iter().map(|r| r.sequence.as_bytes()))?;
    log::info!("Host k-mer table created with {} distinct k-mers", index.len());
    Ok(Arc::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_index_covers_all_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.fa");
        std::fs::write(&path, ">chr1\nACGTACGTAA\n>plasmid\nttgacagcta\n").unwrap();
        let index = load_host_index(&path, 8).unwrap();
        assert!(index.contains("CGTACGTA"));
        assert!(index.contains("TTGACAGC"));
        assert!(!index.contains("GTAATTGA"));
    }

    #[test]
    fn invalid_kmer_length_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.fa");
        std::fs::write(&path, ">chr1\nACGT\n").unwrap();
        assert!(load_host_index(&path, 0).is_err());
    }
}
