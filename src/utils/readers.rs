use super::Result;
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

/// A FASTA record as handed between the I/O layer and the design core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    pub name: String,
    pub sequence: String,
}

impl NamedSequence {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

pub fn open_fasta_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Reads every record of a (optionally gzipped) FASTA file. The record name is
/// the full header line so descriptions survive a read/write cycle.
pub fn read_sequences(path: &Path) -> Result<Vec<NamedSequence>> {
    let reader = fasta::Reader::new(open_fasta_reader(path)?);
    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| format!("Error at FASTA record {} of {}: {}", index + 1, path.display(), e))?;
        let name = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        let sequence = String::from_utf8(record.seq().to_vec())
            .map_err(|_| format!("Record '{}' is not valid UTF-8", name))?;
        records.push(NamedSequence { name, sequence });
    }
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    #[test]
    fn read_plain_fasta_keeps_full_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parts.fasta");
        std::fs::write(&path, ">gfp | strategy 1\nATGAAA\nCGT\n>rfp\nacgt\n").unwrap();

        let records = read_sequences(&path).unwrap();
        assert_eq!(
            records,
            vec![
                NamedSequence::new("gfp | strategy 1", "ATGAAACGT"),
                NamedSequence::new("rfp", "acgt"),
            ]
        );
    }

    #[test]
    fn read_gzipped_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genome.fa.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr\nACGTACGT\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let records = read_sequences(&path).unwrap();
        assert_eq!(records, vec![NamedSequence::new("chr", "ACGTACGT")]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_sequences(&dir.path().join("absent.fa")).is_err());
    }
}
