use super::{NamedSequence, Result};
use crate::codon::CodonUsage;
use crate::problems::Match;
use bio::io::fasta;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn create_writer<T, F>(output_prefix: &str, output_suffix: &str, f: F) -> Result<T>
where
    F: FnOnce(&str) -> Result<T>,
{
    let output_path = format!("{}.{}", output_prefix, output_suffix);
    f(&output_path)
}

pub fn open_output(path: &str) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| format!("Failed to create {}: {}", path, e))
}

pub fn write_sequences<W: Write>(records: &[NamedSequence], writer: W) -> Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for record in records {
        writer
            .write(&record.name, None, record.sequence.as_bytes())
            .map_err(|e| format!("Failed to write record '{}': {}", record.name, e))?;
    }
    writer.flush().map_err(|e| e.to_string())
}

/// Tab-separated problem report, one row per match.
pub struct ProblemReport<W: Write> {
    writer: W,
}

impl<W: Write> ProblemReport<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "#name\tlength\tstart\tend\tdescription").map_err(|e| e.to_string())?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, name: &str, length: usize, problems: &[Match]) -> Result<()> {
        for problem in problems {
            writeln!(self.writer, "{}\t{}\t{}", name, length, problem).map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().map_err(|e| e.to_string())?;
        Ok(self.writer)
    }
}

/// Writes a codon usage table as TSV, one row per codon.
pub fn write_codon_usage<W: Write>(usage: &CodonUsage, mut writer: W) -> Result<()> {
    writeln!(writer, "#codon\tamino_acid\tweight\tfraction").map_err(|e| e.to_string())?;
    for (codon, residue, weight, fraction) in usage.rows() {
        writeln!(writer, "{}\t{}\t{}\t{:.4}", codon, residue, weight, fraction)
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;

    #[test]
    fn fasta_records_are_written_in_order() {
        let records = vec![
            NamedSequence::new("a", "ACGT"),
            NamedSequence::new("b | note", "GG"),
        ];
        let mut buffer = Vec::new();
        write_sequences(&records, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), ">a\nACGT\n>b | note\nGG\n");
    }

    #[test]
    fn report_rows_carry_name_and_length() {
        let mut report = ProblemReport::new(Vec::new()).unwrap();
        report
            .write("part1", 40, &[Match::new(3, 8, "Forbidden sequence | GGTCTC")])
            .unwrap();
        let text = String::from_utf8(report.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "#name\tlength\tstart\tend\tdescription\npart1\t40\t3\t8\tForbidden sequence | GGTCTC\n"
        );
    }

    #[test]
    fn codon_usage_table_lists_every_codon() {
        let cds = Sequence::new("ATGAAAAAGAAATAA").unwrap();
        let usage = CodonUsage::from_coding_sequences([&cds]);
        let mut buffer = Vec::new();
        write_codon_usage(&usage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 65);
        assert_eq!(lines[0], "#codon\tamino_acid\tweight\tfraction");
        assert!(lines.contains(&"AAA\tK\t2\t0.6667"));
        assert!(lines.contains(&"ATG\tM\t1\t1.0000"));
        assert!(lines.contains(&"TTT\tF\t0\t0.0000"));
    }
}
