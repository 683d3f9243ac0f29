use super::load_host_index;
use crate::cli::ScanArgs;
use crate::problems::{synthesis_finder, ScanParams};
use crate::sequence::Sequence;
use crate::utils::{create_writer, open_output, read_sequences, ProblemReport, Result};

pub fn scan(args: ScanArgs) -> Result<()> {
    let host_index = match &args.genome_path {
        Some(path) => Some(load_host_index(path, args.kmer_len)?),
        None => None,
    };
    let params = ScanParams {
        repeat_len: args.repeat_len,
        stem_len: args.stem_len,
        hairpin_window: args.hairpin_window,
    };
    let finder = synthesis_finder(args.catalog.catalog(), &params, host_index)?;

    let records = read_sequences(&args.input_path)?;
    let mut report = create_writer(&args.output_prefix, "problems.tsv", |path| {
        ProblemReport::new(open_output(path)?)
    })?;

    let mut error_count = 0;
    let mut clean_count = 0;
    for record in &records {
        let seq = match Sequence::new(&record.sequence) {
            Ok(seq) => seq,
            Err(e) => {
                log::error!("{}: {}", record.name, e);
                error_count += 1;
                continue;
            }
        };
        let problems = finder.find(&seq);
        log::info!("{}: {} problems", record.name, problems.len());
        if problems.is_empty() {
            clean_count += 1;
        }
        report.write(&record.name, seq.len(), &problems)?;
    }
    report.finish()?;

    log::info!(
        "Scanned {} sequences: clean={}, with problems={}, invalid={}",
        records.len(),
        clean_count,
        records.len() - clean_count - error_count,
        error_count
    );
    Ok(())
}
