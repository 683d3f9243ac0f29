use super::load_host_index;
use crate::cli::OptimizeArgs;
use crate::codon::{recode, CodonUsage, RecodeParams, Recoded};
use crate::problems::{synthesis_finder, ProblemFinder, ScanParams};
use crate::sequence::Sequence;
use crate::utils::{
    create_writer, initialize_thread_pool, open_output, read_sequences, record_rng,
    write_codon_usage, write_sequences, NamedSequence, ProblemReport, Result,
};
use rand::Rng;
use rayon::prelude::*;
use std::path::Path;

pub fn optimize(args: OptimizeArgs) -> Result<()> {
    let tables = args
        .cds_paths
        .iter()
        .map(|path| load_codon_usage(path))
        .collect::<Result<Vec<_>>>()?;
    let usage = match tables.as_slice() {
        [single] => single.clone(),
        [first, second] => {
            log::info!(
                "Combining two codon tables with cutoff {}",
                args.compromise_cutoff
            );
            for (index, table) in tables.iter().enumerate() {
                let suffix = format!("codon_usage.{}.tsv", index + 1);
                let writer = create_writer(&args.output_prefix, &suffix, open_output)?;
                write_codon_usage(table, writer)?;
            }
            CodonUsage::compromise(first, second, args.compromise_cutoff)?
        }
        _ => return Err("Expected one or two coding sequence files".to_string()),
    };
    let writer = create_writer(&args.output_prefix, "codon_usage.tsv", open_output)?;
    write_codon_usage(&usage, writer)?;

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

    let genes = read_sequences(&args.input_path)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Random seed: {}", seed);

    let params = RecodeParams {
        draws: args.attempts,
        repairs: args.repairs,
    };
    let pool = initialize_thread_pool(args.num_threads)?;
    let results: Vec<Result<Recoded>> = pool.install(|| {
        genes
            .par_iter()
            .enumerate()
            .map(|(index, gene)| recode_record(gene, &usage, &finder, params, seed, index))
            .collect()
    });

    let mut recoded = Vec::new();
    let mut report = create_writer(&args.output_prefix, "problems.tsv", |path| {
        ProblemReport::new(open_output(path)?)
    })?;
    for (gene, result) in genes.iter().zip(results) {
        match result {
            Ok(result) => {
                if result.problems.is_empty() {
                    log::info!(
                        "{}: problem-free after {} draws and {} repairs",
                        gene.name,
                        result.attempts,
                        result.repairs
                    );
                } else {
                    log::warn!(
                        "{}: best candidate still has {} problems after {} repairs",
                        gene.name,
                        result.problems.len(),
                        result.repairs
                    );
                }
                report.write(&gene.name, result.sequence.len(), &result.problems)?;
                recoded.push(NamedSequence::new(
                    gene.name.clone(),
                    result.sequence.into_string(),
                ));
            }
            Err(err) => log::error!("{}: {}", gene.name, err),
        }
    }
    report.finish()?;

    let fasta = create_writer(&args.output_prefix, "fasta", open_output)?;
    write_sequences(&recoded, fasta)?;
    log::info!("Re-coded {} of {} genes", recoded.len(), genes.len());
    Ok(())
}

fn load_codon_usage(path: &Path) -> Result<CodonUsage> {
    let records = read_sequences(path)?;
    let mut cdss = Vec::with_capacity(records.len());
    for record in &records {
        match Sequence::new(&record.sequence) {
            Ok(seq) => cdss.push(seq),
            Err(e) => log::warn!("Skipping coding sequence {}: {}", record.name, e),
        }
    }
    if cdss.is_empty() {
        return Err(format!("No usable coding sequences in {}", path.display()));
    }
    log::info!(
        "Built codon usage from {} coding sequences in {}",
        cdss.len(),
        path.display()
    );
    Ok(CodonUsage::from_coding_sequences(&cdss))
}

fn recode_record(
    gene: &NamedSequence,
    usage: &CodonUsage,
    finder: &ProblemFinder,
    params: RecodeParams,
    seed: u64,
    index: usize,
) -> Result<Recoded> {
    let seq = Sequence::new(&gene.sequence)?;
    let mut rng = record_rng(seed, index);
    Ok(recode(&seq, usage, finder, params, &mut rng)?)
}
