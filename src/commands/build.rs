use crate::cli::BuildArgs;
use crate::parts::{default_tolerance, Part, PartBuilder, PartParams, GOLDEN_GATE};
use crate::sequence::Sequence;
use crate::utils::{
    create_writer, initialize_thread_pool, open_output, read_sequences, record_rng,
    write_sequences, NamedSequence, ProblemReport, Result,
};
use rand::Rng;
use rayon::prelude::*;

pub fn build(args: BuildArgs) -> Result<()> {
    let records = read_sequences(&args.input_path)?;
    log::info!("Loaded {} payloads", records.len());

    let catalog = args.catalog.catalog();
    let tolerance = match args.tolerance {
        Some(tolerance) => tolerance,
        None => default_tolerance(&catalog, &GOLDEN_GATE)?,
    };
    log::debug!("Accepting up to {} problems above each payload's own", tolerance);
    let params = PartParams {
        tolerance,
        max_attempts: args.max_attempts,
        filler_attempts: args.filler_attempts,
    };
    let builder = PartBuilder::new(catalog, GOLDEN_GATE, params)?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Random seed: {}", seed);

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;
    let results: Vec<Result<Part>> = pool.install(|| {
        records
            .par_iter()
            .enumerate()
            .map(|(index, record)| build_record(&builder, record, seed, index))
            .collect()
    });

    let mut parts = Vec::new();
    let mut report = create_writer(&args.output_prefix, "problems.tsv", |path| {
        ProblemReport::new(open_output(path)?)
    })?;
    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(part) => {
                log::info!(
                    "{}: accepted after {} attempts with {} problems (payload alone: {})",
                    record.name,
                    part.attempts,
                    part.problems.len(),
                    part.baseline
                );
                report.write(&record.name, part.sequence.len(), &part.problems)?;
                parts.push(NamedSequence::new(
                    record.name.clone(),
                    part.sequence.into_string(),
                ));
            }
            Err(err) => log::error!("{}: {}", record.name, err),
        }
    }
    report.finish()?;

    let fasta = create_writer(&args.output_prefix, "fasta", open_output)?;
    write_sequences(&parts, fasta)?;

    let failed = records.len() - parts.len();
    match failed {
        0 => log::info!("Built {} parts", parts.len()),
        _ => log::warn!("Built {} parts, {} payloads failed", parts.len(), failed),
    }
    Ok(())
}

fn build_record(
    builder: &PartBuilder,
    record: &NamedSequence,
    seed: u64,
    index: usize,
) -> Result<Part> {
    let payload = Sequence::new(&record.sequence)?;
    let mut rng = record_rng(seed, index);
    Ok(builder.build_part(&payload, &mut rng)?)
}
