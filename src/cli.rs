use crate::codon::{DEFAULT_DRAWS, DEFAULT_REPAIRS};
use crate::parts::{DEFAULT_FILLER_ATTEMPTS, DEFAULT_PART_ATTEMPTS};
use crate::utils::{CatalogPreset, Result};
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="partsmith",
          version=&**FULL_VERSION,
          about="Synthesis-ready Golden Gate part designer",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Wrap coding sequences in Golden Gate adapters")]
    Build(BuildArgs),
    #[clap(about = "Report synthesis problems in sequences")]
    Scan(ScanArgs),
    #[clap(about = "Re-code genes with a host codon usage table")]
    Optimize(OptimizeArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("build")))]
#[command(arg_required_else_help(true))]
pub struct BuildArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA file with payload sequences")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(short = 's')]
    #[clap(long = "seed")]
    #[clap(help = "Seed for the random filler segments (random if omitted)")]
    #[clap(value_name = "SEED")]
    pub seed: Option<u64>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "catalog")]
    #[clap(value_name = "CATALOG")]
    #[clap(help = "Forbidden motif catalog (synthesis, overhangs or annotation)")]
    #[clap(default_value = "overhangs")]
    pub catalog: CatalogPreset,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "tolerance")]
    #[clap(value_name = "TOLERANCE")]
    #[clap(help = "Problems allowed on top of the payload's own [default: 8, raised when the catalog matches the adapter sites]")]
    pub tolerance: Option<usize>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "max-attempts")]
    #[clap(value_name = "ATTEMPTS")]
    #[clap(help = "Maximum number of candidate parts per payload")]
    #[clap(default_value_t = DEFAULT_PART_ATTEMPTS)]
    #[arg(value_parser = positive_count)]
    pub max_attempts: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "filler-attempts")]
    #[clap(value_name = "ATTEMPTS")]
    #[clap(help = "Maximum number of draws per random filler segment")]
    #[clap(default_value_t = DEFAULT_FILLER_ATTEMPTS)]
    #[arg(value_parser = positive_count)]
    pub filler_attempts: usize,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("scan")))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA file with sequences to scan")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(short = 'g')]
    #[clap(long = "genome")]
    #[clap(help = "Host genome FASTA used to detect shared k-mers")]
    #[clap(value_name = "GENOME")]
    #[arg(value_parser = check_file_exists)]
    pub genome_path: Option<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "catalog")]
    #[clap(value_name = "CATALOG")]
    #[clap(help = "Forbidden motif catalog (synthesis, overhangs or annotation)")]
    #[clap(default_value = "annotation")]
    pub catalog: CatalogPreset,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "repeat-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Minimum length of an internal repeat")]
    #[clap(default_value = "10")]
    pub repeat_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "kmer-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Length of k-mers shared with the host genome")]
    #[clap(default_value = "20")]
    pub kmer_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "stem-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Hairpin stem length")]
    #[clap(default_value = "20")]
    pub stem_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "hairpin-window")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Window downstream of a stem searched for its complement")]
    #[clap(default_value = "200")]
    pub hairpin_window: usize,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("optimize")))]
#[command(arg_required_else_help(true))]
pub struct OptimizeArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA file with genes to re-code")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'c')]
    #[clap(long = "cds")]
    #[clap(help = "FASTA file(s) with host coding sequences; two files are combined")]
    #[clap(value_name = "CDS")]
    #[clap(num_args = 1..=2)]
    #[arg(value_parser = check_file_exists)]
    pub cds_paths: Vec<PathBuf>,

    #[clap(short = 'g')]
    #[clap(long = "genome")]
    #[clap(help = "Host genome FASTA used to detect shared k-mers")]
    #[clap(value_name = "GENOME")]
    #[arg(value_parser = check_file_exists)]
    pub genome_path: Option<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output-prefix")]
    #[clap(help = "Prefix for output files")]
    #[clap(value_name = "OUTPUT_PREFIX")]
    #[arg(value_parser = check_prefix_path)]
    pub output_prefix: String,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(short = 's')]
    #[clap(long = "seed")]
    #[clap(help = "Seed for codon sampling (random if omitted)")]
    #[clap(value_name = "SEED")]
    pub seed: Option<u64>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "catalog")]
    #[clap(value_name = "CATALOG")]
    #[clap(help = "Forbidden motif catalog (synthesis, overhangs or annotation)")]
    #[clap(default_value = "synthesis")]
    pub catalog: CatalogPreset,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "compromise-cutoff")]
    #[clap(value_name = "FRAC")]
    #[clap(help = "Drop codons rarer than this in either host when combining two tables")]
    #[clap(default_value = "0.1")]
    #[arg(value_parser = ensure_unit_float)]
    pub compromise_cutoff: f64,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "attempts")]
    #[clap(value_name = "ATTEMPTS")]
    #[clap(help = "Number of re-coded candidates drawn per gene")]
    #[clap(default_value_t = DEFAULT_DRAWS)]
    #[arg(value_parser = positive_count)]
    pub attempts: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "repairs")]
    #[clap(value_name = "REPAIRS")]
    #[clap(help = "Number of local codon redraws tried on the best candidate")]
    #[clap(default_value_t = DEFAULT_REPAIRS)]
    pub repairs: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "repeat-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Minimum length of an internal repeat")]
    #[clap(default_value = "10")]
    pub repeat_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "kmer-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Length of k-mers shared with the host genome")]
    #[clap(default_value = "20")]
    pub kmer_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "stem-len")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Hairpin stem length")]
    #[clap(default_value = "20")]
    pub stem_len: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "hairpin-window")]
    #[clap(value_name = "LEN")]
    #[clap(help = "Window downstream of a stem searched for its complement")]
    #[clap(default_value = "200")]
    pub hairpin_window: usize,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn positive_count(s: &str) -> Result<usize> {
    let count: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid count", s))?;
    if count >= 1 {
        Ok(count)
    } else {
        Err("Value must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn ensure_unit_float(s: &str) -> Result<f64> {
    let value = s
        .parse::<f64>()
        .map_err(|e| format!("Could not parse float: {}", e))?;
    if !(0.0..1.0).contains(&value) {
        Err(format!(
            "The value must be at least 0.0 and below 1.0, got: {}",
            value
        ))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_count_must_be_positive() {
        assert_eq!(threads_in_range("4"), Ok(4));
        assert!(threads_in_range("0").is_err());
        assert!(threads_in_range("four").is_err());
    }

    #[test]
    fn cutoff_is_a_fraction() {
        assert_eq!(ensure_unit_float("0.1"), Ok(0.1));
        assert!(ensure_unit_float("1.0").is_err());
        assert!(ensure_unit_float("x").is_err());
    }

    #[test]
    fn build_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.fa");
        std::fs::write(&input, ">a\nATG\n").unwrap();
        let cli = Cli::try_parse_from([
            "partsmith",
            "build",
            "-i",
            input.to_str().unwrap(),
            "-o",
            dir.path().join("out").to_str().unwrap(),
        ])
        .unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.catalog, CatalogPreset::Overhangs);
                assert_eq!(args.tolerance, None);
                assert_eq!(args.num_threads, 1);
                assert_eq!(args.seed, None);
            }
            _ => panic!("expected build"),
        }
    }
}
