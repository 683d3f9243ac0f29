mod error;
mod io_utils;
mod parallel;
mod presets;
mod readers;
mod util;

pub use error::DesignError;
pub use io_utils::{create_writer, open_output, write_codon_usage, write_sequences, ProblemReport};
pub use parallel::{initialize_thread_pool, record_rng};
pub use presets::CatalogPreset;
pub use readers::{open_fasta_reader, read_sequences, NamedSequence};
pub use util::{handle_error_and_exit, Result};
