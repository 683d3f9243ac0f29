pub mod cli;
pub mod codon;
pub mod commands;
pub mod parts;
pub mod problems;
pub mod sequence;
pub mod utils;
