// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use itertools::Itertools;
use log::info;

use crate::config::SubsetConfig;
use crate::errors::SubsetError;
use crate::seq::fasta::FastaStore;
use crate::seq::subset::{in_request_order, read_header_list};
use crate::seq::writer::write_fasta_file;

// Required flags are Options here: missing values are reported by SubsetConfig, as
// SubsetError::Config, rather than by clap.

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input multi-record FastA file (required)
    #[arg(long = "input-fasta", value_name = "FILE")]
    input_fasta: Option<PathBuf>,

    /// List of FastA headers to extract, one whole header per line, with or without the
    /// leading '>' (required)
    #[arg(long = "header-list", value_name = "FILE")]
    header_list: Option<PathBuf>,

    /// Output file name [default: subset.fasta]
    #[arg(long = "out-file", value_name = "FILE")]
    out_file: Option<PathBuf>,
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSummary {
    pub store_size: usize,
    pub requested: usize,
    pub written: usize,
    /// Distinct requested headers that are not in the input
    pub not_found: usize,
}

pub fn run() -> Result<SubsetSummary, SubsetError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = SubsetConfig::from_values(cli.input_fasta, cli.header_list, cli.out_file)?;
    execute(&config)
}

/// Loads the input FastA, selects the listed records and writes them out.
pub fn execute(config: &SubsetConfig) -> Result<SubsetSummary, SubsetError> {
    let store = FastaStore::from_file(&config.input_fasta)?;
    let requested = read_header_list(&config.header_list)?;

    let subset = store.subset(&requested);
    let records = in_request_order(&subset, &requested);
    write_fasta_file(&config.out_file, &records)?;

    let not_found = requested
        .iter()
        .unique()
        .filter(|h| !store.contains(h.as_str()))
        .count();
    let summary = SubsetSummary {
        store_size: store.len(),
        requested: requested.len(),
        written: records.len(),
        not_found,
    };
    info!("{:?}", summary);
    Ok(summary)
}

/// Usage summary, printed along with any error.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
