// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::PathBuf;

use crate::errors::SubsetError;

pub const DEFAULT_OUT_FILE: &str = "subset.fasta";

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetConfig {
    pub input_fasta: PathBuf,
    pub header_list: PathBuf,
    pub out_file: PathBuf,
}

impl SubsetConfig {
    /// Checks the raw command-line values: both input paths are required, the output file
    /// falls back to DEFAULT_OUT_FILE.
    pub fn from_values(
        input_fasta: Option<PathBuf>,
        header_list: Option<PathBuf>,
        out_file: Option<PathBuf>,
    ) -> Result<SubsetConfig, SubsetError> {
        if input_fasta.is_none() && header_list.is_none() && out_file.is_none() {
            return Err(SubsetError::Config(String::from(
                "No command line flags specified",
            )));
        }
        let input_fasta = input_fasta.ok_or_else(|| required("input-fasta"))?;
        let header_list = header_list.ok_or_else(|| required("header-list"))?;
        let out_file = out_file.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));

        Ok(SubsetConfig {
            input_fasta,
            header_list,
            out_file,
        })
    }
}

fn required(flag: &str) -> SubsetError {
    SubsetError::Config(format!("{} specification is required", flag))
}
