// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use fasta_subset::config::SubsetConfig;

/// Output path in the system temp dir, unique per test and per process.
pub fn temp_out(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fasta_subset_{}_{}.fasta",
        name,
        std::process::id()
    ))
}

pub fn config(input_fasta: &str, header_list: &str, out_file: &Path) -> SubsetConfig {
    SubsetConfig::from_values(
        Some(PathBuf::from(input_fasta)),
        Some(PathBuf::from(header_list)),
        Some(out_file.to_path_buf()),
    )
    .expect("valid config")
}

/// Runs `f` on the output path, then removes the file whatever happened.
pub fn with_out_file<F>(name: &str, f: F)
where
    F: FnOnce(&Path),
{
    let out = temp_out(name);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(&out)));
    std::fs::remove_file(&out).ok();
    if let Err(e) = result {
        std::panic::resume_unwind(e);
    }
}
