// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

use fasta_subset::runner::usage;

fn main() -> ExitCode {
    match fasta_subset::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
    }
}
