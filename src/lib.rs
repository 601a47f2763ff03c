// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod config;
pub mod errors;
pub mod runner;
pub mod seq;

use crate::errors::SubsetError;
use crate::runner::SubsetSummary;

pub fn run() -> Result<SubsetSummary, SubsetError> {
    runner::run()
}
