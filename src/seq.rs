// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod fasta;
pub mod lines;
pub mod record;
pub mod subset;
pub mod writer;
