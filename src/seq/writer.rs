// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::errors::{open_error, SubsetError};
use crate::seq::fasta::HEADER_DELIMITER;
use crate::seq::record::SeqRecord;

// Sequences are written unwrapped, on a single line.

pub fn write_fasta<W: Write>(out: &mut W, records: &[SeqRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(out, "{}{}", HEADER_DELIMITER, record.header)?;
        writeln!(out, "{}", record.sequence)?;
    }
    Ok(())
}

pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    records: &[SeqRecord],
) -> Result<(), SubsetError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| open_error(path, e))?;
    let mut out = BufWriter::new(file);
    write_fasta(&mut out, records)?;
    out.flush()?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
