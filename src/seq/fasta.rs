// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::{open_error, SubsetError};
use crate::seq::lines::lossy_lines;

/// Marks the start of a header line.
pub const HEADER_DELIMITER: char = '>';

/// All records of one FastA file, keyed by header.
///
/// The whole file is parsed when the store is built; afterwards it is only read from. Headers
/// are unique: if the file repeats a header, the later record replaces the earlier one.
#[derive(Debug, Default, Clone)]
pub struct FastaStore {
    records: HashMap<String, String>,
}

impl FastaStore {
    /// Reads and parses the FastA file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FastaStore, SubsetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        debug!("Reading FastA file {}", path.display());
        FastaStore::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Parses FastA text from any buffered reader. `name` only appears in error messages.
    ///
    /// Sequence lines are appended verbatim (no trimming, no separator) to the sequence of the
    /// closest header above them. A header with no sequence lines yields an empty sequence.
    /// Bytes that are not valid UTF-8 are read as U+FFFD.
    pub fn from_reader<R: BufRead>(reader: R, name: &str) -> Result<FastaStore, SubsetError> {
        let mut lines = lossy_lines(reader);

        let first_line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(SubsetError::Parse(format!(
                    "input FASTA file {} empty",
                    name
                )))
            }
        };
        let mut current_header = match first_line.strip_prefix(HEADER_DELIMITER) {
            Some(hdr) => hdr.to_string(),
            None => {
                return Err(SubsetError::Parse(format!(
                    "first line of a FASTA file must begin with '{}'",
                    HEADER_DELIMITER
                )))
            }
        };

        let mut records: HashMap<String, String> = HashMap::new();
        let mut sequence = String::new();

        for line in lines {
            let l = line?;
            if let Some(hdr) = l.strip_prefix(HEADER_DELIMITER) {
                let finished = std::mem::replace(&mut current_header, hdr.to_string());
                commit(&mut records, finished, std::mem::take(&mut sequence));
                continue;
            }
            sequence.push_str(&l);
        }
        // No header follows the last record, so it must be committed here.
        commit(&mut records, current_header, sequence);

        info!("Read {} records from {}", records.len(), name);
        Ok(FastaStore { records })
    }

    /// Number of distinct headers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, header: &str) -> bool {
        self.records.contains_key(header)
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.records.get(header).map(String::as_str)
    }
}

fn commit(records: &mut HashMap<String, String>, header: String, sequence: String) {
    if records.contains_key(&header) {
        warn!("Duplicate header '{}': keeping the later record", header);
    }
    records.insert(header, sequence);
}
