// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use crate::errors::{open_error, SubsetError};
use crate::seq::fasta::{FastaStore, HEADER_DELIMITER};
use crate::seq::lines::lossy_lines;
use crate::seq::record::SeqRecord;

/// Header -> sequence, restricted to the requested headers that were found.
pub type Subset = HashMap<String, String>;

impl FastaStore {
    /// Selects the records whose headers are in `headers`. Headers are matched exactly (a
    /// leading '>' is NOT stripped here); headers absent from the store are skipped.
    pub fn subset<S: AsRef<str>>(&self, headers: &[S]) -> Subset {
        let mut result = Subset::new();
        let mut missing = 0;
        for header in headers {
            let header = header.as_ref();
            match self.get(header) {
                Some(sequence) => {
                    result.insert(header.to_string(), sequence.to_string());
                }
                None => {
                    debug!("Header '{}' not found", header);
                    missing += 1;
                }
            }
        }
        if missing > 0 {
            info!("{} requested header(s) not found", missing);
        }
        result
    }

    /// Like `subset()`, but the headers are read from a header-list file (see
    /// `read_header_list()`).
    pub fn subset_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Subset, SubsetError> {
        let headers = read_header_list(path)?;
        Ok(self.subset(&headers))
    }
}

/// Reads one header per line. Blank lines are skipped, and one leading '>' is removed if
/// present. Order is preserved and duplicates are kept. Invalid UTF-8 is decoded the same
/// way as in `FastaStore::from_reader()`, so such headers still match.
pub fn read_header_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SubsetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut headers: Vec<String> = Vec::new();

    for line in lossy_lines(BufReader::new(file)) {
        let l = line?;
        if l.is_empty() {
            continue;
        }
        let header = l.strip_prefix(HEADER_DELIMITER).unwrap_or(&l);
        headers.push(header.to_string());
    }
    debug!("Read {} header(s) from {}", headers.len(), path.display());

    Ok(headers)
}

/// Lays out a subset in the order the headers were first requested; repeats are dropped.
pub fn in_request_order<S: AsRef<str>>(subset: &Subset, requested: &[S]) -> Vec<SeqRecord> {
    requested
        .iter()
        .map(|h| h.as_ref())
        .unique()
        .filter_map(|header| {
            subset.get_key_value(header).map(|(h, s)| SeqRecord {
                header: h.clone(),
                sequence: s.clone(),
            })
        })
        .collect()
}
