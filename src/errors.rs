// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum SubsetError {
    /// Missing or unusable command-line value
    Config(String),
    /// Input FASTA is empty or malformed
    Parse(String),
    Io(io::Error),
}

// Allows '?' on std I/O calls inside functions returning Result<_, SubsetError>.

impl From<io::Error> for SubsetError {
    fn from(e: io::Error) -> Self {
        SubsetError::Io(e)
    }
}

impl fmt::Display for SubsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetError::Config(msg) => write!(f, "ERROR: {}", msg),
            SubsetError::Parse(msg) => write!(f, "ERROR: {}", msg),
            SubsetError::Io(e) => write!(f, "ERROR: I/O error: {}", e),
        }
    }
}

impl error::Error for SubsetError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SubsetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Opening a file loses its path in the io::Error; put it back.
pub(crate) fn open_error<P: fmt::Debug>(path: P, e: io::Error) -> SubsetError {
    SubsetError::Io(io::Error::new(
        e.kind(),
        format!("could not open {:?}: {}", path, e),
    ))
}
