// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use fasta_subset::{
    errors::SubsetError,
    runner::{execute, SubsetSummary},
    seq::{fasta::FastaStore, subset::read_header_list},
};

#[test]
fn header_list_run_writes_all_matches() {
    utils::with_out_file("all_matches", |out| {
        let config = utils::config("data/test.fasta", "data/headers.txt", out);
        let summary = execute(&config).expect("run");
        assert_eq!(
            summary,
            SubsetSummary {
                store_size: 18,
                requested: 9,
                written: 9,
                not_found: 0,
            }
        );

        // The output is itself valid FastA, holding exactly the selected records.
        let written = FastaStore::from_file(out).expect("output readable");
        let input = FastaStore::from_file("data/test.fasta").expect("Test file not found");
        let requested = read_header_list("data/headers.txt").expect("Test file not found");
        assert_eq!(written.len(), 9);
        for header in &requested {
            assert!(written.contains(header));
            assert_eq!(written.get(header), input.get(header));
        }
        assert!(written
            .get("B.FR.1983.LAI-J19.A07867")
            .expect("selected")
            .starts_with("ggtctctctggttagaccag"));
    });
}

#[test]
fn output_follows_request_order() {
    utils::with_out_file("request_order", |out| {
        let config = utils::config("data/test.fasta", "data/headers.txt", out);
        execute(&config).expect("run");
        let text = std::fs::read_to_string(out).expect("output readable");
        let headers: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();
        assert_eq!(headers.first(), Some(&">B.FR.1983.LAI-J19.A07867"));
        assert_eq!(headers.last(), Some(&">01_AE.TH.1990.CM240.U54771"));
    });
}

#[test]
fn empty_input_fasta_is_parse_error() {
    utils::with_out_file("empty_input", |out| {
        let config = utils::config("data/empty.fasta", "data/headers.txt", out);
        let err = execute(&config).unwrap_err();
        assert!(matches!(err, SubsetError::Parse(_)));
        assert!(!out.exists());
    });
}

#[test]
fn missing_header_list_is_io_error() {
    utils::with_out_file("missing_list", |out| {
        let config = utils::config("data/test.fasta", "data/no-such-list.txt", out);
        let err = execute(&config).unwrap_err();
        assert!(matches!(err, SubsetError::Io(_)));
        assert!(err.to_string().contains("no-such-list.txt"));
    });
}

#[test]
fn unmatched_headers_are_not_errors() {
    utils::with_out_file("unmatched", |out| {
        let config = utils::config("data/header_only.fasta", "data/headers.txt", out);
        let summary = execute(&config).expect("run");
        assert_eq!(summary.written, 0);
        assert_eq!(summary.not_found, 9);
        assert_eq!(std::fs::read_to_string(out).expect("output readable"), "");
    });
}

#[test]
fn non_utf8_input_is_not_an_error() {
    utils::with_out_file("latin1", |out| {
        let config = utils::config("data/latin1.fasta", "data/latin1_headers.txt", out);
        let summary = execute(&config).expect("run");
        assert_eq!(summary.written, 2);
        assert_eq!(summary.not_found, 0);
        let written = FastaStore::from_file(out).expect("output readable");
        assert_eq!(written.get("seq1 caf\u{FFFD}"), Some("ACGTAC\u{FFFD}GT"));
    });
}
