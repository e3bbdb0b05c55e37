mod common;

use assert_cmd::Command;
use insta::assert_snapshot;
use std::fs;
use tempfile::TempDir;

use crate::common::{fasta, fasta_ids, run_dna_to_aa, stderr_of, stdout_of};

#[test]
fn all_six_translations_snapshot() {
    let output = run_dna_to_aa(&[], &fasta("seq1", "ATGGCCTAA"));
    assert!(output.status.success());
    assert_snapshot!(stdout_of(&output).trim_end(), @r"
    >seq1-frame0
    MA*
    >seq1-frame1
    WPX
    >seq1-frame2
    GLX
    >seq1-frame0rc
    LGH
    >seq1-frame1rc
    *AX
    >seq1-frame2rc
    RPX
    ");
}

#[test]
fn min_orf_length_drops_short_translations() {
    let output = run_dna_to_aa(&["--minORFLength", "2"], &fasta("seq1", "ATGGCCTAA"));
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(
        fasta_ids(&stdout),
        ["seq1-frame1", "seq1-frame2", "seq1-frame0rc", "seq1-frame2rc"]
    );
}

#[test]
fn min_orf_length_too_long_outputs_nothing() {
    let output = run_dna_to_aa(&["--minORFLength", "100"], &fasta("seq1", "ATGGCCTAA"));
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn rna_input() {
    let output = run_dna_to_aa(&["--type", "rna"], &fasta("r1", "AUGGCCUAA"));
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with(">r1-frame0\nMA*\n"));
    assert_eq!(fasta_ids(&stdout).len(), 6);
}

#[test]
fn multiple_reads_keep_input_order() {
    let input = format!("{}{}", fasta("a b c", "ATG"), fasta("second", "TTT"));
    let output = run_dna_to_aa(&[], &input);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let ids = fasta_ids(&stdout);
    assert_eq!(ids.len(), 12);
    assert_eq!(ids[0], "a b c-frame0");
    assert_eq!(ids[6], "second-frame0");
}

#[test]
fn empty_input_is_not_an_error() {
    let output = run_dna_to_aa(&[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn untranslatable_read_is_fatal() {
    let input = format!("{}{}{}", fasta("good", "ATG"), fasta("bad", "AT-GC"), fasta("never", "ATG"));
    let output = run_dna_to_aa(&[], &input);
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Could not translate read \"bad\" sequence \"AT-GC\" (Codon 'AT-' is invalid)."),
        "unexpected stderr: {stderr}"
    );

    // Reads before the failure were written; nothing after it.
    let stdout = stdout_of(&output);
    let ids = fasta_ids(&stdout);
    assert_eq!(ids.len(), 6);
    assert!(ids.iter().all(|id| id.starts_with("good-")));
}

#[test]
fn invalid_type_is_rejected() {
    let output = run_dna_to_aa(&["--type", "protein"], &fasta("seq1", "ATG"));
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("--type"));
}

#[test]
fn quiet_suppresses_info_logging() {
    let output = run_dna_to_aa(&["-q"], &fasta("seq1", "ATG"));
    assert!(output.status.success());
    assert!(!stderr_of(&output).contains("Wrote"));

    let output = run_dna_to_aa(&[], &fasta("seq1", "ATG"));
    assert!(stderr_of(&output).contains("Wrote 6 translations of 1 DNA reads."));
}

#[test]
fn help_lists_options() {
    let mut cmd = Command::cargo_bin("dna-to-aa").unwrap();
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("--type"));
    assert!(text.contains("--minORFLength"));
    assert!(text.contains("Convert DNA to AA"));
}

#[test]
fn translates_fasta_file_piped_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reads.fasta");
    fs::write(&path, ">x\nATGAAATAG\n>y\nCCC\n").unwrap();

    let mut cmd = Command::cargo_bin("dna-to-aa").unwrap();
    let output = cmd
        .arg("--minORFLength")
        .arg("2")
        .pipe_stdin(&path)
        .unwrap()
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_snapshot!(stdout.trim_end(), @r"
    >x-frame2
    EIX
    >x-frame0rc
    LFH
    >x-frame1rc
    YFX
    >x-frame2rc
    ISX
    ");
}
