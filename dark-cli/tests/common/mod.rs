#![allow(dead_code)]

use assert_cmd::Command;
use std::process::Output;

/// Runs dna-to-aa with `args`, feeding `input` on stdin
pub fn run_dna_to_aa(args: &[&str], input: &str) -> Output {
    let mut cmd = Command::cargo_bin("dna-to-aa").unwrap();
    cmd.args(args).env_remove("RUST_LOG").write_stdin(input);
    cmd.output().unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// FASTA ids in `text`, in order
pub fn fasta_ids(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|line| line.strip_prefix('>'))
        .collect()
}

/// A single-read FASTA document
pub fn fasta(id: &str, sequence: &str) -> String {
    format!(">{id}\n{sequence}\n")
}
