//! # dna-to-aa
//!
//! Reads nucleotide FASTA on stdin and writes the six-frame amino acid
//! translations of every read to stdout as FASTA.
//!
//! ## Usage
//!
//! ```bash
//! # All six translations of every read
//! dna-to-aa < reads.fasta > translations.fasta
//!
//! # Only translations holding an ORF of at least 30 residues
//! dna-to-aa --minORFLength 30 < reads.fasta
//!
//! # RNA input
//! dna-to-aa --type rna < transcripts.fasta
//! ```
//!
//! ## Options
//!
//! - `--type <TYPE>`: Base type of the input, dna or rna (default: dna)
//! - `--minORFLength <LEN>`: Drop translations without an ORF this long
//! - `-q, --quiet`: Only log warnings and errors
//!
//! Start and stop codons stay in the output (`M` and `*`).
//!
//! A read that cannot be translated stops the run: its id, sequence and
//! the reason are printed to stderr and the exit status is 1. Logging goes
//! to stderr and honours `RUST_LOG`.

use clap::{value_parser, Arg, ArgAction, Command};
use dark_core::config::TranslateConfig;
use dark_core::types::{DarkError, ReadKind};
use dark_core::ReadTranslator;
use std::io::{self, BufWriter, Write};

fn cli() -> Command {
    Command::new("dna-to-aa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert DNA to AA")
        .after_help(
            "Given DNA FASTA on stdin, output AA FASTA to stdout. \
             Optionally, filter by minimum required ORF length.",
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("TYPE")
                .help("The type of the bases in the stdin FASTA")
                .value_parser(["dna", "rna"])
                .default_value("dna"),
        )
        .arg(
            Arg::new("minORFLength")
                .long("minORFLength")
                .value_name("LEN")
                .help(
                    "Translations to AA that do not contain an ORF of at least \
                     this length will not be produced",
                )
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Main entry point for the dna-to-aa application.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    let quiet = matches.get_flag("quiet");
    init_logging(quiet);

    let read_kind: ReadKind = matches
        .get_one::<String>("type")
        .map_or("dna", String::as_str)
        .parse()?;

    let translator = ReadTranslator::new(TranslateConfig {
        read_kind,
        min_orf_length: matches.get_one::<usize>("minORFLength").copied(),
        quiet,
    });

    let mut writer = BufWriter::new(io::stdout().lock());
    match translator.translate_fasta(io::stdin().lock(), &mut writer) {
        Ok(_) => Ok(()),
        Err(error @ DarkError::UntranslatableRead { .. }) => {
            writer.flush()?;
            eprintln!("{error}");
            std::process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}
