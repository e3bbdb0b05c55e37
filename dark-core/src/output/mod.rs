//! Rendering reads as FASTA or FASTQ records.
//!
//! ## Supported Formats
//!
//! - **FASTA**: `>id`, then the sequence on one line
//! - **FASTQ**: `@id`, sequence, `+id`, quality; reads need quality
//!
//! Records are byte-exact and never wrapped.
//!
//! ## Examples
//!
//! ### Write to stdout
//!
//! ```rust,no_run
//! use dark_core::config::OutputFormat;
//! use dark_core::output::write_read;
//! use dark_core::read::Read;
//! use std::io::stdout;
//!
//! let read = Read::dna("read1", "ACGT");
//! write_read(&mut stdout(), &read, OutputFormat::Fasta)?;
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```

use std::io::Write;

use crate::config::OutputFormat;
use crate::read::Read;
use crate::types::DarkError;

mod formats {
    pub mod fasta;
    pub mod fastq;
}

use formats::{fasta::write_fasta_record, fastq::write_fastq_record};

/// Writes one read as a record in `format`.
///
/// # Errors
///
/// Returns [`DarkError::MissingQuality`] when writing FASTQ for a read
/// without quality, and [`DarkError::IoError`] if the writer fails.
pub fn write_read<W: Write>(
    writer: &mut W,
    read: &Read,
    format: OutputFormat,
) -> Result<(), DarkError> {
    match format {
        OutputFormat::Fasta => write_fasta_record(writer, read),
        OutputFormat::Fastq => write_fastq_record(writer, read),
    }
}

/// Writes every read in turn, returning how many were written.
///
/// # Errors
///
/// Stops at the first read that cannot be written.
pub fn write_reads<'a, W, I>(
    writer: &mut W,
    reads: I,
    format: OutputFormat,
) -> Result<usize, DarkError>
where
    W: Write,
    I: IntoIterator<Item = &'a Read>,
{
    let mut count = 0;
    for read in reads {
        write_read(writer, read, format)?;
        count += 1;
    }
    Ok(count)
}
