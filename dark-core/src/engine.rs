//! Six-frame translation of nucleotide FASTA, filtered by ORF length.

use std::io::{self, Write};

use crate::config::{OutputFormat, TranslateConfig};
use crate::output::write_read;
use crate::read::{Read, TranslatedRead};
use crate::sequence::FastaReads;
use crate::types::DarkError;

/// Totals from one [`ReadTranslator::translate_fasta`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    /// Nucleotide reads consumed.
    pub reads: usize,
    /// Translations written.
    pub translations_written: usize,
}

/// Translates nucleotide reads and keeps the translations with a long
/// enough ORF.
///
/// # Examples
///
/// ```rust
/// use dark_core::config::TranslateConfig;
/// use dark_core::engine::ReadTranslator;
///
/// let translator = ReadTranslator::new(TranslateConfig {
///     min_orf_length: Some(2),
///     ..Default::default()
/// });
///
/// let mut output = Vec::new();
/// let summary = translator.translate_fasta(&b">seq1\nATGGCCTAA\n"[..], &mut output)?;
/// assert_eq!(summary.reads, 1);
/// assert_eq!(summary.translations_written, 4);
/// assert!(String::from_utf8(output)?.starts_with(">seq1-frame1\nWPX\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadTranslator {
    /// Translation settings
    pub config: TranslateConfig,
}

impl ReadTranslator {
    pub const fn new(config: TranslateConfig) -> Self {
        Self { config }
    }

    /// Whether `translation` passes the minimum ORF length. A translation
    /// without ORFs has a maximum ORF length of zero.
    pub fn accepts(&self, translation: &TranslatedRead) -> bool {
        match self.config.min_orf_length {
            None => true,
            Some(min) => translation.maximum_orf_length().unwrap_or(0) >= min,
        }
    }

    /// The accepted translations of `read`, in frame order.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::UntranslatableRead`] if any frame of the read
    /// cannot be translated, and [`DarkError::WrongReadKind`] for amino
    /// acid reads.
    pub fn translate_read(&self, read: &Read) -> Result<Vec<TranslatedRead>, DarkError> {
        let translations = read.translations().map_err(|e| match e {
            DarkError::TranslationError(reason) => DarkError::UntranslatableRead {
                id: read.id().to_string(),
                sequence: read.sequence_str().into_owned(),
                reason,
            },
            other => other,
        })?;
        Ok(translations
            .into_iter()
            .filter(|translation| self.accepts(translation))
            .collect())
    }

    /// Reads nucleotide FASTA from `input` and writes the accepted
    /// translations of every read to `output` as FASTA.
    ///
    /// Processing stops at the first read that cannot be translated; none
    /// of that read's translations are written.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::UntranslatableRead`] for an untranslatable
    /// read, or any parse or I/O error.
    pub fn translate_fasta<R: io::Read, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<TranslationSummary, DarkError> {
        let mut summary = TranslationSummary::default();

        for read in FastaReads::new(input, self.config.read_kind) {
            let read = read?;
            summary.reads += 1;
            for translation in self.translate_read(&read)? {
                write_read(output, translation.read(), OutputFormat::Fasta)?;
                summary.translations_written += 1;
            }
        }

        output.flush()?;
        if !self.config.quiet {
            log::info!(
                "Wrote {} translations of {} {} reads.",
                summary.translations_written,
                summary.reads,
                self.config.read_kind
            );
        }
        Ok(summary)
    }
}
