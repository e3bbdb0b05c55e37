//! Sequence reads and the operations their variants support.
//!
//! A [`Read`] is an immutable value: an id, a sequence and optional
//! per-position quality, tagged with a [`ReadKind`]. The tag decides
//! which capabilities apply:
//!
//! | Capability                 | DNA / RNA | AA / AA+X |
//! |----------------------------|-----------|-----------|
//! | alphabet check, rendering  | yes       | yes       |
//! | reverse complement         | yes       |           |
//! | six-frame translation      | yes       |           |
//! | ORFs, properties, structure|           | yes       |
//!
//! Asking a read for a capability its kind lacks returns
//! [`DarkError::WrongReadKind`].
//!
//! Derived reads wrap a plain `Read`:
//!
//! - [`TranslatedRead`]: one frame of a six-frame translation
//! - [`AaReadOrf`]: an ORF fragment of an amino acid read
//! - [`SsAaRead`]: an amino acid read with secondary structure
//!
//! ## Examples
//!
//! ```rust
//! use dark_core::read::Read;
//!
//! let read = Read::dna("read1", "ATGGCCTAA");
//! let translations = read.translations()?;
//! assert_eq!(translations.len(), 6);
//! assert_eq!(translations[0].id(), "read1-frame0");
//! assert_eq!(translations[0].sequence(), b"MA*");
//! assert_eq!(translations[3].id(), "read1-frame0rc");
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```

mod annotated;
mod orf;
mod translated;

pub use annotated::SsAaRead;
pub use orf::{AaReadOrf, Orfs};
pub use translated::TranslatedRead;

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::config::OutputFormat;
use crate::constants::{DEFAULT_ALPHABET_CHECK_COUNT, DNA_ALPHABET, DNA_LOOKALIKE_MIN_LENGTH};
use crate::output;
use crate::properties::{self, AaProperties, PropertyDetails};
use crate::sequence::reverse_complement;
use crate::sequence::translation::translate_frame;
use crate::structure::{shared_predictor, StructurePrediction, StructurePredictor};
use crate::types::{DarkError, ReadKind, ReqStrand};

/// A single sequence read.
///
/// Equality and hashing are structural over id, sequence, quality and
/// kind. Every transformation returns a new read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Read {
    id: String,
    sequence: Vec<u8>,
    quality: Option<Vec<u8>>,
    kind: ReadKind,
}

impl Read {
    /// Creates a read without quality information.
    pub fn new(kind: ReadKind, id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
            quality: None,
            kind,
        }
    }

    /// Creates a read with per-position quality.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::LengthMismatch`] if `quality` and `sequence`
    /// differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::read::Read;
    /// use dark_core::types::{DarkError, ReadKind};
    ///
    /// let read = Read::with_quality(ReadKind::Dna, "r1", "ACGT", "!!!!")?;
    /// assert_eq!(read.quality(), Some(&b"!!!!"[..]));
    ///
    /// let error = Read::with_quality(ReadKind::Dna, "r2", "ACGT", "!!").unwrap_err();
    /// assert!(matches!(error, DarkError::LengthMismatch { .. }));
    /// # Ok::<(), DarkError>(())
    /// ```
    pub fn with_quality(
        kind: ReadKind,
        id: impl Into<String>,
        sequence: impl Into<Vec<u8>>,
        quality: impl Into<Vec<u8>>,
    ) -> Result<Self, DarkError> {
        let id = id.into();
        let sequence = sequence.into();
        let quality = quality.into();
        if quality.len() != sequence.len() {
            return Err(DarkError::LengthMismatch {
                id,
                sequence: sequence.len(),
                quality: quality.len(),
            });
        }
        Ok(Self {
            id,
            sequence,
            quality: Some(quality),
            kind,
        })
    }

    /// DNA read without quality
    pub fn dna(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self::new(ReadKind::Dna, id, sequence)
    }

    /// RNA read without quality
    pub fn rna(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self::new(ReadKind::Rna, id, sequence)
    }

    /// Amino acid read without quality
    pub fn aa(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self::new(ReadKind::AminoAcid, id, sequence)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Sequence as text, with invalid UTF-8 replaced.
    pub fn sequence_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.sequence)
    }

    pub fn quality(&self) -> Option<&[u8]> {
        self.quality.as_deref()
    }

    pub const fn kind(&self) -> ReadKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Same read with a different id.
    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Renders the read in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::MissingQuality`] when FASTQ is requested for a
    /// read without quality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::config::OutputFormat;
    /// use dark_core::read::Read;
    ///
    /// let read = Read::dna("id1", "ACGT");
    /// assert_eq!(read.to_format_string(OutputFormat::Fasta)?, ">id1\nACGT\n");
    /// assert!(read.to_format_string(OutputFormat::Fastq).is_err());
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn to_format_string(&self, format: OutputFormat) -> Result<String, DarkError> {
        let mut buffer = Vec::with_capacity(self.len() * 2 + self.id.len() * 2 + 6);
        output::write_read(&mut buffer, self, format)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Checks that the first `count` residues (all of them for `None`)
    /// belong to this read's alphabet. The check is case-insensitive.
    ///
    /// Returns the set of upper-cased letters seen.
    ///
    /// Amino acid reads longer than ten residues whose checked letters all
    /// fall within `ACGT` are rejected as well: DNA letters are valid amino
    /// acids, so this is the only way to notice DNA passed by mistake.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::AlphabetViolation`] on any foreign letter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::read::Read;
    ///
    /// let read = Read::dna("r", "acgtNNNN");
    /// assert!(read.check_alphabet(Some(4)).is_ok());
    /// assert!(read.check_alphabet(None).is_err());
    /// ```
    pub fn check_alphabet(&self, count: Option<usize>) -> Result<BTreeSet<u8>, DarkError> {
        let checked = match count {
            Some(count) => &self.sequence[..count.min(self.len())],
            None => &self.sequence[..],
        };
        let letters: BTreeSet<u8> = checked.iter().map(u8::to_ascii_uppercase).collect();
        let alphabet = self.kind.alphabet();

        if !letters.iter().all(|letter| alphabet.contains(letter)) {
            return Err(DarkError::AlphabetViolation(format!(
                "Read alphabet ({:?}) is not a subset of expected alphabet ({:?}) for {} read {:?}.",
                String::from_utf8_lossy(&letters.iter().copied().collect::<Vec<_>>()),
                String::from_utf8_lossy(alphabet),
                self.kind,
                self.id
            )));
        }

        if self.kind.is_amino_acid()
            && self.len() > DNA_LOOKALIKE_MIN_LENGTH
            && letters.iter().all(|letter| DNA_ALPHABET.contains(letter))
        {
            return Err(DarkError::AlphabetViolation(format!(
                "It looks like a DNA sequence has been passed as amino acid read {:?}.",
                self.id
            )));
        }

        Ok(letters)
    }

    /// [`check_alphabet`](Self::check_alphabet) over the default prefix
    pub fn check_alphabet_prefix(&self) -> Result<BTreeSet<u8>, DarkError> {
        self.check_alphabet(Some(DEFAULT_ALPHABET_CHECK_COUNT))
    }

    /// Fraction of residues in low-complexity regions, which by convention
    /// are written in lowercase. `0.0` for an empty read.
    pub fn low_complexity_fraction(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let lowercase = self
            .sequence
            .iter()
            .filter(|base| base.is_ascii_lowercase())
            .count();
        lowercase as f64 / self.len() as f64
    }

    /// Copy of this read with every `gap` symbol removed. Quality values at
    /// the removed positions are dropped too, keeping both the same length.
    #[must_use]
    pub fn without_gaps(&self, gap: u8) -> Self {
        let keep = |index: &usize| self.sequence[*index] != gap;
        let positions: Vec<usize> = (0..self.len()).filter(keep).collect();
        if positions.len() == self.len() {
            return self.clone();
        }
        Self {
            id: self.id.clone(),
            sequence: positions.iter().map(|&i| self.sequence[i]).collect(),
            quality: self
                .quality
                .as_ref()
                .map(|quality| positions.iter().map(|&i| quality[i]).collect()),
            kind: self.kind,
        }
    }

    fn require_amino_acid(&self, operation: &'static str) -> Result<(), DarkError> {
        if self.kind.is_amino_acid() {
            Ok(())
        } else {
            Err(DarkError::WrongReadKind {
                operation,
                kind: self.kind,
            })
        }
    }

    // ---------------------------------------------------------------------
    // Nucleotide capabilities
    // ---------------------------------------------------------------------

    /// Reverse complement of a DNA or RNA read.
    ///
    /// The sequence is complemented and reversed; quality, if any, is
    /// reversed. Lowercase bases complement to lowercase partners.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for amino acid reads.
    pub fn reverse_complement(&self) -> Result<Self, DarkError> {
        Ok(Self {
            id: self.id.clone(),
            sequence: reverse_complement(&self.sequence, self.kind)?,
            quality: self
                .quality
                .as_ref()
                .map(|quality| quality.iter().rev().copied().collect()),
            kind: self.kind,
        })
    }

    /// All six translations of a DNA or RNA read.
    ///
    /// Order is fixed: forward frames 0, 1, 2, then reverse-complement
    /// frames 0, 1, 2.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for amino acid reads and
    /// [`DarkError::TranslationError`] if any frame holds an untranslatable
    /// codon. A failure in one frame fails the whole read.
    pub fn translations(&self) -> Result<Vec<TranslatedRead>, DarkError> {
        let reverse = reverse_complement(&self.sequence, self.kind)?;
        let mut translations = Vec::with_capacity(6);

        let strands = [
            (ReqStrand::Forward, &self.sequence),
            (ReqStrand::Reverse, &reverse),
        ];
        for (strand, sequence) in strands {
            for frame in 0..3 {
                let protein = translate_frame(sequence, frame)?;
                translations.push(TranslatedRead::new(self, protein, frame, strand)?);
            }
        }

        Ok(translations)
    }

    // ---------------------------------------------------------------------
    // Amino acid capabilities
    // ---------------------------------------------------------------------

    /// Lazy scan for ORFs in an amino acid read.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::read::Read;
    ///
    /// let read = Read::aa("p", "MAAA*GG*");
    /// let orfs: Vec<_> = read.orfs()?.collect();
    /// assert_eq!(orfs.len(), 1);
    /// assert_eq!(orfs[0].id(), "p-[1:4]");
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn orfs(&self) -> Result<Orfs<'_>, DarkError> {
        self.require_amino_acid("ORF detection")?;
        Ok(Orfs::new(self))
    }

    /// Property flags of every residue; unknown residues have none.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    pub fn properties(&self) -> Result<Vec<AaProperties>, DarkError> {
        self.require_amino_acid("property annotation")?;
        Ok(self.sequence.iter().map(|&aa| properties::properties(aa)).collect())
    }

    /// Scaled property values of every residue; `None` for unknown residues.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    pub fn property_details(&self) -> Result<Vec<Option<PropertyDetails>>, DarkError> {
        self.require_amino_acid("property annotation")?;
        Ok(self
            .sequence
            .iter()
            .map(|&aa| properties::property_details(aa))
            .collect())
    }

    /// Secondary structure prediction from the shared predictor.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    pub fn predict_structure(&self) -> Result<StructurePrediction, DarkError> {
        self.predict_structure_with(shared_predictor())
    }

    /// Secondary structure prediction from a caller-supplied predictor.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    pub fn predict_structure_with<P: StructurePredictor + ?Sized>(
        &self,
        predictor: &P,
    ) -> Result<StructurePrediction, DarkError> {
        self.require_amino_acid("structure prediction")?;
        Ok(predictor.predict(&self.sequence))
    }
}
