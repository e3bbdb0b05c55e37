use std::fmt;
use std::str::FromStr;

pub use bio::bio_types::strand::ReqStrand;
use thiserror::Error;

use crate::constants::{
    AA_ALPHABET, AA_ALPHABET_WITH_X, DNA_ALPHABET, DNA_COMPLEMENT_PAIRS, RNA_ALPHABET,
    RNA_COMPLEMENT_PAIRS,
};
use crate::sequence::complement::ComplementTable;

static DNA_COMPLEMENT: ComplementTable =
    ComplementTable::from_pairs(DNA_COMPLEMENT_PAIRS).with_lowercase();

static RNA_COMPLEMENT: ComplementTable =
    ComplementTable::from_pairs(RNA_COMPLEMENT_PAIRS).with_lowercase();

/// The closed set of read variants.
///
/// Every [`Read`](crate::read::Read) carries one of these tags. The tag
/// decides which alphabet the read is checked against and which operations
/// it supports: nucleotide reads can be reverse complemented and
/// translated, amino acid reads can be scanned for ORFs.
///
/// # Examples
///
/// ```rust
/// use dark_core::types::ReadKind;
///
/// let kind: ReadKind = "rna".parse()?;
/// assert!(kind.is_nucleotide());
/// assert_eq!(kind.alphabet(), b"ACGTU");
/// # Ok::<(), dark_core::types::DarkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadKind {
    /// DNA bases
    #[default]
    Dna,
    /// RNA bases
    Rna,
    /// The twenty standard amino acids
    AminoAcid,
    /// Amino acids plus the unknown residue `X`
    AminoAcidWithX,
}

impl ReadKind {
    /// Letters accepted by an alphabet check for this variant.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Dna => DNA_ALPHABET,
            Self::Rna => RNA_ALPHABET,
            Self::AminoAcid => AA_ALPHABET,
            Self::AminoAcidWithX => AA_ALPHABET_WITH_X,
        }
    }

    /// Whether reads of this variant hold nucleotides.
    #[must_use]
    pub const fn is_nucleotide(self) -> bool {
        matches!(self, Self::Dna | Self::Rna)
    }

    /// Whether reads of this variant hold amino acids.
    #[must_use]
    pub const fn is_amino_acid(self) -> bool {
        !self.is_nucleotide()
    }

    /// Complement table for nucleotide variants, `None` for amino acids.
    #[must_use]
    pub fn complement_table(self) -> Option<&'static ComplementTable> {
        match self {
            Self::Dna => Some(&DNA_COMPLEMENT),
            Self::Rna => Some(&RNA_COMPLEMENT),
            Self::AminoAcid | Self::AminoAcidWithX => None,
        }
    }
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dna => write!(f, "DNA"),
            Self::Rna => write!(f, "RNA"),
            Self::AminoAcid => write!(f, "AA"),
            Self::AminoAcidWithX => write!(f, "AA+X"),
        }
    }
}

impl FromStr for ReadKind {
    type Err = DarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(Self::Dna),
            "rna" => Ok(Self::Rna),
            "aa" | "protein" => Ok(Self::AminoAcid),
            "aax" => Ok(Self::AminoAcidWithX),
            other => Err(DarkError::ParseError(format!("Unknown read type: {other}"))),
        }
    }
}

/// Error types raised by read construction and transformation.
///
/// None of these are transient: each one is a contract violation by the
/// caller or malformed input, raised where it is detected.
#[derive(Error, Debug)]
pub enum DarkError {
    /// Quality string length differs from the sequence length
    #[error("Invalid read {id:?}: sequence length ({sequence}) != quality length ({quality})")]
    LengthMismatch {
        id: String,
        sequence: usize,
        quality: usize,
    },
    /// Sequence letters fall outside the read's alphabet
    #[error("Alphabet violation: {0}")]
    AlphabetViolation(String),
    /// ORF or slice bounds outside the parent sequence
    #[error("Range error: {0}")]
    RangeError(String),
    /// FASTQ output requested for a read with no quality
    #[error("Read {0:?} has no quality information")]
    MissingQuality(String),
    /// Output format name not recognised
    #[error("Unsupported format {0:?}: format must be either 'fasta' or 'fastq'")]
    UnsupportedFormat(String),
    /// A codon could not be translated
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// Maximum ORF length requested for a translation without ORFs
    #[error("Translated read {0:?} has no ORFs")]
    EmptyOrfSet(String),
    /// A whole read failed to translate
    #[error("Could not translate read {id:?} sequence {sequence:?} ({reason}).")]
    UntranslatableRead {
        id: String,
        sequence: String,
        reason: String,
    },
    /// Reading frame outside 0..=2
    #[error("Frame must be 0, 1, or 2 (got {0})")]
    InvalidFrame(usize),
    /// Operation not supported by this read variant
    #[error("{operation} is not supported for {kind} reads")]
    WrongReadKind {
        operation: &'static str,
        kind: ReadKind,
    },
    /// Title filter regex failed to compile
    #[error("Invalid title regex: {0}")]
    InvalidRegex(#[from] regex::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
