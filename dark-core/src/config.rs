use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::types::{DarkError, ReadKind};

/// Textual record formats a read can be rendered in.
///
/// # Examples
///
/// ```rust
/// use dark_core::config::OutputFormat;
///
/// let format: OutputFormat = "FASTQ".parse()?;
/// assert_eq!(format, OutputFormat::Fastq);
/// assert!("genbank".parse::<OutputFormat>().is_err());
/// # Ok::<(), dark_core::types::DarkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// `>` id, newline, sequence, newline
    #[default]
    Fasta,

    /// `@` id, sequence, `+` id, quality; one per line.
    ///
    /// Only valid for reads carrying quality information.
    Fastq,
}

impl FromStr for OutputFormat {
    type Err = DarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" => Ok(Self::Fasta),
            "fastq" => Ok(Self::Fastq),
            _ => Err(DarkError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fasta => write!(f, "fasta"),
            Self::Fastq => write!(f, "fastq"),
        }
    }
}

/// Settings for [`Reads::filter`](crate::collection::Reads::filter).
///
/// Stages are applied to each read in a fixed order, and a read rejected
/// by one stage never reaches the next:
///
/// 1. `head`
/// 2. `min_length` / `max_length`
/// 3. `remove_gaps`
/// 4. title rules (`whitelist`, `blacklist`, `title_regex`,
///    `negative_title_regex`, `truncate_titles_after`)
/// 5. `indices`
/// 6. `remove_duplicates`
/// 7. the caller's modifier, if one was given
///
/// # Examples
///
/// ```rust
/// use dark_core::config::FilterOptions;
///
/// let options = FilterOptions {
///     min_length: Some(50),
///     remove_duplicates: true,
///     title_regex: Some("^sample".to_string()),
///     ..Default::default()
/// };
/// assert!(options.has_title_rules());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Minimum acceptable read length (inclusive).
    pub min_length: Option<usize>,

    /// Maximum acceptable read length (inclusive).
    pub max_length: Option<usize>,

    /// Strip gap (`-`) characters from sequences.
    ///
    /// Later stages see the stripped read.
    pub remove_gaps: bool,

    /// Read ids that are always acceptable to the title stage.
    ///
    /// Other stages (length, duplicates, ...) can still reject them.
    pub whitelist: Option<HashSet<String>>,

    /// Read ids that are never acceptable.
    pub blacklist: Option<HashSet<String>>,

    /// Regex (case-insensitive) that read ids must match.
    pub title_regex: Option<String>,

    /// Regex (case-insensitive) that read ids must not match.
    pub negative_title_regex: Option<String>,

    /// Ids are truncated at the first occurrence of this string; a
    /// truncated id already seen is rejected.
    pub truncate_titles_after: Option<String>,

    /// Zero-based positions (in the source collection) of wanted reads.
    pub indices: Option<HashSet<usize>>,

    /// Number of reads at the start of the collection to consider.
    ///
    /// Filtering stops as soon as this many reads have been examined.
    pub head: Option<usize>,

    /// Keep only the first read with any given sequence.
    pub remove_duplicates: bool,
}

impl FilterOptions {
    /// Whether any title rule is configured.
    ///
    /// Empty whitelists and blacklists count as unset.
    #[must_use]
    pub fn has_title_rules(&self) -> bool {
        self.whitelist.as_ref().is_some_and(|ids| !ids.is_empty())
            || self.blacklist.as_ref().is_some_and(|ids| !ids.is_empty())
            || self.title_regex.is_some()
            || self.negative_title_regex.is_some()
            || self.truncate_titles_after.is_some()
    }
}

/// Configuration for the DNA to amino acid translation pipeline.
///
/// # Examples
///
/// ```rust
/// use dark_core::config::TranslateConfig;
/// use dark_core::types::ReadKind;
///
/// let config = TranslateConfig {
///     read_kind: ReadKind::Rna,
///     min_orf_length: Some(30),
///     ..Default::default()
/// };
/// assert!(!config.quiet);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslateConfig {
    /// Kind of the nucleotide reads on input.
    ///
    /// **Default**: [`ReadKind::Dna`]
    pub read_kind: ReadKind,

    /// Only emit translations holding an ORF at least this long.
    ///
    /// Translations without any ORF count as having a maximum ORF
    /// length of zero. **Default**: `None` (emit all six translations)
    pub min_orf_length: Option<usize>,

    /// Suppress the end-of-run summary.
    pub quiet: bool,
}
