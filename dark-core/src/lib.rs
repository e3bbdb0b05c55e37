//! # Dark Core
//!
//! Sequence reads and the transformations biologists run on them before
//! looking for "dark matter": reads that match nothing known.
//!
//! ## Overview
//!
//! A [`Read`] is an id, a sequence and optional quality, tagged with a
//! [`ReadKind`](types::ReadKind). Nucleotide reads can be reverse
//! complemented and translated in all six reading frames. Amino acid reads
//! can be scanned for open reading frames (ORFs), annotated with residue
//! properties, and given a secondary structure prediction.
//!
//! ## Features
//!
//! - **Six-frame translation**: IUPAC-aware codon translation with fixed
//!   frame order
//! - **ORF detection**: lazy scan reporting whether each ORF boundary was
//!   confirmed by a start or stop codon
//! - **Read collections**: restartable iteration, a filter pipeline, and
//!   FASTA/FASTQ persistence
//! - **Residue annotation**: property flags, scaled property values and
//!   GOR secondary structure
//!
//! ## Quick Start
//!
//! ```rust
//! use dark_core::Read;
//!
//! let read = Read::dna("read1", "ATGGCCTAA");
//!
//! for translation in read.translations()? {
//!     let longest = translation.maximum_orf_length().unwrap_or(0);
//!     println!("{}: {} (longest ORF {longest})", translation.id(), translation.read().sequence_str());
//! }
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```
//!
//! ## ORF boundaries
//!
//! ```rust
//! use dark_core::Read;
//!
//! let protein = Read::aa("protein", "AAA*MKL");
//! let ids: Vec<String> = protein.orfs()?.map(|orf| orf.id().to_string()).collect();
//! assert_eq!(ids, ["protein-(0:3]", "protein-[5:7)"]);
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`read`]: reads and their derived forms (translations, ORFs,
//!   structure-annotated reads)
//! - [`sequence`]: complement tables, codon translation, FASTA/FASTQ input
//! - [`collection`]: read collections and the filter pipeline
//! - [`filter`]: title-based accept/reject rules
//! - [`properties`]: amino acid property tables
//! - [`structure`]: secondary structure prediction
//! - [`engine`]: the DNA to amino acid translation pipeline
//! - [`output`]: FASTA/FASTQ record writers
//! - [`config`]: option structs
//! - [`types`]: read kinds and the error type
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, DarkError>`](types::DarkError),
//! covering:
//!
//! - Malformed reads (quality length, alphabet)
//! - Untranslatable codons
//! - Invalid ORF ranges and empty ORF sets
//! - Missing quality and unknown formats on output
//! - I/O and parse errors

pub mod collection;
pub mod config;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod output;
pub mod properties;
pub mod read;
pub mod sequence;
pub mod structure;
pub mod types;

pub use collection::Reads;
pub use engine::ReadTranslator;
pub use read::Read;
pub use types::DarkError;
