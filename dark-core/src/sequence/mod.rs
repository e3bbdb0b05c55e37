//! Nucleotide-level sequence utilities.
//!
//! ## Modules
//!
//! - [`complement`]: Byte complement tables and reverse complementation
//! - [`translation`]: Codon and reading-frame translation
//! - [`io`]: FASTA/FASTQ readers producing [`Read`](crate::read::Read)s
//!
//! ## Examples
//!
//! ```rust
//! use dark_core::sequence::{reverse_complement, translate_frame};
//! use dark_core::types::ReadKind;
//!
//! let rc = reverse_complement(b"ATGGCCTAA", ReadKind::Dna)?;
//! assert_eq!(rc, b"TTAGGCCAT".to_vec());
//! assert_eq!(translate_frame(&rc, 0)?, b"LGH".to_vec());
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```

pub mod complement;
pub mod io;
pub mod translation;

pub use io::*;
pub use translation::{translate_codon, translate_frame};

use crate::types::{DarkError, ReadKind};

/// Reverse complement of a raw sequence using the table for `kind`.
///
/// # Errors
///
/// Returns [`DarkError::WrongReadKind`] for amino acid kinds.
pub fn reverse_complement(sequence: &[u8], kind: ReadKind) -> Result<Vec<u8>, DarkError> {
    let table = kind
        .complement_table()
        .ok_or(DarkError::WrongReadKind {
            operation: "reverse complement",
            kind,
        })?;
    Ok(table.reverse_complement(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_dna() {
        assert_eq!(
            reverse_complement(b"AACGTT", ReadKind::Dna).unwrap(),
            b"AACGTT".to_vec()
        );
        assert_eq!(
            reverse_complement(b"AAAC", ReadKind::Dna).unwrap(),
            b"GTTT".to_vec()
        );
    }

    #[test]
    fn test_reverse_complement_rna() {
        assert_eq!(
            reverse_complement(b"AAUG", ReadKind::Rna).unwrap(),
            b"CAUU".to_vec()
        );
    }

    #[test]
    fn test_reverse_complement_rejects_amino_acids() {
        assert!(matches!(
            reverse_complement(b"MAAA", ReadKind::AminoAcid),
            Err(DarkError::WrongReadKind { .. })
        ));
    }

    #[test]
    fn test_reverse_complement_twice_is_identity() {
        for sequence in [&b"ATGGCCTAA"[..], b"GATTACA", b"", b"acgtACGT", b"CCCCG"] {
            let once = reverse_complement(sequence, ReadKind::Dna).unwrap();
            let twice = reverse_complement(&once, ReadKind::Dna).unwrap();
            assert_eq!(twice, sequence);
        }
        let once = reverse_complement(b"GAUUACA", ReadKind::Rna).unwrap();
        assert_eq!(reverse_complement(&once, ReadKind::Rna).unwrap(), b"GAUUACA");
    }
}
