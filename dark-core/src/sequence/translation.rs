//! Codon translation with the standard genetic code.
//!
//! Ambiguous IUPAC bases are expanded into every concrete codon they
//! stand for, and the set of resulting residues is narrowed to a single
//! letter where possible:
//!
//! - every expansion is a stop codon: `*`
//! - every expansion codes the same amino acid: that amino acid
//! - expansions mix stops and amino acids: `X`
//! - expansions code several amino acids: `B` (D/N), `Z` (E/Q),
//!   `J` (I/L), otherwise `X`
//!
//! A codon holding anything that is not an IUPAC nucleotide code is a
//! [`DarkError::TranslationError`].

use crate::constants::{
    CODON_LENGTH, PADDING_BASE, STANDARD_CODE, STOP_RESIDUE, UNKNOWN_RESIDUE,
};
use crate::types::DarkError;

/// Concrete bases an IUPAC code stands for, in `TCAG` index order.
const fn expand_base(base: u8) -> Option<&'static [usize]> {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => Some(&[0]),
        b'C' => Some(&[1]),
        b'A' => Some(&[2]),
        b'G' => Some(&[3]),
        b'Y' => Some(&[0, 1]),
        b'W' => Some(&[0, 2]),
        b'K' => Some(&[0, 3]),
        b'M' => Some(&[1, 2]),
        b'S' => Some(&[1, 3]),
        b'R' => Some(&[2, 3]),
        b'H' => Some(&[0, 1, 2]),
        b'B' => Some(&[0, 1, 3]),
        b'D' => Some(&[0, 2, 3]),
        b'V' => Some(&[1, 2, 3]),
        b'N' | b'X' => Some(&[0, 1, 2, 3]),
        _ => None,
    }
}

/// Ambiguity letters tried, in order, when a codon codes several amino acids.
const AMBIGUOUS_RESIDUES: &[(u8, &[u8])] = &[(b'B', b"DN"), (b'Z', b"EQ"), (b'J', b"IL")];

/// Translates a single codon.
///
/// # Errors
///
/// Returns [`DarkError::TranslationError`] if the codon is not exactly three
/// bases long or holds a character that is not an IUPAC nucleotide code.
///
/// # Examples
///
/// ```rust
/// use dark_core::sequence::translation::translate_codon;
///
/// assert_eq!(translate_codon(b"ATG")?, b'M');
/// assert_eq!(translate_codon(b"uaa")?, b'*');
/// assert_eq!(translate_codon(b"GCN")?, b'A');
/// assert_eq!(translate_codon(b"NNN")?, b'X');
/// assert!(translate_codon(b"A-G").is_err());
/// # Ok::<(), dark_core::types::DarkError>(())
/// ```
pub fn translate_codon(codon: &[u8]) -> Result<u8, DarkError> {
    let invalid = || {
        DarkError::TranslationError(format!(
            "Codon '{}' is invalid",
            String::from_utf8_lossy(codon)
        ))
    };

    let [first, second, third] = codon else {
        return Err(invalid());
    };
    let first = expand_base(*first).ok_or_else(invalid)?;
    let second = expand_base(*second).ok_or_else(invalid)?;
    let third = expand_base(*third).ok_or_else(invalid)?;

    // Unambiguous codons are the common case.
    if first.len() == 1 && second.len() == 1 && third.len() == 1 {
        return Ok(STANDARD_CODE[first[0] * 16 + second[0] * 4 + third[0]]);
    }

    let mut residues: Vec<u8> = Vec::with_capacity(4);
    let mut stops = false;
    for &b1 in first {
        for &b2 in second {
            for &b3 in third {
                let residue = STANDARD_CODE[b1 * 16 + b2 * 4 + b3];
                if residue == STOP_RESIDUE {
                    stops = true;
                } else if !residues.contains(&residue) {
                    residues.push(residue);
                }
            }
        }
    }

    Ok(match (stops, residues.as_slice()) {
        (true, []) => STOP_RESIDUE,
        (true, _) => UNKNOWN_RESIDUE,
        (false, [single]) => *single,
        (false, several) => AMBIGUOUS_RESIDUES
            .iter()
            .find(|(_, covers)| several.iter().all(|residue| covers.contains(residue)))
            .map_or(UNKNOWN_RESIDUE, |&(letter, _)| letter),
    })
}

/// Translates `sequence` starting at `frame`.
///
/// The first `frame` bases are skipped and the remainder is padded with
/// `N` up to a whole number of codons, so a trailing partial codon still
/// produces a residue (usually `X`). The result holds
/// `ceil((len - frame) / 3)` residues.
///
/// # Errors
///
/// Returns [`DarkError::TranslationError`] on the first untranslatable codon.
///
/// # Examples
///
/// ```rust
/// use dark_core::sequence::translation::translate_frame;
///
/// assert_eq!(translate_frame(b"ATGGCCTAA", 0)?, b"MA*".to_vec());
/// assert_eq!(translate_frame(b"ATGGCCTAA", 1)?, b"WPX".to_vec());
/// # Ok::<(), dark_core::types::DarkError>(())
/// ```
pub fn translate_frame(sequence: &[u8], frame: usize) -> Result<Vec<u8>, DarkError> {
    let suffix = sequence.get(frame..).unwrap_or_default();
    let mut protein = Vec::with_capacity(suffix.len().div_ceil(CODON_LENGTH));

    for chunk in suffix.chunks(CODON_LENGTH) {
        let residue = if chunk.len() == CODON_LENGTH {
            translate_codon(chunk)?
        } else {
            let mut codon = [PADDING_BASE; CODON_LENGTH];
            codon[..chunk.len()].copy_from_slice(chunk);
            translate_codon(&codon)?
        };
        protein.push(residue);
    }

    Ok(protein)
}
