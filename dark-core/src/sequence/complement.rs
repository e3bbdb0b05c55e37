//! Byte-level complement tables.

/// A total byte-to-byte substitution table used for complementing bases.
///
/// Every one of the 256 byte values has an entry; bytes with no pairing
/// map to themselves, so complementing never fails.
///
/// # Examples
///
/// ```rust
/// use dark_core::sequence::complement::ComplementTable;
///
/// const TABLE: ComplementTable = ComplementTable::from_pairs(&[(b'A', b'T'), (b'T', b'A')]);
///
/// assert_eq!(TABLE.complement(b'A'), b'T');
/// assert_eq!(TABLE.complement(b'-'), b'-');
/// assert_eq!(TABLE.reverse_complement(b"AAT"), b"ATT".to_vec());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ComplementTable {
    table: [u8; 256],
}

impl ComplementTable {
    /// Builds a table from `(from, to)` pairs. Matching is case-sensitive:
    /// only the exact bytes listed are substituted.
    #[must_use]
    pub const fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut table = [0u8; 256];
        let mut byte = 0;
        while byte < 256 {
            table[byte] = byte as u8;
            byte += 1;
        }

        let mut i = 0;
        while i < pairs.len() {
            let (from, to) = pairs[i];
            table[from as usize] = to;
            i += 1;
        }

        Self { table }
    }

    /// Mirrors every uppercase letter substitution onto its lowercase form,
    /// so lowercase bases complement to lowercase partners.
    #[must_use]
    pub const fn with_lowercase(mut self) -> Self {
        let mut upper = b'A';
        while upper <= b'Z' {
            let to = self.table[upper as usize];
            if to != upper && to.is_ascii_uppercase() {
                self.table[upper.to_ascii_lowercase() as usize] = to.to_ascii_lowercase();
            }
            upper += 1;
        }
        self
    }

    /// Complement of a single byte
    #[inline]
    #[must_use]
    pub const fn complement(&self, base: u8) -> u8 {
        self.table[base as usize]
    }

    /// Complements every byte and reverses the result.
    #[must_use]
    pub fn reverse_complement(&self, sequence: &[u8]) -> Vec<u8> {
        sequence
            .iter()
            .rev()
            .map(|&base| self.complement(base))
            .collect()
    }
}

impl std::fmt::Debug for ComplementTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let substitutions: Vec<(char, char)> = self
            .table
            .iter()
            .enumerate()
            .filter(|&(from, &to)| from != to as usize)
            .map(|(from, &to)| (from as u8 as char, to as char))
            .collect();
        f.debug_struct("ComplementTable")
            .field("substitutions", &substitutions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DNA_COMPLEMENT_PAIRS, RNA_COMPLEMENT_PAIRS};

    #[test]
    fn test_identity_for_unmapped_bytes() {
        let table = ComplementTable::from_pairs(&[]);
        for byte in 0..=255u8 {
            assert_eq!(table.complement(byte), byte);
        }
    }

    #[test]
    fn test_dna_pairs() {
        let table = ComplementTable::from_pairs(DNA_COMPLEMENT_PAIRS);
        assert_eq!(table.complement(b'A'), b'T');
        assert_eq!(table.complement(b'T'), b'A');
        assert_eq!(table.complement(b'C'), b'G');
        assert_eq!(table.complement(b'G'), b'C');
        assert_eq!(table.complement(b'R'), b'Y');
        assert_eq!(table.complement(b'B'), b'V');
        assert_eq!(table.complement(b'N'), b'N');
        assert_eq!(table.complement(b'U'), b'U');
    }

    #[test]
    fn test_rna_pairs() {
        let table = ComplementTable::from_pairs(RNA_COMPLEMENT_PAIRS);
        assert_eq!(table.complement(b'A'), b'U');
        assert_eq!(table.complement(b'U'), b'A');
        assert_eq!(table.complement(b'T'), b'T');
    }

    #[test]
    fn test_case_sensitive_without_lowercase() {
        let table = ComplementTable::from_pairs(DNA_COMPLEMENT_PAIRS);
        assert_eq!(table.complement(b'a'), b'a');
        assert_eq!(table.complement(b'c'), b'c');
    }

    #[test]
    fn test_lowercase_mirrors() {
        let table = ComplementTable::from_pairs(DNA_COMPLEMENT_PAIRS).with_lowercase();
        assert_eq!(table.complement(b'a'), b't');
        assert_eq!(table.complement(b'g'), b'c');
        assert_eq!(table.complement(b'r'), b'y');
        assert_eq!(table.complement(b'n'), b'n');
        assert_eq!(table.complement(b'A'), b'T');
    }

    #[test]
    fn test_reverse_complement() {
        let table = ComplementTable::from_pairs(DNA_COMPLEMENT_PAIRS).with_lowercase();
        assert_eq!(table.reverse_complement(b"ATGGCCTAA"), b"TTAGGCCAT".to_vec());
        assert_eq!(table.reverse_complement(b"acgT"), b"Acgt".to_vec());
        assert!(table.reverse_complement(b"").is_empty());
    }
}
