use std::fmt;

use super::{Orfs, Read};
use crate::constants::READING_FRAMES;
use crate::types::{DarkError, ReadKind, ReqStrand};

/// One frame of a six-frame translation, tagged with its provenance.
///
/// The id is `"<origin>-frame<F>"`, with `rc` appended for translations of
/// the reverse complement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslatedRead {
    read: Read,
    origin_id: String,
    frame: usize,
    strand: ReqStrand,
}

impl TranslatedRead {
    /// Wraps `protein`, the translation of `origin` in `frame` on `strand`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::InvalidFrame`] unless `frame` is 0, 1 or 2.
    pub fn new(
        origin: &Read,
        protein: Vec<u8>,
        frame: usize,
        strand: ReqStrand,
    ) -> Result<Self, DarkError> {
        if frame >= READING_FRAMES {
            return Err(DarkError::InvalidFrame(frame));
        }
        let suffix = if strand == ReqStrand::Reverse { "rc" } else { "" };
        let id = format!("{}-frame{frame}{suffix}", origin.id());
        Ok(Self {
            read: Read::new(ReadKind::AminoAcid, id, protein),
            origin_id: origin.id().to_string(),
            frame,
            strand,
        })
    }

    pub fn read(&self) -> &Read {
        &self.read
    }

    pub fn into_read(self) -> Read {
        self.read
    }

    pub fn id(&self) -> &str {
        self.read.id()
    }

    pub fn sequence(&self) -> &[u8] {
        self.read.sequence()
    }

    pub fn origin_id(&self) -> &str {
        &self.origin_id
    }

    pub const fn frame(&self) -> usize {
        self.frame
    }

    pub const fn strand(&self) -> ReqStrand {
        self.strand
    }

    pub fn is_reverse_complemented(&self) -> bool {
        self.strand == ReqStrand::Reverse
    }

    pub fn orfs(&self) -> Orfs<'_> {
        Orfs::new(&self.read)
    }

    /// Length of the longest ORF in this translation.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::EmptyOrfSet`] when the translation has no ORFs.
    /// Callers filtering on ORF length decide what that means for them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::read::Read;
    ///
    /// let translations = Read::dna("r", "ATGGCCTAA").translations()?;
    /// assert_eq!(translations[0].maximum_orf_length()?, 1);
    /// assert_eq!(translations[1].maximum_orf_length()?, 3);
    /// assert!(translations[4].maximum_orf_length().is_err());
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn maximum_orf_length(&self) -> Result<usize, DarkError> {
        self.orfs()
            .map(|orf| orf.len())
            .max()
            .ok_or_else(|| DarkError::EmptyOrfSet(self.id().to_string()))
    }
}

impl AsRef<Read> for TranslatedRead {
    fn as_ref(&self) -> &Read {
        &self.read
    }
}

impl From<TranslatedRead> for Read {
    fn from(translated: TranslatedRead) -> Self {
        translated.read
    }
}

impl fmt::Display for TranslatedRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_id() {
        let origin = Read::dna("origin", "ATG");
        let translated = TranslatedRead::new(&origin, b"M".to_vec(), 2, ReqStrand::Forward).unwrap();
        assert_eq!(translated.id(), "origin-frame2");
        assert_eq!(translated.origin_id(), "origin");
        assert_eq!(translated.frame(), 2);
        assert!(!translated.is_reverse_complemented());
        assert_eq!(translated.read().kind(), ReadKind::AminoAcid);
        assert_eq!(translated.to_string(), "origin-frame2");
    }

    #[test]
    fn test_reverse_id() {
        let origin = Read::dna("origin", "ATG");
        let translated = TranslatedRead::new(&origin, b"H".to_vec(), 0, ReqStrand::Reverse).unwrap();
        assert_eq!(translated.id(), "origin-frame0rc");
        assert!(translated.is_reverse_complemented());
        assert_eq!(translated.strand(), ReqStrand::Reverse);
    }

    #[test]
    fn test_equality_and_hash() {
        use std::collections::HashSet;

        let origin = Read::dna("o", "ATG");
        let forward = TranslatedRead::new(&origin, b"M".to_vec(), 0, ReqStrand::Forward).unwrap();
        let reverse = TranslatedRead::new(&origin, b"M".to_vec(), 0, ReqStrand::Reverse).unwrap();
        assert_eq!(forward, forward.clone());
        assert_ne!(forward, reverse);

        let set: HashSet<TranslatedRead> = [forward.clone(), forward, reverse].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_invalid_frame() {
        let origin = Read::dna("origin", "ATG");
        assert!(matches!(
            TranslatedRead::new(&origin, Vec::new(), 3, ReqStrand::Forward),
            Err(DarkError::InvalidFrame(3))
        ));
    }

    #[test]
    fn test_quality_not_carried() {
        let origin = Read::with_quality(ReadKind::Dna, "q", "ATG", "!!!").unwrap();
        let translated = TranslatedRead::new(&origin, b"M".to_vec(), 0, ReqStrand::Forward).unwrap();
        assert!(translated.read().quality().is_none());
    }

    #[test]
    fn test_maximum_orf_length() {
        let origin = Read::dna("o", "");
        let translated =
            TranslatedRead::new(&origin, b"AA*MAAAA*M".to_vec(), 0, ReqStrand::Forward).unwrap();
        // [0,2) open left, [4,8) closed; trailing M has nothing after it.
        assert_eq!(translated.maximum_orf_length().unwrap(), 4);
    }

    #[test]
    fn test_maximum_orf_length_empty() {
        let origin = Read::dna("o", "");
        let translated = TranslatedRead::new(&origin, b"*AX".to_vec(), 1, ReqStrand::Reverse).unwrap();
        match translated.maximum_orf_length() {
            Err(DarkError::EmptyOrfSet(id)) => assert_eq!(id, "o-frame1rc"),
            other => panic!("Expected EmptyOrfSet, got {other:?}"),
        }
    }

    #[test]
    fn test_into_read() {
        let origin = Read::dna("o", "ATG");
        let translated = TranslatedRead::new(&origin, b"M".to_vec(), 0, ReqStrand::Forward).unwrap();
        let read: Read = translated.into();
        assert_eq!(read.id(), "o-frame0");
    }
}
