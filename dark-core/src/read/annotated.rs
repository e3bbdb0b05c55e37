use std::ops::Range;

use super::Read;
use crate::types::{DarkError, ReadKind};

/// An amino acid read with one secondary structure symbol per residue.
///
/// Structure symbols are free-form bytes; predictions from
/// [`crate::structure`] use `H` (helix), `E` (strand) and `C` (coil).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SsAaRead {
    read: Read,
    structure: Vec<u8>,
}

impl SsAaRead {
    /// # Errors
    ///
    /// Returns [`DarkError::LengthMismatch`] if the structure and sequence
    /// lengths differ.
    pub fn new(
        id: impl Into<String>,
        sequence: impl Into<Vec<u8>>,
        structure: impl Into<Vec<u8>>,
    ) -> Result<Self, DarkError> {
        let read = Read::new(ReadKind::AminoAcid, id, sequence);
        Self::from_read(read, structure)
    }

    /// Attaches `structure` to an existing amino acid read.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads and
    /// [`DarkError::LengthMismatch`] on a length disagreement.
    pub fn from_read(read: Read, structure: impl Into<Vec<u8>>) -> Result<Self, DarkError> {
        if !read.kind().is_amino_acid() {
            return Err(DarkError::WrongReadKind {
                operation: "structure annotation",
                kind: read.kind(),
            });
        }
        let structure = structure.into();
        if structure.len() != read.len() {
            return Err(DarkError::LengthMismatch {
                id: read.id().to_string(),
                sequence: read.len(),
                quality: structure.len(),
            });
        }
        Ok(Self { read, structure })
    }

    /// Annotates `read` with the shared predictor's structure.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::WrongReadKind`] for nucleotide reads.
    pub fn predicted(read: Read) -> Result<Self, DarkError> {
        let prediction = read.predict_structure()?;
        Ok(Self {
            read,
            structure: prediction.predictions,
        })
    }

    pub fn read(&self) -> &Read {
        &self.read
    }

    pub fn id(&self) -> &str {
        self.read.id()
    }

    pub fn sequence(&self) -> &[u8] {
        self.read.sequence()
    }

    pub fn structure(&self) -> &[u8] {
        &self.structure
    }

    pub fn len(&self) -> usize {
        self.read.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_empty()
    }

    /// Sequence and structure over `range`, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::RangeError`] if `range` is reversed or runs past
    /// the end of the read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::read::SsAaRead;
    ///
    /// let read = SsAaRead::new("ss", "MKLV", "CHHE")?;
    /// let middle = read.slice(1..3)?;
    /// assert_eq!(middle.sequence(), b"KL");
    /// assert_eq!(middle.structure(), b"HH");
    /// assert_eq!(middle.id(), "ss");
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn slice(&self, range: Range<usize>) -> Result<Self, DarkError> {
        if range.start > range.end || range.end > self.len() {
            return Err(DarkError::RangeError(format!(
                "slice {}..{} out of bounds for {:?} (length {})",
                range.start,
                range.end,
                self.id(),
                self.len()
            )));
        }
        Ok(Self {
            read: Read::new(
                self.read.kind(),
                self.read.id(),
                &self.read.sequence()[range.clone()],
            ),
            structure: self.structure[range].to_vec(),
        })
    }
}

impl AsRef<Read> for SsAaRead {
    fn as_ref(&self) -> &Read {
        &self.read
    }
}
