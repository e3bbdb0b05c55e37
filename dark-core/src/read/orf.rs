use std::fmt;
use std::ops::Range;

use super::Read;
use crate::constants::{START_RESIDUE, STOP_RESIDUE};
use crate::types::DarkError;

/// An ORF fragment: the range `[start, stop)` of a parent amino acid read.
///
/// `open_left` means no start codon was seen, so the ORF may begin before
/// `start`. `open_right` means no stop codon was seen, so it may continue
/// past `stop`.
///
/// The id encodes the parent id, the range and its openness:
///
/// ```text
/// parent-[1:4]   closed on both sides
/// parent-(0:3]   open left
/// parent-[1:4)   open right
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AaReadOrf {
    read: Read,
    parent_id: String,
    start: usize,
    stop: usize,
    open_left: bool,
    open_right: bool,
}

impl AaReadOrf {
    /// Cuts `[start, stop)` out of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::RangeError`] unless
    /// `start <= stop <= parent.len()`.
    pub fn new(
        parent: &Read,
        start: usize,
        stop: usize,
        open_left: bool,
        open_right: bool,
    ) -> Result<Self, DarkError> {
        if start > stop {
            return Err(DarkError::RangeError(format!(
                "start offset ({start}) greater than stop offset ({stop})"
            )));
        }
        if stop > parent.len() {
            return Err(DarkError::RangeError(format!(
                "stop offset ({stop}) exceeds parent {:?} length ({})",
                parent.id(),
                parent.len()
            )));
        }
        Ok(Self::from_parts(parent, start, stop, open_left, open_right))
    }

    // Callers guarantee the range is within the parent.
    fn from_parts(parent: &Read, start: usize, stop: usize, open_left: bool, open_right: bool) -> Self {
        let id = format!(
            "{}-{}{start}:{stop}{}",
            parent.id(),
            if open_left { '(' } else { '[' },
            if open_right { ')' } else { ']' },
        );
        Self {
            read: Read::new(parent.kind(), id, &parent.sequence()[start..stop]),
            parent_id: parent.id().to_string(),
            start,
            stop,
            open_left,
            open_right,
        }
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

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn stop(&self) -> usize {
        self.stop
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.stop
    }

    pub const fn open_left(&self) -> bool {
        self.open_left
    }

    pub const fn open_right(&self) -> bool {
        self.open_right
    }

    pub const fn len(&self) -> usize {
        self.stop - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.stop
    }
}

impl AsRef<Read> for AaReadOrf {
    fn as_ref(&self) -> &Read {
        &self.read
    }
}

impl fmt::Display for AaReadOrf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Lazy, single-pass scan for ORFs in an amino acid read.
///
/// Scanning state:
///
/// - `orf_start`: where the current candidate ORF began, if any
/// - `open_left`: no start codon has confirmed the current region; true at
///   the beginning of the read since nothing before index 0 can close it
/// - `seen_start`: a start codon was seen since the last stop
///
/// A start residue (`M`) clears `open_left` and sets `seen_start`. A stop
/// residue (`*`) emits the pending ORF, if non-empty, closed on the right,
/// then clears all state. Any other residue opens a candidate ORF when one
/// could be in progress. At the end of the read a pending ORF is emitted
/// open on the right.
///
/// Empty ORFs are never produced. Once exhausted the iterator stays
/// exhausted; call [`Read::orfs`] again for a fresh scan.
#[derive(Debug, Clone)]
pub struct Orfs<'a> {
    read: &'a Read,
    position: usize,
    orf_start: Option<usize>,
    open_left: bool,
    seen_start: bool,
    finished: bool,
}

impl<'a> Orfs<'a> {
    pub(crate) const fn new(read: &'a Read) -> Self {
        Self {
            read,
            position: 0,
            orf_start: None,
            open_left: true,
            seen_start: false,
            finished: false,
        }
    }

    const fn may_be_in_orf(&self) -> bool {
        self.seen_start || self.open_left
    }
}

impl Iterator for Orfs<'_> {
    type Item = AaReadOrf;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let sequence = self.read.sequence();
        while let Some(&residue) = sequence.get(self.position) {
            let index = self.position;
            self.position += 1;

            match residue {
                START_RESIDUE => {
                    self.open_left = false;
                    self.seen_start = true;
                }
                STOP_RESIDUE => {
                    let pending = self.orf_start.take().filter(|&start| index > start);
                    let open_left = self.open_left;
                    self.open_left = false;
                    self.seen_start = false;
                    if let Some(start) = pending {
                        return Some(AaReadOrf::from_parts(self.read, start, index, open_left, false));
                    }
                }
                _ => {
                    if self.may_be_in_orf() && self.orf_start.is_none() {
                        self.orf_start = Some(index);
                    }
                }
            }
        }

        self.finished = true;
        let length = sequence.len();
        match self.orf_start.take() {
            Some(start) if self.may_be_in_orf() && length > start => Some(AaReadOrf::from_parts(
                self.read,
                start,
                length,
                self.open_left,
                true,
            )),
            _ => None,
        }
    }
}

impl std::iter::FusedIterator for Orfs<'_> {}
