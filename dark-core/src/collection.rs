//! Collections of reads and the filter pipeline over them.
//!
//! A [`Reads`] collection has two parts: an optional restartable
//! [`ReadSource`] (a file, another in-memory list, ...) and a tail of reads
//! added directly. Iteration yields the source's reads first, then the tail.
//!
//! ## Examples
//!
//! ```rust
//! use dark_core::collection::Reads;
//! use dark_core::config::FilterOptions;
//! use dark_core::read::Read;
//!
//! let reads = Reads::from_reads(vec![
//!     Read::dna("a", "ACGT"),
//!     Read::dna("b", "ACGT"),
//!     Read::dna("c", "TTTT"),
//! ]);
//!
//! let options = FilterOptions {
//!     remove_duplicates: true,
//!     ..Default::default()
//! };
//! let unique = reads.filter(&options)?;
//! assert_eq!(unique.len(), 2);
//! # Ok::<(), dark_core::types::DarkError>(())
//! ```

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::{FilterOptions, OutputFormat};
use crate::constants::GAP_SYMBOL;
use crate::filter::TitleFilter;
use crate::output::write_read;
use crate::read::Read;
use crate::types::DarkError;

/// Boxed iterator handed out by a [`ReadSource`].
pub type ReadIter<'a> = Box<dyn Iterator<Item = Result<Read, DarkError>> + 'a>;

/// A source of reads that can be iterated from the start any number of
/// times.
pub trait ReadSource {
    /// Starts a fresh pass over the source.
    fn reads(&self) -> Result<ReadIter<'_>, DarkError>;
}

impl ReadSource for Vec<Read> {
    fn reads(&self) -> Result<ReadIter<'_>, DarkError> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

/// Counts from [`Reads::summarize_position`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSummary {
    /// Reads too short to have a residue at the position.
    pub excluded_count: usize,
    /// How often each residue occurs at the position.
    pub count_at_position: HashMap<u8, usize>,
}

/// An ordered, restartable collection of reads.
///
/// Iteration borrows the collection and records how many reads a complete
/// pass produced; [`len`](Self::len) reports that count. The bookkeeping uses
/// a [`Cell`], so a collection is not shared between threads.
#[derive(Default)]
pub struct Reads {
    source: Option<Box<dyn ReadSource>>,
    additional: Vec<Read>,
    known_len: Cell<usize>,
}

impl fmt::Debug for Reads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reads")
            .field("has_source", &self.source.is_some())
            .field("additional", &self.additional.len())
            .field("known_len", &self.known_len.get())
            .finish()
    }
}

impl Reads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection holding exactly `reads`.
    pub fn from_reads(reads: Vec<Read>) -> Self {
        Self {
            source: None,
            known_len: Cell::new(reads.len()),
            additional: reads,
        }
    }

    /// Collection whose reads come from `source`. The length is unknown
    /// (reported as 0) until a pass completes.
    pub fn with_source<S: ReadSource + 'static>(source: S) -> Self {
        Self {
            source: Some(Box::new(source)),
            additional: Vec::new(),
            known_len: Cell::new(0),
        }
    }

    /// Appends a read after everything else in the collection.
    pub fn add(&mut self, read: Read) {
        self.additional.push(read);
        self.known_len.set(self.known_len.get() + 1);
    }

    /// Number of reads produced by the last complete pass, or the number
    /// known so far if no pass has completed.
    pub fn len(&self) -> usize {
        self.known_len.get()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a pass over the collection.
    ///
    /// # Errors
    ///
    /// Returns any error the source raises while starting.
    pub fn iter(&self) -> Result<ReadsIter<'_>, DarkError> {
        let source = self.source.as_ref().map(|source| source.reads()).transpose()?;
        Ok(ReadsIter {
            source,
            additional: self.additional.iter(),
            observed: 0,
            known_len: &self.known_len,
            finished: false,
        })
    }

    /// Writes every read to `writer`, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns the first read, format or I/O error.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: OutputFormat) -> Result<usize, DarkError> {
        let mut count = 0;
        for read in self.iter()? {
            write_read(writer, &read?, format)?;
            count += 1;
        }
        writer.flush()?;
        Ok(count)
    }

    /// Writes every read to a new file at `path`, returning how many were
    /// written.
    ///
    /// If anything fails after the file is created, the partial file is
    /// removed before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the first read, format or I/O error.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<usize, DarkError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let result = self.write_to(&mut writer, format);
        drop(writer);

        match result {
            Ok(count) => {
                log::info!("Saved {count} reads to {} as {format}", path.display());
                Ok(count)
            }
            Err(e) => {
                if let Err(remove_error) = fs::remove_file(path) {
                    log::warn!(
                        "Could not remove partially written {}: {remove_error}",
                        path.display()
                    );
                }
                Err(e)
            }
        }
    }

    /// [`filter_with`](Self::filter_with) without a modifier.
    ///
    /// # Errors
    ///
    /// See [`filter_with`](Self::filter_with).
    pub fn filter(&self, options: &FilterOptions) -> Result<Self, DarkError> {
        self.filter_with(options, Some)
    }

    /// Runs one pass through the filter pipeline and collects the survivors.
    ///
    /// Stages, in order, for each read (the index counts every read the
    /// pass sees):
    ///
    /// 1. stop once `head` reads have been seen
    /// 2. reject lengths outside `min_length..=max_length`
    /// 3. strip gaps
    /// 4. title rules
    /// 5. reject indices not in `indices`
    /// 6. reject sequences already seen
    /// 7. `modifier`, which replaces the read or rejects it with `None`
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::InvalidRegex`] for a bad title regex, or any
    /// error raised by the source.
    pub fn filter_with<F>(&self, options: &FilterOptions, mut modifier: F) -> Result<Self, DarkError>
    where
        F: FnMut(Read) -> Option<Read>,
    {
        let mut title_filter = TitleFilter::from_options(options)?;
        let mut sequences_seen: HashSet<Vec<u8>> = HashSet::new();
        let mut rejected = RejectionCounts::default();
        let mut kept = Vec::new();

        for (index, read) in self.iter()?.enumerate() {
            if options.head == Some(index) {
                break;
            }
            let mut read = read?;

            let length = read.len();
            if options.min_length.is_some_and(|min| length < min)
                || options.max_length.is_some_and(|max| length > max)
            {
                rejected.length += 1;
                continue;
            }

            if options.remove_gaps {
                read = read.without_gaps(GAP_SYMBOL);
            }

            if let Some(filter) = title_filter.as_mut() {
                if !filter.accept(read.id()).is_accepted() {
                    rejected.title += 1;
                    continue;
                }
            }

            if let Some(indices) = &options.indices {
                if !indices.contains(&index) {
                    rejected.index += 1;
                    continue;
                }
            }

            if options.remove_duplicates && !sequences_seen.insert(read.sequence().to_vec()) {
                rejected.duplicate += 1;
                continue;
            }

            match modifier(read) {
                Some(modified) => kept.push(modified),
                None => rejected.modifier += 1,
            }
        }

        log::debug!("Filter kept {} reads; rejected {rejected}", kept.len());
        Ok(Self::from_reads(kept))
    }

    /// Residue counts at `index` across the collection.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::collection::Reads;
    /// use dark_core::read::Read;
    ///
    /// let reads = Reads::from_reads(vec![
    ///     Read::dna("a", "AC"),
    ///     Read::dna("b", "AG"),
    ///     Read::dna("c", "A"),
    /// ]);
    /// let summary = reads.summarize_position(1)?;
    /// assert_eq!(summary.excluded_count, 1);
    /// assert_eq!(summary.count_at_position[&b'C'], 1);
    /// assert_eq!(summary.count_at_position[&b'G'], 1);
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn summarize_position(&self, index: usize) -> Result<PositionSummary, DarkError> {
        let mut summary = PositionSummary::default();
        for read in self.iter()? {
            match read?.sequence().get(index) {
                Some(&residue) => *summary.count_at_position.entry(residue).or_insert(0) += 1,
                None => summary.excluded_count += 1,
            }
        }
        Ok(summary)
    }
}

impl FromIterator<Read> for Reads {
    fn from_iter<T: IntoIterator<Item = Read>>(iter: T) -> Self {
        Self::from_reads(iter.into_iter().collect())
    }
}

impl Extend<Read> for Reads {
    fn extend<T: IntoIterator<Item = Read>>(&mut self, iter: T) {
        for read in iter {
            self.add(read);
        }
    }
}

/// One pass over a [`Reads`] collection.
pub struct ReadsIter<'a> {
    source: Option<ReadIter<'a>>,
    additional: std::slice::Iter<'a, Read>,
    observed: usize,
    known_len: &'a Cell<usize>,
    finished: bool,
}

impl Iterator for ReadsIter<'_> {
    type Item = Result<Read, DarkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(item) => {
                    if item.is_ok() {
                        self.observed += 1;
                    }
                    return Some(item);
                }
                None => self.source = None,
            }
        }

        match self.additional.next() {
            Some(read) => {
                self.observed += 1;
                Some(Ok(read.clone()))
            }
            None => {
                self.finished = true;
                self.known_len.set(self.observed);
                None
            }
        }
    }
}

#[derive(Debug, Default)]
struct RejectionCounts {
    length: usize,
    title: usize,
    index: usize,
    duplicate: usize,
    modifier: usize,
}

impl fmt::Display for RejectionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length={} title={} index={} duplicate={} modifier={}",
            self.length, self.title, self.index, self.duplicate, self.modifier
        )
    }
}
