use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use bio::io::{fasta, fastq};

use crate::collection::{ReadIter, ReadSource};
use crate::config::OutputFormat;
use crate::read::Read;
use crate::types::{DarkError, ReadKind};

/// Full FASTA/FASTQ title: the id plus the description, if any.
///
/// The parser splits the header at its first whitespace character and drops
/// it, so the two parts are rejoined with a single space. A header such as
/// `a\tb  c` becomes `a b  c`. Trailing whitespace is trimmed.
fn title(id: &str, description: Option<&str>) -> String {
    match description {
        Some(description) if !description.is_empty() => format!("{id} {description}"),
        _ => id.to_string(),
    }
}

/// Reads of a given kind parsed from FASTA input.
///
/// The read id is the title line without the leading `>`. The whitespace
/// character after the first word always comes back as a space.
///
/// # Examples
///
/// ```rust
/// use dark_core::sequence::FastaReads;
/// use dark_core::types::ReadKind;
///
/// let input = ">seq1 first\nATGC\nGCTA\n>seq2\nTTAA\n";
/// let reads = FastaReads::new(input.as_bytes(), ReadKind::Dna)
///     .collect::<Result<Vec<_>, _>>()?;
///
/// assert_eq!(reads.len(), 2);
/// assert_eq!(reads[0].id(), "seq1 first");
/// assert_eq!(reads[0].sequence(), b"ATGCGCTA");
/// # Ok::<(), dark_core::types::DarkError>(())
/// ```
pub struct FastaReads<B: BufRead> {
    records: fasta::Records<B>,
    kind: ReadKind,
}

impl<R: io::Read> FastaReads<BufReader<R>> {
    /// Wraps any reader; it is buffered internally.
    pub fn new(reader: R, kind: ReadKind) -> Self {
        Self {
            records: fasta::Reader::new(reader).records(),
            kind,
        }
    }
}

impl<B: BufRead> Iterator for FastaReads<B> {
    type Item = Result<Read, DarkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(DarkError::ParseError(e.to_string()))),
        };
        Some(Ok(Read::new(
            self.kind,
            title(record.id(), record.desc()),
            record.seq().to_vec(),
        )))
    }
}

/// Reads of a given kind parsed from FASTQ input, quality included.
pub struct FastqReads<B: BufRead> {
    records: fastq::Records<B>,
    kind: ReadKind,
}

impl<R: io::Read> FastqReads<BufReader<R>> {
    /// Wraps any reader; it is buffered internally.
    pub fn new(reader: R, kind: ReadKind) -> Self {
        Self {
            records: fastq::Reader::new(reader).records(),
            kind,
        }
    }
}

impl<B: BufRead> Iterator for FastqReads<B> {
    type Item = Result<Read, DarkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(DarkError::ParseError(e.to_string()))),
        };
        Some(Read::with_quality(
            self.kind,
            title(record.id(), record.desc()),
            record.seq().to_vec(),
            record.qual().to_vec(),
        ))
    }
}

/// A restartable [`ReadSource`] over a FASTA or FASTQ file.
///
/// Every call to [`ReadSource::reads`] reopens the file, so a collection
/// built over a `FileSource` can be iterated any number of times.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    kind: ReadKind,
    format: OutputFormat,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P, kind: ReadKind, format: OutputFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            kind,
            format,
        }
    }

    pub fn fasta<P: AsRef<Path>>(path: P, kind: ReadKind) -> Self {
        Self::new(path, kind, OutputFormat::Fasta)
    }

    pub fn fastq<P: AsRef<Path>>(path: P, kind: ReadKind) -> Self {
        Self::new(path, kind, OutputFormat::Fastq)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadSource for FileSource {
    fn reads(&self) -> Result<ReadIter<'_>, DarkError> {
        let file = File::open(&self.path)?;
        log::debug!("Opened {} reads from {}", self.format, self.path.display());
        Ok(match self.format {
            OutputFormat::Fasta => Box::new(FastaReads::new(file, self.kind)),
            OutputFormat::Fastq => Box::new(FastqReads::new(file, self.kind)),
        })
    }
}

/// Reads every record of a FASTA file into memory.
pub fn read_fasta_file<P: AsRef<Path>>(path: P, kind: ReadKind) -> Result<Vec<Read>, DarkError> {
    let file = File::open(path)?;
    FastaReads::new(file, kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fasta_reads_basic() {
        let input = ">test_sequence\nATCG\nGCTA\n";
        let reads: Vec<Read> = FastaReads::new(input.as_bytes(), ReadKind::Dna)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reads.len(), 1);
        assert_eq!(reads[0].id(), "test_sequence");
        assert_eq!(reads[0].sequence(), b"ATCGGCTA");
        assert_eq!(reads[0].kind(), ReadKind::Dna);
        assert!(reads[0].quality().is_none());
    }

    #[test]
    fn test_fasta_reads_empty_input() {
        let reads: Vec<Read> = FastaReads::new(&b""[..], ReadKind::Dna)
            .collect::<Result<_, _>>()
            .unwrap();
        assert!(reads.is_empty());
    }

    #[test]
    fn test_fasta_reads_with_description() {
        let input = ">seq1 This is a test sequence\nATCG\n>seq2\nGCTA\n";
        let reads: Vec<Read> = FastaReads::new(input.as_bytes(), ReadKind::Rna)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reads[0].id(), "seq1 This is a test sequence");
        assert_eq!(reads[1].id(), "seq2");
        assert_eq!(reads[1].kind(), ReadKind::Rna);
    }

    #[test]
    fn test_fasta_reads_invalid_header() {
        let input = "ATCG\n>seq\nAAA\n";
        let result: Result<Vec<Read>, _> = FastaReads::new(input.as_bytes(), ReadKind::Dna).collect();
        assert!(matches!(result, Err(DarkError::ParseError(_))));
    }

    #[test]
    fn test_fasta_reads_header_separator() {
        let input = ">a\tb  c\nACGT\n>d\t\nTT\n>e  f\nA\n";
        let reads: Vec<Read> = FastaReads::new(input.as_bytes(), ReadKind::Dna)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reads[0].id(), "a b  c");
        assert_eq!(reads[1].id(), "d");
        assert_eq!(reads[2].id(), "e  f");
    }

    #[test]
    fn test_fastq_reads_with_quality() {
        let input = "@r1 desc\nACGT\n+\n!!!!\n@r2\nTT\n+\nII\n";
        let reads: Vec<Read> = FastqReads::new(input.as_bytes(), ReadKind::Dna)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].id(), "r1 desc");
        assert_eq!(reads[0].quality(), Some(&b"!!!!"[..]));
        assert_eq!(reads[1].sequence(), b"TT");
    }

    #[test]
    fn test_file_source_is_restartable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">a\nACGT\n>b\nGGCC\n").unwrap();

        let source = FileSource::fasta(file.path(), ReadKind::Dna);
        let first: Vec<Read> = source.reads().unwrap().collect::<Result<_, _>>().unwrap();
        let second: Vec<Read> = source.reads().unwrap().collect::<Result<_, _>>().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::fasta("nonexistent_file.fa", ReadKind::Dna);
        assert!(matches!(source.reads(), Err(DarkError::IoError(_))));
    }

    #[test]
    fn test_read_fasta_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">seq1\nATCG\n>seq2\nGCTA\n>seq3\nTTAA\n").unwrap();
        let reads = read_fasta_file(file.path(), ReadKind::Dna).unwrap();
        let ids: Vec<&str> = reads.iter().map(Read::id).collect();
        assert_eq!(ids, ["seq1", "seq2", "seq3"]);
    }
}
