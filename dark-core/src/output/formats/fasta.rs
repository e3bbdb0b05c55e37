use std::io::Write;

use crate::read::Read;
use crate::types::DarkError;

/// Write a read as an unwrapped FASTA record
pub fn write_fasta_record<W: Write>(writer: &mut W, read: &Read) -> Result<(), DarkError> {
    writer.write_all(b">")?;
    writer.write_all(read.id().as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(read.sequence())?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fasta_record() {
        let mut buffer = Vec::new();
        write_fasta_record(&mut buffer, &Read::aa("prot", "MKLV*")).unwrap();
        assert_eq!(buffer, b">prot\nMKLV*\n");
    }

    #[test]
    fn test_fasta_ignores_quality() {
        let read = Read::with_quality(crate::types::ReadKind::Dna, "q", "AC", "!!").unwrap();
        let mut buffer = Vec::new();
        write_fasta_record(&mut buffer, &read).unwrap();
        assert_eq!(buffer, b">q\nAC\n");
    }

    #[test]
    fn test_long_sequence_not_wrapped() {
        let sequence = "A".repeat(200);
        let mut buffer = Vec::new();
        write_fasta_record(&mut buffer, &Read::dna("long", sequence.as_str())).unwrap();
        assert_eq!(buffer.iter().filter(|&&b| b == b'\n').count(), 2);
    }
}
