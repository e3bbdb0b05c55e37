use std::io::Write;

use crate::read::Read;
use crate::types::DarkError;

/// Write a read as a four-line FASTQ record, repeating the id after `+`
pub fn write_fastq_record<W: Write>(writer: &mut W, read: &Read) -> Result<(), DarkError> {
    let quality = read
        .quality()
        .ok_or_else(|| DarkError::MissingQuality(read.id().to_string()))?;
    let id = read.id().as_bytes();

    writer.write_all(b"@")?;
    writer.write_all(id)?;
    writer.write_all(b"\n")?;
    writer.write_all(read.sequence())?;
    writer.write_all(b"\n+")?;
    writer.write_all(id)?;
    writer.write_all(b"\n")?;
    writer.write_all(quality)?;
    writer.write_all(b"\n")?;
    Ok(())
}
