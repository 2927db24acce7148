use crate::error::{Error, ErrorKind, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Reads the sequences of all records of a fasta file, in file order.
pub fn read_sequences_from_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    info!("Reading sequences from '{}'", path.as_ref().display());
    read_sequences_from_fasta(File::open(path)?)
}

/// Reads the sequences of all records of a fasta stream, in stream order.
///
/// Sequences are read as text, so they are not restricted to any alphabet, but must be valid UTF-8.
pub fn read_sequences_from_fasta<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    for record in bio::io::fasta::Reader::new(reader).records() {
        let record = record?;
        let sequence = String::from_utf8(record.seq().to_vec()).map_err(|e| {
            Error::with_chain(e, ErrorKind::NonUtf8Sequence(record.id().to_owned()))
        })?;
        debug!(
            "Read record '{}' with {} characters",
            record.id(),
            sequence.chars().count()
        );
        sequences.push(sequence);
    }

    Ok(sequences)
}

/// Writes a single sequence as fasta record into a new file, or truncates the file if it exists.
pub fn write_sequence_as_fasta_file<P: AsRef<Path>>(
    id: &str,
    description: Option<&str>,
    sequence: &str,
    path: P,
) -> Result<()> {
    info!("Writing sequence '{}' to '{}'", id, path.as_ref().display());
    write_sequence_as_fasta(id, description, sequence, BufWriter::new(File::create(path)?))
}

/// Writes a single sequence as fasta record.
pub fn write_sequence_as_fasta<W: Write>(
    id: &str,
    description: Option<&str>,
    sequence: &str,
    writer: W,
) -> Result<()> {
    let mut writer = bio::io::fasta::Writer::new(writer);
    writer.write(id, description, sequence.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_sequences_from_fasta, write_sequence_as_fasta};

    #[test]
    fn test_read_sequences_from_fasta() {
        let input = b">first\nACGT\nACGT\n>second some description\nGGC\n";
        let sequences = read_sequences_from_fasta(&input[..]).unwrap();
        assert_eq!(sequences, vec!["ACGTACGT".to_string(), "GGC".to_string()]);
    }

    #[test]
    fn test_read_sequences_from_fasta_non_utf8() {
        let input = b">broken\nAC\xff\n";
        assert!(read_sequences_from_fasta(&input[..]).is_err());
    }

    #[test]
    fn test_write_and_read_sequence() {
        let mut output = Vec::new();
        write_sequence_as_fasta("reconstruction", Some("k=7"), "ATGGCTAG", &mut output).unwrap();
        assert!(output.starts_with(b">reconstruction k=7\n"));
        let sequences = read_sequences_from_fasta(&output[..]).unwrap();
        assert_eq!(sequences, vec!["ATGGCTAG".to_string()]);
    }
}
