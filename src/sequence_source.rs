/*!
Loads aligned sequences from a headered multi-record text format (FASTA-like).
Each record starts with a `>` header line whose content is ignored, followed by one or more data lines that get concatenated.

# Example usage
```rust
use profile_con::sequence_source::read_sequences;

let text = ">seq1\nIQKP\nDPAV\n\n>seq2\nIQNPDPAV\n";
let sequences = read_sequences(text.as_bytes()).unwrap();
assert_eq!(sequences, vec![b"IQKPDPAV".to_vec(), b"IQNPDPAV".to_vec()]);
```
*/

use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a file and parses all of the sequence records in it.
/// # Arguments
/// * `path` - the file to load
/// # Errors
/// * if the file cannot be opened or read
pub fn load_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, Box<dyn std::error::Error>> {
    debug!("Loading sequences from {:?}", path.as_ref());
    let file = File::open(path.as_ref())?;
    read_sequences(BufReader::new(file))
}

/// Parses all of the sequence records from a reader.
/// Lines are trimmed, blank lines are skipped, and records without any data lines are dropped.
/// Data lines before the first header become their own record.
/// # Arguments
/// * `reader` - the text source
/// # Errors
/// * if reading a line fails, including lines that are not valid UTF-8
pub fn read_sequences<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>, Box<dyn std::error::Error>> {
    let mut sequences = vec![];
    let mut current: Vec<u8> = vec![];

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            // new header, close out whatever we have so far
            if !current.is_empty() {
                trace!("Record {} has length {}", sequences.len(), current.len());
                sequences.push(std::mem::take(&mut current));
            }
        } else {
            current.extend_from_slice(line.as_bytes());
        }
    }

    // the last record does not have a header after it
    if !current.is_empty() {
        trace!("Record {} has length {}", sequences.len(), current.len());
        sequences.push(current);
    }

    debug!("Parsed {} sequences", sequences.len());
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_records() {
        let text = ">a\nAC\nDE\n>b\nACDF\n";
        let sequences = read_sequences(text.as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"ACDE".to_vec(), b"ACDF".to_vec()]);
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let text = "\n>a  \n  AC \r\n\n  DE\n\n>b\n\tACDF\t\n\n";
        let sequences = read_sequences(text.as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"ACDE".to_vec(), b"ACDF".to_vec()]);
    }

    #[test]
    fn test_data_before_header() {
        // no header at the start, this should still be its own record
        let text = "KLM\nNP\n>b\nQRS\n";
        let sequences = read_sequences(text.as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"KLMNP".to_vec(), b"QRS".to_vec()]);

        // no header at all
        let sequences = read_sequences("KLM\nNP".as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"KLMNP".to_vec()]);
    }

    #[test]
    fn test_empty_records() {
        // headers without data do not produce anything
        let text = ">a\n>b\nAC\n>c\n\n";
        let sequences = read_sequences(text.as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"AC".to_vec()]);

        let sequences = read_sequences("".as_bytes()).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_gaps_are_kept() {
        let text = ">a\nAC--D*\n>b\nac-KD\n";
        let sequences = read_sequences(text.as_bytes()).unwrap();
        assert_eq!(sequences, vec![b"AC--D*".to_vec(), b"ac-KD".to_vec()]);
    }

    #[test]
    fn test_load_file() {
        let sequences = load_sequences("./tests/alignment_001.txt").unwrap();
        assert_eq!(sequences.len(), 5);
        assert_eq!(sequences[0], b"IQKPDPAVYQLRDSKSS");
        assert_eq!(sequences[4], b"IQKPEPAVYQ");
    }

    #[test]
    fn test_missing_file() {
        let result = load_sequences("./tests/does_not_exist.txt");
        assert!(result.is_err());
    }
}
