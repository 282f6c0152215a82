/*!
This module compares a reference sequence against a consensus and reports every mismatched column along with the composition at that column.

# Example usage
```rust
use profile_con::composition::PositionFrequencyTable;
use profile_con::consensus::frequency_consensus;
use profile_con::divergence::report_differences;

let sequences = [
    b"IQKP".to_vec(),
    b"IQKP".to_vec(),
    b"IQNP".to_vec()
];
let table = PositionFrequencyTable::aggregate(&sequences);
let consensus = frequency_consensus(&table);

let mismatches = report_differences(b"IQNP", &consensus, &table);
assert_eq!(mismatches.len(), 1);
assert_eq!(mismatches[0].position(), 3);
assert_eq!(mismatches[0].reference_residue(), b'N');
assert_eq!(mismatches[0].consensus_residue(), b'K');
assert_eq!(mismatches[0].composition().depth(), 3);
```
*/

use log::{debug, trace};

use crate::composition::{PositionFrequencyTable, PositionProfile};

/// Shared composition for mismatches at columns the table does not cover
static EMPTY_PROFILE: PositionProfile = PositionProfile::empty();

/// A single column where the reference and the consensus disagree
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MismatchRecord<'a> {
    /// 1-based column position
    position: usize,
    /// The residue in the reference
    reference_residue: u8,
    /// The residue in the consensus
    consensus_residue: u8,
    /// Composition of the column in the frequency table
    composition: &'a PositionProfile
}

impl<'a> MismatchRecord<'a> {
    /// Constructor
    pub fn new(position: usize, reference_residue: u8, consensus_residue: u8, composition: &'a PositionProfile) -> MismatchRecord<'a> {
        MismatchRecord {
            position,
            reference_residue,
            consensus_residue,
            composition
        }
    }

    // Getters
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn reference_residue(&self) -> u8 {
        self.reference_residue
    }

    pub fn consensus_residue(&self) -> u8 {
        self.consensus_residue
    }

    pub fn composition(&self) -> &'a PositionProfile {
        self.composition
    }
}

/// Reports every column where `reference` differs from `consensus`, in ascending position order.
/// Only the shared prefix of the two sequences is compared; extra residues on either side are ignored.
/// If the table is shorter than a mismatched column, that record carries an empty composition.
/// # Arguments
/// * `reference` - the sequence being checked
/// * `consensus` - the consensus sequence, typically from `frequency_consensus(table)`
/// * `table` - the composition that generated the consensus
pub fn report_differences<'a>(reference: &[u8], consensus: &[u8], table: &'a PositionFrequencyTable) -> Vec<MismatchRecord<'a>> {
    if reference.len() != consensus.len() {
        debug!("Reference length {} differs from consensus length {}, comparing first {}", reference.len(), consensus.len(), reference.len().min(consensus.len()));
    }

    let differences: Vec<MismatchRecord<'a>> = reference.iter()
        .zip(consensus.iter())
        .enumerate()
        .filter(|(_i, (r, c))| r != c)
        .map(|(i, (&r, &c))| {
            let composition = table.get(i).unwrap_or(&EMPTY_PROFILE);
            trace!("Mismatch at {}: {} != {}", i + 1, r as char, c as char);
            MismatchRecord::new(i + 1, r, c, composition)
        })
        .collect();

    debug!("Found {} mismatches", differences.len());
    differences
}

/// Counts the mismatched columns over the shared prefix of two sequences.
/// # Arguments
/// * `s1` - the first sequence
/// * `s2` - the second sequence
/// # Examples
/// ```rust
/// use profile_con::divergence::count_mismatches;
/// assert_eq!(count_mismatches(b"IQKPDPAV", b"IQDPDPAV"), 1);
/// assert_eq!(count_mismatches(b"IQKPDPAV", b"IQK"), 0);
/// ```
pub fn count_mismatches(s1: &[u8], s2: &[u8]) -> usize {
    s1.iter().zip(s2.iter())
        .filter(|(a, b)| a != b)
        .count()
}
