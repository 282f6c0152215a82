/*!
This module builds a frequency consensus from a position frequency table by picking the most common residue in every column.

# Example usage
```rust
use profile_con::composition::PositionFrequencyTable;
use profile_con::consensus::frequency_consensus;

let sequences = [
    b"AAB".to_vec(),
    b"AAC".to_vec(),
    b"AAB".to_vec()
];
let table = PositionFrequencyTable::aggregate(&sequences);
assert_eq!(frequency_consensus(&table), b"AAB");
```
*/

use log::debug;

use crate::analysis_config::DEFAULT_PLACEHOLDER;
use crate::composition::PositionFrequencyTable;

/// Returns the frequency consensus of a table, using `X` for columns without any residues.
/// # Arguments
/// * `table` - the per-column residue composition
/// # Examples
/// ```rust
/// use std::collections::BTreeMap;
/// use profile_con::composition::{PositionFrequencyTable, PositionProfile};
/// use profile_con::consensus::frequency_consensus;
/// let table = PositionFrequencyTable::new(vec![
///     PositionProfile::new(BTreeMap::from([(b'K', 60.0), (b'N', 40.0)]), 5),
///     PositionProfile::empty(),
///     PositionProfile::new(BTreeMap::from([(b'T', 50.0), (b'S', 50.0)]), 2),
/// ]);
/// assert_eq!(frequency_consensus(&table), b"KXS");
/// ```
pub fn frequency_consensus(table: &PositionFrequencyTable) -> Vec<u8> {
    frequency_consensus_config(table, DEFAULT_PLACEHOLDER)
}

/// Returns the frequency consensus of a table with a custom placeholder for empty columns.
/// When multiple residues share the top percentage, the lowest residue symbol is selected.
/// # Arguments
/// * `table` - the per-column residue composition
/// * `placeholder` - the symbol used for columns that no sequence reached
pub fn frequency_consensus_config(table: &PositionFrequencyTable, placeholder: u8) -> Vec<u8> {
    let mut empty_columns: usize = 0;
    let consensus: Vec<u8> = table.iter()
        .map(|profile| match profile.dominant() {
            Some((residue, _percentage)) => residue,
            None => {
                empty_columns += 1;
                placeholder
            }
        })
        .collect();

    debug!("Consensus length {} with {} placeholder columns", consensus.len(), empty_columns);
    consensus
}
