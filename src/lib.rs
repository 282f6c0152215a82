/*!
# profile_con
This library characterizes residue variation across a collection of aligned protein sequences.
It computes the residue composition at every alignment column, derives a frequency consensus, and reports where a reference sequence departs from that consensus.

Key properties:
* Sequences may have different lengths; each column is scored only against the sequences that reach it
* Residues are opaque bytes, so gaps, stops, and lowercase symbols are counted like any other residue
* Consensus ties are resolved by residue symbol, making the output fully deterministic
* Every mismatch carries the full composition of its column

# Example usage
```rust
use profile_con::composition::PositionFrequencyTable;
use profile_con::consensus::frequency_consensus;
use profile_con::divergence::report_differences;

let sequences = [
    b"AAB".to_vec(),
    b"AAC".to_vec(),
    b"AAB".to_vec()
];

// build the composition table and consensus
let table = PositionFrequencyTable::aggregate(&sequences);
let consensus = frequency_consensus(&table);
assert_eq!(consensus, b"AAB");

// compare a reference against the consensus
let mismatches = report_differences(b"AAC", &consensus, &table);
assert_eq!(mismatches.len(), 1);
assert_eq!(mismatches[0].position(), 3);
assert_eq!(mismatches[0].composition().percentage(b'B'), 200.0 / 3.0);
```
*/

/// Configuration for a positional analysis run
pub mod analysis_config;
/// Per-column residue composition of an alignment
pub mod composition;
/// Frequency consensus from a composition table
pub mod consensus;
/// Reference versus consensus comparison
pub mod divergence;
/// Utility for generating examples
pub mod example_gen;
/// End-to-end analysis from a file or in-memory sequences
pub mod pipeline;
/// Text rendering of tables and mismatches
pub mod report;
/// Parser for headered multi-record sequence files
pub mod sequence_source;
