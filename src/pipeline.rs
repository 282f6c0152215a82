/*!
This module provides the end-to-end positional analysis: load sequences, compute the composition table, build the consensus, and compare the reference.

# Example usage
```rust
use profile_con::analysis_config::AnalysisConfigBuilder;
use profile_con::pipeline::PositionalAnalysis;

let config = AnalysisConfigBuilder::default()
    .input_path("unused.txt")
    .reference(b"IQNPDPAV".to_vec())
    .build()
    .unwrap();

let sequences = [
    b"IQKPDPAV".to_vec(),
    b"IQKPDPAV".to_vec(),
    b"IQNPDPAV".to_vec()
];
let analysis = PositionalAnalysis::from_sequences(&sequences, config);
assert_eq!(analysis.consensus(), b"IQKPDPAV");

let mismatches = analysis.mismatches();
assert_eq!(mismatches.len(), 1);
assert_eq!(mismatches[0].position(), 3);
```
*/

use log::{debug, info};

use crate::analysis_config::AnalysisConfig;
use crate::composition::PositionFrequencyTable;
use crate::consensus::frequency_consensus_config;
use crate::divergence::{report_differences, MismatchRecord};
use crate::report::{format_mismatches, format_table};
use crate::sequence_source::load_sequences;

/// Contains the results of a positional analysis over one sequence collection
#[derive(Clone, Debug, PartialEq)]
pub struct PositionalAnalysis {
    /// The config for this analysis run
    config: AnalysisConfig,
    /// Number of sequences that went into the table
    num_sequences: usize,
    /// Per-column composition
    table: PositionFrequencyTable,
    /// The frequency consensus of the table
    consensus: Vec<u8>
}

impl PositionalAnalysis {
    /// Loads the sequences named in the config and runs the analysis on them.
    /// # Arguments
    /// * `config` - names the input file and the reference sequence
    /// # Errors
    /// * if the input file cannot be opened or read
    pub fn run(config: AnalysisConfig) -> Result<PositionalAnalysis, Box<dyn std::error::Error>> {
        let sequences = load_sequences(&config.input_path)?;
        info!("Loaded {} sequences from {:?}", sequences.len(), config.input_path);
        Ok(PositionalAnalysis::from_sequences(&sequences, config))
    }

    /// Runs the analysis on sequences that are already in memory; an empty collection is allowed.
    /// # Arguments
    /// * `sequences` - the aligned sequences
    /// * `config` - provides the reference and the consensus placeholder, the input path is ignored
    pub fn from_sequences<S: AsRef<[u8]>>(sequences: &[S], config: AnalysisConfig) -> PositionalAnalysis {
        let table = PositionFrequencyTable::aggregate(sequences);
        let consensus = frequency_consensus_config(&table, config.placeholder);
        debug!("Analysis of {} sequences, alignment length {}", sequences.len(), table.len());

        PositionalAnalysis {
            config,
            num_sequences: sequences.len(),
            table,
            consensus
        }
    }

    /// Compares the configured reference against the consensus
    pub fn mismatches(&self) -> Vec<MismatchRecord<'_>> {
        report_differences(&self.config.reference, &self.consensus, &self.table)
    }

    /// Renders the composition table, the consensus, and the mismatch section as text
    pub fn summary(&self) -> String {
        let precision = self.config.precision;
        let mut ret = format_table(&self.table, precision);
        ret.push_str(&format!("\nFrequency consensus sequence: {}\n\n", String::from_utf8_lossy(&self.consensus)));
        ret.push_str(&format_mismatches(&self.mismatches(), precision));
        ret
    }

    // getters
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn num_sequences(&self) -> usize {
        self.num_sequences
    }

    pub fn table(&self) -> &PositionFrequencyTable {
        &self.table
    }

    pub fn consensus(&self) -> &[u8] {
        &self.consensus
    }
}
