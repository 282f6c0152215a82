/*!
Contains configuration information for a positional analysis run.
Typical usage is to the use the builder to construct the config, e.g.
```
use profile_con::analysis_config::{AnalysisConfig, AnalysisConfigBuilder};
let config: AnalysisConfig = AnalysisConfigBuilder::default()
    .input_path("alpha_aligned.txt")
    .reference(b"IQKPDPAVYQ".to_vec())
    .precision(1)
    .build()
    .unwrap();
assert_eq!(config.placeholder, b'X');
```
*/

use std::path::PathBuf;

/// The consensus symbol used for columns that no sequence reaches
pub const DEFAULT_PLACEHOLDER: u8 = b'X';
/// Decimal places used when rendering percentages
pub const DEFAULT_PRECISION: usize = 2;

/**
Contains configuration information for a positional analysis run.
The input path and reference are required, everything else has a default.
```
use profile_con::analysis_config::AnalysisConfigBuilder;
// missing the reference sequence
let result = AnalysisConfigBuilder::default()
    .input_path("alpha_aligned.txt")
    .build();
assert!(result.is_err());
```
*/
#[derive(derive_builder::Builder, Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    /// Path to the aligned multi-record text file
    #[builder(setter(into))]
    pub input_path: PathBuf,
    /// The reference sequence that gets compared against the consensus
    pub reference: Vec<u8>,
    /// Symbol emitted into the consensus when a column has no residues
    #[builder(default = "DEFAULT_PLACEHOLDER")]
    pub placeholder: u8,
    /// Number of decimal places in rendered percentages
    #[builder(default = "DEFAULT_PRECISION")]
    pub precision: usize
}
