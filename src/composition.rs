/*!
This module provides the position-wise residue composition of a collection of aligned sequences.
Sequences may have different lengths; each column only counts the sequences that actually reach it.

# Example usage
```rust
use profile_con::composition::PositionFrequencyTable;

let sequences = [
    b"AAB".to_vec(),
    b"AAC".to_vec(),
    b"AAB".to_vec()
];
let table = PositionFrequencyTable::aggregate(&sequences);
assert_eq!(table.len(), 3);
assert_eq!(table[0].percentage(b'A'), 100.0);
assert!((table[2].percentage(b'B') - 200.0 / 3.0).abs() < 1e-9);
assert_eq!(table[2].depth(), 3);
```
*/

use log::{debug, trace};
use rustc_hash::FxHashMap as HashMap;
use std::collections::BTreeMap;

/// The residue composition at a single alignment column.
/// Percentages are keyed by residue symbol, so iteration is always in symbol order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionProfile {
    /// Residue symbol to percentage in [0, 100]
    percentages: BTreeMap<u8, f64>,
    /// The number of sequences that reached this column, i.e. the denominator
    depth: usize
}

impl PositionProfile {
    /// Constructor for a profile that no sequence reached
    pub const fn empty() -> PositionProfile {
        PositionProfile {
            percentages: BTreeMap::new(),
            depth: 0
        }
    }

    /// Constructor from already computed percentages.
    /// # Arguments
    /// * `percentages` - residue to percentage mapping
    /// * `depth` - the number of sequences that contributed to the column
    pub fn new(percentages: BTreeMap<u8, f64>, depth: usize) -> PositionProfile {
        PositionProfile {
            percentages,
            depth
        }
    }

    /// Converts raw residue tallies into percentages of `depth`.
    /// # Arguments
    /// * `counts` - the number of times each residue was observed
    /// * `depth` - the number of sequences observed; if 0 the result is empty
    pub fn from_counts(counts: &HashMap<u8, usize>, depth: usize) -> PositionProfile {
        if depth == 0 {
            return PositionProfile::empty();
        }

        let percentages = counts.iter()
            .map(|(&residue, &count)| (residue, 100.0 * count as f64 / depth as f64))
            .collect();
        PositionProfile {
            percentages,
            depth
        }
    }

    /// Returns the percentage of a residue, 0.0 if it was never observed here
    pub fn percentage(&self, residue: u8) -> f64 {
        self.percentages.get(&residue).cloned().unwrap_or(0.0)
    }

    /// Returns the residue with the highest percentage and that percentage.
    /// Ties are resolved in favor of the lowest residue symbol so the result never depends on tally order.
    /// Returns None if the profile is empty.
    pub fn dominant(&self) -> Option<(u8, f64)> {
        self.percentages.iter()
            // max_by keeps the last maximum, so reversing the symbol order makes the lowest symbol win
            .max_by(|(r1, p1), (r2, p2)| p1.total_cmp(p2).then(r2.cmp(r1)))
            .map(|(&r, &p)| (r, p))
    }

    /// Sum of all percentages, should be 100.0 for any non-empty column
    pub fn total(&self) -> f64 {
        self.percentages.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Number of distinct residues in the column
    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    // getters
    pub fn percentages(&self) -> &BTreeMap<u8, f64> {
        &self.percentages
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl FromIterator<(u8, f64)> for PositionProfile {
    /// Builds a profile from explicit percentages; the depth is unknown and left at 0.
    fn from_iter<I: IntoIterator<Item = (u8, f64)>>(iter: I) -> Self {
        PositionProfile::new(iter.into_iter().collect(), 0)
    }
}

/// Ordered collection of column profiles covering the full length of the longest sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionFrequencyTable {
    profiles: Vec<PositionProfile>
}

impl PositionFrequencyTable {
    /// Wraps a list of pre-built profiles.
    pub fn new(profiles: Vec<PositionProfile>) -> PositionFrequencyTable {
        PositionFrequencyTable {
            profiles
        }
    }

    /// Computes the residue composition at every column of a sequence collection.
    /// The denominator at column `i` is the number of sequences with length > `i`, shorter sequences do not count as gaps.
    /// An empty collection produces an empty table.
    /// # Arguments
    /// * `sequences` - the aligned sequences, order does not matter
    pub fn aggregate<S: AsRef<[u8]>>(sequences: &[S]) -> PositionFrequencyTable {
        let max_len = sequences.iter()
            .map(|s| s.as_ref().len())
            .max()
            .unwrap_or(0);
        debug!("Aggregating {} sequences over {} columns", sequences.len(), max_len);

        let mut profiles = Vec::with_capacity(max_len);
        let mut counts: HashMap<u8, usize> = Default::default();
        for i in 0..max_len {
            counts.clear();
            let mut depth: usize = 0;
            for sequence in sequences.iter().map(|s| s.as_ref()) {
                if let Some(&residue) = sequence.get(i) {
                    *counts.entry(residue).or_insert(0) += 1;
                    depth += 1;
                }
            }

            let profile = PositionProfile::from_counts(&counts, depth);
            trace!("Column {i}: depth={depth} {:?}", profile.percentages());
            profiles.push(profile);
        }

        PositionFrequencyTable {
            profiles
        }
    }

    /// Returns the profile at a 0-based column, or None if the table is shorter
    pub fn get(&self, index: usize) -> Option<&PositionProfile> {
        self.profiles.get(index)
    }

    /// Returns the denominator used at every column
    pub fn depths(&self) -> Vec<usize> {
        self.profiles.iter().map(|p| p.depth()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionProfile> {
        self.profiles.iter()
    }

    // getters
    pub fn profiles(&self) -> &[PositionProfile] {
        &self.profiles
    }
}

impl std::ops::Index<usize> for PositionFrequencyTable {
    type Output = PositionProfile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.profiles[index]
    }
}

impl<'a> IntoIterator for &'a PositionFrequencyTable {
    type Item = &'a PositionProfile;
    type IntoIter = std::slice::Iter<'a, PositionProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
