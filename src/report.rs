/*!
Human-readable rendering of composition tables and mismatch lists.
Nothing in here affects the analysis results, it only formats them.

# Example usage
```rust
use profile_con::composition::PositionFrequencyTable;
use profile_con::report::format_table;

let sequences = [b"AK".to_vec(), b"AN".to_vec(), b"AK".to_vec(), b"AK".to_vec()];
let table = PositionFrequencyTable::aggregate(&sequences);
assert_eq!(
    format_table(&table, 2),
    "Position 1: A: 100.00%\nPosition 2: K: 75.00%, N: 25.00%\n"
);
```
*/

use itertools::Itertools;

use crate::composition::{PositionFrequencyTable, PositionProfile};
use crate::divergence::MismatchRecord;

/// Renders a column composition as `R: pp.pp%` entries sorted by descending percentage.
/// Equal percentages are listed in residue order.
/// # Arguments
/// * `profile` - the column to render
/// * `precision` - number of decimal places
/// * `hide_zero` - if true, residues at 0% are left out
pub fn format_composition(profile: &PositionProfile, precision: usize, hide_zero: bool) -> String {
    profile.percentages().iter()
        .filter(|(_r, p)| !hide_zero || **p > 0.0)
        .sorted_by(|(r1, p1), (r2, p2)| p2.total_cmp(p1).then(r1.cmp(r2)))
        .map(|(&r, p)| format!("{}: {:.*}%", r as char, precision, p))
        .join(", ")
}

/// Renders one line per column of the table, 1-based.
/// Columns that no sequence reached are shown as `(no residues)`.
/// # Arguments
/// * `table` - the composition table
/// * `precision` - number of decimal places
pub fn format_table(table: &PositionFrequencyTable, precision: usize) -> String {
    let mut ret = String::new();
    for (i, profile) in table.iter().enumerate() {
        if profile.is_empty() {
            ret.push_str(&format!("Position {}: (no residues)\n", i + 1));
        } else {
            ret.push_str(&format!("Position {}: {}\n", i + 1, format_composition(profile, precision, true)));
        }
    }
    ret
}

/// Renders a single mismatch record on one line.
/// # Arguments
/// * `record` - the mismatch to render
/// * `precision` - number of decimal places
pub fn format_mismatch(record: &MismatchRecord, precision: usize) -> String {
    format!(
        "Position {} - Reference: {}, Consensus: {}. Index Composition: {}",
        record.position(),
        record.reference_residue() as char,
        record.consensus_residue() as char,
        format_composition(record.composition(), precision, false)
    )
}

/// Renders a full mismatch section, or a single line if there are none.
/// # Arguments
/// * `records` - mismatches in position order
/// * `precision` - number of decimal places
pub fn format_mismatches(records: &[MismatchRecord], precision: usize) -> String {
    if records.is_empty() {
        return "No mismatches found.\n".to_string();
    }

    let mut ret = String::from("Mismatches with composition data:\n");
    for record in records.iter() {
        ret.push_str(&format_mismatch(record, precision));
        ret.push('\n');
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    #[test]
    fn test_composition_order() {
        let profile = PositionProfile::new(BTreeMap::from([
            (b'N', 2.44),
            (b'K', 68.29),
            (b'P', 7.32),
            (b'T', 21.95)
        ]), 41);
        assert_eq!(format_composition(&profile, 2, true), "K: 68.29%, T: 21.95%, P: 7.32%, N: 2.44%");
        assert_eq!(format_composition(&profile, 0, true), "K: 68%, T: 22%, P: 7%, N: 2%");
    }

    #[test]
    fn test_composition_ties_and_zero() {
        let profile = PositionProfile::new(BTreeMap::from([
            (b'S', 50.0),
            (b'C', 0.0),
            (b'D', 50.0)
        ]), 2);
        assert_eq!(format_composition(&profile, 1, true), "D: 50.0%, S: 50.0%");
        assert_eq!(format_composition(&profile, 1, false), "D: 50.0%, S: 50.0%, C: 0.0%");
        assert_eq!(format_composition(&PositionProfile::empty(), 2, false), "");
    }

    #[test]
    fn test_table_with_empty_column() {
        let table = PositionFrequencyTable::new(vec![
            PositionProfile::new(BTreeMap::from([(b'I', 100.0)]), 3),
            PositionProfile::empty()
        ]);
        assert_eq!(format_table(&table, 2), "Position 1: I: 100.00%\nPosition 2: (no residues)\n");
        assert_eq!(format_table(&PositionFrequencyTable::default(), 2), "");
    }

    #[test]
    fn test_mismatches() {
        let profile = PositionProfile::new(BTreeMap::from([(b'B', 100.0), (b'C', 0.0)]), 1);
        let records = vec![MismatchRecord::new(2, b'C', b'B', &profile)];
        assert_eq!(
            format_mismatches(&records, 2),
            "Mismatches with composition data:\nPosition 2 - Reference: C, Consensus: B. Index Composition: B: 100.00%, C: 0.00%\n"
        );
        assert_eq!(format_mismatches(&[], 2), "No mismatches found.\n");
    }
}
