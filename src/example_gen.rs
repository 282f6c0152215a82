use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

/// The twenty standard amino acids
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Creates a synthetic aligned protein collection we can verify is working.
/// Returns the true consensus and the sampled sequences; the seed is fixed so results are reproducible.
/// # Arguments
/// * `seq_len` - the length of the true consensus
/// * `num_samples` - the number of samples to generate from the consensus
/// * `substitution_rate` - per-residue chance of replacing the residue with a different amino acid
/// * `truncation_rate` - per-sample chance of the sample ending early at a random point
pub fn generate_alignment(seq_len: usize, num_samples: usize, substitution_rate: f64, truncation_rate: f64) -> (Vec<u8>, Vec<Vec<u8>>) {
    assert!((0.0..=1.0).contains(&substitution_rate));
    assert!((0.0..=1.0).contains(&truncation_rate));

    let alphabet_size = AMINO_ACIDS.len();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let residue_distribution = Uniform::new(0, alphabet_size);
    let alt_distribution = Uniform::new(1, alphabet_size);
    let error_distribution = Uniform::new(0.0, 1.0);

    let consensus: Vec<u8> = (0..seq_len)
        .map(|_i| AMINO_ACIDS[rng.sample(residue_distribution)])
        .collect();

    let samples: Vec<Vec<u8>> = (0..num_samples)
        .map(|_i| {
            let sample_len = if seq_len > 0 && rng.sample(error_distribution) < truncation_rate {
                rng.gen_range(0..seq_len)
            } else {
                seq_len
            };

            consensus[..sample_len].iter()
                .map(|&c| {
                    if rng.sample(error_distribution) < substitution_rate {
                        // shift by a non-zero amount so we always land on a different residue
                        let index = AMINO_ACIDS.iter().position(|&a| a == c).unwrap_or(0);
                        AMINO_ACIDS[(index + rng.sample(alt_distribution)) % alphabet_size]
                    } else {
                        c
                    }
                })
                .collect()
        })
        .collect();

    (consensus, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::composition::PositionFrequencyTable;
    use crate::consensus::frequency_consensus;
    use crate::divergence::count_mismatches;

    #[test]
    fn test_exact_samples() {
        let (consensus, samples) = generate_alignment(50, 5, 0.0, 0.0);
        assert_eq!(consensus.len(), 50);
        assert!(consensus.iter().all(|c| AMINO_ACIDS.contains(c)));
        assert!(samples.iter().all(|s| s == &consensus));
    }

    #[test]
    fn test_recovers_consensus() {
        // low error with full-length samples, the frequency consensus should be the truth
        let (consensus, samples) = generate_alignment(200, 30, 0.05, 0.0);
        let table = PositionFrequencyTable::aggregate(&samples);
        assert_eq!(frequency_consensus(&table), consensus);
        assert!(samples.iter().any(|s| count_mismatches(s, &consensus) > 0));
    }

    #[test]
    fn test_truncation() {
        let (consensus, samples) = generate_alignment(100, 20, 0.0, 1.0);
        assert!(samples.iter().all(|s| s.len() < consensus.len()));
        assert!(samples.iter().all(|s| consensus.starts_with(s)));
    }
}
