use criterion::{black_box, criterion_group, criterion_main, Criterion};

use profile_con::composition::PositionFrequencyTable;
use profile_con::consensus::frequency_consensus;
use profile_con::divergence::report_differences;
use profile_con::example_gen::generate_alignment;

pub fn bench_profile(c: &mut Criterion) {
    let seq_lens = [100, 1000];
    let num_samples = [50, 500];
    let substitution_rates = [0.01, 0.1];

    let mut benchmark_group = c.benchmark_group("profile-group");
    benchmark_group.sample_size(10);

    for &sl in seq_lens.iter() {
        for &ns in num_samples.iter() {
            for &sr in substitution_rates.iter() {
                // a quarter of the samples end early so the denominators vary
                let (consensus, dataset) = generate_alignment(sl, ns, sr, 0.25);
                let test_label = format!("profile_{sl}x{ns}_{sr}");
                benchmark_group.bench_function(&test_label, |b| b.iter(|| {
                    black_box({
                        let table = PositionFrequencyTable::aggregate(&dataset);
                        let resolved_consensus = frequency_consensus(&table);
                        report_differences(&consensus, &resolved_consensus, &table).len()
                    });
                }));
            }
        }
    }

    benchmark_group.finish();
}

criterion_group!(benches, bench_profile);
criterion_main!(benches);
