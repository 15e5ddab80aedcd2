use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use neutrality_corpus::alignment::Aligner;

const WORDS: [&str; 12] = [
    "de", "schrijver", "is", "een", "bekende", "auteur", "van", "boeken", "en", "gedichten",
    "in", "nederland",
];

// Deterministic pseudo-sentences, so that runs are comparable.
fn sentences(nb: usize, seed: usize) -> Vec<String> {
    (0..nb)
        .map(|i| {
            (0..15)
                .map(|j| WORDS[(i * 7 + j * 3 + seed) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("Aligner");
    for nb in [10, 100, 1000].iter() {
        let prior = sentences(*nb, 0);
        let post = sentences(*nb, 1);
        for delta in [1, 3, 10].iter() {
            let aligner = Aligner::new(*delta);
            group.bench_with_input(
                BenchmarkId::new(format!("delta={}", delta), nb),
                nb,
                |b, _| b.iter(|| aligner.align(&prior, &post)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
