#[cfg(feature = "criterion")]
use content_filter::{lexicon, ContentFilterBuilder, Corpus};
#[cfg(feature = "criterion")]
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[cfg(feature = "criterion")]
fn corpus_benchmark(c: &mut Criterion) {
    c.bench_function("corpus", |b| {
        b.iter(|| Corpus::build(black_box(lexicon::roots()), black_box(lexicon::SUFFIXES)))
    });
}

#[cfg(feature = "criterion")]
fn builder_benchmark(c: &mut Criterion) {
    c.bench_function("bundled_filter", |b| {
        b.iter(|| ContentFilterBuilder::bundled().build())
    });
}

#[cfg(feature = "criterion")]
criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = corpus_benchmark, builder_benchmark
}
#[cfg(feature = "criterion")]
criterion_main!(benches);

#[cfg(not(feature = "criterion"))]
fn main() {}
