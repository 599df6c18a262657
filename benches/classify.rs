#[cfg(feature = "criterion")]
use content_filter::default_filter;
#[cfg(feature = "criterion")]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

#[cfg(feature = "criterion")]
fn classify_benchmark(c: &mut Criterion) {
    let filter = default_filter();
    let long_clean = "Thank you all for praying for my mother this week. ".repeat(20);
    let long_word = "a".repeat(10_000);

    let cases = vec![
        ("short_clean", "Hello, how are you today?"),
        ("short_leet", "you are so stup1d"),
        ("short_evasion", "well f u c k that"),
        ("short_phrase", "nobody asked, your mom"),
        ("long_clean", long_clean.as_str()),
        ("long_word", long_word.as_str()),
    ];

    let mut group = c.benchmark_group("classify");
    group.sample_size(100);

    for (name, text) in cases {
        group.bench_with_input(BenchmarkId::new("default_filter", name), &text, |b, text| {
            b.iter(|| filter.classify(black_box(text)))
        });
    }

    group.finish();
}

#[cfg(feature = "criterion")]
criterion_group!(benches, classify_benchmark);
#[cfg(feature = "criterion")]
criterion_main!(benches);

#[cfg(not(feature = "criterion"))]
fn main() {}
