use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cryptoglot::config::Config;
use cryptoglot::perform_analysis;
use env_logger::Builder;
use log::LevelFilter;
use std::hint::black_box;
use std::time::Duration;

// Test cases with different encodings/encryptions and varying complexity
const TEST_CASES: &[(&str, &str)] = &[
    // Format: (encoded_text, description)
    ("aGVsbG8gd29ybGQ=", "base64_simple"),
    ("Khoor, krz duh brx?", "caesar_english"),
    ("Eiso, eoee utsi", "vigenere_italian"),
    (
        "Fldr frph vwdl?  Wkh txlfn eurzq ira mxpsv ryhu wkh odcb grj.\nVrqr lr, qrq wx.",
        "mixed_multiline",
    ),
    // No letters: the curated keys fail and the exhaustive fallback runs
    ("12345", "vigenere_fallback"),
    ("", "empty_string"),
];

pub fn criterion_benchmark(c: &mut Criterion) {
    // Initialize logger with only error level to suppress debug messages
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Error);
    builder.init();

    let mut group = c.benchmark_group("program_performance");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (text, description) in TEST_CASES {
        let id = BenchmarkId::new(*description, text.len());
        group.bench_with_input(id, text, |b, text| {
            // the first call fixes the global config for the whole run
            b.iter(|| perform_analysis(black_box(text), Config::default()));
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
