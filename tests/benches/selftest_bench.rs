use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rsapost_params::kat::rsa::{KAT_MESSAGE, RSA_2048_KEY};
use rsapost_rsa::{RustCryptoKey, RustCryptoProvider};
use rsapost_selftest::key::load_private_key;
use rsapost_selftest::roundtrip::check_round_trip;
use rsapost_selftest::signature::check_signatures;
use rsapost_selftest::{run_with, RSA_2048_KAT_SUITE};

fn bench_stages(c: &mut Criterion) {
    let provider = RustCryptoProvider::new();
    let key = RustCryptoKey::from_components(&RSA_2048_KEY).unwrap();

    let mut group = c.benchmark_group("RSA self-test stages");
    group.sample_size(20);

    group.bench_function("key load", |b| {
        b.iter(|| load_private_key(&provider, black_box(&RSA_2048_KEY)).unwrap());
    });

    group.bench_function("signature KATs", |b| {
        b.iter(|| check_signatures(&provider, &key, black_box(RSA_2048_KAT_SUITE.signatures)).unwrap());
    });

    group.bench_function("round trip", |b| {
        b.iter(|| check_round_trip(&provider, &key, black_box(KAT_MESSAGE)).unwrap());
    });

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let provider = RustCryptoProvider::new();
    let mut group = c.benchmark_group("RSA self-test");
    group.sample_size(20);

    group.bench_function("power-on run", |b| {
        b.iter(|| {
            let report = run_with(&provider, black_box(RSA_2048_KAT_SUITE));
            assert!(report.passed());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stages, bench_full_run);
criterion_main!(benches);
