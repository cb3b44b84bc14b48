//! Key generation and key agreement benchmarks using the software provider

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use eckeys::{Curve, KeyPair, NistP256, NistP384, NistP521, SoftwareProvider};
use std::hint::black_box;

fn bench_curve<C: Curve, M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let name = C::PROFILE.name;

    group.bench_function(format!("{name} generate"), |b| {
        b.iter(|| KeyPair::<C, _>::generate(SoftwareProvider))
    });

    let (Ok(alice), Ok(bob)) = (
        KeyPair::<C, _>::generate(SoftwareProvider),
        KeyPair::<C, _>::generate(SoftwareProvider),
    ) else {
        panic!("{name} key generation failed");
    };

    group.bench_function(format!("{name} shared secret"), |b| {
        b.iter(|| alice.shared_secret(black_box(bob.public_key())))
    });
}

fn bench_ecdh(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh");
    bench_curve::<NistP256, _>(&mut group);
    bench_curve::<NistP384, _>(&mut group);
    bench_curve::<NistP521, _>(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ecdh);
criterion_main!(benches);
