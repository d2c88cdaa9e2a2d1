use caniuse_core::{SupportCode, VersionSupportTable};
use caniuse_range::{compute_range, compute_support};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A chrome-sized table: old versions unsupported, a partial band, then full support.
fn generate_table(versions: usize) -> VersionSupportTable {
    let pairs = (1..=versions).map(|v| {
        let cell = if v < versions / 3 {
            "n"
        } else if v < versions / 2 {
            "a x #1"
        } else if v < versions / 2 + 3 {
            "a"
        } else {
            "y"
        };
        (v.to_string(), cell)
    });
    VersionSupportTable::from_pairs(pairs).unwrap()
}

fn generate_ranged_table() -> VersionSupportTable {
    VersionSupportTable::from_pairs([
        ("3.2", "n"),
        ("4.0-4.1", "a"),
        ("4.2-4.3", "a"),
        ("5.0-5.1", "y"),
        ("6.0-6.1", "y"),
        ("7.0-7.1", "y"),
        ("8", "y"),
        ("9.0-9.2", "y"),
        ("9.3", "y"),
        ("10.0-10.2", "y"),
        ("10.3", "y"),
        ("11.0-11.2", "y"),
        ("11.3-11.4", "y"),
        ("12.0-12.1", "y"),
        ("12.2-12.4", "y"),
        ("13.0-13.1", "y"),
        ("13.2", "y"),
        ("13.3", "y"),
        ("13.4-13.7", "y"),
        ("14.0-14.4", "y"),
    ])
    .unwrap()
}

fn bench_compress(c: &mut Criterion) {
    let small = generate_table(20);
    let large = generate_table(120);
    let ranged = generate_ranged_table();

    c.bench_function("range_full_20_versions", |b| {
        b.iter(|| black_box(compute_range(black_box(&small), SupportCode::Yes)))
    });

    c.bench_function("range_full_120_versions", |b| {
        b.iter(|| black_box(compute_range(black_box(&large), SupportCode::Yes)))
    });

    c.bench_function("support_ios_saf_ranged", |b| {
        b.iter(|| black_box(compute_support(black_box(&ranged))))
    });
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
