use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ffring::F2Poly;
use ffring::f2poly::factor as polyfactor;
use ffring::intmath::factor as intfactor;

fn bench_int_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("int factor");
    // 600_851_475_143 = 71 * 839 * 1471 * 6857;
    // 1_000_036_000_099 = 1_000_003 * 1_000_033 (trial division to ~10^6)
    for n in [720i64, 600_851_475_143, 1_000_036_000_099] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| intfactor::factor(black_box(n)));
        });
    }
    group.finish();
}

fn bench_poly_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2) poly factor");
    // degrees 8, 16, 24: a primitive trinomial-ish mix of factors
    for bits in [0x11du64, 0x1_002d, 0x180_0021] {
        let f = F2Poly::new(bits);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:x}", bits)),
            &f,
            |b, f| {
                b.iter(|| polyfactor::factor(black_box(f)));
            },
        );
    }
    group.finish();
}

fn bench_lowest_irr(c: &mut Criterion) {
    c.bench_function("lowest_irr degree 16", |b| {
        b.iter(|| polyfactor::lowest_irr(black_box(16)).unwrap());
    });
}

criterion_group!(benches, bench_int_factor, bench_poly_factor, bench_lowest_irr);
criterion_main!(benches);
