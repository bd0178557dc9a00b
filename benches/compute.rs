use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miqat::{
    compute, solver, CalculationConfig, GeoQuery, HighLatitudeRule, JulianDay, MethodId,
    SolarPosition,
};

fn solar_bench(c: &mut Criterion) {
    let jd = JulianDay::from_gregorian(2024, 3, 20);

    let mut group = c.benchmark_group("solar");
    group.bench_function("position", |b| b.iter(|| SolarPosition::at(black_box(jd))));
    group.bench_function("mid_day", |b| b.iter(|| solver::compute_mid_day(black_box(jd))));
    group.bench_function("fajr_18", |b| {
        b.iter(|| solver::compute_time(black_box(jd), 18.0, 21.4225, solver::HalfDay::Morning))
    });
    group.finish();
}

fn schedule_bench(c: &mut Criterion) {
    let mecca = GeoQuery::from_ymd(2024, 3, 20, 21.4225, 39.8262, 3.0).unwrap();
    let edinburgh = GeoQuery::from_ymd(2024, 6, 21, 55.95, -3.19, 1.0).unwrap();
    let mwl = CalculationConfig::default();
    let tehran = CalculationConfig::default().with_method(MethodId::Tehran);
    let ruled = CalculationConfig::default().with_high_latitude(HighLatitudeRule::AngleBased);

    let mut group = c.benchmark_group("schedule");
    group.bench_function("mecca_mwl", |b| b.iter(|| compute(black_box(&mecca), &mwl)));
    group.bench_function("mecca_tehran", |b| b.iter(|| compute(black_box(&mecca), &tehran)));
    group.bench_function("edinburgh_angle_based", |b| {
        b.iter(|| compute(black_box(&edinburgh), &ruled))
    });
    group.finish();
}

criterion_group!(benches, solar_bench, schedule_bench);
criterion_main!(benches);
