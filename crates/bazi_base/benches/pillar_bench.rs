use bazi_base::{Stem, day_pillar, element_tally, four_pillars, hour_pillar, year_pillar};
use bazi_time::{BirthTime, parse_birth_time};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn pillar_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();

    let mut group = c.benchmark_group("pillar");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(1990))));
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(23), Stem::Ding))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = BirthTime::new(1990, 5, 17, 8, 30).unwrap();
    let pillars = four_pillars(&birth);

    let mut group = c.benchmark_group("chart");
    group.bench_function("parse_birth_time", |b| {
        b.iter(|| parse_birth_time(black_box("1990/05/17 08:30")))
    });
    group.bench_function("four_pillars", |b| b.iter(|| four_pillars(black_box(&birth))));
    group.bench_function("element_tally", |b| {
        b.iter(|| element_tally(black_box(&pillars)))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, chart_bench);
criterion_main!(benches);
