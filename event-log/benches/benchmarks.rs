use event_log::{run_line, DateValue, EventStore};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rational::Rational;

const DATE_PLAIN: &str = "2017-01-01";
const DATE_SIGNED: &str = "+2017--1-+01";
const DATE_MALFORMED: &str = "2017/01/01";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("date_plain", |b| {
        b.iter(|| DateValue::parse(black_box(DATE_PLAIN)))
    });

    group.bench_function("date_signed", |b| {
        b.iter(|| DateValue::parse(black_box(DATE_SIGNED)))
    });

    group.bench_function("date_malformed", |b| {
        b.iter(|| DateValue::parse(black_box(DATE_MALFORMED)))
    });

    group.bench_function("rational", |b| {
        b.iter(|| Rational::parse(black_box("-15/35")))
    });
}

fn bench_store(c: &mut Criterion) {
    let mut store = EventStore::new();

    for year in 1900..2100 {
        for month in 1..=12 {
            let date = DateValue::new(year, month, 1).unwrap();
            store.add_event(date, format!("event-{year}-{month}"));
            store.add_event(date, "monthly");
        }
    }

    let date = DateValue::new(2017, 6, 1).unwrap();
    let mut group = c.benchmark_group("store");

    group.bench_function("find", |b| {
        b.iter(|| black_box(&store).find(black_box(date)).len())
    });

    group.bench_function("dump", |b| b.iter(|| black_box(&store).dump().count()));

    group.bench_function("print", |b| {
        b.iter(|| run_line(black_box(&mut store.clone()), black_box("Print")))
    });
}

criterion_group!(benches, bench_parse, bench_store);
criterion_main!(benches);
