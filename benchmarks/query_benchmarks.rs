#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query string benchmarks: tiny_query_string vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use tiny_query_string::{get_all, get_one, remove_one, set_many, set_one};
use url::form_urlencoded;

const SHORT: &str = "https://example.com/search?q=rust&page=2";
const LONG: &str = "https://example.com/list?sort=desc&page=14&per_page=50&filter=active&tag=a%20b&lang=en&ref=home&utm_source=news&utm_medium=email&utm_campaign=spring#top";

fn query_part(text: &str) -> &str {
    let start = text.find('?').map_or(text.len(), |pos| pos + 1);
    let end = text.find('#').unwrap_or(text.len());
    &text[start..end]
}

fn bench_get_one_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_one");

    group.bench_function("tiny_query_string_short", |b| {
        b.iter(|| get_one(black_box("page"), black_box(SHORT)).unwrap());
    });

    group.bench_function("tiny_query_string_long", |b| {
        b.iter(|| get_one(black_box("utm_campaign"), black_box(LONG)).unwrap());
    });

    group.bench_function("url_crate_long", |b| {
        b.iter(|| {
            form_urlencoded::parse(query_part(black_box(LONG)).as_bytes())
                .find(|(k, _)| k.eq_ignore_ascii_case("utm_campaign"))
                .map(|(_, v)| v.into_owned())
        });
    });

    group.finish();
}

fn bench_get_all_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_all");

    group.bench_function("tiny_query_string", |b| {
        b.iter(|| get_all(black_box(LONG)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            form_urlencoded::parse(query_part(black_box(LONG)).as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_write_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    group.bench_function("set_one_replace", |b| {
        b.iter(|| set_one(black_box("page"), 15, black_box(LONG)).unwrap());
    });

    group.bench_function("set_one_append", |b| {
        b.iter(|| set_one(black_box("new"), "value", black_box(LONG)).unwrap());
    });

    group.bench_function("set_many", |b| {
        b.iter(|| {
            set_many(
                black_box([("a", "1"), ("b", "2"), ("page", "3")]),
                black_box(SHORT),
            )
            .unwrap()
        });
    });

    group.finish();
}

fn bench_remove_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    group.bench_function("remove_one_short", |b| {
        b.iter(|| remove_one(black_box("q"), black_box(SHORT)).unwrap());
    });

    group.bench_function("remove_one_long", |b| {
        b.iter(|| remove_one(black_box("page"), black_box(LONG)).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_get_one_all,
    bench_get_all_all,
    bench_write_all,
    bench_remove_all
);

criterion_main!(benches);
