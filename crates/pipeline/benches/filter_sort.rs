//! Benchmarks for the filter/sort hot path
//!
//! Run with: cargo bench --package pipeline
//!
//! This benchmarks one full filter-then-sort pass over a synthetic
//! catalog about the size of a few API pages.

use catalog::Movie;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterCriteria, SortKey, apply_filters_and_sort, filter_by_search, sort_movies};

fn synthetic_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| {
            let mut movie = Movie::new(i as u64, format!("Movie Number {i}"));
            movie.overview = format!(
                "Overview text for entry {i}, mentioning deserts on every fifth entry{}",
                if i % 5 == 0 { " desert" } else { "" }
            );
            movie.popularity = (i as f64 * 7.31) % 500.0;
            movie.vote_average = (i as f64 * 1.13) % 10.0;
            movie
        })
        .collect()
}

fn bench_filter_by_search(c: &mut Criterion) {
    let movies = synthetic_catalog(200);

    c.bench_function("filter_by_search", |b| {
        b.iter(|| {
            let filtered = filter_by_search(black_box(movies.clone()), black_box("desert"));
            black_box(filtered)
        })
    });
}

fn bench_sort_by_popularity(c: &mut Criterion) {
    let movies = synthetic_catalog(200);

    c.bench_function("sort_by_popularity", |b| {
        b.iter(|| {
            let sorted = sort_movies(black_box(movies.clone()), black_box(SortKey::Popularity));
            black_box(sorted)
        })
    });
}

fn bench_full_pass(c: &mut Criterion) {
    let movies = synthetic_catalog(200);
    let criteria = FilterCriteria::new("entry", SortKey::Rating);

    c.bench_function("apply_filters_and_sort", |b| {
        b.iter(|| {
            let view = apply_filters_and_sort(black_box(movies.clone()), black_box(&criteria));
            black_box(view)
        })
    });
}

criterion_group!(
    benches,
    bench_filter_by_search,
    bench_sort_by_popularity,
    bench_full_pass
);
criterion_main!(benches);
