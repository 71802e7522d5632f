//! Benchmarks for the search pipeline
//!
//! Run with: cargo bench --package search
//!
//! The bundled catalog is small, so it is repeated to give the filters
//! something to chew on.

use catalog::{CatalogIndex, Course, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use search::{filter_refs, CreditRange, Criteria, FilterPipeline, Level, TimeOfDay};

fn load_courses() -> Vec<Course> {
    let index = CatalogIndex::bundled().expect("Failed to load bundled catalog");
    let mut courses = Vec::with_capacity(index.len() * 500);
    for round in 0..500 {
        for course in index.courses() {
            let mut copy = course.clone();
            copy.id = format!("{}-{}", course.id, round);
            courses.push(copy);
        }
    }
    courses
}

fn bench_keyword_search(c: &mut Criterion) {
    let courses = load_courses();
    let criteria = Criteria::new().with_keyword("machine learning data");

    c.bench_function("keyword_search", |b| {
        b.iter(|| {
            let results = filter_refs(black_box(&courses), black_box(&criteria));
            black_box(results)
        })
    });
}

fn bench_combined_criteria(c: &mut Criterion) {
    let courses = load_courses();
    let criteria = Criteria::new()
        .with_term("Fall")
        .with_level(Level::Graduate)
        .with_credits(CreditRange::new(3, 4).unwrap())
        .with_days([Weekday::Monday, Weekday::Tuesday])
        .with_times([TimeOfDay::Afternoon]);

    c.bench_function("combined_criteria", |b| {
        b.iter(|| {
            let results = filter_refs(black_box(&courses), black_box(&criteria));
            black_box(results)
        })
    });
}

fn bench_build_pipeline(c: &mut Criterion) {
    let criteria = Criteria::new()
        .with_keyword("ai")
        .with_department("CSCI")
        .with_professor("johnson");

    c.bench_function("build_pipeline", |b| {
        b.iter(|| {
            let pipeline = FilterPipeline::from_criteria(black_box(&criteria));
            black_box(pipeline)
        })
    });
}

criterion_group!(
    benches,
    bench_keyword_search,
    bench_combined_criteria,
    bench_build_pipeline
);
criterion_main!(benches);
