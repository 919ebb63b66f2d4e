//! Benchmarks for overview derivation

use std::hint::black_box;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurs_core::types::{CourseFields, EnrollmentFields, InstructorFields};
use kurs_core::{Record, RecordRef, Snapshot};
use kurs_stats::Overview;
use kurs_stats::aggregate::{enrollments_per_course, total_revenue, upcoming_courses};

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap_or_default()
}

/// Snapshot with realistic reference shapes: URL references for instructors,
/// plain identifiers for courses
fn snapshot(courses: usize, enrollments_per_course: usize) -> Snapshot {
    let start = reference_time() - Duration::days(90);

    let instructors = (0..courses / 4 + 1)
        .map(|i| {
            Record::new(format!("d{i}"), InstructorFields {
                name: Some(format!("Dozent {i}")),
                ..InstructorFields::default()
            })
        })
        .collect();

    let course_records = (0..courses)
        .map(|i| {
            let offset = Duration::days(i64::try_from(i % 180).unwrap_or(0));
            Record::new(format!("c{i}"), CourseFields {
                titel: Some(format!("Kurs Nummer {i} mit langem Titel")),
                startdatum: Some((start + offset).format("%Y-%m-%d").to_string()),
                enddatum: Some((start + offset + Duration::days(60)).format("%Y-%m-%d").to_string()),
                preis: Some(25.0f64.mul_add(f64::from(u32::try_from(i % 7).unwrap_or(0)), 50.0)),
                dozent: Some(RecordRef::from(
                    format!("https://my.living-apps.de/rest/apps/dozenten/records/d{}", i / 4).as_str(),
                )),
                ..CourseFields::default()
            })
        })
        .collect();

    let enrollment_records = (0..courses * enrollments_per_course)
        .map(|i| {
            Record::new(format!("e{i}"), EnrollmentFields {
                kurs: Some(RecordRef::id(format!("c{}", i % courses.max(1)))),
                bezahlt: Some(i % 3 != 0),
                ..EnrollmentFields::default()
            })
        })
        .collect();

    Snapshot {
        instructors,
        courses: course_records,
        enrollments: enrollment_records,
        ..Snapshot::default()
    }
}

fn bench_overview(c: &mut Criterion) {
    let mut group = c.benchmark_group("overview");
    let now = reference_time();

    for size in [10, 100, 1000] {
        let data = snapshot(size, 8);
        group.throughput(Throughput::Elements(data.enrollments.len() as u64));
        group.bench_with_input(BenchmarkId::new("derive", size), &data, |b, data| {
            b.iter(|| Overview::derive(black_box(data), black_box(now)));
        });
    }

    group.finish();
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");
    let now = reference_time();
    let data = snapshot(500, 10);

    group.bench_function("total_revenue", |b| {
        b.iter(|| total_revenue(black_box(&data.enrollments), black_box(&data.courses)));
    });
    group.bench_function("enrollments_per_course", |b| {
        b.iter(|| enrollments_per_course(black_box(&data.courses), black_box(&data.enrollments)));
    });
    group.bench_function("upcoming_courses", |b| {
        b.iter(|| upcoming_courses(black_box(&data.courses), black_box(now)).len());
    });

    group.finish();
}

criterion_group!(benches, bench_overview, bench_aggregates);
criterion_main!(benches);
