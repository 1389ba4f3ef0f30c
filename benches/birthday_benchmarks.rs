//! Performance benchmarks for the upcoming-birthday query.
//!
//! These benchmarks measure `get_upcoming_birthdays` over books of
//! different sizes, with birthdays spread evenly across the year.

use assistant_bot::{AddressBook, Record};
use chrono::{Datelike, Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with one birthday per day, cycling
/// through a non-leap year.
fn create_test_book(size: usize) -> AddressBook {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let mut book = AddressBook::new();

    for i in 0..size {
        let born = start + Days::new((i % 365) as u64);
        let mut record = Record::new(format!("Contact{}", i));
        record.add_phone(&format!("{:010}", i)).unwrap();
        record
            .add_birthday(&format!(
                "{:02}.{:02}.{}",
                born.day(),
                born.month(),
                born.year()
            ))
            .unwrap();
        book.add_record(record);
    }

    book
}

/// Benchmark the 7-day window across book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1_000, 10_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.get_upcoming_birthdays(black_box(today)).len());
        });
    }

    group.finish();
}

/// Benchmark window length on a fixed book.
fn bench_window_length(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("upcoming_window_length");

    for days in [1u64, 7, 30, 366] {
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| book.get_upcoming_birthdays_within(black_box(today), days).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upcoming_birthdays, bench_window_length);
criterion_main!(benches);
