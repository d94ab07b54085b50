//! Performance benchmarks for contact conversion.
//!
//! Measures the pure conversion engine:
//! - a typical contact with a handful of numbers
//! - oversized contacts that are split over several entries
//! - template fallback depth for realName synthesis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phonebook_converter::conversion::{ConfigFile, Converter};
use phonebook_converter::models::SourceContact;
use std::time::Duration;

const CONFIG: &str = r#"{
    "conversions": {
        "vip": {"category": ["vip1"]},
        "realName": [
            "{lastname}, {prefix} {nickname}",
            "{lastname}, {prefix} {firstname}",
            "{lastname}, {nickname}",
            "{lastname}, {firstname}",
            "{org}",
            "{fullname}"
        ],
        "phoneTypes": {"WORK": "work", "HOME": "home", "CELL": "mobile", "FAX": "fax_work"},
        "emailTypes": {"WORK": "work", "HOME": "home"},
        "phoneReplaceCharacters": {"+49": "", "(": "", ")": "", "/": "", "-": ""}
    }
}"#;

fn converter() -> Converter {
    let file = ConfigFile::from_json_str(CONFIG).expect("benchmark config is valid");
    Converter::new(file.conversion).expect("benchmark config is valid")
}

fn contact_with_numbers(count: usize) -> SourceContact {
    const TAGS: [&str; 5] = ["work", "home", "cell", "fax", "other"];

    let mut contact = SourceContact::new("bench");
    contact.names.first = Some("John".to_string());
    contact.names.last = Some("Doe".to_string());
    contact.quickdial = Some("1".to_string());
    for i in 0..count {
        let tags = if i == count / 2 {
            vec![TAGS[i % TAGS.len()], "pref"]
        } else {
            vec![TAGS[i % TAGS.len()]]
        };
        contact = contact.with_phone(format!("+49 (30) {:04}-{}", i, i), tags);
    }
    contact.with_email("john@example.com", ["work"])
}

/// Benchmark a typical contact.
fn bench_convert_typical(c: &mut Criterion) {
    let converter = converter();
    let contact = contact_with_numbers(4);

    c.bench_function("convert_typical", |b| {
        b.iter(|| converter.convert(black_box(&contact)));
    });
}

/// Benchmark contacts that need splitting.
fn bench_convert_split(c: &mut Criterion) {
    let converter = converter();
    let mut group = c.benchmark_group("convert_numbers");

    for count in [9, 18, 45, 90].iter() {
        let contact = contact_with_numbers(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &contact, |b, contact| {
            b.iter(|| converter.convert(black_box(contact)));
        });
    }

    group.finish();
}

/// Benchmark realName fallback to the last template.
fn bench_name_fallback(c: &mut Criterion) {
    let converter = converter();
    let mut contact = SourceContact::new("bench").with_phone("1", ["home"]);
    contact.names.full = Some("Only Full Name".to_string());

    c.bench_function("convert_name_fallback", |b| {
        b.iter(|| converter.convert(black_box(&contact)));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_convert_typical,
        bench_convert_split,
        bench_name_fallback
}

criterion_main!(benches);
