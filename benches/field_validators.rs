//! Benchmarks for the field validators
//!
//! Covers the fast accept path, the early-reject path, and the scan-heavy
//! validators (email local/domain parse, tag underscore scan).

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use signup_validator::prelude::*;

fn bench_name(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let mut group = c.benchmark_group("name");

    group.bench_function("valid_ascii", |b| {
        b.iter(|| validate_name(black_box("Mary-Jane O'Brien"), &config));
    });
    group.bench_function("valid_multibyte", |b| {
        b.iter(|| validate_name(black_box("Björk Guðmundsdóttir"), &config));
    });
    group.bench_function("reject_punctuation", |b| {
        b.iter(|| validate_name(black_box("Bob!"), &config));
    });

    group.finish();
}

fn bench_password(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let mut group = c.benchmark_group("password");

    group.bench_function("valid", |b| {
        b.iter(|| validate_password(black_box("s3cret!pw#2024"), &config));
    });
    group.bench_function("reject_space", |b| {
        b.iter(|| validate_password(black_box("bad pass word"), &config));
    });

    group.finish();
}

fn bench_tag(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let mut group = c.benchmark_group("tag");

    group.bench_function("valid_with_separators", |b| {
        b.iter(|| validate_tag(black_box("alice.dev-01_x"), &config));
    });
    group.bench_function("reject_consecutive_underscores", |b| {
        b.iter(|| validate_tag(black_box("ab__cd"), &config));
    });

    group.finish();
}

fn bench_email(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let mut group = c.benchmark_group("email");

    group.bench_function("valid_plain", |b| {
        b.iter(|| validate_email(black_box("user+alias@sub.domain.com"), &config));
    });
    group.bench_function("valid_ip_literal", |b| {
        b.iter(|| validate_email(black_box("user@[192.168.1.1]"), &config));
    });
    group.bench_function("valid_quoted_local", |b| {
        b.iter(|| validate_email(black_box("\"john..doe\"@example.com"), &config));
    });
    group.bench_function("reject_no_at", |b| {
        b.iter(|| validate_email(black_box("notanemail"), &config));
    });

    group.finish();
}

fn bench_email_domain_scaling(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let mut group = c.benchmark_group("email_domain_scaling");

    for labels in [2usize, 8, 32] {
        let domain = vec!["label"; labels].join(".");
        let addr = format!("user@{domain}");
        group.throughput(Throughput::Bytes(addr.len() as u64));
        group.bench_function(format!("{labels}_labels"), |b| {
            b.iter(|| validate_email(black_box(&addr), &config));
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let config = ValidationConfig::default();
    let record = UserInputRecord::new("Alice", "alice@example.com", "s3cret!pw", "alice_01");

    c.bench_function("aggregate_all_valid", |b| {
        b.iter(|| validate_user_input(black_box(&record), &config));
    });
}

criterion_group!(
    benches,
    bench_name,
    bench_password,
    bench_tag,
    bench_email,
    bench_email_domain_scaling,
    bench_aggregate,
);
criterion_main!(benches);
