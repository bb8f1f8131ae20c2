//! Benchmarks for individual rules and full builder chains.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stringcheck::prelude::*;

// ============================================================================
// INDIVIDUAL RULES
// ============================================================================

fn bench_length_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");
    let rule = min_length(5);

    group.bench_function("valid", |b| {
        b.iter(|| rule.validate(black_box("hello world")));
    });
    group.bench_function("invalid", |b| {
        b.iter(|| rule.validate(black_box("hi")));
    });

    group.finish();
}

fn bench_email_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("email");
    let rule = email();

    group.bench_function("valid", |b| {
        b.iter(|| rule.validate(black_box("user@example.com")));
    });
    group.bench_function("invalid", |b| {
        b.iter(|| rule.validate(black_box("not an email")));
    });

    group.finish();
}

fn bench_numeric_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric");
    let rule = greater_than(10);

    group.bench_function("numeric_input", |b| {
        b.iter(|| rule.validate(black_box("12345.678")));
    });
    group.bench_function("non_numeric_input", |b| {
        b.iter(|| rule.validate(black_box("abcdef")));
    });

    group.finish();
}

// ============================================================================
// FULL CHAINS
// ============================================================================

fn bench_password_chain(c: &mut Criterion) {
    c.bench_function("password_chain", |b| {
        b.iter(|| {
            Validator::new(black_box("Passw0rd!"))
                .non_empty()
                .min_length(8)
                .max_length(64)
                .at_least_one_uppercase()
                .at_least_one_digit()
                .at_least_one_special_character()
                .check()
        });
    });
}

fn bench_short_circuit_chain(c: &mut Criterion) {
    // First rule fails; the rest of the chain is never evaluated.
    c.bench_function("short_circuit_chain", |b| {
        b.iter(|| {
            Validator::new(black_box(""))
                .non_empty()
                .min_length(8)
                .valid_email()
                .check()
        });
    });
}

criterion_group!(
    benches,
    bench_length_rules,
    bench_email_rule,
    bench_numeric_rule,
    bench_password_chain,
    bench_short_circuit_chain
);
criterion_main!(benches);
