use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use patgrep::matcher::{self, anchor, wildcard, MatchMode, MatchOptions};

fn sample_line() -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. ".repeat(8)
}

fn bench_substring(c: &mut Criterion) {
    let line = sample_line();
    c.bench_function("substring_hit", |b| {
        b.iter(|| {
            matcher::line_matches(
                black_box(&line),
                black_box(b"lazy dog"),
                MatchMode::Substring,
                MatchOptions::default(),
            )
        })
    });
    c.bench_function("substring_folded_hit", |b| {
        b.iter(|| {
            matcher::line_matches(
                black_box(&line),
                black_box(b"LAZY DOG"),
                MatchMode::Substring,
                MatchOptions {
                    ignore_case: true,
                    invert: false,
                },
            )
        })
    });
}

fn bench_wildcard(c: &mut Criterion) {
    let line = sample_line();
    c.bench_function("wildcard_hit", |b| {
        b.iter(|| wildcard::is_match(black_box(&line), black_box(b"q*fox")))
    });

    // forces the matcher through its full backtracking search
    let run = vec![b'a'; 32];
    c.bench_function("wildcard_backtrack_miss", |b| {
        b.iter(|| wildcard::is_match(black_box(&run), black_box(b"a*a*a*b")))
    });
}

fn bench_anchor(c: &mut Criterion) {
    let line = sample_line();
    c.bench_function("anchor_prefix_hit", |b| {
        b.iter(|| anchor::is_match(black_box(&line), black_box(b"^the quick")))
    });
    c.bench_function("anchor_suffix_hit", |b| {
        b.iter(|| anchor::is_match(black_box(&line), black_box(b"dog. $")))
    });
}

criterion_group!(benches, bench_substring, bench_wildcard, bench_anchor);
criterion_main!(benches);
