//! Lexer Benchmarks
//!
//! Measures lexer throughput on small and large tern sources.
//! Run with: `cargo bench --package ternc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ternc_lex::{tokenize, Keywords};
use ternc_util::{Handler, SourceFile};

const PROGRAM: &str = r#"
.nonruntime
struct Rect
    w: f64
    h: f64
.end

fun area(r) r.w * r.h

fun grow(r, k)
    // scale both sides
    if k >= 1 and not r.frozen
        r.w = r.w * k
        r.h = r.h * k
    elif k == 0
        print("zero\n")
    else
        print('!')
"#;

fn token_count(keywords: &Keywords, source: &str) -> usize {
    let file = SourceFile::new("bench.tn", source);
    let handler = Handler::new();
    tokenize(&file, keywords, &handler).map_or(0, |tokens| tokens.len())
}

fn bench_lexer_program(c: &mut Criterion) {
    let keywords = Keywords::new();
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));
    group.bench_function("program", |b| {
        b.iter(|| token_count(&keywords, black_box(PROGRAM)))
    });

    let large = PROGRAM.repeat(500);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("program_x500", |b| {
        b.iter(|| token_count(&keywords, black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let keywords = Keywords::new();
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("integers", |b| {
        b.iter(|| token_count(&keywords, black_box("1 22 333 4444 55555 666666 7777777")))
    });

    group.bench_function("floats", |b| {
        b.iter(|| token_count(&keywords, black_box("1.5 22.25 333.125 4444.0625")))
    });

    group.bench_function("strings", |b| {
        let source = "\"a longer string literal with an escape\\t and some more text\"";
        b.iter(|| token_count(&keywords, black_box(source)))
    });

    group.finish();
}

fn bench_keyword_lookup(c: &mut Criterion) {
    let keywords = Keywords::new();
    let mut group = c.benchmark_group("keywords");

    group.bench_function("registry_build", |b| b.iter(Keywords::new));

    group.bench_function("keywords_and_identifiers", |b| {
        let source = "while for fun struct enum i32 u64 String foo bar_baz qux .end";
        b.iter(|| token_count(&keywords, black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_program,
    bench_lexer_literals,
    bench_keyword_lookup
);
criterion_main!(benches);
