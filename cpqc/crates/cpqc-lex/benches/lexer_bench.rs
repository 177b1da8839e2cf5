//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package cpqc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use cpqc_lex::Lexer;
use cpqc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.count()
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "a, b: float; { input(a); input(b); if (a < b) output(a); else output(b); }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("declaration", |b| {
        b.iter(|| lexer_token_count(black_box("k, j: int;")))
    });

    group.bench_function("min_program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_large_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let mut source = String::from("k, j: int; acc: float;\n{\n");
    for _ in 0..500 {
        source.push_str("  while (k <= 10) /* step */ k = k + 2;\n");
        source.push_str("  acc = acc + static_cast<float>(j) * 1.5;\n");
    }
    source.push_str("}\n");

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("loop_heavy", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_statements, bench_lexer_large_program);
criterion_main!(benches);
