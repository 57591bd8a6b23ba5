#![allow(clippy::unwrap_used)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hoagie::{evaluator, parser, reader};

const SIMPLE: &str = "(+ 1 2)";
const NESTED: &str = "(max (* 5 2) (- 20 (/ 9 3)) (min 4 (^ 2 3) 7))";
const LISTS: &str = "join (tail {0 2 3}) (cons 1 (list 4 5)) {6 (+ 3 4)}";
const QUOTED: &str = "eval (head {(eval (join {+} (tail {x 1 2 3 4 5 6 7 8 9 10}))) ignored})";

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parsing");

    group.bench_function("Simple", |b| b.iter(|| parser::parse(black_box(SIMPLE))));
    group.bench_function("Nested", |b| b.iter(|| parser::parse(black_box(NESTED))));
    group.bench_function("Lists", |b| b.iter(|| parser::parse(black_box(LISTS))));

    group.finish();
}

fn bench_reading(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reading");

    let nested = parser::parse(NESTED).unwrap();
    let lists = parser::parse(LISTS).unwrap();
    group.bench_function("Nested", |b| b.iter(|| reader::read(black_box(&nested))));
    group.bench_function("Lists", |b| b.iter(|| reader::read(black_box(&lists))));

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Evaluation");

    let simple = reader::read(&parser::parse(SIMPLE).unwrap());
    let nested = reader::read(&parser::parse(NESTED).unwrap());
    let lists = reader::read(&parser::parse(LISTS).unwrap());
    let quoted = reader::read(&parser::parse(QUOTED).unwrap());

    group.bench_function("Eval Simple", |b| {
        b.iter(|| evaluator::eval(black_box(simple.clone())))
    });
    group.bench_function("Eval Nested", |b| {
        b.iter(|| evaluator::eval(black_box(nested.clone())))
    });
    group.bench_function("Eval Lists", |b| {
        b.iter(|| evaluator::eval(black_box(lists.clone())))
    });
    group.bench_function("Eval Quoted", |b| {
        b.iter(|| evaluator::eval(black_box(quoted.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_reading, bench_evaluation);
criterion_main!(benches);
