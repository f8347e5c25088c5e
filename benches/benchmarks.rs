use square_masks::builder::build;
use square_masks::parse::parse_square_list;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_full_board(c: &mut Criterion) {
    let squares: Vec<i64> = (0..64).collect();

    c.bench_function("build 64 squares", |b| {
        b.iter(|| build(black_box(&squares)).unwrap())
    });
}

fn build_castle_squares(c: &mut Criterion) {
    let squares = vec![5, 6];

    c.bench_function("build castle squares", |b| {
        b.iter(|| build(black_box(&squares)).unwrap())
    });
}

fn parse_named_rank(c: &mut Criterion) {
    c.bench_function("parse rank 7", |b| {
        b.iter(|| parse_square_list(black_box("[a7, b7, c7, d7, e7, f7, g7, h7]")).unwrap())
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = build_full_board,build_castle_squares,parse_named_rank
}
criterion_main!(benches);
