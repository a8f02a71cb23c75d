use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_spotit::{build_deck, Deck, Order};

fn benchmark_build_displayable(c: &mut Criterion) {
    // Largest order the bundled alphabets can display.
    c.bench_function("build_deck_order_7", |b| {
        b.iter(|| build_deck(black_box(7)).unwrap())
    });
}

fn benchmark_build_large(c: &mut Criterion) {
    // 993 cards; dominated by the pairwise validation pass.
    c.bench_function("build_deck_order_31", |b| {
        b.iter(|| build_deck(black_box(31)).unwrap())
    });
}

fn benchmark_revalidate(c: &mut Criterion) {
    let deck = Deck::build(Order::new(31).unwrap()).unwrap();

    c.bench_function("validate_order_31", |b| {
        b.iter(|| black_box(&deck).validate().unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_build_displayable,
    benchmark_build_large,
    benchmark_revalidate
);
criterion_main!(benches);
