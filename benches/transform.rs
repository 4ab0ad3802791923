use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabprep::{fill_missing, standardize_with_fill, Column, Fill, FillStrategy, Table};

fn make_table(rows: usize) -> Table {
    let with_gaps: Vec<Option<f64>> = (0..rows)
        .map(|i| if i % 7 == 0 { None } else { Some(i as f64 * 0.1) })
        .collect();
    let ints: Vec<Option<i64>> = (0..rows).map(|i| Some((i % 13) as i64)).collect();
    let labels: Vec<Option<String>> = (0..rows).map(|i| Some(format!("row{}", i))).collect();

    Table::new(vec![
        Column::float("x", with_gaps),
        Column::int("k", ints),
        Column::text("label", labels),
    ])
    .unwrap()
}

fn bench_fill_missing(c: &mut Criterion) {
    for size in [100, 1000, 10000, 100000].iter() {
        for strategy in [FillStrategy::Mean, FillStrategy::Median, FillStrategy::Mode] {
            let id = BenchmarkId::new(format!("fill_{}", strategy), size);
            c.bench_with_input(id, size, |b, &n| {
                let table = make_table(n);
                b.iter(|| {
                    let filled = fill_missing(black_box(&table), strategy).unwrap();
                    black_box(filled);
                });
            });
        }
    }
}

fn bench_standardize_with_fill(c: &mut Criterion) {
    for size in [100, 1000, 10000, 100000].iter() {
        c.bench_with_input(BenchmarkId::new("standardize_with_fill", size), size, |b, &n| {
            let table = make_table(n);
            b.iter(|| {
                let scaled =
                    standardize_with_fill(black_box(&table), &[] as &[&str], Fill::Median).unwrap();
                black_box(scaled);
            });
        });
    }
}

criterion_group!(benches, bench_fill_missing, bench_standardize_with_fill);
criterion_main!(benches);
