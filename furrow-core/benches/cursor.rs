//! Throughput benchmarks for the row cursor

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use furrow_core::{CursorConfig, Input, RowCursor};

/// Build a synthetic CSV body with a mix of quoted and unquoted cells
fn synthetic_csv(rows: usize) -> String {
    let mut out = String::new();
    for i in 0..rows {
        out.push_str(&format!(
            "{i},name-{i},\"quoted, cell {i}\",\"with \"\"escapes\"\" too\",tail\n"
        ));
    }
    out
}

fn count_rows(input: &str, capacity: usize) -> usize {
    let config = CursorConfig::builder()
        .buffer_capacity(capacity)
        .build()
        .unwrap();
    let mut cursor =
        RowCursor::open_with_config(Input::from_text(input.to_owned()), config).unwrap();
    let count = cursor.rows().count();
    cursor.finish().unwrap();
    count
}

fn bench_row_iteration(c: &mut Criterion) {
    let input = synthetic_csv(10_000);

    let mut group = c.benchmark_group("row_iteration");
    group.throughput(Throughput::Bytes(input.len() as u64));

    for capacity in [512usize, 8 * 1024, 64 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let rows = count_rows(black_box(&input), capacity);
                    assert_eq!(rows, 10_000);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_row_iteration);
criterion_main!(benches);
