use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mtrx::{Config, Kernel};

fn kernels() -> [(&'static str, Kernel); 2] {
    let inline = Kernel::new(Config {
        offload: false,
        ..Config::default()
    });
    [("inline", inline), ("default", Kernel::default())]
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_multiply");

    for size in [16, 64, 128] {
        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();

        for (name, kernel) in kernels() {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |bench, &n| {
                bench.iter(|| kernel.matrix_multiply(n, n, n, n, black_box(&a), black_box(&b)))
            });
        }
    }

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for size in [64, 256, 512] {
        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b = a.clone();

        for (name, kernel) in kernels() {
            group.bench_with_input(BenchmarkId::new(format!("scalar/{name}"), size), &a, |bench, a| {
                bench.iter(|| kernel.scalar_multiply(black_box(a), 1.5))
            });
            group.bench_with_input(BenchmarkId::new(format!("add/{name}"), size), &a, |bench, a| {
                bench.iter(|| kernel.add(black_box(a), black_box(&b)))
            });
            group.bench_with_input(
                BenchmarkId::new(format!("transpose/{name}"), size),
                &a,
                |bench, a| bench.iter(|| kernel.transpose(size, size, black_box(a))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_multiply, bench_elementwise);
criterion_main!(benches);
