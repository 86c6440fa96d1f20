// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Primitives - digit counting, fixed-point conversion, noise stripping
// 2. Binary Operations - corrected arithmetic against native f64
// 3. Variadic Operations - folds over growing operand lists
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use number_precision::numeric::{canonical, digit_length, float_to_fixed, strip, Operand};
use number_precision::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn quiet_calculator() -> Calculator {
    Calculator::with_handler(Arc::new(NoOpBoundaryHandler))
}

// ============================================================================
// Primitive Benchmarks
// ============================================================================

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for value in [0.1, 123.456, 1.23e-7, 9_007_199_254_740_991.0] {
        let operand = Operand::from(value);

        group.bench_with_input(
            BenchmarkId::new("canonical", value),
            &value,
            |b, &value| b.iter(|| black_box(canonical(black_box(value)))),
        );

        group.bench_with_input(
            BenchmarkId::new("digit_length", value),
            &operand,
            |b, operand| b.iter(|| black_box(digit_length(black_box(operand)))),
        );

        group.bench_with_input(
            BenchmarkId::new("float_to_fixed", value),
            &operand,
            |b, operand| b.iter(|| black_box(float_to_fixed(black_box(operand)))),
        );
    }

    group.bench_function("strip", |b| {
        b.iter(|| black_box(strip(black_box(0.1 + 0.2))))
    });

    group.finish();
}

// ============================================================================
// Binary Operation Benchmarks
// Corrected arithmetic vs native f64 for the same inputs
// ============================================================================

fn benchmark_binary_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_operations");
    let calc = quiet_calculator();

    group.bench_function("native_add", |b| {
        b.iter(|| black_box(black_box(0.1) + black_box(0.2)))
    });
    group.bench_function("add", |b| {
        b.iter(|| black_box(calc.add(black_box(0.1), black_box(0.2))))
    });
    group.bench_function("sub", |b| {
        b.iter(|| black_box(calc.sub(black_box(1.0), black_box(0.9))))
    });
    group.bench_function("mul", |b| {
        b.iter(|| black_box(calc.mul(black_box(0.07), black_box(100.0))))
    });
    group.bench_function("div", |b| {
        b.iter(|| black_box(calc.div(black_box(0.3), black_box(0.1))))
    });
    group.bench_function("round", |b| {
        b.iter(|| black_box(calc.round(black_box(1.005), black_box(2))))
    });
    group.bench_function("mul_text", |b| {
        b.iter(|| black_box(calc.mul(black_box("1.50"), black_box("2.25"))))
    });

    group.finish();
}

// ============================================================================
// Variadic Operation Benchmarks
// ============================================================================

fn benchmark_variadic_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("variadic_operations");
    let calc = quiet_calculator();

    for num_operands in [2, 10, 100].iter() {
        let operands: Vec<f64> = (0..*num_operands)
            .map(|i| 0.1 + f64::from(i) * 0.01)
            .collect();

        group.bench_with_input(
            BenchmarkId::new("add_all", num_operands),
            &operands,
            |b, operands| b.iter(|| black_box(calc.add_all(operands.iter().copied()))),
        );

        group.bench_with_input(
            BenchmarkId::new("mul_all", num_operands),
            &operands,
            |b, operands| b.iter(|| black_box(calc.mul_all(operands.iter().copied()))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_binary_operations,
    benchmark_variadic_operations
);
criterion_main!(benches);
