//! Benchmarks for statevector evaluation
//!
//! Run with: cargo bench -p grani-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use grani_ir::{Circuit, QubitId};
use grani_sim::evaluate;
use std::f64::consts::PI;

/// Benchmark GHZ-state evaluation across circuit widths.
fn bench_ghz_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_evaluation");

    for num_qubits in &[2_u32, 4, 6, 8] {
        let circuit = Circuit::ghz(*num_qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::new("evaluate", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| evaluate(black_box(circuit)));
            },
        );
    }

    group.finish();
}

/// Benchmark a dense rotation layer (one gate per qubit per column).
fn bench_rotation_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_layers");

    for num_qubits in &[4_u32, 8] {
        let columns = 10;
        let mut circuit = Circuit::new(*num_qubits, columns);
        for col in 0..columns {
            for q in 0..*num_qubits {
                circuit
                    .rx(PI / f64::from(col + 1), QubitId(q), col)
                    .unwrap();
            }
        }

        group.bench_with_input(
            BenchmarkId::new("evaluate", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| evaluate(black_box(circuit)));
            },
        );
    }

    group.finish();
}

/// Benchmark the reporting pass alone.
fn bench_reporting(c: &mut Criterion) {
    let mut group = c.benchmark_group("reporting");

    let sv = evaluate(&Circuit::ghz(8).unwrap());
    group.bench_function("probabilities_8q", |b| {
        b.iter(|| black_box(&sv).probabilities());
    });
    group.bench_function("pretty_8q", |b| {
        b.iter(|| black_box(&sv).pretty());
    });
    group.bench_function("reduce_qubit_8q", |b| {
        b.iter(|| black_box(&sv).reduce_qubit(3));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ghz_evaluation,
    bench_rotation_layers,
    bench_reporting,
);

criterion_main!(benches);
