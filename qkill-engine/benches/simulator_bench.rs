//! # Simulator Benchmarks
//!
//! Measures statevector evolution and shot sampling for the 5-qubit
//! kill circuit, ideal and noisy.
//!
//! Run: `cargo bench --bench simulator_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qkill_engine::{Circuit, DEFAULT_TOFFOLI_FACTOR, NoiseModel, Simulator};

fn kill_circuit() -> Circuit {
    let mut circuit = Circuit::new(5, 5);
    circuit.h(0).unwrap().h(1).unwrap().h(2).unwrap();
    circuit.reset(4).unwrap();
    circuit.cx(0, 4).unwrap().cx(1, 4).unwrap().cx(2, 4).unwrap();
    circuit.ccx(0, 1, 4).unwrap().ccx(0, 2, 4).unwrap().ccx(1, 2, 4).unwrap();
    for qubit in 0..5 {
        circuit.measure(qubit, qubit).unwrap();
    }
    circuit
}

/// Benchmark ideal execution (single evolution, per-shot sampling)
fn bench_ideal_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ideal_run");
    let circuit = kill_circuit();

    for shots in [256u64, 1024, 4096] {
        group.bench_function(format!("shots_{shots}"), |b| {
            b.iter(|| {
                let mut sim = Simulator::with_seed(42);
                black_box(sim.run(&circuit, shots, None).unwrap())
            })
        });
    }

    group.finish();
}

/// Benchmark noisy execution (per-shot re-evolution)
fn bench_noisy_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisy_run");
    let circuit = kill_circuit();
    let model = NoiseModel::depolarizing(0.002, 0.02, DEFAULT_TOFFOLI_FACTOR, 0.03).unwrap();

    for shots in [256u64, 1024] {
        group.bench_function(format!("shots_{shots}"), |b| {
            b.iter(|| {
                let mut sim = Simulator::with_seed(42);
                black_box(sim.run(&circuit, shots, Some(&model)).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ideal_run, bench_noisy_run);
criterion_main!(benches);
