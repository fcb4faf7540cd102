//! qkill — regra de kill clássica vs. circuito quântico reversível
//!
//! Demonstra que K = T OR M OR G pode ser realizado como circuito
//! reversível (CX + Toffoli) e compara a saída probabilística do
//! simulador com a tabela-verdade clássica, ideal e com ruído.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use qkill_engine::{DEFAULT_TOFFOLI_FACTOR, NoiseModel, Simulator};

mod drivers;
mod plot;

use drivers::{superposition_counts, truth_table};
use plot::{PlotConfig, plot_counts, print_counts, print_truth_table};

/// Parâmetros de ruído de referência
const P1: f64 = 0.002;
const P2: f64 = 0.02;
const READOUT_ERROR: f64 = 0.03;

/// Quantos pares (bitstring, contagem) aparecem na linha "Sample:"
const SAMPLE_LEN: usize = 5;

#[derive(Parser)]
#[command(name = "qkill")]
#[command(version)]
#[command(about = "Reversible biosafety kill-switch (K = T OR M OR G) on a statevector simulator", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut sim = Simulator::new();
    let config = PlotConfig::default();

    println!(
        "{}",
        "1. Classical vs quantum truth table (ideal simulator):".bold()
    );
    let rows = truth_table(&mut sim)?;
    print_truth_table(&rows);

    println!();
    println!("{}", "2. Quantum superposition counts (ideal):".bold());
    let ideal = superposition_counts(&mut sim, None)?;
    print_counts(&ideal, SAMPLE_LEN);
    plot_counts(&ideal, "Quantum Superposition (Ideal)", &config)
        .context("presentation stage: ideal histogram")?;

    println!();
    println!("{}", "3. Quantum superposition counts (noisy):".bold());
    let noise = NoiseModel::depolarizing(P1, P2, DEFAULT_TOFFOLI_FACTOR, READOUT_ERROR)
        .context("noise setup stage")?;
    let noisy = superposition_counts(&mut sim, Some(&noise))?;
    print_counts(&noisy, SAMPLE_LEN);
    plot_counts(&noisy, "Quantum Superposition (Noisy)", &config)
        .context("presentation stage: noisy histogram")?;

    println!();
    println!("{}", "All simulations completed successfully.".green());
    Ok(())
}
