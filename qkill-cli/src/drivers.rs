//! Drivers de tabela-verdade e superposição — clientes finos do engine
//!
//! Constroem o circuito fixo de kill (preparação + lógica OR reversível),
//! invocam o simulador e tabulam probabilidade quântica vs. regra
//! clássica.

use anyhow::{Context, Result};
use qkill_engine::{Circuit, Counts, NoiseModel, QsimResult, Simulator};

/// Mapeamento de qubits do circuito de kill
pub const QUBIT_MUTATION: usize = 0;
pub const QUBIT_TIMER: usize = 1;
pub const QUBIT_GEOSENSE: usize = 2;
pub const QUBIT_ANCILLA: usize = 3;
pub const QUBIT_KILL: usize = 4;

/// Shots por linha da tabela-verdade
pub const TRUTH_TABLE_SHOTS: u64 = 1024;
/// Shots da simulação em superposição
pub const SUPERPOSITION_SHOTS: u64 = 4096;

/// Regra clássica de kill: K = T OR M OR G
pub fn kill_rule_classical(mutation: bool, timer: bool, geosense: bool) -> u8 {
    u8::from(mutation || timer || geosense)
}

/// Uma linha da tabela clássico vs. quântico
#[derive(Debug, Clone)]
pub struct TruthTableRow {
    pub mutation: u8,
    pub timer: u8,
    pub geosense: u8,
    pub quantum_prob_kill: f64,
    pub classical_kill: u8,
}

/// Lógica reversível do kill: K = M⊕T⊕G e Toffolis corrigem a paridade
/// para formar o OR próprio (1 se qualquer entrada = 1)
fn kill_logic(circuit: &mut Circuit) -> QsimResult<()> {
    circuit.reset(QUBIT_KILL)?;
    circuit.cx(QUBIT_MUTATION, QUBIT_KILL)?;
    circuit.cx(QUBIT_TIMER, QUBIT_KILL)?;
    circuit.cx(QUBIT_GEOSENSE, QUBIT_KILL)?;
    circuit.ccx(QUBIT_MUTATION, QUBIT_TIMER, QUBIT_KILL)?;
    circuit.ccx(QUBIT_MUTATION, QUBIT_GEOSENSE, QUBIT_KILL)?;
    circuit.ccx(QUBIT_TIMER, QUBIT_GEOSENSE, QUBIT_KILL)?;
    Ok(())
}

/// Circuito completo de uma linha da tabela-verdade: X nas entradas "1",
/// lógica de kill, K medido em c0
fn truth_table_circuit(mutation: bool, timer: bool, geosense: bool) -> QsimResult<Circuit> {
    let mut circuit = Circuit::new(5, 1);
    if mutation {
        circuit.x(QUBIT_MUTATION)?;
    }
    if timer {
        circuit.x(QUBIT_TIMER)?;
    }
    if geosense {
        circuit.x(QUBIT_GEOSENSE)?;
    }
    kill_logic(&mut circuit)?;
    circuit.measure(QUBIT_KILL, 0)?;
    Ok(circuit)
}

/// Circuito de superposição: Hadamard nas 3 entradas, 5 qubits medidos.
/// A bitstring reportada lê M T G ancilla K da esquerda para a direita
fn superposition_circuit() -> QsimResult<Circuit> {
    let mut circuit = Circuit::new(5, 5);
    circuit.h(QUBIT_MUTATION)?.h(QUBIT_TIMER)?.h(QUBIT_GEOSENSE)?;
    kill_logic(&mut circuit)?;
    circuit.measure(QUBIT_KILL, 0)?;
    circuit.measure(QUBIT_ANCILLA, 1)?;
    circuit.measure(QUBIT_GEOSENSE, 2)?;
    circuit.measure(QUBIT_TIMER, 3)?;
    circuit.measure(QUBIT_MUTATION, 4)?;
    Ok(circuit)
}

/// Fração dos shots cujo bit mais significativo reportado é '1'
fn prob_kill(counts: &Counts) -> f64 {
    let killed: u64 = counts
        .iter()
        .filter(|(bits, _)| bits.starts_with('1'))
        .map(|(_, count)| count)
        .sum();
    killed as f64 / counts.total() as f64
}

/// Varre as 8 combinações de entrada e tabula a probabilidade quântica
/// de kill contra a regra clássica (simulador ideal)
pub fn truth_table(sim: &mut Simulator) -> Result<Vec<TruthTableRow>> {
    let mut rows = Vec::with_capacity(8);

    for input in 0..8u8 {
        let mutation = input & 0b100 != 0;
        let timer = input & 0b010 != 0;
        let geosense = input & 0b001 != 0;

        let circuit = truth_table_circuit(mutation, timer, geosense)
            .context("construction stage: truth table circuit")?;
        let counts = sim
            .run(&circuit, TRUTH_TABLE_SHOTS, None)
            .context("simulation stage: truth table row")?;

        rows.push(TruthTableRow {
            mutation: u8::from(mutation),
            timer: u8::from(timer),
            geosense: u8::from(geosense),
            quantum_prob_kill: prob_kill(&counts),
            classical_kill: kill_rule_classical(mutation, timer, geosense),
        });
    }

    Ok(rows)
}

/// Executa a simulação em superposição, sem ou com modelo de ruído
pub fn superposition_counts(sim: &mut Simulator, noise: Option<&NoiseModel>) -> Result<Counts> {
    let circuit = superposition_circuit().context("construction stage: superposition circuit")?;
    sim.run(&circuit, SUPERPOSITION_SHOTS, noise)
        .context("simulation stage: superposition run")
}
