//! Execução de circuitos e amostragem de medições
//!
//! O simulador executa um [`Circuit`] contra um [`StateVector`] e repete
//! o processo estocástico `shots` vezes, produzindo um histograma de
//! bitstrings. A medição é terminal: um único sorteio conjunto pela
//! regra de Born no fim da sequência de operações.
//!
//! Caminho ideal (sem ruído): a evolução é determinística, então o
//! estado é evoluído uma única vez e só o sorteio final difere por shot.
//! Caminho ruidoso: cada shot evolui o próprio estado, com os sorteios
//! de erro intercalados.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{QsimError, QsimResult};
use crate::gates::GateOp;
use crate::noise::{self, NoiseModel};
use crate::state::StateVector;

/// Histograma de resultados: bitstring (bit clássico C−1 à esquerda)
/// → contagem. Invariante: Σ contagens == shots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    inner: BTreeMap<String, u64>,
}

impl Counts {
    /// Histograma vazio
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, bitstring: String) {
        *self.inner.entry(bitstring).or_insert(0) += 1;
    }

    /// Contagem de uma bitstring (0 se ausente)
    pub fn get(&self, bitstring: &str) -> u64 {
        self.inner.get(bitstring).copied().unwrap_or(0)
    }

    /// Soma de todas as contagens
    pub fn total(&self) -> u64 {
        self.inner.values().sum()
    }

    /// Número de bitstrings distintas observadas
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Nenhum resultado registrado?
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pares (bitstring, contagem) em ordem lexicográfica
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.inner.iter().map(|(bits, &count)| (bits.as_str(), count))
    }

    /// Largura em bits das chaves (0 se vazio)
    pub fn bit_width(&self) -> usize {
        self.inner.keys().next().map_or(0, |bits| bits.len())
    }
}

/// Par (qubit medido, bit clássico de destino)
type MeasureMap = Vec<(usize, usize)>;

/// Executa circuitos com fonte de aleatoriedade própria e semeável
#[derive(Debug)]
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Simulador com semente tirada da entropia do sistema
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Simulador determinístico com semente explícita
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Executa `circuit` por `shots` repetições, com ruído opcional.
    ///
    /// `noise = None` é integralmente equivalente a omitir o ruído:
    /// nenhuma consulta a canal, nenhum sorteio de erro.
    pub fn run(
        &mut self,
        circuit: &Circuit,
        shots: u64,
        noise: Option<&NoiseModel>,
    ) -> QsimResult<Counts> {
        if shots == 0 {
            return Err(QsimError::InvalidShotCount(shots));
        }
        match noise {
            None => self.run_ideal(circuit, shots),
            Some(model) => self.run_noisy(circuit, shots, model),
        }
    }

    fn run_ideal(&mut self, circuit: &Circuit, shots: u64) -> QsimResult<Counts> {
        let mut state = StateVector::new(circuit.num_qubits());
        let mut measures = MeasureMap::new();

        for op in circuit.ops() {
            match *op {
                GateOp::Measure { qubit, clbit } => measures.push((qubit, clbit)),
                _ => apply_gate(&mut state, op)?,
            }
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let basis = state.sample_basis_state(self.rng.gen_range(0.0..1.0));
            let bits = self.readout(basis, &measures, circuit.num_clbits(), 0.0);
            counts.record(bits);
        }
        Ok(counts)
    }

    fn run_noisy(
        &mut self,
        circuit: &Circuit,
        shots: u64,
        model: &NoiseModel,
    ) -> QsimResult<Counts> {
        let mut counts = Counts::new();

        for _ in 0..shots {
            let mut state = StateVector::new(circuit.num_qubits());
            let mut measures = MeasureMap::new();

            for op in circuit.ops() {
                match op {
                    GateOp::Measure { qubit, clbit } => measures.push((*qubit, *clbit)),
                    GateOp::Reset { .. } => apply_gate(&mut state, op)?,
                    unitary => {
                        let faulted = match unitary.unitary_arity().and_then(|a| model.channel(a))
                        {
                            Some(channel) => self.rng.gen_bool(channel.probability),
                            None => false,
                        };
                        if faulted {
                            noise::apply_random_pauli(
                                &mut state,
                                &unitary.qubits(),
                                &mut self.rng,
                            )?;
                        } else {
                            apply_gate(&mut state, unitary)?;
                        }
                    }
                }
            }

            let basis = state.sample_basis_state(self.rng.gen_range(0.0..1.0));
            let bits = self.readout(basis, &measures, circuit.num_clbits(), model.readout_error());
            counts.record(bits);
        }
        Ok(counts)
    }

    /// Extrai os bits medidos do índice base amostrado, aplica o canal de
    /// leitura e monta a bitstring (bit clássico C−1 primeiro). Bits
    /// clássicos não escritos ficam em '0'
    fn readout(
        &mut self,
        basis: usize,
        measures: &MeasureMap,
        num_clbits: usize,
        readout_error: f64,
    ) -> String {
        let mut bits = vec!['0'; num_clbits];
        for &(qubit, clbit) in measures {
            let mut bit = (basis >> qubit) & 1 == 1;
            if readout_error > 0.0 && self.rng.gen_bool(readout_error) {
                bit = !bit;
            }
            bits[num_clbits - 1 - clbit] = if bit { '1' } else { '0' };
        }
        bits.into_iter().collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_gate(state: &mut StateVector, op: &GateOp) -> QsimResult<()> {
    match *op {
        GateOp::X { target } => state.apply_x(target),
        GateOp::H { target } => state.apply_h(target),
        GateOp::Cx { control, target } => state.apply_cx(control, target),
        GateOp::Ccx {
            control1,
            control2,
            target,
        } => state.apply_ccx(control1, control2, target),
        GateOp::Reset { target } => state.reset(target),
        // Measure é tratado pelo chamador
        GateOp::Measure { .. } => Ok(()),
    }
}
