//! Modelo de ruído: despolarização por aridade + erro de leitura
//!
//! Um [`NoiseModel`] mapeia aridade de porta (1, 2 ou 3 qubits) para um
//! canal de despolarização homogêneo ("all-qubit"), mais um canal de
//! bit-flip simétrico aplicado a cada bit clássico reportado.
//!
//! Semântica por shot: para cada porta unitária com canal configurado,
//! um sorteio de Bernoulli; em caso de falha, uma combinação de Paulis
//! não-identidade uniformemente sorteada substitui a porta ideal.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QsimError, QsimResult};
use crate::gates::Pauli;
use crate::state::StateVector;

/// Fator de referência do canal de três qubits (Toffoli) relativo a p2.
/// Parâmetro configurável, não uma constante fixa do modelo.
pub const DEFAULT_TOFFOLI_FACTOR: f64 = 1.5;

/// Maior aridade com canal configurável
const MAX_ARITY: usize = 3;

/// Canal de despolarização: com probabilidade `probability`, o resultado
/// ideal da porta é substituído por um erro de Pauli uniforme sobre os
/// qubits afetados
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseChannel {
    pub probability: f64,
    pub arity: usize,
}

/// Modelo de ruído completo: canais por aridade + erro de leitura
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseModel {
    channels: [Option<NoiseChannel>; MAX_ARITY],
    readout_error: f64,
}

fn check_rate(probability: f64) -> QsimResult<()> {
    if !(0.0..=1.0).contains(&probability) || probability.is_nan() {
        return Err(QsimError::InvalidNoiseRate(probability));
    }
    Ok(())
}

impl NoiseModel {
    /// Modelo vazio: nenhum canal, leitura perfeita
    pub fn new() -> Self {
        Self::default()
    }

    /// Construção de referência: despolarização p1 (single-qubit),
    /// p2 (two-qubit), p2 × `toffoli_factor` (three-qubit) e erro de
    /// leitura simétrico
    pub fn depolarizing(
        p1: f64,
        p2: f64,
        toffoli_factor: f64,
        readout_error: f64,
    ) -> QsimResult<Self> {
        let mut model = Self::new();
        model.add_depolarizing(1, p1)?;
        model.add_depolarizing(2, p2)?;
        model.add_depolarizing(3, p2 * toffoli_factor)?;
        model.set_readout_error(readout_error)?;
        Ok(model)
    }

    /// Configura o canal de despolarização para uma aridade (1..=3)
    pub fn add_depolarizing(&mut self, arity: usize, probability: f64) -> QsimResult<&mut Self> {
        if arity == 0 || arity > MAX_ARITY {
            return Err(QsimError::InvalidOperand {
                kind: "channel arity",
                index: arity,
                limit: MAX_ARITY + 1,
            });
        }
        check_rate(probability)?;
        self.channels[arity - 1] = Some(NoiseChannel { probability, arity });
        Ok(self)
    }

    /// Configura o erro de leitura (bit-flip simétrico por bit reportado)
    pub fn set_readout_error(&mut self, probability: f64) -> QsimResult<&mut Self> {
        check_rate(probability)?;
        self.readout_error = probability;
        Ok(self)
    }

    /// Canal configurado para a aridade, se houver
    pub fn channel(&self, arity: usize) -> Option<NoiseChannel> {
        if arity == 0 || arity > MAX_ARITY {
            return None;
        }
        self.channels[arity - 1]
    }

    /// Taxa de erro de leitura
    pub fn readout_error(&self) -> f64 {
        self.readout_error
    }
}

/// Sorteia uma combinação não-identidade de Paulis sobre `qubits`
/// (uniforme entre as 4^k − 1 combinações) e a aplica ao estado
pub(crate) fn apply_random_pauli<R: Rng>(
    state: &mut StateVector,
    qubits: &[usize],
    rng: &mut R,
) -> QsimResult<()> {
    let combos = 4usize.pow(qubits.len() as u32);
    let mut digits = rng.gen_range(1..combos);
    for &qubit in qubits {
        if let Some(pauli) = Pauli::from_digit(digits & 0b11) {
            state.apply_pauli(pauli, qubit)?;
        }
        digits >>= 2;
    }
    Ok(())
}
