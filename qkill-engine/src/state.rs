//! Vetor de estado quântico — amplitudes complexas indexadas por estado base
//!
//! O qubit 0 é o bit menos significativo do índice, consistente em todo o
//! engine. Toda porta unitária preserva a norma (Σ|amp|² = 1); apenas o
//! reset desvia transitoriamente antes de renormalizar.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{QsimError, QsimResult};
use crate::gates::Pauli;

/// Tolerância de normalização após passos unitários
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Massa retida abaixo da qual um reset é degenerado
const DEGENERATE_MASS: f64 = 1e-12;

/// Amplitudes de N qubits (dimensão 2^N)
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<Complex64>,
}

impl StateVector {
    /// Cria o estado |0...0⟩ para `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amps[0] = Complex64::new(1.0, 0.0);
        Self { num_qubits, amps }
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes atuais, indexadas por estado base
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Soma de |amp|² (1.0 para estados normalizados)
    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|amp| amp.norm_sqr()).sum()
    }

    fn check_qubit(&self, qubit: usize) -> QsimResult<()> {
        if qubit >= self.num_qubits {
            return Err(QsimError::InvalidOperand {
                kind: "qubit",
                index: qubit,
                limit: self.num_qubits,
            });
        }
        Ok(())
    }

    /// X: troca pares de amplitude que diferem só no bit alvo
    pub fn apply_x(&mut self, target: usize) -> QsimResult<()> {
        self.check_qubit(target)?;
        let mask = 1usize << target;
        for index in 0..self.amps.len() {
            if index & mask == 0 {
                self.amps.swap(index, index | mask);
            }
        }
        Ok(())
    }

    /// H: transforma cada par (a, b) em ((a+b)/√2, (a−b)/√2)
    pub fn apply_h(&mut self, target: usize) -> QsimResult<()> {
        self.check_qubit(target)?;
        let mask = 1usize << target;
        for index in 0..self.amps.len() {
            if index & mask == 0 {
                let low = self.amps[index];
                let high = self.amps[index | mask];
                self.amps[index] = (low + high) * FRAC_1_SQRT_2;
                self.amps[index | mask] = (low - high) * FRAC_1_SQRT_2;
            }
        }
        Ok(())
    }

    /// CX: aplica X ao alvo no subespaço onde o controle é 1
    pub fn apply_cx(&mut self, control: usize, target: usize) -> QsimResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        let cmask = 1usize << control;
        let tmask = 1usize << target;
        for index in 0..self.amps.len() {
            if index & cmask != 0 && index & tmask == 0 {
                self.amps.swap(index, index | tmask);
            }
        }
        Ok(())
    }

    /// CCX (Toffoli): aplica X ao alvo onde ambos os controles são 1
    pub fn apply_ccx(&mut self, control1: usize, control2: usize, target: usize) -> QsimResult<()> {
        self.check_qubit(control1)?;
        self.check_qubit(control2)?;
        self.check_qubit(target)?;
        let cmask = (1usize << control1) | (1usize << control2);
        let tmask = 1usize << target;
        for index in 0..self.amps.len() {
            if index & cmask == cmask && index & tmask == 0 {
                self.amps.swap(index, index | tmask);
            }
        }
        Ok(())
    }

    /// Aplica um operador de Pauli (caminho de erro do canal de ruído)
    pub fn apply_pauli(&mut self, pauli: Pauli, target: usize) -> QsimResult<()> {
        match pauli {
            Pauli::X => self.apply_x(target),
            Pauli::Y => {
                self.check_qubit(target)?;
                let mask = 1usize << target;
                for index in 0..self.amps.len() {
                    if index & mask == 0 {
                        let low = self.amps[index];
                        let high = self.amps[index | mask];
                        self.amps[index] = Complex64::new(0.0, -1.0) * high;
                        self.amps[index | mask] = Complex64::new(0.0, 1.0) * low;
                    }
                }
                Ok(())
            }
            Pauli::Z => {
                self.check_qubit(target)?;
                let mask = 1usize << target;
                for (index, amp) in self.amps.iter_mut().enumerate() {
                    if index & mask != 0 {
                        *amp = -*amp;
                    }
                }
                Ok(())
            }
        }
    }

    /// Reset: zera as amplitudes onde o bit alvo é 1 e renormaliza.
    ///
    /// Caso degenerado: se a massa retida é ~0 (todo o peso estava em |1⟩),
    /// o resultado é definido como o estado base |0...0⟩ — recuperação
    /// local determinística, nunca um erro fatal.
    pub fn reset(&mut self, target: usize) -> QsimResult<()> {
        self.check_qubit(target)?;
        let mask = 1usize << target;
        let retained: f64 = self
            .amps
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        if retained < DEGENERATE_MASS {
            for amp in &mut self.amps {
                *amp = Complex64::new(0.0, 0.0);
            }
            self.amps[0] = Complex64::new(1.0, 0.0);
            return Ok(());
        }

        let scale = 1.0 / retained.sqrt();
        for (index, amp) in self.amps.iter_mut().enumerate() {
            if index & mask != 0 {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                *amp *= scale;
            }
        }
        Ok(())
    }

    /// Amostra um estado base da distribuição conjunta |amp|² (regra de Born).
    /// `r` é um uniforme em [0, 1).
    pub fn sample_basis_state(&self, r: f64) -> usize {
        let mut cumulative = 0.0;
        for (index, amp) in self.amps.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return index;
            }
        }
        // r caiu além da cauda por arredondamento
        self.amps.len() - 1
    }
}
