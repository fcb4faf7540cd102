//! Descrição de circuito + builder validante
//!
//! Um `Circuit` é puramente descritivo: uma sequência ordenada de
//! [`GateOp`] com contagem declarada de qubits e bits clássicos. A
//! validação acontece no append; a execução fica com o [`Simulator`].
//!
//! A medição é terminal neste engine: depois de um `measure`, só outros
//! `measure` podem ser anexados.
//!
//! [`Simulator`]: crate::simulator::Simulator

use serde::{Deserialize, Serialize};

use crate::error::{QsimError, QsimResult};
use crate::gates::GateOp;

/// Sequência ordenada de operações sobre Q qubits e C bits clássicos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    num_clbits: usize,
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Cria um circuito vazio
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            ops: Vec::new(),
        }
    }

    /// Constrói um circuito a partir de uma lista ordenada de operações,
    /// validando cada índice como no builder incremental
    pub fn from_ops(
        num_qubits: usize,
        num_clbits: usize,
        ops: impl IntoIterator<Item = GateOp>,
    ) -> QsimResult<Self> {
        let mut circuit = Self::new(num_qubits, num_clbits);
        for op in ops {
            circuit.push(op)?;
        }
        Ok(circuit)
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Número de bits clássicos
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Operações na ordem de aplicação
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Quantidade de operações
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Circuito sem operações?
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
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

    fn check_clbit(&self, clbit: usize) -> QsimResult<()> {
        if clbit >= self.num_clbits {
            return Err(QsimError::InvalidOperand {
                kind: "clbit",
                index: clbit,
                limit: self.num_clbits,
            });
        }
        Ok(())
    }

    fn has_measure(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, GateOp::Measure { .. }))
    }

    fn clbit_written(&self, clbit: usize) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, GateOp::Measure { clbit: c, .. } if *c == clbit))
    }

    /// Anexa uma operação já construída, aplicando as mesmas validações
    /// dos métodos nomeados
    pub fn push(&mut self, op: GateOp) -> QsimResult<&mut Self> {
        match op {
            GateOp::X { target } => self.x(target),
            GateOp::H { target } => self.h(target),
            GateOp::Cx { control, target } => self.cx(control, target),
            GateOp::Ccx {
                control1,
                control2,
                target,
            } => self.ccx(control1, control2, target),
            GateOp::Reset { target } => self.reset(target),
            GateOp::Measure { qubit, clbit } => self.measure(qubit, clbit),
        }
    }

    fn push_gate(&mut self, op: GateOp) -> QsimResult<&mut Self> {
        if self.has_measure() {
            return Err(QsimError::GateAfterMeasurement(op.name()));
        }
        self.ops.push(op);
        Ok(self)
    }

    /// X no qubit alvo
    pub fn x(&mut self, target: usize) -> QsimResult<&mut Self> {
        self.check_qubit(target)?;
        self.push_gate(GateOp::X { target })
    }

    /// Hadamard no qubit alvo
    pub fn h(&mut self, target: usize) -> QsimResult<&mut Self> {
        self.check_qubit(target)?;
        self.push_gate(GateOp::H { target })
    }

    /// CX (controle, alvo)
    pub fn cx(&mut self, control: usize, target: usize) -> QsimResult<&mut Self> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        self.push_gate(GateOp::Cx { control, target })
    }

    /// CCX / Toffoli (controle1, controle2, alvo)
    pub fn ccx(&mut self, control1: usize, control2: usize, target: usize) -> QsimResult<&mut Self> {
        self.check_qubit(control1)?;
        self.check_qubit(control2)?;
        self.check_qubit(target)?;
        self.push_gate(GateOp::Ccx {
            control1,
            control2,
            target,
        })
    }

    /// Reset do qubit alvo para |0⟩
    pub fn reset(&mut self, target: usize) -> QsimResult<&mut Self> {
        self.check_qubit(target)?;
        self.push_gate(GateOp::Reset { target })
    }

    /// Mede um qubit para um bit clássico. Cada bit clássico só pode ser
    /// escrito uma vez
    pub fn measure(&mut self, qubit: usize, clbit: usize) -> QsimResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.check_clbit(clbit)?;
        if self.clbit_written(clbit) {
            return Err(QsimError::DuplicateMeasurement(clbit));
        }
        self.ops.push(GateOp::Measure { qubit, clbit });
        Ok(self)
    }

    /// Anexa as operações de outro circuito (composição sequencial).
    /// Os índices do outro circuito são revalidados contra este
    pub fn append(&mut self, other: &Circuit) -> QsimResult<&mut Self> {
        for op in other.ops() {
            self.push(*op)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chaining() {
        let mut circuit = Circuit::new(2, 1);
        circuit.h(0).unwrap().cx(0, 1).unwrap().measure(1, 0).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.ops()[0], GateOp::H { target: 0 });
    }

    #[test]
    fn test_out_of_range_qubit_rejected() {
        let mut circuit = Circuit::new(2, 1);
        let err = circuit.x(2).unwrap_err();
        assert!(matches!(err, QsimError::InvalidOperand { kind: "qubit", .. }));
    }

    #[test]
    fn test_out_of_range_clbit_rejected() {
        let mut circuit = Circuit::new(2, 1);
        let err = circuit.measure(0, 1).unwrap_err();
        assert!(matches!(err, QsimError::InvalidOperand { kind: "clbit", .. }));
    }

    #[test]
    fn test_duplicate_clbit_rejected() {
        let mut circuit = Circuit::new(2, 1);
        circuit.measure(0, 0).unwrap();
        let err = circuit.measure(1, 0).unwrap_err();
        assert_eq!(err, QsimError::DuplicateMeasurement(0));
    }

    #[test]
    fn test_gate_after_measure_rejected() {
        let mut circuit = Circuit::new(2, 2);
        circuit.measure(0, 0).unwrap();
        let err = circuit.x(1).unwrap_err();
        assert_eq!(err, QsimError::GateAfterMeasurement("x"));

        // Outro measure ainda é permitido
        circuit.measure(1, 1).unwrap();
        assert_eq!(circuit.len(), 2);
    }

    #[test]
    fn test_from_ops_matches_builder() {
        let from_ops = Circuit::from_ops(
            2,
            1,
            [
                GateOp::H { target: 0 },
                GateOp::Cx {
                    control: 0,
                    target: 1,
                },
                GateOp::Measure { qubit: 1, clbit: 0 },
            ],
        )
        .unwrap();

        let mut built = Circuit::new(2, 1);
        built.h(0).unwrap().cx(0, 1).unwrap().measure(1, 0).unwrap();

        assert_eq!(from_ops, built);
    }

    #[test]
    fn test_append_revalidates() {
        let mut prep = Circuit::new(3, 0);
        prep.x(2).unwrap();

        let mut target = Circuit::new(2, 0);
        let err = target.append(&prep).unwrap_err();
        assert!(matches!(err, QsimError::InvalidOperand { .. }));
    }
}
