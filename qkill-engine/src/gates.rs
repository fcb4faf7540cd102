//! # Gate Operations — Portas do Circuito
//!
//! Variantes imutáveis de operação com índices de qubit e bit clássico.
//!
//! ## Portas Suportadas
//!
//! - **Single-qubit**: X (NOT), H (Hadamard), Reset (projeção em |0⟩)
//! - **Two-qubit**: CX (controlled-NOT)
//! - **Three-qubit**: CCX (Toffoli)
//! - **Measure**: leitura terminal de um qubit para um bit clássico

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operador de Pauli usado pelo canal de despolarização
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    /// Decodifica um dígito base-4 (1..=3) em operador; 0 é identidade
    pub(crate) fn from_digit(digit: usize) -> Option<Self> {
        match digit {
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            _ => None,
        }
    }

    /// Nome do operador
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operação de porta com seus índices de qubit/bit clássico
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    /// NOT quântico no qubit alvo
    X { target: usize },
    /// Hadamard no qubit alvo
    H { target: usize },
    /// NOT controlado
    Cx { control: usize, target: usize },
    /// Toffoli (NOT duplamente controlado)
    Ccx {
        control1: usize,
        control2: usize,
        target: usize,
    },
    /// Projeta o qubit alvo em |0⟩ e renormaliza
    Reset { target: usize },
    /// Mede um qubit para um bit clássico (sempre terminal)
    Measure { qubit: usize, clbit: usize },
}

impl GateOp {
    /// Nome da operação
    pub fn name(&self) -> &'static str {
        match self {
            Self::X { .. } => "x",
            Self::H { .. } => "h",
            Self::Cx { .. } => "cx",
            Self::Ccx { .. } => "ccx",
            Self::Reset { .. } => "reset",
            Self::Measure { .. } => "measure",
        }
    }

    /// Aridade unitária — quantos qubits o canal de ruído afeta.
    /// Reset e Measure não são unitárias e não recebem canal.
    pub fn unitary_arity(&self) -> Option<usize> {
        match self {
            Self::X { .. } | Self::H { .. } => Some(1),
            Self::Cx { .. } => Some(2),
            Self::Ccx { .. } => Some(3),
            Self::Reset { .. } | Self::Measure { .. } => None,
        }
    }

    /// Qubits tocados pela operação, alvo por último
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::X { target } | Self::H { target } | Self::Reset { target } => vec![target],
            Self::Cx { control, target } => vec![control, target],
            Self::Ccx {
                control1,
                control2,
                target,
            } => vec![control1, control2, target],
            Self::Measure { qubit, .. } => vec![qubit],
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::X { target } => write!(f, "x q{target}"),
            Self::H { target } => write!(f, "h q{target}"),
            Self::Cx { control, target } => write!(f, "cx q{control}, q{target}"),
            Self::Ccx {
                control1,
                control2,
                target,
            } => write!(f, "ccx q{control1}, q{control2}, q{target}"),
            Self::Reset { target } => write!(f, "reset q{target}"),
            Self::Measure { qubit, clbit } => write!(f, "measure q{qubit} -> c{clbit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauli_from_digit() {
        assert_eq!(Pauli::from_digit(0), None);
        assert_eq!(Pauli::from_digit(1), Some(Pauli::X));
        assert_eq!(Pauli::from_digit(2), Some(Pauli::Y));
        assert_eq!(Pauli::from_digit(3), Some(Pauli::Z));
        assert_eq!(Pauli::from_digit(4), None);
    }

    #[test]
    fn test_unitary_arity() {
        assert_eq!(GateOp::X { target: 0 }.unitary_arity(), Some(1));
        assert_eq!(GateOp::H { target: 0 }.unitary_arity(), Some(1));
        assert_eq!(
            GateOp::Cx {
                control: 0,
                target: 1
            }
            .unitary_arity(),
            Some(2)
        );
        assert_eq!(
            GateOp::Ccx {
                control1: 0,
                control2: 1,
                target: 2
            }
            .unitary_arity(),
            Some(3)
        );
        assert_eq!(GateOp::Reset { target: 0 }.unitary_arity(), None);
        assert_eq!(
            GateOp::Measure { qubit: 0, clbit: 0 }.unitary_arity(),
            None
        );
    }

    #[test]
    fn test_qubits_target_last() {
        let op = GateOp::Ccx {
            control1: 3,
            control2: 1,
            target: 4,
        };
        assert_eq!(op.qubits(), vec![3, 1, 4]);
    }

    #[test]
    fn test_display() {
        let op = GateOp::Measure { qubit: 4, clbit: 0 };
        assert_eq!(op.to_string(), "measure q4 -> c0");
    }
}
