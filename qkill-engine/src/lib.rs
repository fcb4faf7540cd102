//! # ⚛️ qkill-engine — Statevector Kill-Switch Engine
//!
//! Implementa simulação de circuitos quânticos por vetor de estado:
//! amplitudes complexas, composição de portas unitárias, injeção de
//! ruído estocástico e amostragem multinomial de medições.
//!
//! ## Computational Complexity
//!
//! **Gate application — O(2^N):**
//! - Cada porta percorre as 2^N amplitudes uma vez
//! - N ≤ 5 no circuito de kill da demo; o engine é genérico em N
//!
//! **Ideal run — O(G × 2^N + S):**
//! - G = portas, S = shots
//! - Evolução determinística computada uma vez; só o sorteio final
//!   difere por shot
//!
//! **Noisy run — O(S × G × 2^N):**
//! - Cada shot evolui o próprio estado com sorteios de erro próprios
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Simulator                              │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Circuit (GateOps + Q/C counts)           │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  StateVector (2^N amplitudes)             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  NoiseModel (depolarizing + readout)      │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Born-rule Sampling → Counts              │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qkill_engine::{Circuit, Simulator};
//!
//! let mut circuit = Circuit::new(2, 2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//! circuit.measure(0, 0).unwrap().measure(1, 1).unwrap();
//!
//! let mut sim = Simulator::with_seed(42);
//! let counts = sim.run(&circuit, 1024, None).unwrap();
//! assert_eq!(counts.total(), 1024);
//! ```

pub mod circuit;
pub mod error;
pub mod gates;
pub mod noise;
pub mod simulator;
pub mod state;

pub use circuit::Circuit;
pub use error::{QsimError, QsimResult};
pub use gates::{GateOp, Pauli};
pub use noise::{DEFAULT_TOFFOLI_FACTOR, NoiseChannel, NoiseModel};
pub use simulator::{Counts, Simulator};
pub use state::{NORM_TOLERANCE, StateVector};
