//! # QTTT Sim
//!
//! Dense state-vector simulator for the Quantum Tic-Tac-Toe board.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qttt_sim // L2: Simulator
//!     Kernels // 2x2 쌍 커널
//!     Sampling // 누적 분포 샘플링
//!     QubitRegister // 상태 벡터
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qttt_sim::prelude::*;
//! use qttt_core::Operation;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut reg = QubitRegister::initialize(9).unwrap();
//! reg.apply_operation(&Operation::Hadamard(4)).unwrap();
//! reg.apply_operation(&Operation::ControlledX { control: 4, target: 0 }).unwrap();
//! assert!(reg.is_normalized(1e-6));
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = reg.collapse(&mut rng);
//! assert!(board < 512);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Gate kernels (Gantree: L2_Simulator → Kernels)
pub mod kernel;

/// Measurement sampling (Gantree: L2_Simulator → Sampling)
pub mod sampling;

/// Qubit register (Gantree: L2_Simulator → QubitRegister)
pub mod register;

// ============================================================================
// Re-exports
// ============================================================================

pub use register::QubitRegister;
pub use sampling::sample_index;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qttt_sim::prelude::*;
    //! ```

    pub use crate::register::QubitRegister;
    pub use crate::sampling::sample_index;
}

// ============================================================================
// Integration Tests
// ============================================================================
