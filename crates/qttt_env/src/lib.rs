//! # QTTT Env
//!
//! Game environment for Quantum Tic-Tac-Toe: `step`, `reset` and `resolve`
//! entry points over the dense-state engine.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qttt_env // L4: Env
//!     EnvConfig // 설정
//!     QuantumTicTacToeEnv // 게임 환경
//!         step // 수 적용
//!         reset // 초기화
//!         resolve // 측정+판정
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qttt_env::prelude::*;
//!
//! let config = EnvConfig::default_3x3().with_seed(42);
//! let mut env = QuantumTicTacToeEnv::new(config).unwrap();
//!
//! let state = env.reset().unwrap();
//! assert_eq!(state.len(), 512);
//!
//! let step = env.step(0).unwrap();
//! assert_eq!(step.reward, -0.1);
//!
//! let resolution = env.resolve().unwrap();
//! println!("{}", resolution);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Environment configuration (Gantree: L4_Env → EnvConfig)
pub mod config;

/// Game environment (Gantree: L4_Env → QuantumTicTacToeEnv)
pub mod env;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::EnvConfig;
pub use env::{QuantumTicTacToeEnv, Resolution, StepResult};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qttt_env::prelude::*;
    //! ```

    pub use crate::config::EnvConfig;
    pub use crate::env::{QuantumTicTacToeEnv, Resolution, StepResult};
    pub use qttt_core::{GameResult, MoveId, Operation, QtttError, QtttResult};
}

// ============================================================================
// Integration Tests
// ============================================================================
