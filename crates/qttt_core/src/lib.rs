//! # QTTT Core
//!
//! Core types, operations, and the move table for Quantum Tic-Tac-Toe.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qttt_core // L0+L1: Foundation + Moves
//!     L0_Foundation // 기반 타입/상수/에러
//!         CoreTypes // 핵심 타입
//!         Constants // 시뮬레이션/게임 상수
//!         Errors // 에러 타입
//!     L1_Moves // 수 정의
//!         Operation // 게이트 enum
//!         MoveTable // 수 목록
//!         ClassicalBoard // 고전 보드
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qttt_core::prelude::*;
//!
//! let moves = MoveTable::generate(9).unwrap();
//! assert_eq!(moves.len(), 90);
//!
//! let entry = moves.lookup(0).unwrap();
//! assert_eq!(entry.operation, Operation::Hadamard(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum operations (Gantree: L1_Moves → Operation)
pub mod operation;

/// Move table (Gantree: L1_Moves → MoveTable)
pub mod moves;

/// Classical board (Gantree: L1_Moves → ClassicalBoard)
pub mod board;

// ============================================================================
// Re-exports
// ============================================================================

pub use board::ClassicalBoard;
pub use constants::{game, sim};
pub use error::{QtttError, QtttResult};
pub use moves::{MoveEntry, MoveTable};
pub use operation::{Matrix2, Matrix4, Operation, Unitary};
pub use types::{Amplitude, BoardIndex, GameResult, MoveId, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qttt_core::prelude::*;
    //! ```

    pub use crate::board::ClassicalBoard;
    pub use crate::constants::{game, sim};
    pub use crate::error::{QtttError, QtttResult};
    pub use crate::moves::{MoveEntry, MoveTable};
    pub use crate::operation::{Matrix2, Matrix4, Operation, Unitary};
    pub use crate::types::{Amplitude, BoardIndex, GameResult, MoveId, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_every_move_validates_on_3x3() {
        let moves = MoveTable::generate(9).unwrap();
        assert_eq!(moves.len(), game::move_count(9));

        for entry in moves.iter() {
            assert!(entry.operation.validate(9).is_ok(), "{}", entry);
        }
    }

    #[test]
    fn test_moves_rejected_on_smaller_register() {
        let moves = MoveTable::generate(9).unwrap();
        let last = moves.lookup(moves.len() - 1).unwrap();

        // CX(8, 7) does not fit a 4-qubit register
        assert!(matches!(
            last.operation.validate(4),
            Err(QtttError::InvalidQubitIndex { qubit: 8, .. })
        ));
    }

    #[test]
    fn test_board_cell_qubit_agreement() {
        // Setting qubit N-1 lights up the top-left cell
        let board = ClassicalBoard::new(1 << 8, 3).unwrap();
        assert_eq!(board.cell(0, 0), 1);
        assert_eq!(board.cells().iter().map(|&c| c as usize).sum::<usize>(), 1);
    }
}
