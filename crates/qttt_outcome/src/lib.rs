//! # QTTT Outcome
//!
//! Precomputed classification of every collapsed Quantum Tic-Tac-Toe board.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qttt_outcome // L3: Outcome
//!     Lines // 행/열/대각선
//!     OutcomeTable // 결과 테이블
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qttt_outcome::prelude::*;
//! use qttt_core::GameResult;
//!
//! let table = OutcomeTable::build(2).unwrap();
//!
//! // rows 00 / 11: both players own a line
//! assert_eq!(table.classify(0b0011).unwrap(), GameResult::Draw);
//! // rows 00 / 01: only the all-zero player does
//! assert_eq!(table.classify(0b0001).unwrap(), GameResult::PlayerA);
//! ```
//!
//! The table depends only on the board size and never on the simulator, so
//! one instance can be shared by every session of that size.

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Line geometry (Gantree: L3_Outcome → Lines)
pub mod lines;

/// Outcome table (Gantree: L3_Outcome → OutcomeTable)
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use table::{classify_cells, OutcomeCounts, OutcomeDistribution, OutcomeTable};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use qttt_outcome::prelude::*;
    //! ```

    pub use crate::lines::all_lines;
    pub use crate::table::{OutcomeCounts, OutcomeDistribution, OutcomeTable};
}

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use qttt_core::{ClassicalBoard, GameResult};
    use std::sync::Arc;

    #[test]
    fn test_board_view_agrees_with_table() {
        let table = OutcomeTable::build(3).unwrap();
        let lines = all_lines(3);

        for index in (0..512).step_by(7) {
            let board = ClassicalBoard::new(index, 3).unwrap();
            let expected = crate::classify_cells(&board.cells(), &lines);
            assert_eq!(table.classify(index).unwrap(), expected, "\n{}", board);
        }
    }

    #[test]
    fn test_4x4_table() {
        let table = OutcomeTable::build(4).unwrap();
        assert_eq!(table.len(), 1 << 16);
        assert_eq!(table.num_qubits(), 16);

        // all-zero board: every line belongs to A
        assert_eq!(table.classify(0).unwrap(), GameResult::PlayerA);
        // all-one board: every line belongs to B
        assert_eq!(table.classify(0xFFFF).unwrap(), GameResult::PlayerB);
        // top row ones, bottom row zeros
        assert_eq!(table.classify(0xF000).unwrap(), GameResult::Draw);
    }

    #[test]
    fn test_shared_between_sessions() {
        let table = Arc::new(OutcomeTable::build(3).unwrap());
        let other = Arc::clone(&table);
        assert_eq!(table.classify(0).unwrap(), other.classify(0).unwrap());
        assert_eq!(Arc::strong_count(&table), 2);
    }
}
