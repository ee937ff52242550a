//! Core types for QTTT
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Type aliases and the result label shared by the simulator, the outcome
//! table, and the environment.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed), one per board cell
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Opaque move identifier, a key of the move table
/// Gantree: MoveId // pub type MoveId = usize
pub type MoveId = usize;

/// Classical basis-state index in [0, 2^N)
pub type BoardIndex = usize;

/// Complex amplitude of one basis state
pub type Amplitude = num_complex::Complex64;

// ============================================================================
// GameResult
// ============================================================================

/// Result label of a collapsed board
/// Gantree: GameResult // 승패 라벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Owner of all-zero lines
    PlayerA,
    /// Owner of all-one lines
    PlayerB,
    /// No complete line, or complete lines for both players
    Draw,
}

impl GameResult {
    /// All labels in code order
    pub const ALL: [GameResult; 3] = [GameResult::Draw, GameResult::PlayerA, GameResult::PlayerB];

    /// Numeric flag: 1 and 2 for the players, 0 for a draw
    pub fn code(&self) -> u8 {
        match self {
            GameResult::Draw => 0,
            GameResult::PlayerA => 1,
            GameResult::PlayerB => 2,
        }
    }

    /// Inverse of [`GameResult::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GameResult::Draw),
            1 => Some(GameResult::PlayerA),
            2 => Some(GameResult::PlayerB),
            _ => None,
        }
    }

    /// Check if one player won outright
    pub fn is_win(&self) -> bool {
        !matches!(self, GameResult::Draw)
    }

    /// Classical cell value whose complete lines this label owns
    pub fn line_value(&self) -> Option<u8> {
        match self {
            GameResult::PlayerA => Some(0),
            GameResult::PlayerB => Some(1),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::PlayerA => write!(f, "Player 1 wins"),
            GameResult::PlayerB => write!(f, "Player 2 wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
