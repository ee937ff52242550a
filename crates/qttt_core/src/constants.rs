//! Constants for QTTT
//!
//! Gantree: L0_Foundation → Constants
//!
//! Simulation bounds, numeric tolerances, and game defaults.

// ============================================================================
// Simulation Bounds
// Gantree: sim // 시뮬레이션 한계
// ============================================================================

pub mod sim {
    //! Bounds for the dense amplitude vector

    /// Largest register the simulator will allocate (2^20 amplitudes, 16 MiB)
    pub const MAX_QUBITS: usize = 20;

    /// Largest linear board size the outcome table enumerates exhaustively
    ///
    /// A 4x4 board has 2^16 classical outcomes; 5x5 would need 2^25.
    pub const MAX_DIMENSION: usize = 4;

    /// Tolerance for the unit-norm invariant
    pub const NORM_TOLERANCE: f64 = 1e-6;

    /// Most decimal places an `f64` amplitude can meaningfully be rounded to
    pub const MAX_ROUNDING_DECIMALS: u32 = 15;

    /// Number of amplitudes for `n` qubits
    #[inline]
    pub const fn state_dimension(n: usize) -> usize {
        1 << n
    }
}

// ============================================================================
// Game Defaults
// Gantree: game // 게임 기본값
// ============================================================================

pub mod game {
    //! Defaults for the game environment

    /// Default linear board size (classic 3x3)
    pub const DEFAULT_GRID_SIZE: usize = 3;

    /// Fixed reward returned by every non-terminal step
    pub const STEP_REWARD: f64 = -0.1;

    /// Decimal places kept in amplitude snapshots
    pub const DISPLAY_DECIMALS: u32 = 2;

    /// Number of entries in the move table for `n` qubits
    ///
    /// One H and one X per qubit plus one CX per ordered qubit pair.
    /// Saturates at `usize::MAX` instead of overflowing.
    #[inline]
    pub const fn move_count(n: usize) -> usize {
        n.saturating_mul(2)
            .saturating_add(n.saturating_mul(n.saturating_sub(1)))
    }
}

// ============================================================================
// Tests
// ============================================================================
